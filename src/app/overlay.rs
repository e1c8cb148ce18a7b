//! Detail overlay state machine.
//!
//! ```text
//!            open(r)               close()
//!   Closed ──────────▶ Open(r) ──────────▶ Closed
//!                      │    ▲
//!                      └────┘ open(s): content replaced, no stacking
//! ```
//!
//! `close()` on `Closed` is a no-op. The open state holds a [`Snapshot`] of the
//! activated card, so replacing or editing records afterwards does not change
//! what the overlay shows.

use crate::app::image::ImageSlot;
use crate::domain::CardFields;

/// Values shown by an open overlay, copied at activation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Index of the card that was activated.
    pub card: usize,
    /// Title, subtitle and description as they were when opened.
    pub fields: CardFields,
    /// The card's image as it was displayed when opened.
    pub image: ImageSlot,
}

/// Overlay state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Overlay {
    /// Hidden.
    #[default]
    Closed,
    /// Showing one record.
    Open(Snapshot),
}

impl Overlay {
    /// Shows `snapshot`, replacing whatever was open.
    ///
    /// Returns `true` if the overlay was closed before, i.e. the page scroll
    /// needs locking.
    pub fn open(&mut self, snapshot: Snapshot) -> bool {
        let was_closed = !self.is_open();
        *self = Self::Open(snapshot);
        was_closed
    }

    /// Hides the overlay. Returns `true` if it was open.
    pub fn close(&mut self) -> bool {
        if self.is_open() {
            *self = Self::Closed;
            true
        } else {
            false
        }
    }

    /// `true` while a record is shown.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    /// The shown snapshot, if open.
    #[must_use]
    pub const fn snapshot(&self) -> Option<&Snapshot> {
        match self {
            Self::Open(snapshot) => Some(snapshot),
            Self::Closed => None,
        }
    }

    /// Records a load failure of the overlay image. Returns `true` if it changed.
    pub fn fail_image(&mut self) -> bool {
        match self {
            Self::Open(snapshot) => snapshot.image.fail(),
            Self::Closed => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(card: usize, title: &str) -> Snapshot {
        Snapshot {
            card,
            fields: CardFields {
                title: title.to_string(),
                ..CardFields::default()
            },
            image: ImageSlot::new("https://img/x.png", title),
        }
    }

    #[test]
    fn open_from_closed_requests_scroll_lock() {
        let mut overlay = Overlay::default();
        assert!(overlay.open(snapshot(0, "Fireball")));
        assert!(overlay.is_open());
    }

    #[test]
    fn reopening_replaces_without_stacking() {
        let mut overlay = Overlay::default();
        overlay.open(snapshot(0, "Fireball"));
        assert!(!overlay.open(snapshot(1, "Sword")));
        assert_eq!(overlay.snapshot().unwrap().fields.title, "Sword");

        assert!(overlay.close());
        assert!(!overlay.is_open());
    }

    #[test]
    fn close_is_idempotent() {
        let mut overlay = Overlay::default();
        assert!(!overlay.close());
        overlay.open(snapshot(0, "Fireball"));
        assert!(overlay.close());
        assert!(!overlay.close());
        assert_eq!(overlay, Overlay::Closed);
    }

    #[test]
    fn overlay_image_falls_back_once() {
        let mut overlay = Overlay::default();
        assert!(!overlay.fail_image());
        overlay.open(snapshot(0, "Fireball"));
        assert!(overlay.fail_image());
        assert!(!overlay.fail_image());
    }
}

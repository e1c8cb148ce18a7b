//! Event handling and state transition logic.
//!
//! Every user interaction with a gallery arrives as an [`Event`]. [`handle_event`]
//! applies it to the [`GalleryState`] and reports whether the markup needs
//! re-rendering plus the host actions to run. All transitions are synchronous and
//! never fail: unknown cards or keys are ignored.
//!
//! # Event Types
//!
//! - **Search**: `Input`, `Clear`
//! - **Data**: `Refresh`
//! - **Overlay**: `ActivateCard`, `CloseControl`, `BackdropClick`,
//!   `ContentClick`, `KeyDown`
//! - **Images**: `ImageFailed`, `OverlayImageFailed`
//!
//! # Example
//!
//! ```rust
//! use cardgallery::app::{handle_event, Action, Event, GalleryState, Labels};
//! use cardgallery::{Columns, Record};
//!
//! let mut state = GalleryState::new(
//!     Some(vec![Record::from_pairs([("title", "Sword")])]),
//!     Columns::default(),
//!     Labels::default(),
//! );
//! handle_event(&mut state, &Event::ActivateCard(0));
//! let (render, actions) = handle_event(&mut state, &Event::key("Escape"));
//! assert!(render);
//! assert_eq!(actions, vec![Action::UnlockScroll]);
//! ```

use crate::app::{Action, GalleryState};
use crate::domain::Record;

/// Key name that closes the overlay.
pub const CANCEL_KEY: &str = "Escape";

/// Discrete user or host events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The search box now contains this text.
    Input(String),
    /// The search box was cleared.
    Clear,
    /// The record set was replaced. `None` means the collection is missing.
    Refresh(Option<Vec<Record>>),
    /// A card (its image) was activated.
    ActivateCard(usize),
    /// The overlay's close control was activated.
    CloseControl,
    /// A click landed on the overlay backdrop, outside its content.
    BackdropClick,
    /// A click landed inside the overlay content.
    ContentClick,
    /// A key was pressed anywhere on the page.
    KeyDown {
        /// Key name, as reported by the browser (`"Escape"`, `"a"`, ...).
        key: String,
    },
    /// A card's image failed to load.
    ImageFailed(usize),
    /// The overlay image failed to load.
    OverlayImageFailed,
}

impl Event {
    /// Shorthand for [`Event::KeyDown`].
    #[must_use]
    pub fn key(key: impl Into<String>) -> Self {
        Self::KeyDown { key: key.into() }
    }
}

/// Processes an event, mutates gallery state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`: whether the widget markup changed, and the host
/// side effects to apply in order.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type.
pub fn handle_event(state: &mut GalleryState, event: &Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Input(query) => {
            if state.data.is_missing() {
                return (false, vec![]);
            }
            tracing::trace!(query = %query, "search query updated");
            state.set_query(query);
            (true, vec![])
        }
        Event::Clear => {
            if state.data.is_missing() {
                return (false, vec![]);
            }
            state.set_query("");
            (true, vec![])
        }
        Event::Refresh(data) => {
            tracing::debug!(
                records = data.as_ref().map(Vec::len),
                "replacing gallery data"
            );
            state.replace_data(data.clone());
            if state.data.is_missing() && state.overlay.close() {
                tracing::debug!("data source gone, overlay closed");
                return (true, vec![Action::UnlockScroll]);
            }
            (true, vec![])
        }
        Event::ActivateCard(index) => match state.open_card(*index) {
            Some(was_closed) => {
                tracing::debug!(card = index, "overlay opened");
                let actions = if was_closed {
                    vec![Action::LockScroll]
                } else {
                    vec![]
                };
                (true, actions)
            }
            None => {
                tracing::debug!(card = index, "no such card, ignoring activation");
                (false, vec![])
            }
        },
        Event::CloseControl | Event::BackdropClick => close_overlay(state),
        Event::KeyDown { key } if key == CANCEL_KEY => close_overlay(state),
        Event::KeyDown { .. } | Event::ContentClick => (false, vec![]),
        Event::ImageFailed(index) => {
            let Some(card) = state.cards.get_mut(*index) else {
                return (false, vec![]);
            };
            if card.image.fail() {
                tracing::debug!(card = index, "image failed, using placeholder");
                (true, vec![])
            } else {
                (false, vec![])
            }
        }
        Event::OverlayImageFailed => (state.overlay.fail_image(), vec![]),
    }
}

fn close_overlay(state: &mut GalleryState) -> (bool, Vec<Action>) {
    if state.overlay.close() {
        tracing::debug!("overlay closed");
        (true, vec![Action::UnlockScroll])
    } else {
        (false, vec![])
    }
}

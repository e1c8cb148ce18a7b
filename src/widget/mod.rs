//! The gallery widget handle.
//!
//! A [`Gallery`] is one mounted widget instance. It owns its state, its resolved
//! theme and the ids of the elements it created, and writes its markup into the
//! host mount point it was attached to. All runtime operations are infallible
//! from the caller's point of view.
//!
//! # Example
//!
//! ```rust
//! use cardgallery::host::Page;
//! use cardgallery::{Config, Gallery, Record};
//!
//! let mut page = Page::new("Spells").with_mount("spells");
//! let config = Config {
//!     data: Some(vec![
//!         Record::from_pairs([("title", "Fireball"), ("subtitle", "Spell")]),
//!         Record::from_pairs([("title", "Sword"), ("subtitle", "Weapon")]),
//!     ]),
//!     ..Config::default()
//! };
//!
//! let mut gallery = Gallery::mount(&mut page, "spells", config)?;
//! gallery.search(&mut page, "sp");
//! assert_eq!(gallery.visible_count(), 1);
//! assert_eq!(gallery.count(), 2);
//! assert!(page.mount_content("spells").unwrap().contains("1 of 2 items"));
//! # Ok::<(), cardgallery::GalleryError>(())
//! ```

mod elements;

pub use elements::Elements;

use crate::app::{handle_event, Action, Event, GalleryState};
use crate::domain::{GalleryError, Record, Result};
use crate::host::Host;
use crate::ui::{self, Theme};
use crate::Config;

/// A mounted gallery instance.
#[derive(Debug, Clone)]
pub struct Gallery {
    mount_id: String,
    state: GalleryState,
    theme: Theme,
    elements: Elements,
}

impl Gallery {
    /// Builds a gallery from `config` and renders it into mount point `mount_id`.
    ///
    /// A missing data source still mounts, showing an error message in place of
    /// the gallery.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::MountNotFound`] if the host has no such mount
    /// point. The failure is also logged at error level and the host is left
    /// untouched.
    pub fn mount<H: Host + ?Sized>(host: &mut H, mount_id: &str, config: Config) -> Result<Self> {
        let _span = tracing::debug_span!("mount", mount_id = %mount_id).entered();

        if !host.has_mount(mount_id) {
            let err = GalleryError::MountNotFound(mount_id.to_string());
            tracing::error!(error = %err, "cannot initialize gallery");
            return Err(err);
        }

        if config.data.is_none() {
            tracing::warn!(error = %GalleryError::MissingDataSource, "mounting gallery without data");
        }

        let theme = config.resolve_theme();
        let labels = config.labels();
        let state = GalleryState::new(config.data, config.columns, labels);
        let elements = Elements::new(mount_id, state.cards.len());

        let gallery = Self {
            mount_id: mount_id.to_string(),
            state,
            theme,
            elements,
        };
        host.replace_mount(mount_id, gallery.markup())?;

        tracing::debug!(
            records = gallery.count(),
            theme = %gallery.theme.name,
            "gallery mounted"
        );
        Ok(gallery)
    }

    /// Feeds one UI event through the handler and applies its effects to `host`.
    ///
    /// Returns `true` if the markup was re-rendered.
    pub fn dispatch<H: Host + ?Sized>(&mut self, host: &mut H, event: &Event) -> bool {
        let (should_render, actions) = handle_event(&mut self.state, event);

        if matches!(event, Event::Refresh(_)) {
            self.elements.sync_cards(self.state.cards.len());
        }

        for action in actions {
            match action {
                Action::LockScroll => host.lock_scroll(),
                Action::UnlockScroll => host.unlock_scroll(),
            }
        }

        if should_render {
            self.flush(host);
        }
        should_render
    }

    /// Sets the search text and re-filters.
    pub fn search<H: Host + ?Sized>(&mut self, host: &mut H, term: &str) {
        self.dispatch(host, &Event::Input(term.to_string()));
    }

    /// Clears the search text.
    pub fn clear<H: Host + ?Sized>(&mut self, host: &mut H) {
        self.dispatch(host, &Event::Clear);
    }

    /// Replaces the records wholesale and re-renders. The query is reset.
    pub fn refresh<H: Host + ?Sized>(&mut self, host: &mut H, data: Option<Vec<Record>>) {
        self.dispatch(host, &Event::Refresh(data));
    }

    /// Total number of records.
    #[must_use]
    pub fn count(&self) -> usize {
        self.state.total()
    }

    /// Number of records passing the current search.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.state.visible_count()
    }

    /// `true` while the detail overlay is shown.
    #[must_use]
    pub const fn is_overlay_open(&self) -> bool {
        self.state.overlay.is_open()
    }

    /// Current markup of the widget.
    #[must_use]
    pub fn markup(&self) -> String {
        ui::render(&self.state, &self.theme, &self.elements)
    }

    /// Read access to the widget state.
    #[must_use]
    pub const fn state(&self) -> &GalleryState {
        &self.state
    }

    /// Ids of the elements this widget owns.
    #[must_use]
    pub const fn elements(&self) -> &Elements {
        &self.elements
    }

    /// Id of the mount point this widget renders into.
    #[must_use]
    pub fn mount_id(&self) -> &str {
        &self.mount_id
    }

    fn flush<H: Host + ?Sized>(&self, host: &mut H) {
        if let Err(e) = host.replace_mount(&self.mount_id, self.markup()) {
            tracing::warn!(error = %e, "mount point disappeared, skipping render");
        }
    }
}

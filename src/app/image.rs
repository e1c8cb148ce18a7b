//! Card image source with one-shot placeholder fallback.
//!
//! An image starts as the record's URL (or directly as a placeholder when the
//! record has none). A load failure swaps it to the generated placeholder exactly
//! once; failures reported against a placeholder are ignored, so a broken
//! fallback can never re-trigger itself.

use crate::ui::placeholder::card_placeholder;

/// Where an image currently comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// The record's own URL.
    Remote(String),
    /// The generated avatar.
    Placeholder,
}

/// Image state for one card or for the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSlot {
    source: ImageSource,
    seed: String,
}

impl ImageSlot {
    /// Creates a slot for `url`, falling back to a placeholder seeded by `seed`.
    #[must_use]
    pub fn new(url: &str, seed: &str) -> Self {
        let source = if url.is_empty() {
            ImageSource::Placeholder
        } else {
            ImageSource::Remote(url.to_string())
        };
        Self {
            source,
            seed: seed.to_string(),
        }
    }

    /// Current source.
    #[must_use]
    pub const fn source(&self) -> &ImageSource {
        &self.source
    }

    /// `true` once the slot shows the placeholder.
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        matches!(self.source, ImageSource::Placeholder)
    }

    /// Value for the `src` attribute.
    #[must_use]
    pub fn src(&self) -> String {
        match &self.source {
            ImageSource::Remote(url) => url.clone(),
            ImageSource::Placeholder => card_placeholder(&self.seed),
        }
    }

    /// Placeholder to swap in if the current source fails to load.
    ///
    /// `None` when the slot already shows the placeholder.
    #[must_use]
    pub fn fallback_src(&self) -> Option<String> {
        match self.source {
            ImageSource::Remote(_) => Some(card_placeholder(&self.seed)),
            ImageSource::Placeholder => None,
        }
    }

    /// Records a load failure. Returns `true` if the slot switched to the placeholder.
    pub fn fail(&mut self) -> bool {
        if self.is_placeholder() {
            return false;
        }
        self.source = ImageSource::Placeholder;
        true
    }
}

//! View model types representing renderable UI state.
//!
//! View models are computed from [`GalleryState`](crate::app::GalleryState) by
//! `compute_viewmodel` and consumed by the renderer. They hold display-ready text
//! only (already projected through the column mapping, not yet escaped) and no
//! business logic.

use serde::{Deserialize, Serialize};

/// How a card arranges its image and text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardLayout {
    /// Round avatar above the text.
    #[default]
    Avatar,
    /// Full-width image with the text laid over its lower edge.
    Poster,
}

impl CardLayout {
    /// CSS modifier class for this layout.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Avatar => "cg-card--avatar",
            Self::Poster => "cg-card--poster",
        }
    }
}

/// Complete UI view model for one gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Heading block.
    pub header: HeaderInfo,
    /// Search input.
    pub search_bar: SearchBarInfo,
    /// Count line, when enabled.
    pub stats: Option<StatsInfo>,
    /// One entry per record, in record order. Filtered-out cards are kept and
    /// marked hidden.
    pub cards: Vec<CardView>,
    /// Card arrangement.
    pub layout: CardLayout,
    /// The "no results" / "no items" indicator.
    pub empty_state: EmptyState,
    /// The detail overlay, when open.
    pub overlay: Option<OverlayView>,
    /// Replaces the search, grid and overlay when the data source is missing.
    pub error: Option<ErrorView>,
}

/// Heading text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Main heading.
    pub title: String,
    /// Optional line under the heading.
    pub subtitle: Option<String>,
}

/// Search input state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Hint shown while empty.
    pub placeholder: String,
    /// Current raw query.
    pub query: String,
}

/// Visible/total count line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsInfo {
    /// Formatted text, e.g. `"3 items"` or `"1 of 3 items"`.
    pub text: String,
}

/// Display information for a single card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    /// Current image source.
    pub image_src: String,
    /// Placeholder to swap in on load failure, if not already showing it.
    pub fallback_src: Option<String>,
    /// Display name.
    pub title: String,
    /// Secondary line, omitted when empty.
    pub subtitle: String,
    /// Long text, omitted when empty.
    pub description: String,
    /// Whether the current query filters this card out.
    pub hidden: bool,
}

/// Empty indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Message text.
    pub message: String,
    /// Shown exactly when no card is visible.
    pub visible: bool,
}

/// Display information for the open overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayView {
    /// Image source captured when the overlay opened.
    pub image_src: String,
    /// Placeholder to swap in on load failure.
    pub fallback_src: Option<String>,
    /// Display name.
    pub title: String,
    /// Secondary line, omitted when empty.
    pub subtitle: String,
    /// Long text, omitted when empty.
    pub description: String,
}

/// User-facing error message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorView {
    /// Message text.
    pub message: String,
}

//! User interface rendering layer with component-based architecture.
//!
//! This module turns gallery state into HTML markup through composable
//! rendering components. It provides theme support, placeholder avatars and
//! escaping helpers.
//!
//! # Architecture
//!
//! ```text
//! GalleryState → compute_viewmodel → UIViewModel → render → HTML markup
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared markup utilities (escaping)
//! - [`placeholder`]: Deterministic placeholder avatars
//! - [`theme`]: Colour schemes and per-instance stylesheet generation

pub mod components;
pub mod helpers;
pub mod placeholder;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use placeholder::Placeholder;
pub use renderer::render;
pub use theme::{Theme, ThemeName};
pub use viewmodel::{
    CardLayout, CardView, EmptyState, ErrorView, HeaderInfo, OverlayView, SearchBarInfo,
    StatsInfo, UIViewModel,
};

//! Composable UI component renderers.
//!
//! Each component appends the markup for one part of the gallery to a shared
//! output buffer.
//!
//! # Components
//!
//! - [`header`]: Heading and page subtitle
//! - [`search`]: Search input
//! - [`stats`]: Visible/total count line
//! - [`grid`]: Card grid
//! - [`empty`]: Empty indicator and error message
//! - [`overlay`]: Detail overlay
//!
//! # Layout Modes
//!
//! - [`render_gallery_body`]: Header + Search + Stats + Grid + Empty + Overlay
//! - [`render_error_body`]: Header + Error

mod empty;
mod grid;
mod header;
mod overlay;
mod search;
mod stats;

use crate::ui::viewmodel::{ErrorView, UIViewModel};
use crate::widget::Elements;

use empty::{render_empty_state, render_error};
use grid::render_grid;
use header::render_header;
use overlay::render_overlay;
use search::render_search_bar;
use stats::render_stats;

/// Renders the normal layout.
///
/// ```text
/// [Header]
/// [Search Bar]
/// [Stats]            (optional)
/// [Grid]             (omitted when there are no records)
/// [No Results]       (hidden unless nothing is visible)
/// [Overlay]          (hidden shell when closed)
/// ```
pub fn render_gallery_body(out: &mut String, vm: &UIViewModel, elements: &Elements) {
    render_header(out, &vm.header);
    render_search_bar(out, &vm.search_bar, &elements.search);
    if let Some(stats) = &vm.stats {
        render_stats(out, stats, &elements.stats);
    }
    if !vm.cards.is_empty() {
        render_grid(out, &vm.cards, vm.layout, &elements.grid, &elements.cards);
    }
    render_empty_state(out, &vm.empty_state, &elements.empty);
    render_overlay(out, vm.overlay.as_ref(), elements);
}

/// Renders the error layout, which replaces everything below the header.
pub fn render_error_body(out: &mut String, vm: &UIViewModel, error: &ErrorView, elements: &Elements) {
    render_header(out, &vm.header);
    render_error(out, error, &elements.error);
}

//! Empty state and error renderers.
//!
//! The empty indicator is always present in the markup and toggled with the
//! `hidden` attribute, so the grid and the indicator never disagree. The error
//! view is only rendered when the data source is missing and then stands in for
//! the whole gallery body.

use std::fmt::Write as _;

use crate::ui::helpers::{escape_html, hidden_attr};
use crate::ui::viewmodel::{EmptyState, ErrorView};

/// Renders the "no results" indicator.
///
/// # Layout
///
/// ```text
/// <div class="cg-no-results">
///   <div class="cg-no-results-icon">😕</div>
///   No results found!
/// </div>
/// ```
pub fn render_empty_state(out: &mut String, empty: &EmptyState, id: &str) {
    let _ = write!(
        out,
        "<div id=\"{id}\" class=\"cg-no-results\"{}>\
<div class=\"cg-no-results-icon\">\u{1f615}</div>{}</div>",
        hidden_attr(!empty.visible),
        escape_html(&empty.message),
    );
}

/// Renders the user-facing error message.
pub fn render_error(out: &mut String, error: &ErrorView, id: &str) {
    let _ = write!(
        out,
        "<h1 id=\"{id}\" class=\"cg-error\" role=\"alert\">{}</h1>",
        escape_html(&error.message)
    );
}

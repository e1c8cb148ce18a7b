//! Header component renderer.
//!
//! Renders the page heading and the optional line beneath it.

use std::fmt::Write as _;

use crate::ui::helpers::{escape_html, push_optional_text};
use crate::ui::viewmodel::HeaderInfo;

/// Renders the heading block.
///
/// # Layout
///
/// ```text
/// <h1 class="cg-title">Title</h1>
/// <p class="cg-subtitle">Subtitle</p>   (only when set and non-empty)
/// ```
pub fn render_header(out: &mut String, header: &HeaderInfo) {
    let _ = write!(out, "<h1 class=\"cg-title\">{}</h1>", escape_html(&header.title));
    if let Some(subtitle) = &header.subtitle {
        push_optional_text(out, "p", "cg-subtitle", subtitle);
    }
}

//! Detail overlay renderer.

use std::fmt::Write as _;

use super::grid::fallback_attr;
use crate::ui::helpers::{escape_html, push_optional_text};
use crate::ui::viewmodel::OverlayView;
use crate::widget::Elements;

/// Renders the overlay, or an empty hidden shell when it is closed.
///
/// The backdrop, close control and content box carry `data-action` markers
/// (`backdrop`, `close`, `content`) so a host can map clicks back to events.
pub fn render_overlay(out: &mut String, overlay: Option<&OverlayView>, elements: &Elements) {
    let Some(view) = overlay else {
        let _ = write!(
            out,
            "<div id=\"{}\" class=\"cg-overlay\" data-action=\"backdrop\" hidden></div>",
            elements.overlay
        );
        return;
    };

    let title = escape_html(&view.title);
    let _ = write!(
        out,
        "<div id=\"{}\" class=\"cg-overlay\" role=\"dialog\" aria-modal=\"true\" data-action=\"backdrop\">\
<button id=\"{}\" type=\"button\" class=\"cg-overlay-close\" aria-label=\"Close\" data-action=\"close\">&times;</button>\
<div id=\"{}\" class=\"cg-overlay-content\" data-action=\"content\">\
<img id=\"{}\" class=\"cg-overlay-image\" src=\"{}\" alt=\"{title}\"{}>\
<div class=\"cg-overlay-title\">{title}</div>",
        elements.overlay,
        elements.overlay_close,
        elements.overlay_content,
        elements.overlay_image,
        escape_html(&view.image_src),
        fallback_attr(view.fallback_src.as_deref()),
    );
    push_optional_text(out, "div", "cg-overlay-subtitle", &view.subtitle);
    push_optional_text(out, "div", "cg-overlay-text", &view.description);
    out.push_str("</div></div>");
}

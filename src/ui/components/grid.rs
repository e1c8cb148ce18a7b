//! Card grid renderer.
//!
//! One card per record, in record order. Cards filtered out by the search stay
//! in the markup with the `hidden` attribute. Every image carries a one-shot
//! `onerror` fallback to its placeholder: the handler clears itself before
//! swapping `src`, so a failing placeholder cannot loop.

use std::fmt::Write as _;

use crate::ui::helpers::{escape_html, hidden_attr, push_optional_text};
use crate::ui::viewmodel::{CardLayout, CardView};

/// Renders the `onerror` attribute for an image with an optional fallback.
pub fn fallback_attr(fallback: Option<&str>) -> String {
    fallback.map_or_else(String::new, |src| {
        format!(
            " onerror=\"{}\"",
            escape_html(&format!("this.onerror=null;this.src='{src}'"))
        )
    })
}

/// Renders the grid.
///
/// `card_ids` must be parallel to `cards`.
pub fn render_grid(out: &mut String, cards: &[CardView], layout: CardLayout, grid_id: &str, card_ids: &[String]) {
    let _ = write!(out, "<div id=\"{grid_id}\" class=\"cg-grid\">");
    for (index, (card, card_id)) in cards.iter().zip(card_ids).enumerate() {
        render_card(out, card, layout, index, card_id);
    }
    out.push_str("</div>");
}

/// Renders a single card.
///
/// # Layout
///
/// ```text
/// <div class="cg-card cg-card--avatar">
///   <img class="cg-card-image" ...>
///   <div class="cg-card-body">
///     <div class="cg-card-title">Title</div>
///     <div class="cg-card-subtitle">Subtitle</div>      (optional)
///     <div class="cg-card-text">Description</div>       (optional)
///   </div>
/// </div>
/// ```
fn render_card(out: &mut String, card: &CardView, layout: CardLayout, index: usize, card_id: &str) {
    let title = escape_html(&card.title);
    let _ = write!(
        out,
        "<div id=\"{card_id}\" class=\"cg-card {}\" data-card=\"{index}\"{}>",
        layout.class(),
        hidden_attr(card.hidden),
    );
    let _ = write!(
        out,
        "<img class=\"cg-card-image\" src=\"{}\" alt=\"{title}\" loading=\"lazy\" data-action=\"open\" data-card=\"{index}\"{}>",
        escape_html(&card.image_src),
        fallback_attr(card.fallback_src.as_deref()),
    );
    let _ = write!(out, "<div class=\"cg-card-body\"><div class=\"cg-card-title\">{title}</div>");
    push_optional_text(out, "div", "cg-card-subtitle", &card.subtitle);
    push_optional_text(out, "div", "cg-card-text", &card.description);
    out.push_str("</div></div>");
}

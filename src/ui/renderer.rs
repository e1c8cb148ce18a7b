//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `GalleryState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to specialized component renderers
//!
//! The result is a self-contained markup fragment: the instance stylesheet,
//! scoped to the root element id, followed by the root element itself.

use crate::app::GalleryState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;
use crate::widget::Elements;

/// Renders a gallery's markup from its state.
#[must_use]
pub fn render(state: &GalleryState, theme: &Theme, elements: &Elements) -> String {
    let viewmodel = state.compute_viewmodel();

    render_viewmodel(&viewmodel, theme, elements)
}

/// Renders a view model with mode-specific layout.
///
/// Chooses rendering strategy based on view model state:
/// - Error: heading and error message only
/// - Otherwise: the full gallery
#[must_use]
pub fn render_viewmodel(vm: &UIViewModel, theme: &Theme, elements: &Elements) -> String {
    let mut out = String::new();
    out.push_str("<style>");
    out.push_str(&theme.stylesheet(&elements.root));
    out.push_str("</style>");
    out.push_str(&format!("<div id=\"{}\" class=\"cg-container\">", elements.root));

    if let Some(error) = &vm.error {
        components::render_error_body(&mut out, vm, error, elements);
    } else {
        components::render_gallery_body(&mut out, vm, elements);
    }

    out.push_str("</div>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Labels;
    use crate::domain::{Columns, Record};
    use crate::ui::viewmodel::CardLayout;

    fn render_state(state: &GalleryState) -> String {
        let elements = Elements::new("g", state.cards.len());
        render(state, &Theme::default(), &elements)
    }

    #[test]
    fn cards_render_in_order_with_optional_lines() {
        let state = GalleryState::new(
            Some(vec![
                Record::from_pairs([("title", "Fireball"), ("subtitle", "Spell"), ("description", "Hot")]),
                Record::from_pairs([("title", "Sword")]),
            ]),
            Columns::default(),
            Labels::default(),
        );
        let html = render_state(&state);

        let fireball = html.find("Fireball").unwrap();
        let sword = html.find("Sword").unwrap();
        assert!(fireball < sword);
        assert_eq!(html.matches("cg-card-subtitle\">").count(), 1);
        assert_eq!(html.matches("cg-card-text\">").count(), 1);
        assert!(html.contains("id=\"g-gallery-card-1\""));
    }

    #[test]
    fn text_is_escaped_everywhere() {
        let state = GalleryState::new(
            Some(vec![Record::from_pairs([
                ("title", "<script>alert(1)</script>"),
                ("image", "x\" onload=\"evil()"),
            ])]),
            Columns::default(),
            Labels {
                title: "<b>Title</b>".into(),
                ..Labels::default()
            },
        );
        let html = render_state(&state);
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<b>Title</b>"));
        assert!(!html.contains("onload=\"evil()"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn remote_images_get_one_shot_fallback() {
        let mut state = GalleryState::new(
            Some(vec![Record::from_pairs([("title", "Sword"), ("image", "https://x/s.png")])]),
            Columns::default(),
            Labels::default(),
        );
        let html = render_state(&state);
        assert!(html.contains("src=\"https://x/s.png\""));
        assert!(html.contains("onerror=\"this.onerror=null;this.src=&#39;data:image/svg+xml;base64,"));

        state.cards[0].image.fail();
        let html = render_state(&state);
        assert!(!html.contains("onerror"));
        assert!(html.contains("src=\"data:image/svg+xml;base64,"));
    }

    #[test]
    fn empty_records_render_indicator_instead_of_grid() {
        let state = GalleryState::new(Some(vec![]), Columns::default(), Labels::default());
        let html = render_state(&state);
        assert!(!html.contains("cg-grid\""));
        assert!(html.contains("<div id=\"g-gallery-empty\" class=\"cg-no-results\">"));
        assert!(html.contains("0 items"));
    }

    #[test]
    fn missing_data_replaces_content_with_error() {
        let state = GalleryState::new(None, Columns::default(), Labels::default());
        let html = render_state(&state);
        assert!(html.contains("role=\"alert\">Database Error"));
        assert!(!html.contains("data-action=\"search\""));
        assert!(!html.contains("cg-overlay\""));
    }

    #[test]
    fn closed_overlay_is_a_hidden_shell() {
        let state = GalleryState::new(Some(vec![]), Columns::default(), Labels::default());
        assert!(render_state(&state)
            .contains("<div id=\"g-gallery-overlay\" class=\"cg-overlay\" data-action=\"backdrop\" hidden></div>"));
    }

    #[test]
    fn poster_layout_changes_card_class_only() {
        let labels = Labels {
            layout: CardLayout::Poster,
            ..Labels::default()
        };
        let state = GalleryState::new(
            Some(vec![Record::from_pairs([("title", "Lin")])]),
            Columns::default(),
            labels,
        );
        let html = render_state(&state);
        assert!(html.contains("class=\"cg-card cg-card--poster\""));
    }
}

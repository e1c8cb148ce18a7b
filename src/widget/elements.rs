//! Ids of the nodes a gallery creates.
//!
//! The widget builds its ids once, at mount time, from its mount id and keeps
//! them; the renderer stamps them onto the markup and nothing ever looks nodes up
//! by class or global query. Card ids are re-synced when the record set changes.
//!
//! The mount id is opaque, so the root id derived from it is reduced to
//! `[A-Za-z0-9_-]` and starts with a letter. Every id below is then safe both in
//! a quoted attribute and as a bare `#id` CSS selector.

/// Handles to every element a gallery instance owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Elements {
    /// Scope of the instance stylesheet and container of everything below.
    pub root: String,
    /// Search input.
    pub search: String,
    /// Count line.
    pub stats: String,
    /// Card grid.
    pub grid: String,
    /// Empty indicator.
    pub empty: String,
    /// Error message shown for a missing data source.
    pub error: String,
    /// Overlay backdrop.
    pub overlay: String,
    /// Overlay content box.
    pub overlay_content: String,
    /// Overlay close control.
    pub overlay_close: String,
    /// Overlay image.
    pub overlay_image: String,
    /// One id per card, in record order.
    pub cards: Vec<String>,
}

impl Elements {
    /// Creates the handles for a gallery mounted at `mount_id` with `card_count` cards.
    #[must_use]
    pub fn new(mount_id: &str, card_count: usize) -> Self {
        let root = format!("{}-gallery", scope_id(mount_id));
        let mut elements = Self {
            search: format!("{root}-search"),
            stats: format!("{root}-stats"),
            grid: format!("{root}-grid"),
            empty: format!("{root}-empty"),
            error: format!("{root}-error"),
            overlay: format!("{root}-overlay"),
            overlay_content: format!("{root}-overlay-content"),
            overlay_close: format!("{root}-overlay-close"),
            overlay_image: format!("{root}-overlay-image"),
            cards: Vec::new(),
            root,
        };
        elements.sync_cards(card_count);
        elements
    }

    /// Resizes the card id list to `card_count` entries.
    pub fn sync_cards(&mut self, card_count: usize) {
        let root = &self.root;
        self.cards = (0..card_count).map(|i| format!("{root}-card-{i}")).collect();
    }

    /// Id of card `index`.
    #[must_use]
    pub fn card(&self, index: usize) -> Option<&str> {
        self.cards.get(index).map(String::as_str)
    }
}

fn scope_id(mount_id: &str) -> String {
    let mut id: String = mount_id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    if !id.starts_with(|c: char| c.is_ascii_alphabetic()) {
        id.insert_str(0, "cg-");
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_prefixed_by_mount() {
        let elements = Elements::new("spells", 2);
        assert_eq!(elements.root, "spells-gallery");
        assert_eq!(elements.grid, "spells-gallery-grid");
        assert_eq!(elements.card(1), Some("spells-gallery-card-1"));
        assert_eq!(elements.card(2), None);
    }

    #[test]
    fn sync_cards_follows_record_count() {
        let mut elements = Elements::new("g", 3);
        elements.sync_cards(1);
        assert_eq!(elements.cards, vec!["g-gallery-card-0"]);
    }

    #[test]
    fn unsafe_mount_ids_are_reduced_to_selector_characters() {
        assert_eq!(Elements::new("my \"list\"", 0).root, "my__list_-gallery");
        assert_eq!(Elements::new("2024", 0).root, "cg-2024-gallery");
        assert_eq!(Elements::new("", 0).root, "cg--gallery");
        assert_eq!(Elements::new("glossary_v2", 0).root, "glossary_v2-gallery");
    }
}

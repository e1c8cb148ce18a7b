//! Gallery state management and view model computation.
//!
//! This module defines [`GalleryState`], the single source of truth for one widget
//! instance: the record set, the cards derived from it, the current query and the
//! overlay. View models are computed on demand from state snapshots.
//!
//! # State Components
//!
//! - **Data**: the caller's records, or an explicit "missing" marker
//! - **Cards**: one per record, built once per data set; searching only flips
//!   their `hidden` flags
//! - **Query**: raw text of the search box
//! - **Overlay**: closed, or open on a snapshot of one card
//!
//! # Example
//!
//! ```rust
//! use cardgallery::app::{GalleryState, Labels};
//! use cardgallery::{Columns, Record};
//!
//! let records = vec![
//!     Record::from_pairs([("title", "Fireball"), ("subtitle", "Spell")]),
//!     Record::from_pairs([("title", "Sword"), ("subtitle", "Weapon")]),
//! ];
//! let mut state = GalleryState::new(Some(records), Columns::default(), Labels::default());
//! state.set_query("sp");
//! assert_eq!(state.visible_count(), 1);
//! assert_eq!(state.compute_viewmodel().stats.unwrap().text, "1 of 2 items");
//! ```

use super::filter::{matches, normalize_query};
use super::image::ImageSlot;
use super::overlay::{Overlay, Snapshot};
use crate::domain::{CardFields, Columns, GalleryError, Record};
use crate::ui::viewmodel::{
    CardLayout, CardView, EmptyState, ErrorView, HeaderInfo, OverlayView, SearchBarInfo,
    StatsInfo, UIViewModel,
};

/// Static UI copy and presentation switches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    /// Heading text.
    pub title: String,
    /// Optional line under the heading.
    pub subtitle: Option<String>,
    /// Search input hint.
    pub search_placeholder: String,
    /// Text of the empty indicator.
    pub no_results_text: String,
    /// Whether to render the count line.
    pub show_stats: bool,
    /// Card arrangement.
    pub layout: CardLayout,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            title: "Glossary".to_string(),
            subtitle: None,
            search_placeholder: "Search...".to_string(),
            no_results_text: "No results found!".to_string(),
            show_stats: true,
            layout: CardLayout::Avatar,
        }
    }
}

/// The record collection handed to the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Records, possibly none.
    Loaded(Vec<Record>),
    /// No collection was supplied at all.
    Missing,
}

impl DataSource {
    /// The records, empty when missing.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        match self {
            Self::Loaded(records) => records,
            Self::Missing => &[],
        }
    }

    /// `true` when no collection was supplied.
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl From<Option<Vec<Record>>> for DataSource {
    fn from(data: Option<Vec<Record>>) -> Self {
        data.map_or(Self::Missing, Self::Loaded)
    }
}

/// One rendered card and its search key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// The record projected through the column mapping.
    pub fields: CardFields,
    /// Lowercased searchable text.
    pub search_text: String,
    /// Image with fallback state.
    pub image: ImageSlot,
    /// Filtered out by the current query.
    pub hidden: bool,
}

impl Card {
    fn from_record(record: &Record, columns: &Columns) -> Self {
        let fields = columns.project(record);
        let image = ImageSlot::new(&fields.image, fields.placeholder_seed());
        Self {
            search_text: fields.search_text(),
            fields,
            image,
            hidden: false,
        }
    }
}

/// State of one gallery widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryState {
    /// Caller-supplied records.
    pub data: DataSource,
    /// Field mapping used to build cards.
    pub columns: Columns,
    /// UI copy.
    pub labels: Labels,
    /// Cards, parallel to `data.records()`.
    pub cards: Vec<Card>,
    /// Raw search text.
    pub query: String,
    /// Detail overlay.
    pub overlay: Overlay,
}

impl GalleryState {
    /// Creates the state and builds the initial cards.
    #[must_use]
    pub fn new(data: Option<Vec<Record>>, columns: Columns, labels: Labels) -> Self {
        let mut state = Self {
            data: data.into(),
            columns,
            labels,
            cards: Vec::new(),
            query: String::new(),
            overlay: Overlay::Closed,
        };
        state.rebuild_cards();
        state
    }

    /// Sets the query and re-filters.
    pub fn set_query(&mut self, query: &str) {
        query.clone_into(&mut self.query);
        self.apply_search_filter();
    }

    /// Replaces the record set wholesale.
    ///
    /// The query is reset and every card is rebuilt. An open overlay keeps showing
    /// its snapshot.
    pub fn replace_data(&mut self, data: Option<Vec<Record>>) {
        self.data = data.into();
        self.query.clear();
        self.rebuild_cards();
    }

    fn rebuild_cards(&mut self) {
        let columns = &self.columns;
        self.cards = self
            .data
            .records()
            .iter()
            .map(|record| Card::from_record(record, columns))
            .collect();
        self.apply_search_filter();
    }

    /// Recomputes which cards are visible for the current query.
    pub fn apply_search_filter(&mut self) {
        let _span = tracing::debug_span!(
            "apply_search_filter",
            total_cards = self.cards.len(),
            query_len = self.query.len()
        )
        .entered();

        let needle = normalize_query(&self.query);
        for card in &mut self.cards {
            card.hidden = !matches(&card.search_text, &needle);
        }

        tracing::debug!(visible = self.visible_count(), "search filter applied");
    }

    /// Total number of records.
    #[must_use]
    pub fn total(&self) -> usize {
        self.data.records().len()
    }

    /// Number of cards passing the current query.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.cards.iter().filter(|card| !card.hidden).count()
    }

    /// Records passing the current query, in insertion order.
    #[must_use]
    pub fn visible_records(&self) -> Vec<&Record> {
        self.data
            .records()
            .iter()
            .zip(&self.cards)
            .filter(|(_, card)| !card.hidden)
            .map(|(record, _)| record)
            .collect()
    }

    /// Opens the overlay on card `index`.
    ///
    /// Returns `None` if there is no such card, otherwise whether the overlay was
    /// previously closed.
    pub fn open_card(&mut self, index: usize) -> Option<bool> {
        let card = self.cards.get(index)?;
        let snapshot = Snapshot {
            card: index,
            fields: card.fields.clone(),
            image: card.image.clone(),
        };
        Some(self.overlay.open(snapshot))
    }

    /// Text of the count line.
    #[must_use]
    pub fn stats_text(&self) -> String {
        let total = self.total();
        if normalize_query(&self.query).is_empty() {
            format!("{total} items")
        } else {
            format!("{} of {total} items", self.visible_count())
        }
    }

    /// Computes a renderable view model from the current state.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        let header = HeaderInfo {
            title: self.labels.title.clone(),
            subtitle: self.labels.subtitle.clone(),
        };
        let search_bar = SearchBarInfo {
            placeholder: self.labels.search_placeholder.clone(),
            query: self.query.clone(),
        };

        if self.data.is_missing() {
            return UIViewModel {
                header,
                search_bar,
                stats: None,
                cards: vec![],
                layout: self.labels.layout,
                empty_state: EmptyState {
                    message: self.labels.no_results_text.clone(),
                    visible: false,
                },
                overlay: None,
                error: Some(ErrorView {
                    message: GalleryError::MissingDataSource.to_string(),
                }),
            };
        }

        let cards = self
            .cards
            .iter()
            .map(|card| CardView {
                image_src: card.image.src(),
                fallback_src: card.image.fallback_src(),
                title: card.fields.title.clone(),
                subtitle: card.fields.subtitle.clone(),
                description: card.fields.description.clone(),
                hidden: card.hidden,
            })
            .collect();

        UIViewModel {
            header,
            search_bar,
            stats: self
                .labels
                .show_stats
                .then(|| StatsInfo { text: self.stats_text() }),
            cards,
            layout: self.labels.layout,
            empty_state: EmptyState {
                message: self.labels.no_results_text.clone(),
                visible: self.visible_count() == 0,
            },
            overlay: self.overlay.snapshot().map(|snapshot| OverlayView {
                image_src: snapshot.image.src(),
                fallback_src: snapshot.image.fallback_src(),
                title: snapshot.fields.title.clone(),
                subtitle: snapshot.fields.subtitle.clone(),
                description: snapshot.fields.description.clone(),
            }),
            error: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spells() -> Vec<Record> {
        vec![
            Record::from_pairs([("title", "Fireball"), ("subtitle", "Spell")]),
            Record::from_pairs([("title", "Sword"), ("subtitle", "Weapon")]),
        ]
    }

    fn state(data: Option<Vec<Record>>) -> GalleryState {
        GalleryState::new(data, Columns::default(), Labels::default())
    }

    #[test]
    fn initial_state_shows_every_card() {
        let state = state(Some(spells()));
        assert_eq!(state.visible_count(), 2);
        assert_eq!(state.stats_text(), "2 items");
        assert!(!state.compute_viewmodel().empty_state.visible);
    }

    #[test]
    fn search_toggles_visibility_without_rebuilding_cards() {
        let mut state = state(Some(spells()));
        let before: Vec<CardFields> = state.cards.iter().map(|c| c.fields.clone()).collect();

        state.set_query("sp");
        assert_eq!(state.visible_records(), vec![&state.data.records()[0]]);
        assert!(state.cards[1].hidden);

        let after: Vec<CardFields> = state.cards.iter().map(|c| c.fields.clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn no_match_shows_empty_state_and_counts() {
        let mut state = state(Some(spells()));
        state.set_query("xyz");
        let vm = state.compute_viewmodel();
        assert!(vm.empty_state.visible);
        assert_eq!(vm.stats.unwrap().text, "0 of 2 items");
        assert_eq!(vm.cards.len(), 2);
        assert!(vm.cards.iter().all(|card| card.hidden));
    }

    #[test]
    fn whitespace_query_counts_as_empty() {
        let mut state = state(Some(spells()));
        state.set_query("   ");
        assert_eq!(state.stats_text(), "2 items");
    }

    #[test]
    fn empty_data_shows_empty_state() {
        let mut state = state(Some(vec![]));
        let vm = state.compute_viewmodel();
        assert!(vm.empty_state.visible);
        assert_eq!(vm.stats.unwrap().text, "0 items");

        state.set_query("anything");
        assert_eq!(state.visible_count(), 0);
        assert!(state.compute_viewmodel().empty_state.visible);
    }

    #[test]
    fn missing_data_is_an_error_view() {
        let state = state(None);
        let vm = state.compute_viewmodel();
        assert!(vm.error.is_some());
        assert!(vm.stats.is_none());
        assert!(vm.cards.is_empty());
        assert_eq!(state.total(), 0);
    }

    #[test]
    fn replace_data_resets_query() {
        let mut state = state(Some(spells()));
        state.set_query("sword");
        state.replace_data(Some(vec![Record::from_pairs([("title", "Shield")])]));
        assert!(state.query.is_empty());
        assert_eq!(state.visible_count(), 1);
        assert_eq!(state.cards[0].fields.title, "Shield");
    }

    #[test]
    fn overlay_snapshot_survives_data_replacement() {
        let mut state = state(Some(spells()));
        assert_eq!(state.open_card(0), Some(true));
        state.replace_data(Some(vec![]));

        let overlay = state.compute_viewmodel().overlay.unwrap();
        assert_eq!(overlay.title, "Fireball");
        assert_eq!(overlay.subtitle, "Spell");
    }

    #[test]
    fn open_card_out_of_range_is_ignored() {
        let mut state = state(Some(spells()));
        assert_eq!(state.open_card(5), None);
        assert!(!state.overlay.is_open());
    }

    #[test]
    fn hidden_stats_when_disabled() {
        let labels = Labels {
            show_stats: false,
            ..Labels::default()
        };
        let state = GalleryState::new(Some(spells()), Columns::default(), labels);
        assert!(state.compute_viewmodel().stats.is_none());
    }
}

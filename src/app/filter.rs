//! Substring search over records.
//!
//! A record matches when its searchable text (lowercased title, subtitle and
//! description joined by spaces) contains the normalized query. The query is
//! lowercased and trimmed; an empty query matches everything. Results keep the
//! original insertion order. There is no tokenization, fuzzy matching or ranking.
//!
//! # Example
//!
//! ```rust
//! use cardgallery::app::filter::filter;
//! use cardgallery::{Columns, Record};
//!
//! let records = vec![
//!     Record::from_pairs([("title", "Fireball"), ("subtitle", "Spell")]),
//!     Record::from_pairs([("title", "Sword"), ("subtitle", "Weapon")]),
//! ];
//! let hits = filter(&records, &Columns::default(), "SP");
//! assert_eq!(hits, vec![&records[0]]);
//! ```

use crate::domain::{Columns, Record};

/// Normalizes user input into the needle used for matching.
#[must_use]
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Tests a precomputed searchable text against a normalized needle.
#[must_use]
pub fn matches(search_text: &str, needle: &str) -> bool {
    needle.is_empty() || search_text.contains(needle)
}

/// Returns the records matching `query`, in input order.
#[must_use]
pub fn filter<'a>(records: &'a [Record], columns: &Columns, query: &str) -> Vec<&'a Record> {
    let needle = normalize_query(query);
    records
        .iter()
        .filter(|record| matches(&columns.project(record).search_text(), &needle))
        .collect()
}

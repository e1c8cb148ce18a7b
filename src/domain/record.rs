//! Record domain model and column mapping.
//!
//! A [`Record`] is one entity shown as a card. Records are free-form JSON objects;
//! [`Columns`] names which fields play the image, title, subtitle and description
//! roles for a given widget, and [`CardFields`] is the projection of a record
//! through that mapping.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entity's data, keyed by field name.
///
/// Field values are arbitrary JSON. Text is read through [`Record::text`], which
/// stringifies scalars and treats `null`, missing fields and nested values as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Builds a record from `(field, text)` pairs.
    ///
    /// ```
    /// use cardgallery::Record;
    ///
    /// let record = Record::from_pairs([("title", "Fireball"), ("subtitle", "Spell")]);
    /// assert_eq!(record.text("title"), "Fireball");
    /// assert_eq!(record.text("image"), "");
    /// ```
    #[must_use]
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), Value::String(v.into())))
                .collect(),
        )
    }

    /// Returns a field as display text.
    #[must_use]
    pub fn text(&self, field: &str) -> String {
        match self.0.get(field) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            Some(Value::Null | Value::Array(_) | Value::Object(_)) | None => String::new(),
        }
    }
}

/// Field names for the four logical card roles.
///
/// Defaults to the identity mapping (`image`, `title`, `subtitle`, `description`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Columns {
    /// Field holding the image URL.
    pub image: String,
    /// Field holding the display name.
    pub title: String,
    /// Field holding the secondary line.
    pub subtitle: String,
    /// Field holding the long text.
    pub description: String,
}

impl Default for Columns {
    fn default() -> Self {
        Self {
            image: "image".to_string(),
            title: "title".to_string(),
            subtitle: "subtitle".to_string(),
            description: "description".to_string(),
        }
    }
}

impl Columns {
    /// Projects a record through this mapping.
    #[must_use]
    pub fn project(&self, record: &Record) -> CardFields {
        CardFields {
            image: record.text(&self.image),
            title: record.text(&self.title),
            subtitle: record.text(&self.subtitle),
            description: record.text(&self.description),
        }
    }
}

/// A record's values for the four card roles.
///
/// Owned copies, so a `CardFields` taken at some point in time is a snapshot that
/// later edits to the source record do not reach.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardFields {
    /// Image URL, empty when the record has none.
    pub image: String,
    /// Display name.
    pub title: String,
    /// Secondary line, may be empty.
    pub subtitle: String,
    /// Long text, may be empty.
    pub description: String,
}

impl CardFields {
    /// Lowercased `title subtitle description` blob used for substring search.
    #[must_use]
    pub fn search_text(&self) -> String {
        format!("{} {} {}", self.title, self.subtitle, self.description).to_lowercase()
    }

    /// Seed for the placeholder avatar: the title, or `?` when it is empty.
    #[must_use]
    pub fn placeholder_seed(&self) -> &str {
        if self.title.is_empty() {
            "?"
        } else {
            &self.title
        }
    }
}

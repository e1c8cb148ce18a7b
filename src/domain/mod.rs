//! Domain layer for the card gallery.
//!
//! Core types independent of any host or rendering concern.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`record`]: Record model, column mapping and card projection
//!
//! # Examples
//!
//! ```
//! use cardgallery::domain::{Columns, Record};
//!
//! let record = Record::from_pairs([("title", "Fireball"), ("subtitle", "Spell")]);
//! let fields = Columns::default().project(&record);
//! assert_eq!(fields.search_text(), "fireball spell ");
//! ```

pub mod error;
pub mod record;

pub use error::{GalleryError, Result};
pub use record::{CardFields, Columns, Record};

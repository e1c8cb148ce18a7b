//! Error types for the card gallery.
//!
//! This module defines the centralized error type [`GalleryError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Only initialization and the loading surface (config, theme and data files) can
//! fail. Runtime widget operations never return an error; image load failures are
//! recovered in place and are not represented here.

use thiserror::Error;

/// The main error type for card gallery operations.
///
/// # Examples
///
/// ```
/// use cardgallery::GalleryError;
///
/// let err = GalleryError::MountNotFound("glossary".to_string());
/// assert_eq!(err.to_string(), "Container \"glossary\" not found");
/// ```
#[derive(Debug, Error)]
pub enum GalleryError {
    /// The host has no mount point with the requested id.
    ///
    /// Initialization aborts and nothing is written to the host.
    #[error("Container \"{0}\" not found")]
    MountNotFound(String),

    /// The record collection is absent (as opposed to empty).
    ///
    /// The widget still mounts but shows this message in place of its content.
    #[error("Database Error: the record collection is not defined")]
    MissingDataSource,

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme parsing or lookup failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Record data could not be parsed.
    #[error("Data error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized `Result` type for card gallery operations.
pub type Result<T> = std::result::Result<T, GalleryError>;

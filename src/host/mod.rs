//! Host abstraction.
//!
//! A host owns the mount points galleries attach to and the page-level state the
//! overlay touches (background scroll). The [`Host`] trait is the seam between the
//! widget and whatever document it lives in; [`Page`] is the bundled in-memory
//! HTML document used by the CLI and the tests.
//!
//! # Example
//!
//! ```rust
//! use cardgallery::host::{Host, Page};
//!
//! let mut page = Page::new("Spells").with_mount("spells");
//! assert!(page.has_mount("spells"));
//! assert!(!page.has_mount("weapons"));
//! ```

mod page;

pub use page::Page;

use crate::domain::Result;

/// Document a gallery can be mounted into.
pub trait Host {
    /// Returns `true` if a mount point with this id exists.
    fn has_mount(&self, id: &str) -> bool;

    /// Replaces the content of mount point `id` with `markup`.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::MountNotFound`](crate::GalleryError::MountNotFound)
    /// if the mount point does not exist.
    fn replace_mount(&mut self, id: &str, markup: String) -> Result<()>;

    /// Suppresses background scroll. Calls nest: every lock needs an unlock.
    fn lock_scroll(&mut self);

    /// Releases one scroll lock.
    fn unlock_scroll(&mut self);
}

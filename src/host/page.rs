//! In-memory HTML page with named mount points.

use std::fmt::Write as _;

use super::Host;
use crate::domain::{GalleryError, Result};
use crate::ui::helpers::escape_html;

/// A standalone HTML document with mount points, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    title: String,
    mounts: Vec<(String, String)>,
    scroll_locks: usize,
}

impl Page {
    /// Creates a page with no mount points.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Adds an empty mount point.
    #[must_use]
    pub fn with_mount(mut self, id: impl Into<String>) -> Self {
        self.add_mount(id);
        self
    }

    /// Adds an empty mount point; no-op if the id is already present.
    pub fn add_mount(&mut self, id: impl Into<String>) {
        let id = id.into();
        if !self.has_mount(&id) {
            self.mounts.push((id, String::new()));
        }
    }

    /// Removes a mount point and its content.
    pub fn remove_mount(&mut self, id: &str) {
        self.mounts.retain(|(mount, _)| mount != id);
    }

    /// Current content of a mount point.
    #[must_use]
    pub fn mount_content(&self, id: &str) -> Option<&str> {
        self.mounts
            .iter()
            .find(|(mount, _)| mount == id)
            .map(|(_, content)| content.as_str())
    }

    /// `true` while at least one overlay holds a scroll lock.
    #[must_use]
    pub const fn is_scroll_locked(&self) -> bool {
        self.scroll_locks > 0
    }

    /// Serializes the page as a complete HTML document.
    #[must_use]
    pub fn to_html(&self) -> String {
        let body_style = if self.is_scroll_locked() {
            " style=\"overflow: hidden\""
        } else {
            ""
        };

        let mut html = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"UTF-8\">\n");
        html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
        let _ = writeln!(html, "<title>{}</title>", escape_html(&self.title));
        let _ = writeln!(html, "</head>\n<body{body_style}>");
        for (id, content) in &self.mounts {
            let _ = writeln!(html, "<div id=\"{}\">{content}</div>", escape_html(id));
        }
        html.push_str("</body>\n</html>\n");
        html
    }
}

impl Host for Page {
    fn has_mount(&self, id: &str) -> bool {
        self.mounts.iter().any(|(mount, _)| mount == id)
    }

    fn replace_mount(&mut self, id: &str, markup: String) -> Result<()> {
        let slot = self
            .mounts
            .iter_mut()
            .find(|(mount, _)| mount == id)
            .ok_or_else(|| GalleryError::MountNotFound(id.to_string()))?;
        slot.1 = markup;
        Ok(())
    }

    fn lock_scroll(&mut self) {
        self.scroll_locks += 1;
    }

    fn unlock_scroll(&mut self) {
        self.scroll_locks = self.scroll_locks.saturating_sub(1);
    }
}

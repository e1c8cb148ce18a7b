//! Shared rendering utilities and helpers.
//!
//! Low-level markup helpers used across the UI components. No value reaching the
//! markup is trusted: every text node and attribute goes through [`escape_html`].
//!
//! # Example
//!
//! ```rust
//! use cardgallery::ui::helpers::escape_html;
//!
//! assert_eq!(escape_html("<b>\"Tom\" & 'Jerry'</b>"),
//!            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;");
//! ```

use std::fmt::Write as _;

/// Escapes text for use in HTML element content and quoted attribute values.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Appends `<tag class="class">text</tag>` when `text` is non-empty.
///
/// Optional card and overlay lines (subtitle, description) are omitted entirely
/// rather than rendered as empty elements.
pub fn push_optional_text(out: &mut String, tag: &str, class: &str, text: &str) {
    if text.is_empty() {
        return;
    }
    let _ = write!(out, "<{tag} class=\"{class}\">{}</{tag}>", escape_html(text));
}

/// Returns ` hidden` when `hidden` is set, for splicing into an opening tag.
#[must_use]
pub const fn hidden_attr(hidden: bool) -> &'static str {
    if hidden {
        " hidden"
    } else {
        ""
    }
}

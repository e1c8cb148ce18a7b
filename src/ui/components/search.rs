//! Search bar component renderer.
//!
//! Renders the search input with its icon. The current query is written back as
//! the input's value so a re-render keeps what the user typed.

use std::fmt::Write as _;

use crate::ui::helpers::escape_html;
use crate::ui::viewmodel::SearchBarInfo;

/// Renders the search box into `out`, giving the input the id `input_id`.
pub fn render_search_bar(out: &mut String, search: &SearchBarInfo, input_id: &str) {
    let _ = write!(
        out,
        "<div class=\"cg-search-box\">\
<span class=\"cg-search-icon\">\u{1f50d}</span>\
<input id=\"{input_id}\" type=\"text\" class=\"cg-search\" placeholder=\"{}\" value=\"{}\" autocomplete=\"off\" data-action=\"search\">\
</div>",
        escape_html(&search.placeholder),
        escape_html(&search.query),
    );
}

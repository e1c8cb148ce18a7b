//! Count line renderer.

use std::fmt::Write as _;

use crate::ui::helpers::escape_html;
use crate::ui::viewmodel::StatsInfo;

/// Renders the visible/total count line.
pub fn render_stats(out: &mut String, stats: &StatsInfo, id: &str) {
    let _ = write!(out, "<div id=\"{id}\" class=\"cg-stats\">{}</div>", escape_html(&stats.text));
}

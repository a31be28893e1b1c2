use ratatui::text::Span;
use regex::{Regex, RegexBuilder};
use unicode_width::UnicodeWidthStr;

use crate::tui::app::App;

/// Checkbox for a task's done flag
pub(super) fn checkbox(done: bool) -> &'static str {
    if done { "[x]" } else { "[ ]" }
}

/// Case-insensitive literal matcher for the search query, if any
pub(super) fn search_regex(query: &str) -> Option<Regex> {
    if query.is_empty() {
        return None;
    }
    RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
        .ok()
}

/// Active view settings shown next to the title, e.g. "Sort: Asc ↑"
pub(super) fn status_parts(app: &App) -> Vec<String> {
    let mut parts = Vec::new();
    if app.sort.sorts_by_date() {
        parts.push(if app.sort.is_ascending() {
            "Sort: Asc ↑".to_string()
        } else {
            "Sort: Desc ↓".to_string()
        });
    }
    if !app.show_done {
        parts.push("Hidden: Done".to_string());
    }
    if let Some(name) = app.group.name() {
        parts.push(format!("Group: {}", name));
    }
    parts
}

/// Compute total display width of a slice of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans.iter().map(|s| s.content.width()).sum()
}

use crate::model::task::{Priority, Task};

/// Priority markers in match precedence order. The first one present wins,
/// regardless of where it appears in the text.
const PRIORITY_MARKERS: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

/// Parse free-form task text into a new task.
///
/// Recognized metadata:
/// - `!high`, `!med`, `!low` set the priority. Matching is a plain substring
///   replace, so `overhigh!high` also counts, and every occurrence of the
///   winning marker is removed. Markers that lose the precedence check stay
///   in the text.
/// - `@word` (length > 1) sets the category. Only the first one is kept;
///   all of them are removed from the title. A lone `@` is ordinary text.
///
/// The remaining words are joined with single spaces to form the title.
pub fn parse_task(input: &str) -> Task {
    let (priority, remaining) = extract_priority(input);
    let (category, title) = extract_category(&remaining);

    let mut task = Task::new(title);
    task.priority = priority;
    task.category = category;
    task
}

/// Find the winning priority marker and strip all of its occurrences.
fn extract_priority(input: &str) -> (Priority, String) {
    for priority in PRIORITY_MARKERS {
        let marker = priority.marker();
        if input.contains(marker) {
            return (priority, input.replace(marker, ""));
        }
    }
    (Priority::Medium, input.to_string())
}

/// Split on whitespace, pull out `@category` tokens, and rejoin the rest.
fn extract_category(text: &str) -> (Option<String>, String) {
    let mut category = None;
    let mut words = Vec::new();

    for word in text.split_whitespace() {
        if is_category_token(word) {
            if category.is_none() {
                category = Some(word[1..].to_string());
            }
        } else {
            words.push(word);
        }
    }

    (category, words.join(" "))
}

fn is_category_token(word: &str) -> bool {
    word.starts_with('@') && word.len() > 1
}

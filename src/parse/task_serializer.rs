use crate::model::task::{Priority, Task};

/// Render a task back into parseable text: `title [@category] [!priority]`.
///
/// Medium is the implicit default and is never written, so text that
/// originally said `!med` comes back without it. Parsing the result still
/// yields Medium, but the marker itself does not survive an edit.
pub fn format_task(task: &Task) -> String {
    let mut out = task.title.clone();

    if let Some(ref category) = task.category {
        out.push_str(&format!(" @{}", category));
    }

    if task.priority != Priority::Medium {
        out.push(' ');
        out.push_str(task.priority.marker());
    }

    out
}

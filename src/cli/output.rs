use crate::model::task::Task;
use crate::parse::format_task;

/// Printed by `atlas list` when nothing is pending
pub const NO_PENDING_MESSAGE: &str = "No pending tasks! 🎉";

/// One `atlas list` line: `[!] Buy milk @grocery !high`
pub fn list_line(task: &Task) -> String {
    format!("[{}] {}", task.priority.glyph(), format_task(task))
}

/// Full `atlas list` output, one line per task
pub fn render_pending(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return format!("{}\n", NO_PENDING_MESSAGE);
    }
    let mut out = String::new();
    for task in tasks {
        out.push_str(&list_line(task));
        out.push('\n');
    }
    out
}

/// Confirmation printed by `atlas add`
pub fn added_line(task: &Task) -> String {
    format!("Task added: {}", task.title)
}

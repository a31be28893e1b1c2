use std::cmp::Ordering;
use std::ops::Range;

use chrono::NaiveDate;

use crate::model::task::{Priority, Task};

/// Group label for tasks without a category
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Three-state sort toggle: off → ascending → descending → off.
///
/// The direction also orders groups. With sorting off, groups run in
/// descending order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortMode {
    #[default]
    Off,
    Ascending,
    Descending,
}

impl SortMode {
    pub fn cycle(self) -> Self {
        match self {
            SortMode::Off => SortMode::Ascending,
            SortMode::Ascending => SortMode::Descending,
            SortMode::Descending => SortMode::Off,
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortMode::Ascending
    }

    /// Whether tasks are re-ordered by creation time
    pub fn sorts_by_date(self) -> bool {
        self != SortMode::Off
    }
}

/// How the list is bucketed into groups
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GroupMode {
    #[default]
    None,
    Category,
    Day,
    Priority,
}

impl GroupMode {
    /// None → Category → Day → Priority → None
    pub fn cycle(self) -> Self {
        match self {
            GroupMode::None => GroupMode::Category,
            GroupMode::Category => GroupMode::Day,
            GroupMode::Day => GroupMode::Priority,
            GroupMode::Priority => GroupMode::None,
        }
    }

    pub fn name(self) -> Option<&'static str> {
        match self {
            GroupMode::None => None,
            GroupMode::Category => Some("Category"),
            GroupMode::Day => Some("Day"),
            GroupMode::Priority => Some("Priority"),
        }
    }
}

/// The value a task is grouped by. Only keys of the same kind are compared.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum GroupKey {
    Category(String),
    Day(NaiveDate),
    Priority(Priority),
}

impl GroupKey {
    /// Header text shown above the group
    pub fn label(&self) -> String {
        match self {
            GroupKey::Category(name) => name.clone(),
            GroupKey::Day(date) => date.format("%A, %d %b %Y").to_string(),
            GroupKey::Priority(Priority::High) => "!!! High Priority".to_string(),
            GroupKey::Priority(Priority::Medium) => "!!  Medium Priority".to_string(),
            GroupKey::Priority(Priority::Low) => "!   Low Priority".to_string(),
        }
    }
}

/// Interactive view state: the inputs to [`compute_view`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewOptions {
    pub search: String,
    pub show_done: bool,
    pub sort: SortMode,
    pub group: GroupMode,
}

impl Default for ViewOptions {
    fn default() -> Self {
        ViewOptions {
            search: String::new(),
            show_done: true,
            sort: SortMode::Off,
            group: GroupMode::None,
        }
    }
}

/// Group key for `task` under `mode`; `None` when not grouping
pub fn group_key(task: &Task, mode: GroupMode) -> Option<GroupKey> {
    match mode {
        GroupMode::None => None,
        GroupMode::Category => Some(GroupKey::Category(
            task.category
                .clone()
                .unwrap_or_else(|| UNCATEGORIZED.to_string()),
        )),
        GroupMode::Day => Some(GroupKey::Day(task.created_day())),
        GroupMode::Priority => Some(GroupKey::Priority(task.priority)),
    }
}

/// Compute the ordered list of tasks to display.
///
/// 1. Drop done tasks unless `show_done`, and tasks whose title doesn't
///    contain the search text (case-insensitive).
/// 2. Order by group key in the current direction.
/// 3. If date sorting is on and grouping isn't by day, order by creation
///    time in the current direction, inside each group.
///
/// Groups always stay contiguous: the date sort runs first and the group
/// sort is stable, so it only decides the order within a group.
pub fn compute_view(tasks: &[Task], opts: &ViewOptions) -> Vec<Task> {
    let query = opts.search.to_lowercase();

    let mut view: Vec<Task> = tasks
        .iter()
        .filter(|t| opts.show_done || !t.done)
        .filter(|t| query.is_empty() || t.title.to_lowercase().contains(&query))
        .cloned()
        .collect();

    let ascending = opts.sort.is_ascending();

    if opts.sort.sorts_by_date() && opts.group != GroupMode::Day {
        view.sort_by(|a, b| directed(a.created_at.cmp(&b.created_at), ascending));
    }

    if opts.group != GroupMode::None {
        view.sort_by(|a, b| {
            directed(
                group_key(a, opts.group).cmp(&group_key(b, opts.group)),
                ascending,
            )
        });
    }

    view
}

fn directed(ord: Ordering, ascending: bool) -> Ordering {
    if ascending { ord } else { ord.reverse() }
}

/// Split a computed view into consecutive runs that share a group key.
/// Returns nothing when `mode` is `None`.
pub fn group_runs(view: &[Task], mode: GroupMode) -> Vec<(GroupKey, Range<usize>)> {
    let mut runs: Vec<(GroupKey, Range<usize>)> = Vec::new();
    for (i, task) in view.iter().enumerate() {
        let Some(key) = group_key(task, mode) else {
            return Vec::new();
        };
        match runs.last_mut() {
            Some((last, range)) if *last == key => range.end = i + 1,
            _ => runs.push((key, i..i + 1)),
        }
    }
    runs
}

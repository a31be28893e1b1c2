use crate::model::task::Task;

/// Priority ordering for `atlas list`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListOrder {
    /// Store order
    #[default]
    Default,
    /// Low priority first
    Asc,
    /// High priority first
    Desc,
}

/// Options parsed from `atlas list [count] [asc|desc]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOptions {
    pub limit: usize,
    pub order: ListOrder,
}

impl ListOptions {
    /// Interpret free-form list arguments in any order. `asc`/`desc` pick the
    /// order, a number sets the limit, anything else is ignored.
    pub fn from_args(args: &[String], default_limit: usize) -> Self {
        let mut opts = ListOptions {
            limit: default_limit,
            order: ListOrder::Default,
        };
        for arg in args {
            match arg.as_str() {
                "asc" => opts.order = ListOrder::Asc,
                "desc" => opts.order = ListOrder::Desc,
                other => {
                    if let Ok(n) = other.parse::<i64>() {
                        // A negative count shows nothing
                        opts.limit = usize::try_from(n).unwrap_or(0);
                    }
                }
            }
        }
        opts
    }
}

/// Pending tasks, optionally ordered by priority, truncated to the limit
pub fn pending_tasks(tasks: &[Task], opts: &ListOptions) -> Vec<Task> {
    let mut pending: Vec<Task> = tasks.iter().filter(|t| !t.done).cloned().collect();

    match opts.order {
        ListOrder::Default => {}
        ListOrder::Asc => pending.sort_by(|a, b| a.priority.cmp(&b.priority)),
        ListOrder::Desc => pending.sort_by(|a, b| b.priority.cmp(&a.priority)),
    }

    pending.truncate(opts.limit);
    pending
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::Priority;
    use crate::test_support::task;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn abc() -> Vec<Task> {
        vec![
            task("A", "Alpha", false, Priority::High, 1),
            task("B", "Bravo", true, Priority::Low, 2),
            task("C", "Charlie", false, Priority::Medium, 3),
        ]
    }

    #[test]
    fn test_list_two_desc() {
        let opts = ListOptions::from_args(&args(&["2", "desc"]), 5);
        let ids: Vec<_> = pending_tasks(&abc(), &opts)
            .into_iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec!["A", "C"]);
    }

    #[test]
    fn test_list_asc_puts_low_first() {
        let mut tasks = abc();
        tasks[1].done = false;
        let opts = ListOptions::from_args(&args(&["asc"]), 5);
        let ids: Vec<_> = pending_tasks(&tasks, &opts)
            .into_iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec!["B", "C", "A"]);
    }

    #[test]
    fn test_list_default_keeps_store_order_and_skips_done() {
        let opts = ListOptions::from_args(&[], 5);
        assert_eq!(opts.order, ListOrder::Default);
        let ids: Vec<_> = pending_tasks(&abc(), &opts)
            .into_iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec!["A", "C"]);
    }

    #[test]
    fn test_args_in_any_order() {
        let opts = ListOptions::from_args(&args(&["desc", "10"]), 5);
        assert_eq!(
            opts,
            ListOptions {
                limit: 10,
                order: ListOrder::Desc
            }
        );
        let opts = ListOptions::from_args(&args(&["bogus", "3"]), 5);
        assert_eq!(opts.limit, 3);
        assert_eq!(opts.order, ListOrder::Default);
    }

    #[test]
    fn test_limit_truncates() {
        let opts = ListOptions::from_args(&args(&["1"]), 5);
        assert_eq!(pending_tasks(&abc(), &opts).len(), 1);
        let opts = ListOptions::from_args(&args(&["-2"]), 5);
        assert!(pending_tasks(&abc(), &opts).is_empty());
    }
}

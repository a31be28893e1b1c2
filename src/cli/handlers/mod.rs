use crate::cli::commands::{AddArgs, Commands, ListArgs};
use crate::cli::output;
use crate::io::workspace::Workspace;
use crate::ops::list::{ListOptions, pending_tasks};
use crate::parse::parse_task;

/// Error for input that can't be acted on; printed with usage text
#[derive(Debug, thiserror::Error)]
pub enum UsageError {
    #[error("task text is empty\n\nUsage: atlas add \"<task text>\"")]
    EmptyTask,
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(command: Commands, ws: &Workspace) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Add(args) => cmd_add(args, ws),
        Commands::List(args) => cmd_list(args, ws),
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_add(args: AddArgs, ws: &Workspace) -> Result<(), Box<dyn std::error::Error>> {
    let text = args.text.join(" ");
    if text.trim().is_empty() {
        return Err(UsageError::EmptyTask.into());
    }

    let task = parse_task(&text);
    let line = output::added_line(&task);
    let id = ws.store.add(task);
    ws.store.save()?;
    log::info!("cli add {}", id);

    println!("{}", line);
    Ok(())
}

fn cmd_list(args: ListArgs, ws: &Workspace) -> Result<(), Box<dyn std::error::Error>> {
    let opts = ListOptions::from_args(&args.opts, ws.config.list.default_count);
    let tasks = pending_tasks(&ws.store.snapshot(), &opts);
    print!("{}", output::render_pending(&tasks));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::config::AtlasConfig;
    use crate::model::task::Priority;
    use crate::ops::store::TaskStore;
    use crate::test_support::MemoryRepository;
    use std::path::PathBuf;

    fn workspace(repo: &MemoryRepository) -> Workspace {
        Workspace {
            data_dir: PathBuf::from("/memory"),
            config: AtlasConfig::default(),
            store: TaskStore::new(Box::new(repo.clone())),
        }
    }

    fn add(words: &[&str]) -> Commands {
        Commands::Add(AddArgs {
            text: words.iter().map(|s| s.to_string()).collect(),
        })
    }

    #[test]
    fn test_add_parses_and_saves() {
        let repo = MemoryRepository::default();
        let ws = workspace(&repo);
        dispatch(add(&["Buy", "milk", "@grocery", "!high"]), &ws).unwrap();

        let saved = repo.saved();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].title, "Buy milk");
        assert_eq!(saved[0].priority, Priority::High);
    }

    #[test]
    fn test_blank_add_is_rejected_without_saving() {
        let repo = MemoryRepository::default();
        let ws = workspace(&repo);
        let err = dispatch(add(&["  ", ""]), &ws).unwrap_err();
        assert!(err.to_string().contains("Usage"));
        assert_eq!(repo.save_count(), 0);
        assert!(ws.store.is_empty());
    }

    #[test]
    fn test_add_reports_save_failure() {
        let repo = MemoryRepository::failing();
        let ws = workspace(&repo);
        assert!(dispatch(add(&["Write report"]), &ws).is_err());
    }
}

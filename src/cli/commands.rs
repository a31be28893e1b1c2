use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

const AFTER_HELP: &str = "\
TUI controls:
  j/k, up/down   Navigate through tasks
  space          Toggle task completion
  n              Add a new task
  e              Edit selected task
  /              Search tasks (enter keeps the filter, esc clears it)
  d              Delete selected task
  s              Cycle sort by date added (off, asc, desc)
  g              Cycle grouping (category, day, priority)
  c              Toggle showing completed tasks
  q, esc         Quit

Metadata parsing:
  @word          Sets the category (first one wins, others are dropped)
  !high !med !low  Sets the priority (default: medium)
  Example: atlas add \"Buy milk @grocery !high\"

List examples:
  atlas list          Show top 5 pending tasks (store order)
  atlas list 3        Show top 3 pending tasks
  atlas list asc      Sort by priority (low -> high)
  atlas list desc 10  Top 10 sorted by priority (high -> low)

Storage:
  Tasks are stored in ~/.atlas/todo.json (override with --data-dir or ATLAS_DIR).
  The directory and file are created automatically on first use.";

#[derive(Parser)]
#[command(
    name = "atlas",
    about = "Atlas Todo - a fast, minimalist task manager for your terminal",
    after_help = AFTER_HELP,
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding todo.json, config.toml and atlas.log
    #[arg(short = 'd', long = "data-dir", env = "ATLAS_DIR", global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Quickly add a task (metadata like @category and !high is parsed)
    Add(AddArgs),
    /// List pending tasks
    List(ListArgs),
}

#[derive(Args)]
pub struct AddArgs {
    /// Task text; multiple words are joined with spaces
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    pub text: Vec<String>,
}

#[derive(Args)]
pub struct ListArgs {
    /// A count and/or `asc`/`desc`, in any order
    #[arg(allow_negative_numbers = true, value_name = "COUNT|asc|desc")]
    pub opts: Vec<String>,
}

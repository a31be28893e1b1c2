use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::task::Task;

/// Name of the directory under `$HOME` that holds all atlas files
pub const DATA_DIR_NAME: &str = ".atlas";
/// Name of the task file inside the data directory
pub const TASKS_FILE_NAME: &str = "todo.json";

/// Error type for task file I/O
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not determine home directory")]
    NoHomeDir,
    #[error("could not create {path}: {source}")]
    CreateDirError {
        path: PathBuf,
        source: io::Error,
    },
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("could not serialize tasks: {0}")]
    SerializeError(#[from] serde_json::Error),
    #[error("could not write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: io::Error,
    },
}

/// Durable storage for the task collection
pub trait TaskRepository: Send + Sync {
    /// Load all tasks. A repository with no saved state yields an empty list.
    fn load(&self) -> Result<Vec<Task>, StoreError>;

    /// Replace the saved state with `tasks`
    fn save(&self, tasks: &[Task]) -> Result<(), StoreError>;

    /// Human-readable location, shown in the TUI footer
    fn describe(&self) -> String;
}

/// Tasks stored as a pretty-printed JSON array in a single file
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileRepository { path: path.into() }
    }

    /// Repository for `todo.json` inside `data_dir`
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(TASKS_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TaskRepository for JsonFileRepository {
    fn load(&self) -> Result<Vec<Task>, StoreError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(StoreError::ReadError {
                    path: self.path.clone(),
                    source: e,
                });
            }
        };

        serde_json::from_str(&data).map_err(|e| StoreError::ParseError {
            path: self.path.clone(),
            source: e,
        })
    }

    fn save(&self, tasks: &[Task]) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(tasks)?;
        atomic_write(&self.path, content.as_bytes()).map_err(|e| StoreError::WriteError {
            path: self.path.clone(),
            source: e,
        })
    }

    fn describe(&self) -> String {
        display_path(&self.path)
    }
}

/// Resolve the data directory and make sure it exists.
///
/// An explicit override wins; otherwise `~/.atlas` is used.
pub fn ensure_data_dir(override_dir: Option<&Path>) -> Result<PathBuf, StoreError> {
    let dir = match override_dir {
        Some(dir) => dir.to_path_buf(),
        None => dirs::home_dir()
            .ok_or(StoreError::NoHomeDir)?
            .join(DATA_DIR_NAME),
    };
    fs::create_dir_all(&dir).map_err(|e| StoreError::CreateDirError {
        path: dir.clone(),
        source: e,
    })?;
    Ok(dir)
}

/// Write `content` to `path` atomically using a temp file + rename.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Show paths under the home directory as `~/...`
fn display_path(path: &Path) -> String {
    if let Some(home) = dirs::home_dir()
        && let Ok(rest) = path.strip_prefix(&home)
    {
        return format!("~/{}", rest.display());
    }
    path.display().to_string()
}

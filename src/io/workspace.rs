use std::path::{Path, PathBuf};

use crate::io::config_io::{self, ConfigError};
use crate::io::logging;
use crate::io::store_io::{self, JsonFileRepository, StoreError};
use crate::model::config::AtlasConfig;
use crate::ops::store::TaskStore;

/// Startup failures. All of them are fatal.
#[derive(Debug, thiserror::Error)]
pub enum WorkspaceError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Everything a front end needs: where files live, settings, and the tasks
pub struct Workspace {
    pub data_dir: PathBuf,
    pub config: AtlasConfig,
    pub store: TaskStore,
}

/// Resolve the data directory, read config, start logging and load tasks.
pub fn open_workspace(override_dir: Option<&Path>) -> Result<Workspace, WorkspaceError> {
    let data_dir = store_io::ensure_data_dir(override_dir)?;
    let config = config_io::read_config(&data_dir)?;

    logging::init_file_logger(&data_dir, logging::parse_level(&config.log.level));
    log::debug!("data directory: {}", data_dir.display());

    let store = TaskStore::load(Box::new(JsonFileRepository::in_dir(&data_dir)))?;

    Ok(Workspace {
        data_dir,
        config,
        store,
    })
}

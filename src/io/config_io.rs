use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::model::config::AtlasConfig;

/// Name of the config file inside the data directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError { path: PathBuf, source: io::Error },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Read `config.toml` from the data directory. A missing file yields defaults.
pub fn read_config(data_dir: &Path) -> Result<AtlasConfig, ConfigError> {
    let path = data_dir.join(CONFIG_FILE_NAME);
    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(AtlasConfig::default()),
        Err(e) => return Err(ConfigError::ReadError { path, source: e }),
    };
    toml::from_str(&text).map_err(|e| ConfigError::ParseError { path, source: e })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_config_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = read_config(tmp.path()).unwrap();
        assert!(config.ui.show_done);
        assert!(config.ui.colors.is_empty());
        assert_eq!(config.list.default_count, 5);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_partial_config() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE_NAME),
            r##"
[ui]
show_done = false

[ui.colors]
title_bg = "#000000"

[list]
default_count = 3
"##,
        )
        .unwrap();

        let config = read_config(tmp.path()).unwrap();
        assert!(!config.ui.show_done);
        assert_eq!(config.ui.colors.get("title_bg").unwrap(), "#000000");
        assert_eq!(config.list.default_count, 3);
        // Untouched section keeps its default
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_malformed_config_errors() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE_NAME), "[ui\nshow_done = ").unwrap();
        assert!(matches!(
            read_config(tmp.path()),
            Err(ConfigError::ParseError { .. })
        ));
    }
}

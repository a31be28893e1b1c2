use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from config.toml in the data directory
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AtlasConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub list: ListConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show completed tasks when the TUI starts
    #[serde(default = "default_true")]
    pub show_done: bool,
    /// Hex color overrides keyed by theme slot (e.g. `title_bg = "#25A065"`)
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_done: true,
            colors: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListConfig {
    /// How many tasks `atlas list` prints when no count is given
    #[serde(default = "default_count")]
    pub default_count: usize,
}

impl Default for ListConfig {
    fn default() -> Self {
        ListConfig {
            default_count: default_count(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// One of off, error, warn, info, debug, trace
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: default_level(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_count() -> usize {
    5
}

fn default_level() -> String {
    "info".to_string()
}

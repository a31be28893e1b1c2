use std::fs::OpenOptions;
use std::path::Path;

use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

/// Name of the log file inside the data directory
pub const LOG_FILE_NAME: &str = "atlas.log";

/// Map a config level name to a filter. Unknown names fall back to `Info`.
pub fn parse_level(level: &str) -> LevelFilter {
    match level.to_ascii_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" | "warning" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

/// Start appending log records to `atlas.log` in the data directory.
///
/// Logging is best-effort: if the file can't be opened or a logger is
/// already installed, this does nothing.
pub fn init_file_logger(data_dir: &Path, level: LevelFilter) {
    if level == LevelFilter::Off {
        return;
    }

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(data_dir.join(LOG_FILE_NAME))
    {
        let _ = WriteLogger::init(level, log_config, log_file);
    }
}

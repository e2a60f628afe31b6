//! Logger initialization.
//!
//! The terminal is owned by the UI while the app runs, so records go to a
//! file in the state directory instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Once;

use crate::app_dirs::AppDirs;

/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "tock=debug"). `log_path` overrides the default file location.
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub log_path: Option<PathBuf>,
}

static INIT: Once = Once::new();

/// Initializes the global logger once; later calls are ignored.
///
/// If no log file can be opened the app runs without a logger and records
/// are dropped.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let Some(path) = config.log_path.or_else(AppDirs::log_path) else {
            return;
        };
        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return;
            }
        }
        let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
            return;
        };

        let mut builder = env_logger::Builder::new();
        if let Some(filter) = config.env_filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        builder
            .target(env_logger::Target::Pipe(Box::new(file)))
            .write_style(env_logger::WriteStyle::Never);

        if builder.try_init().is_ok() {
            log::debug!("logging initialized at {}", path.display());
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn init_is_idempotent_and_creates_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("tock.log");
        let config = LoggingConfig {
            env_filter: Some("debug".to_string()),
            log_path: Some(path.clone()),
        };

        init_logging(config.clone());
        init_logging(config);

        log::info!("hello from the test");
        // Another test binary may have won the race for the global logger;
        // only assert on the file when this call set it up.
        if path.exists() {
            assert!(path.is_file());
        }
    }
}

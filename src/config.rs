use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::clock::DisplayOptions;
use crate::countdown::{DEFAULT_MINUTES, MAX_MINUTES};
use crate::error::{ClockError, Result};

/// Startup defaults. Read once at launch; changes made in the app are not
/// written back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub use_24_hour: bool,
    pub show_seconds: bool,
    pub use_utc: bool,
    pub dark_mode: bool,
    pub always_on_top: bool,
    pub timer_minutes: u32,
}

impl Default for Config {
    fn default() -> Self {
        let opts = DisplayOptions::default();
        Self {
            use_24_hour: opts.use_24_hour,
            show_seconds: opts.show_seconds,
            use_utc: opts.use_utc,
            dark_mode: opts.dark_mode,
            always_on_top: opts.always_on_top,
            timer_minutes: DEFAULT_MINUTES,
        }
    }
}

impl Config {
    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            use_24_hour: self.use_24_hour,
            show_seconds: self.show_seconds,
            use_utc: self.use_utc,
            always_on_top: self.always_on_top,
            dark_mode: self.dark_mode,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.timer_minutes == 0 {
            return Err(ClockError::Validation(
                "timer_minutes must be a positive whole number".to_string(),
            ));
        }
        if self.timer_minutes > MAX_MINUTES {
            return Err(ClockError::Validation(format!(
                "timer_minutes must be at most {MAX_MINUTES}"
            )));
        }
        Ok(())
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let path = if let Some(pd) = ProjectDirs::from("", "", "tock") {
            pd.config_dir().join("config.json")
        } else {
            PathBuf::from("tock_config.json")
        };
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    /// Missing files yield defaults silently; unreadable or invalid ones are
    /// logged and also fall back to defaults.
    fn load(&self) -> Config {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(_) => return Config::default(),
        };

        match serde_json::from_slice::<Config>(&bytes) {
            Ok(cfg) => match cfg.validate() {
                Ok(()) => {
                    log::info!("loaded config from {}", self.path.display());
                    cfg
                }
                Err(e) => {
                    log::warn!("ignoring config {}: {e}", self.path.display());
                    Config::default()
                }
            },
            Err(e) => {
                log::warn!("failed to parse config {}: {e}", self.path.display());
                Config::default()
            }
        }
    }
}

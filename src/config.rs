//! Defaults and runtime configuration.
//!
//! Values resolve in order: CLI flag, environment variable, built-in default.

use std::path::PathBuf;
use std::time::Duration;

pub const API_BASE: &str = "https://api.covid19api.com";
pub const SUMMARY_ENDPOINT: &str = "summary";
pub const DAY_ONE_ENDPOINT: &str = "dayone/country";

pub const ENV_API_URL: &str = "COVID19_API_URL";
pub const ENV_DATA_DIR: &str = "COVID19_DATA_DIR";

/// File name of the country directory inside the data directory.
pub const DIRECTORY_FILE: &str = "countries.json";

/// Pause between two animation steps of the day-one view.
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(200);

/// Platform data directory for this application, e.g. `~/.local/share/covid19-rs`.
pub fn default_data_dir() -> PathBuf {
    if let Some(data) = dirs::data_dir() {
        data.join("covid19-rs")
    } else {
        PathBuf::from(".covid19-rs")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub base_url: String,
    pub data_dir: PathBuf,
    pub step_delay: Duration,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: API_BASE.into(),
            data_dir: default_data_dir(),
            step_delay: DEFAULT_STEP_DELAY,
            color: true,
        }
    }
}

impl Config {
    /// Defaults overlaid with `COVID19_API_URL` / `COVID19_DATA_DIR` when set.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(url) = std::env::var(ENV_API_URL) {
            if !url.trim().is_empty() {
                cfg.base_url = url.trim().to_string();
            }
        }
        if let Ok(dir) = std::env::var(ENV_DATA_DIR) {
            if !dir.trim().is_empty() {
                cfg.data_dir = PathBuf::from(dir);
            }
        }
        cfg
    }

    pub fn directory_path(&self) -> PathBuf {
        self.data_dir.join(DIRECTORY_FILE)
    }
}

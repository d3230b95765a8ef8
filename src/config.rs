// ABOUTME: Configuration module for the gallery-sync application
// ABOUTME: Provides default paths and environment variable handling

use crate::watch::WatchConfig;
use std::env;
use std::path::PathBuf;

/// Global configuration for the application
pub struct Config {
    pub watch_folder: PathBuf,
    pub html_file: PathBuf,
    pub debounce_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            watch_folder: PathBuf::from("./archive"),
            html_file: PathBuf::from("./index.html"),
            debounce_ms: 500,
        }
    }
}

impl Config {
    /// Create a new configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let watch_folder = env::var("WATCH_FOLDER")
            .map(PathBuf::from)
            .unwrap_or(defaults.watch_folder);
        let html_file = env::var("HTML_FILE")
            .map(PathBuf::from)
            .unwrap_or(defaults.html_file);
        let debounce_ms = env::var("DEBOUNCE_MS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(defaults.debounce_ms);

        Self {
            watch_folder,
            html_file,
            debounce_ms,
        }
    }

    /// Get a watch configuration with defaults from this config
    pub fn get_watch_config(
        &self,
        watch_folder: Option<PathBuf>,
        html_file: Option<PathBuf>,
        debounce_ms: Option<u64>,
    ) -> WatchConfig {
        WatchConfig {
            watch_folder: watch_folder.unwrap_or_else(|| self.watch_folder.clone()),
            html_file: html_file.unwrap_or_else(|| self.html_file.clone()),
            debounce_ms: debounce_ms.unwrap_or(self.debounce_ms),
        }
    }
}

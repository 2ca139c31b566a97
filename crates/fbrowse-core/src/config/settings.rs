//! Application configuration loaded from a TOML file.
//!
//! Every field has a default, so the browser runs without a config file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Top-level application configuration.
///
/// Call [`Config::load`] to read from a TOML path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub preview: PreviewConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Loads configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] if the file does not exist.
    /// - [`CoreError::Unreadable`] if the file cannot be read.
    /// - [`CoreError::ConfigParse`] if the TOML is malformed.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = read_config_file(path)?;
        toml::from_str(&content).map_err(|e| CoreError::ConfigParse(e.to_string()))
    }

    /// Directory the browser opens first: the configured one, or `cwd`.
    pub fn start_dir(&self, cwd: &Path) -> PathBuf {
        self.general
            .start_dir
            .clone()
            .unwrap_or_else(|| cwd.to_path_buf())
    }

    /// Home shortcut target: the configured one, or the start directory.
    pub fn home_dir(&self, cwd: &Path) -> PathBuf {
        self.general
            .home_dir
            .clone()
            .unwrap_or_else(|| self.start_dir(cwd))
    }
}

/// Reads a config file, mapping I/O failures onto [`CoreError`].
pub(crate) fn read_config_file(path: &Path) -> CoreResult<String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => CoreError::NotFound(path.to_path_buf()),
        std::io::ErrorKind::PermissionDenied => CoreError::Unreadable(path.to_path_buf()),
        _ => CoreError::Io(e),
    })
}

/// General file-browsing preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default)]
    pub start_dir: Option<PathBuf>,
    #[serde(default)]
    pub home_dir: Option<PathBuf>,
    #[serde(default)]
    pub show_hidden: bool,
    #[serde(default = "default_true")]
    pub confirm_delete: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            start_dir: None,
            home_dir: None,
            show_hidden: false,
            confirm_delete: true,
        }
    }
}

/// File preview pane configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_max_lines")]
    pub max_lines: usize,
    /// Files larger than this many bytes are not previewed as text.
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_lines: default_max_lines(),
            max_file_size: default_max_file_size(),
        }
    }
}

/// Log output settings for front ends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file; front ends pick a temp-dir default when unset.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_max_lines() -> usize {
    500
}

fn default_max_file_size() -> u64 {
    10 * 1024 * 1024
}

fn default_log_level() -> String {
    "info".to_string()
}

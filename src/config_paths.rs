//! Where gridlens keeps its files
//!
//! ```text
//! <config root>/gridlens/
//! ├── config.yaml
//! └── logs/
//!     └── gridlens.log.YYYY-MM-DD
//! ```
//!
//! The root is `$GRIDLENS_CONFIG_DIR` when set, otherwise `$XDG_CONFIG_HOME`
//! or `~/.config` on Unix/macOS and the platform config dir on Windows.

use std::env;
use std::fs;
use std::path::PathBuf;

const APP_DIR: &str = "gridlens";

/// Overrides the whole config directory (used by tests and portable setups)
pub const CONFIG_DIR_ENV: &str = "GRIDLENS_CONFIG_DIR";

/// File name prefix of the daily-rotated log files
pub const LOG_FILE_PREFIX: &str = "gridlens.log";

/// Base config directory
pub fn config_dir() -> Option<PathBuf> {
    if let Some(dir) = env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
        return Some(PathBuf::from(dir));
    }
    platform_config_root().map(|root| root.join(APP_DIR))
}

#[cfg(target_os = "windows")]
fn platform_config_root() -> Option<PathBuf> {
    dirs::config_dir()
}

#[cfg(not(target_os = "windows"))]
fn platform_config_root() -> Option<PathBuf> {
    env::var_os("XDG_CONFIG_HOME")
        .filter(|d| !d.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
}

pub fn config_file() -> Option<PathBuf> {
    Some(config_dir()?.join("config.yaml"))
}

pub fn logs_dir() -> Option<PathBuf> {
    Some(config_dir()?.join("logs"))
}

/// Newest daily log file, or the undated name if none exist yet
pub fn log_file() -> Option<PathBuf> {
    let dir = logs_dir()?;
    let newest = fs::read_dir(&dir)
        .into_iter()
        .flatten()
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with(LOG_FILE_PREFIX))
        })
        // Date suffixes compare lexically
        .max();

    Some(newest.unwrap_or_else(|| dir.join(LOG_FILE_PREFIX)))
}

fn create(dir: Option<PathBuf>) -> Result<PathBuf, String> {
    let dir = dir.ok_or_else(|| "No config directory available".to_string())?;
    fs::create_dir_all(&dir)
        .map_err(|e| format!("Failed to create directory {}: {}", dir.display(), e))?;
    Ok(dir)
}

/// Create the config directory if needed and return it
pub fn ensure_config_dir() -> Result<PathBuf, String> {
    create(config_dir())
}

/// Create the logs directory if needed and return it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    create(logs_dir())
}

//! File System Utilities
//!
//! Configuration and cache directory management for the gallery.

use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "goldwind", "dfc-select").ok_or_else(|| Error::Invalid {
        message: "Could not determine project directories".to_string(),
    })
}

/// Get or create the configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/dfc-select/` or `$XDG_CONFIG_HOME/dfc-select/`
/// - **macOS**: `~/Library/Application Support/com.goldwind.dfc-select/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\goldwind\dfc-select\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let project_dirs = project_dirs()?;
    let config_dir = project_dirs.config_dir();

    if !config_dir.exists() {
        fs::create_dir_all(config_dir)?;
    }

    Ok(config_dir.to_path_buf())
}

/// Get or create the cache directory (log files live here)
///
/// Platform-specific locations:
/// - **Linux**: `~/.cache/dfc-select/`
/// - **macOS**: `~/Library/Caches/com.goldwind.dfc-select/`
/// - **Windows**: `C:\Users\<User>\AppData\Local\goldwind\dfc-select\cache\`
pub fn get_or_create_cache_dir() -> Result<PathBuf> {
    let project_dirs = project_dirs()?;
    let cache_dir = project_dirs.cache_dir();

    if !cache_dir.exists() {
        fs::create_dir_all(cache_dir)?;
    }

    Ok(cache_dir.to_path_buf())
}

/// Check if running in development mode
pub fn is_development() -> bool {
    cfg!(debug_assertions)
}

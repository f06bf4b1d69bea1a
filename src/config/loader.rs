//! Settings file discovery and loading.
//!
//! Lookup order (first hit wins, no merging):
//! 1. An explicit path (`--config`); a missing file is an error
//! 2. User global settings (`~/.sprout/config.yml`)
//! 3. Built-in defaults

use crate::config::schema::Settings;
use crate::error::{Result, SproutError};
use std::fs;
use std::path::{Path, PathBuf};

/// Path to the user's global settings file, if a home directory is known.
pub fn user_config_path() -> Option<PathBuf> {
    Some(dirs::home_dir()?.join(".sprout").join("config.yml"))
}

/// Load settings, preferring `explicit` over the user global file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if `explicit` is given but doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    if let Some(path) = explicit {
        return load_settings_file(path);
    }

    match user_config_path() {
        Some(path) if path.exists() => load_settings_file(&path),
        _ => {
            tracing::debug!("No settings file found, using defaults");
            Ok(Settings::default())
        }
    }
}

/// Load a single settings file.
pub fn load_settings_file(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            SproutError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            SproutError::Io(e)
        }
    })?;

    tracing::debug!("Loading settings from {}", path.display());
    parse_settings(&content, path)
}

/// Parse YAML content into [`Settings`].
///
/// An empty document yields the defaults.
pub fn parse_settings(content: &str, source_path: &Path) -> Result<Settings> {
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }

    serde_yaml::from_str(content).map_err(|e| SproutError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

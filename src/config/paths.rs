//! Path management for MoneyFix
//!
//! ## Path Resolution Order
//!
//! 1. `MONEYFIX_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/moneyfix` or `~/.config/moneyfix`
//! 3. Windows: `%APPDATA%\moneyfix`

use std::path::PathBuf;

use crate::error::MoneyFixError;

/// Environment variable overriding the base directory
pub const BASE_DIR_ENV: &str = "MONEYFIX_DIR";

/// Manages all paths used by MoneyFix
#[derive(Debug, Clone)]
pub struct MoneyFixPaths {
    /// Base directory for settings and logs
    base_dir: PathBuf,
}

impl MoneyFixPaths {
    /// Create a new MoneyFixPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, MoneyFixError> {
        let base_dir = match std::env::var(BASE_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create MoneyFixPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/moneyfix/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("settings.json")
    }

    /// Get the directory for rolling log files
    pub fn log_dir(&self) -> PathBuf {
        self.base_dir.join("logs")
    }

    /// Ensure the log directory exists
    pub fn ensure_log_dir(&self) -> Result<PathBuf, MoneyFixError> {
        let dir = self.log_dir();
        std::fs::create_dir_all(&dir)
            .map_err(|e| MoneyFixError::Io(format!("Failed to create log directory: {}", e)))?;
        Ok(dir)
    }
}

/// Resolve the default base directory based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, MoneyFixError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME")
                .map_err(|_| MoneyFixError::Config("HOME environment variable not set".into()))?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("moneyfix"))
}

/// Resolve the default base directory based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, MoneyFixError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| MoneyFixError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("moneyfix"))
}

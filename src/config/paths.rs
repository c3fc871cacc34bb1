//! Path management for fundboard
//!
//! Provides XDG-compliant path resolution for the configuration directory.
//!
//! ## Path Resolution Order
//!
//! 1. `FUNDBOARD_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/fundboard` or `~/.config/fundboard`
//! 3. Windows: `%APPDATA%\fundboard`

use std::path::PathBuf;

use crate::error::FundboardError;

/// Manages all paths used by fundboard
#[derive(Debug, Clone)]
pub struct FundboardPaths {
    /// Base directory for all fundboard configuration
    base_dir: PathBuf,
}

impl FundboardPaths {
    /// Create a new FundboardPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, FundboardError> {
        let base_dir = if let Ok(custom) = std::env::var("FUNDBOARD_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create FundboardPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the config directory (~/.config/fundboard/ or equivalent)
    pub fn config_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the config directory exists
    pub fn ensure_directories(&self) -> Result<(), FundboardError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FundboardError::Io(format!("Failed to create config directory: {}", e)))?;
        Ok(())
    }
}

/// Resolve the default config directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, FundboardError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                FundboardError::Config("HOME environment variable not set".to_string())
            })?;
            PathBuf::from(home).join(".config")
        }
    };

    Ok(config_base.join("fundboard"))
}

/// Resolve the default config directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, FundboardError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| FundboardError::Config("APPDATA environment variable not set".to_string()))?;

    Ok(PathBuf::from(appdata).join("fundboard"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_base_dir() {
        let paths = FundboardPaths::with_base_dir(PathBuf::from("/tmp/fundboard-test"));
        assert_eq!(paths.config_dir(), &PathBuf::from("/tmp/fundboard-test"));
        assert_eq!(
            paths.settings_file(),
            PathBuf::from("/tmp/fundboard-test/config.json")
        );
    }

    #[test]
    fn test_env_override() {
        // FUNDBOARD_DATA_DIR takes precedence over platform defaults
        std::env::set_var("FUNDBOARD_DATA_DIR", "/tmp/fundboard-env");
        let paths = FundboardPaths::new().unwrap();
        assert_eq!(paths.config_dir(), &PathBuf::from("/tmp/fundboard-env"));
        std::env::remove_var("FUNDBOARD_DATA_DIR");
    }
}

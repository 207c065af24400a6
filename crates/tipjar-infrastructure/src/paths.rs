//! Unified path management for tipjar files.
//!
//! Platform directories come from `AppPaths` in the version-migrate crate.
//! A custom base directory replaces both of them, which is how the CLI's
//! `--data-dir` flag and the tests keep everything in one place.

use std::path::PathBuf;
use version_migrate::AppPaths;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for tipjar_core::TipjarError {
    fn from(err: PathError) -> Self {
        tipjar_core::TipjarError::config(err.to_string())
    }
}

pub const APP_NAME: &str = "tipjar";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const HISTORY_FILE_NAME: &str = "history.json";

/// Resolves where tipjar keeps its files.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/tipjar/            # Config directory (AppPaths default)
/// └── config.toml              # Application configuration
///
/// ~/.local/share/tipjar/       # Data directory
/// └── history.json             # Saved tip records
/// ```
#[derive(Debug, Clone, Default)]
pub struct TipjarPaths {
    base_dir: Option<PathBuf>,
}

impl TipjarPaths {
    /// Creates a resolver; `Some(dir)` puts every file directly under `dir`.
    pub fn new(base_dir: Option<PathBuf>) -> Self {
        Self { base_dir }
    }

    fn app_paths() -> AppPaths {
        AppPaths::new(APP_NAME)
    }

    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base_dir {
            Some(base) => Ok(base.clone()),
            None => Self::app_paths()
                .config_dir()
                .map_err(|_| PathError::HomeDirNotFound),
        }
    }

    pub fn data_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base_dir {
            Some(base) => Ok(base.clone()),
            None => Self::app_paths()
                .data_dir()
                .map_err(|_| PathError::HomeDirNotFound),
        }
    }

    pub fn config_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join(CONFIG_FILE_NAME))
    }

    pub fn history_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.data_dir()?.join(HISTORY_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_base_holds_every_file() {
        let base = PathBuf::from("/tmp/tipjar-test");
        let paths = TipjarPaths::new(Some(base.clone()));

        assert_eq!(paths.config_file().unwrap(), base.join("config.toml"));
        assert_eq!(paths.history_file().unwrap(), base.join("history.json"));
    }

    #[test]
    fn test_default_dirs_end_with_app_name() {
        let paths = TipjarPaths::default();
        // AppPaths returns platform-specific directories with "tipjar" appended
        if let Ok(config_dir) = paths.config_dir() {
            assert!(config_dir.ends_with("tipjar"));
        }
        if let Ok(history_file) = paths.history_file() {
            assert!(history_file.ends_with("history.json"));
        }
    }
}

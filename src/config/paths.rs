//! Path management for IncomeFlow
//!
//! ## Path Resolution Order
//!
//! 1. `INCOMEFLOW_DATA_DIR` environment variable (if set)
//! 2. The platform configuration directory for `incomeflow`
//!    (`~/.config/incomeflow` on Linux, `%APPDATA%\incomeflow` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::IncomeError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "INCOMEFLOW_DATA_DIR";

/// Manages all paths used by IncomeFlow
#[derive(Debug, Clone)]
pub struct IncomePaths {
    base_dir: PathBuf,
}

impl IncomePaths {
    /// Create a new IncomePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and no
    /// override is set.
    pub fn new() -> Result<Self, IncomeError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create IncomePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding the persisted blobs, one file per key
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), IncomeError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| IncomeError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| IncomeError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, IncomeError> {
    ProjectDirs::from("", "", "incomeflow")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| IncomeError::Config("Could not determine a home directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = IncomePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var(DATA_DIR_ENV, custom_path);
        let paths = IncomePaths::new().unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());

        env::remove_var(DATA_DIR_ENV);
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = IncomePaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.data_dir().exists());
    }
}

//! User settings for IncomeFlow
//!
//! Manages display preferences and the extraction service endpoint.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::paths::IncomePaths;
use crate::error::IncomeError;

/// Settings layout written by this build
pub const SETTINGS_SCHEMA_VERSION: u32 = 1;

/// User settings for IncomeFlow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format) for printed dates
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Base URL of an OpenAI-compatible extraction service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_host: Option<String>,

    /// Model name sent to the extraction service
    #[serde(default = "default_ai_model")]
    pub ai_model: String,

    /// Number of entries shown by the recent view
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

fn default_schema_version() -> u32 {
    SETTINGS_SCHEMA_VERSION
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_ai_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_recent_limit() -> usize {
    5
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            ai_host: None,
            ai_model: default_ai_model(),
            recent_limit: default_recent_limit(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &IncomePaths) -> Result<Self, IncomeError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                IncomeError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let mut settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                IncomeError::Config(format!("Failed to parse settings file: {}", e))
            })?;
            settings.migrate();

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Bring settings written by an older build up to the current layout
    ///
    /// Every field added since version 1 has a serde default, so upgrading is
    /// a version bump. Settings from a newer build are used as-is.
    fn migrate(&mut self) {
        if self.schema_version < SETTINGS_SCHEMA_VERSION {
            debug!(
                from = self.schema_version,
                to = SETTINGS_SCHEMA_VERSION,
                "upgrading settings schema"
            );
            self.schema_version = SETTINGS_SCHEMA_VERSION;
        } else if self.schema_version > SETTINGS_SCHEMA_VERSION {
            warn!(
                found = self.schema_version,
                supported = SETTINGS_SCHEMA_VERSION,
                "settings were written by a newer version; unknown options are ignored"
            );
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &IncomePaths) -> Result<(), IncomeError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            IncomeError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            IncomeError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.recent_limit, 5);
        assert!(settings.ai_host.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = IncomePaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_symbol = "€".to_string();
        settings.ai_host = Some("http://localhost:8080".to_string());
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "€");
        assert_eq!(loaded.ai_host.as_deref(), Some("http://localhost:8080"));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let loaded: Settings = serde_json::from_str(r#"{"currency_symbol": "£"}"#).unwrap();
        assert_eq!(loaded.currency_symbol, "£");
        assert_eq!(loaded.ai_model, "gpt-4o-mini");
        assert_eq!(loaded.date_format, "%Y-%m-%d");
    }

    #[test]
    fn test_old_schema_is_upgraded() {
        let temp_dir = TempDir::new().unwrap();
        let paths = IncomePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(
            paths.settings_file(),
            r#"{"schema_version": 0, "date_format": "%d.%m.%Y"}"#,
        )
        .unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.schema_version, SETTINGS_SCHEMA_VERSION);
        assert_eq!(loaded.date_format, "%d.%m.%Y");
    }

    #[test]
    fn test_newer_schema_is_kept() {
        let temp_dir = TempDir::new().unwrap();
        let paths = IncomePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(
            paths.settings_file(),
            r#"{"schema_version": 7, "currency_symbol": "£", "theme": "dark"}"#,
        )
        .unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.schema_version, 7);
        assert_eq!(loaded.currency_symbol, "£");
    }

    #[test]
    fn test_corrupt_settings_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = IncomePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, IncomeError::Config(_)));
    }
}

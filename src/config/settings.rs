//! User settings for BillBrain
//!
//! Manages user preferences: display currency, date format, and the default
//! user identity CLI commands run as when `--user` is not given.

use serde::{Deserialize, Serialize};

use super::paths::BillBrainPaths;
use crate::error::BillBrainError;
use crate::models::UserId;
use crate::storage::file_io::write_json_atomic;

/// User settings for BillBrain
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used for terminal display (never in CSV exports)
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Currency code recorded for reference (e.g. "CAD")
    #[serde(default = "default_currency_code")]
    pub currency_code: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// The user identity commands run as when --user is not supplied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_user: Option<UserId>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_currency_code() -> String {
    "CAD".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency_symbol(),
            currency_code: default_currency_code(),
            date_format: default_date_format(),
            default_user: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &BillBrainPaths) -> Result<Self, BillBrainError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path).map_err(|e| {
                BillBrainError::Config(format!("Failed to read settings: {}", e))
            })?;
            serde_json::from_str(&content)
                .map_err(|e| BillBrainError::Config(format!("Failed to parse settings: {}", e)))
        } else {
            let settings = Self::default();
            settings.save(paths)?;
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BillBrainPaths) -> Result<(), BillBrainError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}

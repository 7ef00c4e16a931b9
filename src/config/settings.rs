//! User settings for Teller
//!
//! Manages application preferences: the currency symbol used for display
//! and the default fee schedule applied to newly created accounts.

use serde::{Deserialize, Serialize};

use super::paths::TellerPaths;
use crate::error::TellerError;
use crate::models::{AccountSettings, Money};

/// User settings for Teller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Default currency symbol
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Overdraft fee for newly created accounts
    #[serde(default = "default_overdraft_fee")]
    pub default_overdraft_fee: Money,

    /// Management fee for newly created accounts
    #[serde(default = "default_management_fee")]
    pub default_management_fee: Money,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_overdraft_fee() -> Money {
    AccountSettings::default().overdraft_fee
}

fn default_management_fee() -> Money {
    AccountSettings::default().management_fee
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            default_overdraft_fee: default_overdraft_fee(),
            default_management_fee: default_management_fee(),
        }
    }
}

impl Settings {
    /// The fee schedule for accounts created under these settings
    pub fn account_settings(&self) -> AccountSettings {
        AccountSettings {
            overdraft_fee: self.default_overdraft_fee,
            management_fee: self.default_management_fee,
        }
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &TellerPaths) -> Result<Self, TellerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| TellerError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| TellerError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            // Create default settings
            let settings = Settings::default();
            // Don't save yet - let caller decide when to persist
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TellerPaths) -> Result<(), TellerError> {
        // Ensure the config directory exists
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TellerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| TellerError::Io(format!("Failed to write settings file: {}", e)))?;

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
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.default_overdraft_fee, Money::from_cents(3500));
        assert_eq!(settings.default_management_fee, Money::from_cents(1000));
    }

    #[test]
    fn test_account_settings_from_defaults() {
        let mut settings = Settings::default();
        settings.default_overdraft_fee = Money::from_cents(2000);

        let account_settings = settings.account_settings();
        assert_eq!(account_settings.overdraft_fee, Money::from_cents(2000));
        assert_eq!(account_settings.management_fee, Money::from_cents(1000));
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TellerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.default_overdraft_fee = Money::from_cents(5000);

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_load_without_file_returns_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TellerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, Settings::default());
    }
}

//! # Configuration
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     KASIR_STORE_NAME="Warung Bu Sri"                                   │
//! │     KASIR_THEME=dark                                                   │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/kasir/kasir.toml (Linux)                                 │
//! │     ~/Library/Application Support/com.kasir.pos/kasir.toml (macOS)     │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [store]
//! name = "Warung Bu Sri"
//! currency_symbol = "Rp"
//!
//! [session]
//! seed_catalog = true
//! timestamp_format = "%d/%m/%Y, %H:%M:%S"
//!
//! [display]
//! theme = "light"   # light | dark
//! ```
//!
//! Nothing here is written back: the app keeps no state across restarts.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info, warn};

use kasir_core::{SessionOptions, DEFAULT_TIMESTAMP_FORMAT};

use crate::state::ThemeMode;

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Sections
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Shown in the screen title.
    #[serde(default = "default_store_name")]
    pub name: String,

    /// Prefix the presentation layer puts before amounts.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_store_name() -> String {
    "Aplikasi Kasir".to_string()
}

fn default_currency_symbol() -> String {
    "Rp".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            name: default_store_name(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSettings {
    /// Start with Kopi, Teh and Roti in the catalog.
    #[serde(default = "default_true")]
    pub seed_catalog: bool,

    /// `strftime` pattern for transaction timestamps.
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

fn default_true() -> bool {
    true
}

fn default_timestamp_format() -> String {
    DEFAULT_TIMESTAMP_FORMAT.to_string()
}

impl Default for SessionSettings {
    fn default() -> Self {
        SessionSettings {
            seed_catalog: true,
            timestamp_format: default_timestamp_format(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Theme at startup. The user can toggle it; the toggle is not saved.
    #[serde(default)]
    pub theme: ThemeMode,
}

// =============================================================================
// Main Configuration
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub session: SessionSettings,

    #[serde(default)]
    pub display: DisplaySettings,
}

impl AppConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (kasir.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = Self::from_toml(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Parses a TOML document. Missing sections and keys take defaults.
    pub fn from_toml(contents: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.store.name.trim().is_empty() {
            return Err(ConfigError::Invalid("store name must not be empty".into()));
        }

        let format = &self.session.timestamp_format;
        if format.is_empty() {
            return Err(ConfigError::Invalid(
                "timestamp_format must not be empty".into(),
            ));
        }
        if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::Invalid(format!(
                "timestamp_format '{}' is not a valid strftime pattern",
                format
            )));
        }

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies `KASIR_*` overrides read through `lookup`.
    ///
    /// Unparseable values are logged and ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(name) = lookup("KASIR_STORE_NAME") {
            debug!(name = %name, "Overriding store name from environment");
            self.store.name = name;
        }

        if let Some(symbol) = lookup("KASIR_CURRENCY_SYMBOL") {
            self.store.currency_symbol = symbol;
        }

        if let Some(seed) = lookup("KASIR_SEED_CATALOG") {
            match seed.to_lowercase().as_str() {
                "1" | "true" | "yes" => self.session.seed_catalog = true,
                "0" | "false" | "no" => self.session.seed_catalog = false,
                _ => warn!(value = %seed, "Unknown KASIR_SEED_CATALOG value"),
            }
        }

        if let Some(format) = lookup("KASIR_TIMESTAMP_FORMAT") {
            self.session.timestamp_format = format;
        }

        if let Some(theme) = lookup("KASIR_THEME") {
            match theme.parse() {
                Ok(parsed) => {
                    debug!(theme = %theme, "Overriding theme from environment");
                    self.display.theme = parsed;
                }
                Err(_) => warn!(theme = %theme, "Unknown theme in environment"),
            }
        }
    }

    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "kasir", "pos")
            .map(|dirs| dirs.config_dir().join("kasir.toml"))
    }

    /// Options for a fresh [`kasir_core::PosSession`].
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            seed_catalog: self.session.seed_catalog,
            timestamp_format: self.session.timestamp_format.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.store.currency_symbol, "Rp");
        assert!(config.session.seed_catalog);
        assert_eq!(config.display.theme, ThemeMode::Light);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_takes_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [store]
            name = "Warung Bu Sri"

            [display]
            theme = "dark"
            "#,
        )
        .unwrap();

        assert_eq!(config.store.name, "Warung Bu Sri");
        assert_eq!(config.store.currency_symbol, "Rp");
        assert_eq!(config.display.theme, ThemeMode::Dark);
        assert_eq!(config.session, SessionSettings::default());
    }

    #[test]
    fn test_session_section() {
        let config = AppConfig::from_toml(
            r#"
            [session]
            seed_catalog = false
            timestamp_format = "%H:%M"
            "#,
        )
        .unwrap();

        assert!(!config.session.seed_catalog);
        assert_eq!(config.session_options().timestamp_format, "%H:%M");
    }

    #[test]
    fn test_bad_toml_is_a_parse_error() {
        assert!(matches!(
            AppConfig::from_toml("[store\nname = 1"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_validation() {
        let mut config = AppConfig::default();
        config.session.timestamp_format = "%d/%m/%J".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = AppConfig::default();
        config.store.name = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("KASIR_STORE_NAME", "Toko Maju"),
            ("KASIR_SEED_CATALOG", "false"),
            ("KASIR_THEME", "DARK"),
        ]
        .into_iter()
        .collect();

        let mut config = AppConfig::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.store.name, "Toko Maju");
        assert!(!config.session.seed_catalog);
        assert_eq!(config.display.theme, ThemeMode::Dark);
    }

    #[test]
    fn test_unknown_override_values_are_ignored() {
        let mut config = AppConfig::default();
        config.apply_overrides(|key| match key {
            "KASIR_THEME" => Some("sepia".to_string()),
            "KASIR_SEED_CATALOG" => Some("maybe".to_string()),
            _ => None,
        });
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("kasir-config-that-does-not-exist.toml");
        let config = AppConfig::load_or_default(Some(path));
        assert_eq!(config.store, StoreConfig::default());
    }
}

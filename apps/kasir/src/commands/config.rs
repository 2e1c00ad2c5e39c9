//! # Config Commands
//!
//! Commands for retrieving and reloading application configuration.

use std::path::PathBuf;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::error::ApiError;

/// Gets the current application configuration.
///
/// ## When Used
/// - App startup (store name in the title bar)
/// - Currency formatting (`currency_symbol` before every amount)
///
/// ## Returns
/// Complete configuration (read-only)
pub fn get_config(config: &AppConfig) -> AppConfig {
    debug!("get_config command");
    config.clone()
}

/// Re-reads configuration from `path` (or the platform location).
///
/// On success the new configuration replaces `config`. The running session
/// keeps its catalog; session settings apply to the next session.
///
/// ## Errors
/// - `CONFIG_ERROR`: unreadable file, bad TOML, or invalid values.
///   `config` is left unchanged.
pub fn reload_config(
    config: &mut AppConfig,
    path: Option<PathBuf>,
) -> Result<AppConfig, ApiError> {
    debug!(?path, "reload_config command");
    let reloaded = AppConfig::load(path)?;
    info!(store = %reloaded.store.name, "Configuration reloaded");
    *config = reloaded.clone();
    Ok(reloaded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::ThemeMode;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("{}-{}.toml", name, std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_get_config_serializes_sections() {
        let config = get_config(&AppConfig::default());
        let json = serde_json::to_value(&config).unwrap();

        assert_eq!(json["store"]["currency_symbol"], "Rp");
        assert_eq!(json["display"]["theme"], "light");
        assert_eq!(json["session"]["seed_catalog"], true);
    }

    #[test]
    fn test_reload_config_replaces_settings() {
        let path = write_temp(
            "kasir-reload-ok",
            "[store]\nname = \"Warung Bu Sri\"\n\n[display]\ntheme = \"dark\"\n",
        );
        let mut config = AppConfig::default();

        let reloaded = reload_config(&mut config, Some(path.clone())).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(reloaded.store.name, "Warung Bu Sri");
        assert_eq!(config.display.theme, ThemeMode::Dark);
    }

    #[test]
    fn test_reload_config_reports_config_error() {
        let path = write_temp("kasir-reload-bad", "[store\nname = 1");
        let mut config = AppConfig::default();

        let err = reload_config(&mut config, Some(path.clone())).unwrap_err();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(err.code, ErrorCode::ConfigError);
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_reload_config_rejects_invalid_values() {
        let path = write_temp("kasir-reload-invalid", "[session]\ntimestamp_format = \"\"\n");
        let mut config = AppConfig::default();

        let err = reload_config(&mut config, Some(path.clone())).unwrap_err();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(err.code, ErrorCode::ConfigError);
    }
}

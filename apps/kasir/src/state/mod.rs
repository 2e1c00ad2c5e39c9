//! # State Module
//!
//! Everything the host keeps alive for one screen session.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────┐  ┌──────────────────┐  ┌──────────────────┐      │
//! │  │   PosSession     │  │  DisplayState    │  │   AppConfig      │      │
//! │  │                  │  │                  │  │                  │      │
//! │  │  catalog, cart,  │  │  theme           │  │  store, session, │      │
//! │  │  ledger, undo    │  │  (cosmetic)      │  │  display         │      │
//! │  └──────────────────┘  └──────────────────┘  └──────────────────┘      │
//! │                                                                         │
//! │  Commands borrow only the part they need.                              │
//! │  Single-threaded: the presentation layer calls one command at a time.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod display;

pub use display::{DisplayState, ThemeMode};

use kasir_core::PosSession;
use tracing::info;

use crate::config::AppConfig;

#[derive(Debug)]
pub struct AppState {
    pub session: PosSession,
    pub display: DisplayState,
    pub config: AppConfig,
}

impl AppState {
    /// Builds a fresh session from `config`.
    pub fn from_config(config: AppConfig) -> Self {
        let session = PosSession::new(config.session_options());
        let display = DisplayState::new(config.display.theme);
        let theme = display.theme;

        info!(
            store = %config.store.name,
            products = session.catalog().len(),
            theme = %theme,
            "State initialized"
        );

        AppState {
            session,
            display,
            config,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        AppState::from_config(AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_respects_settings() {
        let mut config = AppConfig::default();
        config.session.seed_catalog = false;
        config.display.theme = ThemeMode::Dark;

        let state = AppState::from_config(config);

        assert!(state.session.catalog().is_empty());
        assert_eq!(state.display.theme, ThemeMode::Dark);
    }

    #[test]
    fn test_default_state_is_seeded() {
        let state = AppState::default();
        assert_eq!(state.session.catalog().len(), 3);
    }
}

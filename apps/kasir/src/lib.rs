//! # Kasir Library
//!
//! Host layer for the Kasir point-of-sale screen: configuration, logging,
//! state ownership and the commands the presentation layer calls.
//!
//! ## Module Organization
//! ```text
//! kasir_lib/
//! ├── lib.rs          ◄─── You are here (logging & bootstrap)
//! ├── config.rs       ◄─── defaults → kasir.toml → KASIR_* env
//! ├── state/
//! │   ├── mod.rs      ◄─── AppState (session + display + config)
//! │   └── display.rs  ◄─── Theme preference
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── product.rs  ◄─── Catalog commands
//! │   ├── cart.rs     ◄─── Cart commands
//! │   ├── sale.rs     ◄─── Checkout / undo / history commands
//! │   ├── display.rs  ◄─── Theme commands
//! │   └── config.rs   ◄─── Config get/reload
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Application Startup                               │
//! │                                                                         │
//! │  1. Initialize Logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter                                │
//! │     • Default: info,kasir=debug; override with RUST_LOG                 │
//! │                                                                         │
//! │  2. Load Configuration ───────────────────────────────────────────────► │
//! │     • Falls back to defaults on any error (logged)                      │
//! │                                                                         │
//! │  3. Build AppState ───────────────────────────────────────────────────► │
//! │     • PosSession seeded with Kopi, Teh, Roti unless disabled            │
//! │     • Theme from config                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything lives in memory. Closing the app discards the session.

pub mod commands;
pub mod config;
pub mod error;
pub mod state;

use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::AppConfig;
use state::AppState;

/// Initializes logging, loads configuration and builds the state.
///
/// `config_path` overrides the platform config location.
pub fn bootstrap(config_path: Option<PathBuf>) -> AppState {
    init_tracing();

    info!("Starting Kasir POS");

    let config = AppConfig::load_or_default(config_path);
    AppState::from_config(config)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=kasir_core=trace` - Show trace for the business core only
/// - Default: INFO, DEBUG for kasir crates
///
/// Calling it twice is harmless: the second subscriber is not installed.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,kasir=debug"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

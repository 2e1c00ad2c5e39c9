//! # Commands Module
//!
//! Every operation the presentation layer can invoke.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── product.rs  ◄─── Catalog list/search, add, edit, delete request
//! ├── cart.rs     ◄─── Cart add/remove
//! ├── sale.rs     ◄─── Checkout, confirmations, undo, history
//! ├── display.rs  ◄─── Theme toggle
//! └── config.rs   ◄─── Configuration retrieval and reload
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Presentation layer                                                     │
//! │  ──────────────────                                                     │
//! │  user taps "Tambah ke Keranjang" on Kopi                                │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  commands::cart::add_to_cart(&mut state.session, "1")                  │
//! │         │                                                               │
//! │         │ (PosSession enforces the rules)                               │
//! │         ▼                                                               │
//! │  Result<CartResponse, ApiError>                                         │
//! │         │                                                               │
//! │         │ (serde_json)                                                  │
//! │         ▼                                                               │
//! │  { items: [...], totals: { lineCount: 1, total: 10000 } }               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection
//! Each command borrows only the part of [`crate::state::AppState`] it needs:
//! ```rust,ignore
//! // Only needs the session
//! fn get_cart(session: &PosSession)
//!
//! // Only needs the display preference
//! fn toggle_theme(display: &mut DisplayState)
//!
//! // Only needs the config
//! fn get_config(config: &AppConfig)
//! ```

pub mod cart;
pub mod config;
pub mod display;
pub mod product;
pub mod sale;

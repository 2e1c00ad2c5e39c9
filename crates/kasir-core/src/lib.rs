//! # kasir-core: Pure Business Logic for Kasir POS
//!
//! Everything a single-screen shop register needs: a product catalog, a cart,
//! checkout into a transaction history, and a one-step undo. All state lives
//! in memory for the life of a [`PosSession`].
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Kasir POS Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Presentation layer                           │   │
//! │  │    Product list ──► Cart ──► Pay prompt ──► History            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands / snapshots / events          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    apps/kasir (commands, config)               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ kasir-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌──────────────┐   │   │
//! │  │   │ catalog  │  │   cart   │  │  ledger  │  │   session    │   │   │
//! │  │   │  CRUD    │  │  lines   │  │ history  │  │ edit/confirm │   │   │
//! │  │   │  search  │  │  total   │  │ undo slot│  │    events    │   │   │
//! │  │   └──────────┘  └──────────┘  └──────────┘  └──────────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • NO NETWORK                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product and Transaction
//! - [`money`] - Integer money in minor units
//! - [`error`] - Validation and precondition errors
//! - [`validation`] - Form field rules
//! - [`catalog`], [`cart`], [`ledger`] - The three collections
//! - [`edit`] - Product edit state machine
//! - [`confirm`] - Two-phase confirmation protocol
//! - [`events`] - Change notifications
//! - [`session`] - The session that ties it together
//!
//! ## Example Usage
//!
//! ```rust
//! use kasir_core::{Choice, Outcome, PosSession};
//!
//! let mut session = PosSession::default(); // seeded: Kopi, Teh, Roti
//! session.add_to_cart_by_id("1").unwrap();
//! session.add_to_cart_by_id("2").unwrap();
//!
//! let prompt = session.request_checkout().unwrap();
//! let Outcome::CheckedOut(transaction) = session.respond(Choice::Confirm).unwrap() else {
//!     unreachable!()
//! };
//! assert_eq!(transaction.total.minor(), 18_000);
//! assert!(session.cart().is_empty());
//!
//! session.undo_last_transaction().unwrap();
//! assert_eq!(session.cart().len(), 2);
//! # let _ = prompt;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod confirm;
pub mod edit;
pub mod error;
pub mod events;
pub mod ledger;
pub mod money;
pub mod session;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::Cart;
pub use catalog::Catalog;
pub use confirm::{Choice, ConfirmationKind, ConfirmationRequest, Outcome};
pub use edit::{EditDraft, EditState};
pub use error::{CoreError, CoreResult, PreconditionError, ValidationError};
pub use events::SessionEvent;
pub use ledger::Ledger;
pub use money::Money;
pub use session::{PosSession, ProductForm, SessionOptions, SessionSnapshot, UndoReport};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Day-first local date and time, e.g. `16/10/2026, 14:05:09`.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

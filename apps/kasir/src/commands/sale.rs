//! # Sale Commands
//!
//! Checkout, confirmation answers, undo and history.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Checkout Flow                                        │
//! │                                                                         │
//! │  request_checkout ──► cart empty? ──yes──► PRECONDITION_FAILED          │
//! │         │                                                               │
//! │         ▼ no                                                            │
//! │  ConfirmationRequest::Checkout { total, lineCount }                     │
//! │         │                                                               │
//! │         │  (UI shows "Konfirmasi checkout total Rp35000?")              │
//! │         ▼                                                               │
//! │  respond_confirmation(confirm) ──► Transaction at top of history,       │
//! │         │                          cart emptied, undo slot set          │
//! │         │                                                               │
//! │  respond_confirmation(cancel)  ──► nothing changes                      │
//! │                                                                         │
//! │  undo_last_transaction ──► lines appended back to cart,                 │
//! │                            transaction removed from history             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! While a confirmation is open every mutating command answers
//! `PRECONDITION_FAILED`.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ApiError;
use kasir_core::{
    Choice, ConfirmationRequest, Outcome, PosSession, SessionSnapshot, Transaction, UndoReport,
};

/// Checkout history, newest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryResponse {
    pub transactions: Vec<Transaction>,
    pub can_undo: bool,
}

/// Opens a checkout confirmation for the current cart.
///
/// ## Errors
/// - `PRECONDITION_FAILED`: empty cart, or another confirmation pending
pub fn request_checkout(session: &mut PosSession) -> Result<ConfirmationRequest, ApiError> {
    debug!("request_checkout command");
    Ok(session.request_checkout()?)
}

/// Answers the pending confirmation (delete or checkout).
///
/// ## Errors
/// - `PRECONDITION_FAILED`: nothing is pending
pub fn respond_confirmation(session: &mut PosSession, choice: Choice) -> Result<Outcome, ApiError> {
    debug!(?choice, "respond_confirmation command");
    let outcome = session.respond(choice)?;

    if let Outcome::CheckedOut(transaction) = &outcome {
        info!(
            transaction_id = %transaction.id,
            total = %transaction.total,
            items = transaction.item_count(),
            "Checkout completed via command"
        );
    }
    Ok(outcome)
}

/// Reverses the most recent checkout.
///
/// Only one step back: after an undo, the older transactions stay put.
///
/// ## Errors
/// - `PRECONDITION_FAILED`: nothing to undo, or a confirmation pending
pub fn undo_last_transaction(session: &mut PosSession) -> Result<UndoReport, ApiError> {
    debug!("undo_last_transaction command");
    Ok(session.undo_last_transaction()?)
}

pub fn get_history(session: &PosSession) -> HistoryResponse {
    debug!("get_history command");
    HistoryResponse {
        transactions: session.ledger().transactions().to_vec(),
        can_undo: session.can_undo(),
    }
}

/// Everything the screen needs to redraw itself in one value.
pub fn get_snapshot(session: &PosSession) -> SessionSnapshot {
    debug!("get_snapshot command");
    session.snapshot()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{cart, product};
    use crate::error::ErrorCode;
    use kasir_core::{Money, SessionOptions};

    fn seeded() -> PosSession {
        PosSession::new(SessionOptions::default())
    }

    fn checkout(session: &mut PosSession) -> Transaction {
        request_checkout(session).unwrap();
        match respond_confirmation(session, Choice::Confirm).unwrap() {
            Outcome::CheckedOut(transaction) => transaction,
            other => panic!("expected checkout, got {:?}", other),
        }
    }

    #[test]
    fn test_checkout_empty_cart() {
        let mut session = seeded();
        let err = request_checkout(&mut session).unwrap_err();
        assert_eq!(err.code, ErrorCode::PreconditionFailed);
        assert!(get_history(&session).transactions.is_empty());
    }

    #[test]
    fn test_checkout_prompt_carries_total() {
        let mut session = seeded();
        cart::add_to_cart(&mut session, "1".into()).unwrap();
        cart::add_to_cart(&mut session, "3".into()).unwrap();

        let request = request_checkout(&mut session).unwrap();
        assert_eq!(
            request,
            ConfirmationRequest::Checkout {
                total: Money::from_minor(25000),
                line_count: 2,
            }
        );
    }

    #[test]
    fn test_cancelled_checkout_changes_nothing() {
        let mut session = seeded();
        cart::add_to_cart(&mut session, "2".into()).unwrap();

        request_checkout(&mut session).unwrap();
        let outcome = respond_confirmation(&mut session, Choice::Cancel).unwrap();

        assert_eq!(outcome, Outcome::Cancelled);
        assert_eq!(cart::get_cart(&session).items.len(), 1);
        assert!(get_history(&session).transactions.is_empty());
    }

    #[test]
    fn test_checkout_then_undo() {
        let mut session = seeded();
        cart::add_to_cart(&mut session, "1".into()).unwrap();
        cart::add_to_cart(&mut session, "2".into()).unwrap();

        let transaction = checkout(&mut session);
        assert_eq!(transaction.total, Money::from_minor(18000));
        assert!(cart::get_cart(&session).items.is_empty());

        let history = get_history(&session);
        assert_eq!(history.transactions.len(), 1);
        assert!(history.can_undo);

        let report = undo_last_transaction(&mut session).unwrap();
        assert_eq!(report.transaction_id, transaction.id);
        assert_eq!(report.restored_lines, 2);
        assert_eq!(cart::get_cart(&session).totals.total, Money::from_minor(18000));

        let history = get_history(&session);
        assert!(history.transactions.is_empty());
        assert!(!history.can_undo);

        let err = undo_last_transaction(&mut session).unwrap_err();
        assert_eq!(err.code, ErrorCode::PreconditionFailed);
    }

    #[test]
    fn test_undo_is_one_level_deep() {
        let mut session = seeded();
        cart::add_to_cart(&mut session, "1".into()).unwrap();
        let first = checkout(&mut session);
        cart::add_to_cart(&mut session, "3".into()).unwrap();
        checkout(&mut session);

        undo_last_transaction(&mut session).unwrap();

        let history = get_history(&session);
        assert_eq!(history.transactions, vec![first]);
        assert!(!history.can_undo);
    }

    #[test]
    fn test_confirmed_delete() {
        let mut session = seeded();
        product::request_delete(&mut session, "2".into()).unwrap();

        let outcome = respond_confirmation(&mut session, Choice::Confirm).unwrap();
        match outcome {
            Outcome::ProductDeleted(Some(deleted)) => assert_eq!(deleted.name, "Teh"),
            other => panic!("expected deletion, got {:?}", other),
        }
        assert_eq!(session.catalog().len(), 2);
    }

    #[test]
    fn test_pending_prompt_blocks_cart() {
        let mut session = seeded();
        product::request_delete(&mut session, "1".into()).unwrap();

        let err = cart::add_to_cart(&mut session, "1".into()).unwrap_err();
        assert_eq!(err.code, ErrorCode::PreconditionFailed);

        respond_confirmation(&mut session, Choice::Cancel).unwrap();
        assert!(cart::add_to_cart(&mut session, "1".into()).is_ok());
    }

    #[test]
    fn test_respond_without_prompt() {
        let mut session = seeded();
        let err = respond_confirmation(&mut session, Choice::Confirm).unwrap_err();
        assert_eq!(err.code, ErrorCode::PreconditionFailed);
    }

    #[test]
    fn test_snapshot_flags() {
        let mut session = seeded();
        let snapshot = get_snapshot(&session);
        assert!(!snapshot.can_checkout);
        assert!(!snapshot.can_undo);
        assert_eq!(snapshot.products.len(), 3);

        cart::add_to_cart(&mut session, "1".into()).unwrap();
        request_checkout(&mut session).unwrap();
        let snapshot = get_snapshot(&session);
        assert!(snapshot.pending_confirmation.is_some());
    }
}

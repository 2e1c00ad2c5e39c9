//! # Confirmation Protocol
//!
//! Destructive and committing actions ask the user first. The session models
//! a modal prompt as two calls instead of a blocking dialog:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  request_checkout() ──► ConfirmationRequest::Checkout { total, .. }    │
//! │        │                        │                                      │
//! │        │               UI shows the prompt                             │
//! │        ▼                        ▼                                      │
//! │  respond(Choice::Confirm) ──► Outcome::CheckedOut(transaction)         │
//! │  respond(Choice::Cancel)  ──► Outcome::Cancelled (nothing changed)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! While a request is pending the session refuses every other mutation.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Product, Transaction};

/// The prompt the presentation layer must show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "camelCase")]
#[ts(export)]
pub enum ConfirmationRequest {
    /// "Really delete this product?"
    #[serde(rename_all = "camelCase")]
    DeleteProduct {
        product_id: String,
        /// `None` when the id is not in the catalog; confirming is then a no-op.
        product_name: Option<String>,
    },

    /// "Pay this total?"
    #[serde(rename_all = "camelCase")]
    Checkout { total: Money, line_count: usize },
}

impl ConfirmationRequest {
    pub fn kind(&self) -> ConfirmationKind {
        match self {
            ConfirmationRequest::DeleteProduct { .. } => ConfirmationKind::DeleteProduct,
            ConfirmationRequest::Checkout { .. } => ConfirmationKind::Checkout,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ConfirmationKind {
    DeleteProduct,
    Checkout,
}

impl fmt::Display for ConfirmationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfirmationKind::DeleteProduct => write!(f, "delete product"),
            ConfirmationKind::Checkout => write!(f, "checkout"),
        }
    }
}

/// The user's answer to a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Choice {
    Cancel,
    Confirm,
}

/// What answering a prompt did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "outcome", content = "value", rename_all = "camelCase")]
#[ts(export)]
pub enum Outcome {
    /// The user declined. No state changed.
    Cancelled,

    /// Delete confirmed. Holds the removed product, `None` if it was
    /// already gone.
    ProductDeleted(Option<Product>),

    /// Checkout confirmed. Holds the recorded transaction.
    CheckedOut(Transaction),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_kind() {
        let request = ConfirmationRequest::Checkout {
            total: Money::from_minor(18_000),
            line_count: 2,
        };
        assert_eq!(request.kind(), ConfirmationKind::Checkout);
        assert_eq!(request.kind().to_string(), "checkout");

        let request = ConfirmationRequest::DeleteProduct {
            product_id: "1".to_string(),
            product_name: Some("Kopi".to_string()),
        };
        assert_eq!(request.kind(), ConfirmationKind::DeleteProduct);
    }

    #[test]
    fn test_request_json_shape() {
        let request = ConfirmationRequest::Checkout {
            total: Money::from_minor(18_000),
            line_count: 2,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"kind": "checkout", "total": 18000, "lineCount": 2})
        );
    }
}

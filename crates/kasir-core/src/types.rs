//! # Domain Types
//!
//! The two records the session stores: products and transactions.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐          ┌──────────────────────────┐             │
//! │  │    Product      │  copied  │      Transaction         │             │
//! │  │  ─────────────  │ ───────► │  ──────────────────────  │             │
//! │  │  id             │  at sale │  id                      │             │
//! │  │  name           │          │  items: Vec<Product>     │             │
//! │  │  price          │          │  total (stored)          │             │
//! │  └─────────────────┘          │  timestamp               │             │
//! │                               └──────────────────────────┘             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! Cart lines and transaction items are owned clones of a `Product`, never
//! references into the catalog. Editing or deleting a catalog entry leaves
//! every copy alone.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::money::Money;

/// Generates a fresh product or transaction id.
///
/// UUID v7 carries the creation time in its leading bits and stays unique
/// for ids minted inside the same millisecond.
pub fn new_id() -> String {
    Uuid::now_v7().to_string()
}

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique within the catalog. Never changes after creation.
    pub id: String,

    /// Display name shown to the cashier.
    pub name: String,

    /// Price in minor currency units.
    pub price: Money,
}

impl Product {
    /// Creates a product with a freshly generated id.
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        Product {
            id: new_id(),
            name: name.into(),
            price,
        }
    }

    /// Creates a product with a caller-chosen id (seed data, tests).
    pub fn with_id(id: impl Into<String>, name: impl Into<String>, price: Money) -> Self {
        Product {
            id: id.into(),
            name: name.into(),
            price,
        }
    }
}

// =============================================================================
// Transaction
// =============================================================================

/// A completed sale.
///
/// `total` is fixed at checkout. Nothing recomputes it afterwards, so later
/// catalog price changes never rewrite history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Transaction {
    pub id: String,

    /// Cart lines at the moment of checkout. Never empty.
    pub items: Vec<Product>,

    /// Sum of `items[].price` at checkout.
    pub total: Money,

    /// Wall-clock time of checkout, already rendered for display.
    pub timestamp: String,

    /// Machine-readable checkout time.
    #[ts(as = "String")]
    pub completed_at: DateTime<Utc>,
}

impl Transaction {
    /// Number of lines in the sale.
    #[inline]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ids_are_unique() {
        let a = Product::new("Kopi", Money::from_minor(10_000));
        let b = Product::new("Kopi", Money::from_minor(10_000));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_ids_minted_back_to_back_sort_in_creation_order() {
        let ids: Vec<String> = (0..50).map(|_| new_id()).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_product_copy_is_independent() {
        let mut original = Product::with_id("1", "Kopi", Money::from_minor(10_000));
        let copy = original.clone();

        original.name = "Kopi Susu".to_string();
        original.price = Money::from_minor(12_000);

        assert_eq!(copy.name, "Kopi");
        assert_eq!(copy.price.minor(), 10_000);
    }

    #[test]
    fn test_product_json_shape() {
        let product = Product::with_id("2", "Teh", Money::from_minor(8_000));
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json, serde_json::json!({"id": "2", "name": "Teh", "price": 8000}));
    }
}

//! # Ledger
//!
//! History of completed transactions plus the one-step undo slot.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Ledger and Undo Slot                                 │
//! │                                                                         │
//! │  record(T1)   ledger: [T1]          undo slot: T1                      │
//! │  record(T2)   ledger: [T2, T1]      undo slot: T2   (T1 now permanent) │
//! │  take_undo()  ledger: [T1]          undo slot: -    (T2 handed back)   │
//! │  take_undo()  → None                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The slot stores only the id. The transaction itself always lives in the
//! ledger, which is how the slot can never point at a removed transaction.

use serde::{Deserialize, Serialize};

use crate::types::Transaction;

/// Completed transactions, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    undo_slot: Option<String>,
}

impl Ledger {
    pub fn new() -> Self {
        Ledger::default()
    }

    /// Prepends `transaction` and makes it the undo candidate.
    ///
    /// Any previous undo candidate stays in history but can no longer be
    /// undone.
    pub fn record(&mut self, transaction: Transaction) {
        debug_assert!(!transaction.items.is_empty(), "empty transaction");
        self.undo_slot = Some(transaction.id.clone());
        self.transactions.insert(0, transaction);
    }

    /// The transaction an undo would reverse, if any.
    pub fn undo_candidate(&self) -> Option<&Transaction> {
        let id = self.undo_slot.as_deref()?;
        self.get(id)
    }

    /// Removes the undo candidate from history and clears the slot.
    pub fn take_undo(&mut self) -> Option<Transaction> {
        let id = self.undo_slot.take()?;
        let index = self.transactions.iter().position(|t| t.id == id)?;
        Some(self.transactions.remove(index))
    }

    pub fn get(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Newest first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        self.undo_slot.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::Product;
    use chrono::Utc;

    fn transaction(id: &str, prices: &[i64]) -> Transaction {
        let items: Vec<Product> = prices
            .iter()
            .enumerate()
            .map(|(i, p)| Product::with_id(i.to_string(), "Item", Money::from_minor(*p)))
            .collect();
        Transaction {
            id: id.to_string(),
            total: items.iter().map(|p| p.price).sum(),
            items,
            timestamp: "16/10/2026, 09:00:00".to_string(),
            completed_at: Utc::now(),
        }
    }

    #[test]
    fn test_record_is_newest_first() {
        let mut ledger = Ledger::new();
        ledger.record(transaction("t1", &[100]));
        ledger.record(transaction("t2", &[200]));

        let ids: Vec<&str> = ledger.transactions().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["t2", "t1"]);
    }

    #[test]
    fn test_second_record_overwrites_undo_slot() {
        let mut ledger = Ledger::new();
        ledger.record(transaction("t1", &[100]));
        ledger.record(transaction("t2", &[200]));

        assert_eq!(ledger.undo_candidate().unwrap().id, "t2");

        let undone = ledger.take_undo().unwrap();
        assert_eq!(undone.id, "t2");
        assert!(!ledger.can_undo());
        assert!(ledger.take_undo().is_none());

        // t1 is permanent
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.transactions()[0].id, "t1");
    }

    #[test]
    fn test_empty_ledger() {
        let mut ledger = Ledger::new();
        assert!(ledger.is_empty());
        assert!(!ledger.can_undo());
        assert!(ledger.undo_candidate().is_none());
        assert!(ledger.take_undo().is_none());
    }
}

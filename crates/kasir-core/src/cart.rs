//! # Cart
//!
//! The in-progress, uncommitted selection for the current sale.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Frontend Action          Session call             Cart change          │
//! │  ───────────────          ────────────             ───────────          │
//! │                                                                         │
//! │  Tap product ────────────► add_to_cart() ─────────► lines.push(copy)   │
//! │                                                                         │
//! │  Tap "remove" on line i ─► remove_from_cart(i) ───► lines.remove(i)    │
//! │                                                                         │
//! │  Confirm checkout ───────► (ledger) ──────────────► take_lines()       │
//! │                                                                         │
//! │  Undo ───────────────────► (ledger) ──────────────► restore(items)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Lines are independent copies; the same product may appear many times
//! - Removal is by position, so only that one occurrence goes away
//! - The total is summed on every read and never cached

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::Product;

/// Ordered list of product copies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<Product>,
}

impl Cart {
    pub fn new() -> Self {
        Cart::default()
    }

    /// Appends a copy of `product`. Always succeeds.
    pub fn add(&mut self, product: &Product) {
        self.lines.push(product.clone());
    }

    /// Removes exactly the line at `index`, shifting later lines left.
    ///
    /// # Panics
    /// If `index >= self.len()`. An out-of-range index means the caller is
    /// rendering a stale cart, which is a bug rather than user error.
    pub fn remove(&mut self, index: usize) -> Product {
        assert!(
            index < self.lines.len(),
            "cart index {} out of range for {} lines",
            index,
            self.lines.len()
        );
        self.lines.remove(index)
    }

    /// Sum of all line prices. Zero for an empty cart.
    pub fn total(&self) -> Money {
        self.lines.iter().map(|line| line.price).sum()
    }

    /// Empties the cart, handing back its lines in order.
    pub fn take_lines(&mut self) -> Vec<Product> {
        std::mem::take(&mut self.lines)
    }

    /// Appends `items` after the existing lines.
    pub fn restore(&mut self, items: impl IntoIterator<Item = Product>) {
        self.lines.extend(items);
    }

    pub fn lines(&self) -> &[Product] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn product(id: &str, price: i64) -> Product {
        Product::with_id(id, format!("Product {}", id), Money::from_minor(price))
    }

    #[test]
    fn test_empty_cart_total_is_zero() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert!(cart.total().is_zero());
    }

    #[test]
    fn test_add_allows_duplicates() {
        let mut cart = Cart::new();
        let kopi = product("1", 10_000);

        cart.add(&kopi);
        cart.add(&kopi);

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total().minor(), 20_000);
    }

    #[test]
    fn test_remove_takes_only_that_occurrence() {
        let mut cart = Cart::new();
        let kopi = product("1", 10_000);
        let teh = product("2", 8_000);

        cart.add(&kopi);
        cart.add(&teh);
        cart.add(&kopi);

        let removed = cart.remove(0);

        assert_eq!(removed.id, "1");
        let ids: Vec<&str> = cart.lines().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["2", "1"]);
        assert_eq!(cart.total().minor(), 18_000);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_remove_out_of_range_panics() {
        let mut cart = Cart::new();
        cart.add(&product("1", 100));
        cart.remove(1);
    }

    #[test]
    fn test_take_lines_empties_cart() {
        let mut cart = Cart::new();
        cart.add(&product("1", 100));
        cart.add(&product("2", 200));

        let lines = cart.take_lines();

        assert_eq!(lines.len(), 2);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_restore_appends_after_existing_lines() {
        let mut cart = Cart::new();
        cart.add(&product("3", 15_000));

        cart.restore(vec![product("1", 10_000), product("2", 8_000)]);

        let ids: Vec<&str> = cart.lines().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["3", "1", "2"]);
        assert_eq!(cart.total().minor(), 33_000);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(i64),
        Remove(usize),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0i64..1_000_000).prop_map(Op::Add),
            any::<usize>().prop_map(Op::Remove),
        ]
    }

    proptest! {
        #[test]
        fn prop_total_tracks_lines(ops in proptest::collection::vec(op(), 0..64)) {
            let mut cart = Cart::new();
            let mut model: Vec<i64> = Vec::new();

            for (n, op) in ops.into_iter().enumerate() {
                match op {
                    Op::Add(price) => {
                        cart.add(&product(&n.to_string(), price));
                        model.push(price);
                    }
                    Op::Remove(raw) => {
                        if model.is_empty() {
                            continue;
                        }
                        let index = raw % model.len();
                        cart.remove(index);
                        model.remove(index);
                    }
                }

                prop_assert_eq!(cart.total().minor(), model.iter().sum::<i64>());
                prop_assert_eq!(cart.len(), model.len());
            }
        }
    }
}

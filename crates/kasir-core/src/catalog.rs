//! # Catalog
//!
//! The list of products available for sale.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  add()      ──► push to the end (display order = insertion order)      │
//! │  update()   ──► replace name/price of the entry with a matching id     │
//! │  remove()   ──► drop the entry with a matching id (absent id = no-op)  │
//! │  search()   ──► case-insensitive substring match on name, read-only    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::Product;
use crate::validation::normalize_search_query;

/// Products offered when a session starts with a seeded catalog.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product::with_id("1", "Kopi", Money::from_minor(10_000)),
        Product::with_id("2", "Teh", Money::from_minor(8_000)),
        Product::with_id("3", "Roti", Money::from_minor(15_000)),
    ]
}

/// Ordered product list with unique ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog::default()
    }

    /// Builds a catalog from existing products.
    ///
    /// Later duplicates of an id are dropped so ids stay unique.
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> Self {
        let mut catalog = Catalog::new();
        for product in products {
            if catalog.get(&product.id).is_none() {
                catalog.products.push(product);
            }
        }
        catalog
    }

    /// Appends a product.
    pub fn add(&mut self, product: Product) {
        debug_assert!(self.get(&product.id).is_none(), "duplicate product id");
        self.products.push(product);
    }

    /// Replaces the name and price of the product with `id`.
    ///
    /// Returns the updated product, or `None` if no entry has that id.
    pub fn update(&mut self, id: &str, name: String, price: Money) -> Option<&Product> {
        let product = self.products.iter_mut().find(|p| p.id == id)?;
        product.name = name;
        product.price = price;
        Some(product)
    }

    /// Removes the product with `id`, returning it if it was present.
    pub fn remove(&mut self, id: &str) -> Option<Product> {
        let index = self.products.iter().position(|p| p.id == id)?;
        Some(self.products.remove(index))
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products whose name contains `query`, ignoring case, in catalog order.
    ///
    /// ```rust
    /// use kasir_core::catalog::{seed_products, Catalog};
    ///
    /// let catalog = Catalog::from_products(seed_products());
    /// let names: Vec<&str> = catalog.search("o").map(|p| p.name.as_str()).collect();
    /// assert_eq!(names, ["Kopi", "Roti"]);
    /// ```
    pub fn search<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a Product> + 'a {
        let needle = normalize_search_query(query);
        self.products
            .iter()
            .filter(move |p| p.name.to_lowercase().contains(&needle))
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

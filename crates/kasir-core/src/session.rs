//! # Point-of-Sale Session
//!
//! [`PosSession`] owns all screen state and is the only way to change it.
//!
//! ## State Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           PosSession                                    │
//! │                                                                         │
//! │  ┌──────────────┐ ┌──────────────┐ ┌──────────────────────────────┐    │
//! │  │   Catalog    │ │    Cart      │ │ Ledger (+ one-step undo slot)│    │
//! │  └──────────────┘ └──────────────┘ └──────────────────────────────┘    │
//! │                                                                         │
//! │  ┌──────────────┐ ┌──────────────┐ ┌──────────────────────────────┐    │
//! │  │ ProductForm  │ │  EditState   │ │ pending ConfirmationRequest  │    │
//! │  │ search query │ │              │ │                              │    │
//! │  └──────────────┘ └──────────────┘ └──────────────────────────────┘    │
//! │                                                                         │
//! │  every successful mutation ──► EventBus ──► subscribers redraw         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Semantics
//! An operation that returns `Err` has changed nothing and emitted nothing.

use std::fmt::Write as _;
use std::sync::mpsc::Receiver;

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use ts_rs::TS;

use crate::cart::Cart;
use crate::catalog::{seed_products, Catalog};
use crate::confirm::{Choice, ConfirmationRequest, Outcome};
use crate::edit::{EditDraft, EditState};
use crate::error::{CoreResult, PreconditionError};
use crate::events::{EventBus, SessionEvent};
use crate::ledger::Ledger;
use crate::money::Money;
use crate::types::{new_id, Product, Transaction};
use crate::validation::validate_product_input;
use crate::DEFAULT_TIMESTAMP_FORMAT;

// =============================================================================
// Options
// =============================================================================

/// How a session starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// Start with the demo catalog instead of an empty one.
    pub seed_catalog: bool,

    /// `strftime` pattern for transaction timestamps, in local time.
    pub timestamp_format: String,
}

impl Default for SessionOptions {
    fn default() -> Self {
        SessionOptions {
            seed_catalog: true,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

// =============================================================================
// Form and Report Types
// =============================================================================

/// The "new product" input fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductForm {
    pub name: String,
    pub price_text: String,
}

/// Result of a successful undo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UndoReport {
    pub transaction_id: String,
    pub restored_lines: usize,
    pub total: Money,
}

/// Everything a redraw needs, in one serializable value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SessionSnapshot {
    /// Catalog filtered by the current search query.
    pub products: Vec<Product>,
    pub cart: Vec<Product>,
    pub cart_total: Money,
    /// Newest first.
    pub transactions: Vec<Transaction>,
    pub new_product: ProductForm,
    pub search_query: String,
    pub editing: Option<EditDraft>,
    pub pending_confirmation: Option<ConfirmationRequest>,
    pub can_checkout: bool,
    pub can_undo: bool,
}

// =============================================================================
// Session
// =============================================================================

#[derive(Debug)]
pub struct PosSession {
    catalog: Catalog,
    cart: Cart,
    ledger: Ledger,
    edit: EditState,
    new_product: ProductForm,
    search_query: String,
    pending: Option<ConfirmationRequest>,
    timestamp_format: String,
    events: EventBus,
}

impl Default for PosSession {
    fn default() -> Self {
        PosSession::new(SessionOptions::default())
    }
}

impl PosSession {
    pub fn new(options: SessionOptions) -> Self {
        let catalog = if options.seed_catalog {
            Catalog::from_products(seed_products())
        } else {
            Catalog::new()
        };
        debug!(products = catalog.len(), "Session started");

        PosSession {
            catalog,
            cart: Cart::new(),
            ledger: Ledger::new(),
            edit: EditState::Idle,
            new_product: ProductForm::default(),
            search_query: String::new(),
            pending: None,
            timestamp_format: options.timestamp_format,
            events: EventBus::new(),
        }
    }

    /// Starts an empty session with a given catalog.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let mut session = PosSession::new(SessionOptions {
            seed_catalog: false,
            ..SessionOptions::default()
        });
        session.catalog = Catalog::from_products(products);
        session
    }

    /// Registers an observer. See [`crate::events`].
    pub fn subscribe(&mut self) -> Receiver<SessionEvent> {
        self.events.subscribe()
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    pub fn set_new_product_name(&mut self, name: impl Into<String>) {
        self.new_product.name = name.into();
        self.events.emit(SessionEvent::InputChanged);
    }

    pub fn set_new_product_price(&mut self, price_text: impl Into<String>) {
        self.new_product.price_text = price_text.into();
        self.events.emit(SessionEvent::InputChanged);
    }

    /// Validates the inputs and appends a new product.
    ///
    /// On success the "new product" form is cleared. On failure nothing
    /// changes, including the form, so the user can fix the input.
    pub fn add_product(&mut self, name: &str, price_text: &str) -> CoreResult<Product> {
        self.ensure_no_pending()?;

        let (name, price) = validate_product_input(name, price_text).map_err(|e| {
            warn!(error = %e, "Rejected new product");
            e
        })?;

        let product = Product::new(name, price);
        self.catalog.add(product.clone());
        self.new_product = ProductForm::default();

        info!(id = %product.id, name = %product.name, price = %product.price, "Product added");
        self.events.emit(SessionEvent::ProductAdded {
            id: product.id.clone(),
        });
        Ok(product)
    }

    /// [`add_product`](Self::add_product) using the session's form fields.
    pub fn submit_new_product(&mut self) -> CoreResult<Product> {
        let form = self.new_product.clone();
        self.add_product(&form.name, &form.price_text)
    }

    /// Loads the product's current values into the edit draft.
    ///
    /// Replaces any draft already in progress. Returns `None` (and stays in
    /// the current state) when `id` is not in the catalog.
    pub fn start_editing(&mut self, id: &str) -> CoreResult<Option<&EditDraft>> {
        self.ensure_no_pending()?;

        let Some(product) = self.catalog.get(id) else {
            debug!(id, "start_editing: product not in catalog");
            return Ok(None);
        };
        self.edit.start(product);

        self.events.emit(SessionEvent::EditStarted { id: id.to_string() });
        Ok(self.edit.draft())
    }

    pub fn set_edit_name(&mut self, name: impl Into<String>) -> CoreResult<()> {
        let draft = self.edit.draft_mut().ok_or(PreconditionError::NotEditing)?;
        draft.name = name.into();
        self.events.emit(SessionEvent::InputChanged);
        Ok(())
    }

    pub fn set_edit_price(&mut self, price_text: impl Into<String>) -> CoreResult<()> {
        let draft = self.edit.draft_mut().ok_or(PreconditionError::NotEditing)?;
        draft.price_text = price_text.into();
        self.events.emit(SessionEvent::InputChanged);
        Ok(())
    }

    /// Writes the draft back to the catalog and returns to `Idle`.
    ///
    /// The draft goes through the same validation as a new product. If it
    /// fails, the session stays in `Editing` with the draft intact. If the
    /// target was deleted meanwhile the save is a no-op returning `None`.
    pub fn save_edit(&mut self) -> CoreResult<Option<Product>> {
        self.ensure_no_pending()?;

        let draft = self.edit.draft().ok_or(PreconditionError::NotEditing)?;
        let (name, price) = validate_product_input(&draft.name, &draft.price_text).map_err(|e| {
            warn!(error = %e, id = %draft.target_id, "Rejected product edit");
            e
        })?;

        let Some(draft) = self.edit.finish() else {
            return Err(PreconditionError::NotEditing.into());
        };
        let updated = self.catalog.update(&draft.target_id, name, price).cloned();

        match &updated {
            Some(product) => {
                info!(id = %product.id, name = %product.name, price = %product.price, "Product updated");
                self.events.emit(SessionEvent::ProductUpdated {
                    id: product.id.clone(),
                });
            }
            None => debug!(id = %draft.target_id, "Edited product no longer in catalog"),
        }
        self.events.emit(SessionEvent::EditEnded);
        Ok(updated)
    }

    /// Discards the draft. The catalog is untouched.
    pub fn cancel_edit(&mut self) -> CoreResult<()> {
        self.edit.finish().ok_or(PreconditionError::NotEditing)?;
        self.events.emit(SessionEvent::EditEnded);
        Ok(())
    }

    /// Asks for confirmation before deleting the product with `id`.
    pub fn request_delete(&mut self, id: &str) -> CoreResult<ConfirmationRequest> {
        self.ensure_no_pending()?;

        let request = ConfirmationRequest::DeleteProduct {
            product_id: id.to_string(),
            product_name: self.catalog.get(id).map(|p| p.name.clone()),
        };
        Ok(self.open_confirmation(request))
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.events.emit(SessionEvent::InputChanged);
    }

    /// Catalog entries matching `query`, case-insensitively, in catalog order.
    pub fn search(&self, query: &str) -> Vec<&Product> {
        self.catalog.search(query).collect()
    }

    /// Catalog entries matching the current search query.
    pub fn visible_products(&self) -> Vec<&Product> {
        self.search(&self.search_query)
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Appends a copy of `product` to the cart.
    pub fn add_to_cart(&mut self, product: &Product) -> CoreResult<()> {
        self.ensure_no_pending()?;
        self.cart.add(product);
        debug!(id = %product.id, lines = self.cart.len(), "Added to cart");
        self.emit_cart_changed();
        Ok(())
    }

    /// Appends a copy of the catalog entry with `id`.
    ///
    /// Returns `false` when the id is not in the catalog.
    pub fn add_to_cart_by_id(&mut self, id: &str) -> CoreResult<bool> {
        self.ensure_no_pending()?;
        let Some(product) = self.catalog.get(id).cloned() else {
            return Ok(false);
        };
        self.add_to_cart(&product)?;
        Ok(true)
    }

    /// Removes exactly the cart line at `index`.
    ///
    /// # Panics
    /// If `index` is out of range. See [`Cart::remove`].
    pub fn remove_from_cart(&mut self, index: usize) -> CoreResult<Product> {
        self.ensure_no_pending()?;
        let removed = self.cart.remove(index);
        debug!(index, id = %removed.id, "Removed from cart");
        self.emit_cart_changed();
        Ok(removed)
    }

    /// Sum of the cart line prices, computed now.
    pub fn cart_total(&self) -> Money {
        self.cart.total()
    }

    // =========================================================================
    // Checkout / Ledger
    // =========================================================================

    /// Asks for confirmation of the current cart total.
    pub fn request_checkout(&mut self) -> CoreResult<ConfirmationRequest> {
        self.ensure_no_pending()?;

        if self.cart.is_empty() {
            warn!("Checkout requested with an empty cart");
            return Err(PreconditionError::CartEmpty.into());
        }

        let request = ConfirmationRequest::Checkout {
            total: self.cart.total(),
            line_count: self.cart.len(),
        };
        Ok(self.open_confirmation(request))
    }

    /// Answers the pending confirmation.
    pub fn respond(&mut self, choice: Choice) -> CoreResult<Outcome> {
        let request = self
            .pending
            .take()
            .ok_or(PreconditionError::NoPendingConfirmation)?;

        if choice == Choice::Cancel {
            debug!(kind = %request.kind(), "Confirmation cancelled");
            self.events.emit(SessionEvent::ConfirmationCancelled {
                kind: request.kind(),
            });
            return Ok(Outcome::Cancelled);
        }

        let outcome = match request {
            ConfirmationRequest::DeleteProduct { product_id, .. } => {
                Outcome::ProductDeleted(self.delete_product(&product_id))
            }
            ConfirmationRequest::Checkout { .. } => Outcome::CheckedOut(self.commit_checkout()),
        };
        Ok(outcome)
    }

    /// Puts the last checkout's items back in the cart and drops it from
    /// history.
    ///
    /// Restored items are appended after whatever is already in the cart.
    pub fn undo_last_transaction(&mut self) -> CoreResult<UndoReport> {
        self.ensure_no_pending()?;

        let Some(transaction) = self.ledger.take_undo() else {
            warn!("Undo requested with nothing to undo");
            return Err(PreconditionError::NothingToUndo.into());
        };

        let report = UndoReport {
            transaction_id: transaction.id,
            restored_lines: transaction.items.len(),
            total: transaction.total,
        };
        self.cart.restore(transaction.items);

        info!(
            transaction_id = %report.transaction_id,
            restored_lines = report.restored_lines,
            "Transaction undone"
        );
        self.events.emit(SessionEvent::TransactionUndone {
            transaction_id: report.transaction_id.clone(),
            restored_lines: report.restored_lines,
        });
        self.emit_cart_changed();
        Ok(report)
    }

    // =========================================================================
    // Read Access
    // =========================================================================

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn new_product_form(&self) -> &ProductForm {
        &self.new_product
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn edit_draft(&self) -> Option<&EditDraft> {
        self.edit.draft()
    }

    pub fn is_editing(&self) -> bool {
        self.edit.is_editing()
    }

    pub fn pending_confirmation(&self) -> Option<&ConfirmationRequest> {
        self.pending.as_ref()
    }

    pub fn can_checkout(&self) -> bool {
        self.pending.is_none() && !self.cart.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        self.pending.is_none() && self.ledger.can_undo()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            products: self.visible_products().into_iter().cloned().collect(),
            cart: self.cart.lines().to_vec(),
            cart_total: self.cart.total(),
            transactions: self.ledger.transactions().to_vec(),
            new_product: self.new_product.clone(),
            search_query: self.search_query.clone(),
            editing: self.edit.draft().cloned(),
            pending_confirmation: self.pending.clone(),
            can_checkout: self.can_checkout(),
            can_undo: self.can_undo(),
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn ensure_no_pending(&self) -> CoreResult<()> {
        match &self.pending {
            Some(request) => {
                Err(PreconditionError::ConfirmationPending(request.kind().to_string()).into())
            }
            None => Ok(()),
        }
    }

    fn open_confirmation(&mut self, request: ConfirmationRequest) -> ConfirmationRequest {
        debug!(kind = %request.kind(), "Confirmation requested");
        self.pending = Some(request.clone());
        self.events.emit(SessionEvent::ConfirmationRequested {
            kind: request.kind(),
        });
        request
    }

    fn delete_product(&mut self, id: &str) -> Option<Product> {
        let removed = self.catalog.remove(id);
        match &removed {
            Some(product) => {
                info!(id = %product.id, name = %product.name, "Product deleted");
                self.events.emit(SessionEvent::ProductDeleted { id: id.to_string() });
            }
            None => debug!(id, "Delete confirmed for a product not in catalog"),
        }
        removed
    }

    fn commit_checkout(&mut self) -> Transaction {
        let completed_at = Utc::now();
        let items = self.cart.take_lines();
        let transaction = Transaction {
            id: new_id(),
            total: items.iter().map(|item| item.price).sum(),
            items,
            timestamp: render_timestamp(completed_at, &self.timestamp_format),
            completed_at,
        };
        self.ledger.record(transaction.clone());

        info!(
            transaction_id = %transaction.id,
            total = %transaction.total,
            lines = transaction.items.len(),
            "Checkout recorded"
        );
        self.events.emit(SessionEvent::CheckedOut {
            transaction_id: transaction.id.clone(),
            total: transaction.total,
        });
        self.emit_cart_changed();
        transaction
    }

    fn emit_cart_changed(&mut self) {
        self.events.emit(SessionEvent::CartChanged {
            line_count: self.cart.len(),
            total: self.cart.total(),
        });
    }
}

/// Renders `at` in local time with `format`, falling back to RFC 3339 when
/// the pattern is not a valid `strftime` string.
fn render_timestamp(at: DateTime<Utc>, format: &str) -> String {
    let mut rendered = String::new();
    if write!(rendered, "{}", at.with_timezone(&Local).format(format)).is_err() {
        warn!(format, "Invalid timestamp format");
        return at.to_rfc3339();
    }
    rendered
}

// =============================================================================
// Unit Tests
// =============================================================================

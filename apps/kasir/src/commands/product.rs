//! # Product Commands
//!
//! Catalog listing, search and maintenance.
//!
//! ## Edit Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Edit Flow                                    │
//! │                                                                         │
//! │  start_editing("2")          draft = { Teh, "8000" }                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  update_edit_draft(name: "Teh Manis", price: "9000")                   │
//! │       │                                                                 │
//! │       ├──── save_edit ────► validate ──ok──► catalog updated, Idle      │
//! │       │                        │                                        │
//! │       │                        └─err──► VALIDATION_ERROR, still Editing │
//! │       │                                                                 │
//! │       └──── cancel_edit ──► draft dropped, Idle                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Deleting is two-phase: [`request_delete`] opens a confirmation that
//! [`crate::commands::sale::respond_confirmation`] answers.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ApiError;
use kasir_core::{
    ConfirmationRequest, CoreError, EditDraft, PosSession, PreconditionError, Product, ProductForm,
};

/// Catalog listing with the query that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListResponse {
    pub query: String,
    pub products: Vec<Product>,
}

/// Partial update of a form. Absent fields are left alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormUpdate {
    pub name: Option<String>,
    pub price_text: Option<String>,
}

/// Products matching the session's current search query.
pub fn list_products(session: &PosSession) -> ProductListResponse {
    debug!(query = %session.search_query(), "list_products command");
    ProductListResponse {
        query: session.search_query().to_string(),
        products: session.visible_products().into_iter().cloned().collect(),
    }
}

/// Stores `query` as the session's search query and returns the matches.
///
/// Matching is a case-insensitive substring test on the name. An empty
/// query lists the whole catalog.
pub fn search_products(session: &mut PosSession, query: String) -> ProductListResponse {
    debug!(query = %query, "search_products command");
    session.set_search_query(query);
    list_products(session)
}

/// Adds a product from explicit values.
///
/// ## Errors
/// - `VALIDATION_ERROR`: blank name, or price text without a number
/// - `PRECONDITION_FAILED`: a confirmation is pending
pub fn add_product(
    session: &mut PosSession,
    name: String,
    price_text: String,
) -> Result<Product, ApiError> {
    debug!(name = %name, price_text = %price_text, "add_product command");
    let product = session.add_product(&name, &price_text)?;
    info!(id = %product.id, "Product created via command");
    Ok(product)
}

/// Updates the "new product" form fields.
pub fn update_new_product_form(session: &mut PosSession, update: FormUpdate) -> ProductForm {
    debug!(?update, "update_new_product_form command");
    if let Some(name) = update.name {
        session.set_new_product_name(name);
    }
    if let Some(price_text) = update.price_text {
        session.set_new_product_price(price_text);
    }
    session.new_product_form().clone()
}

/// Adds a product from the "new product" form, then clears the form.
pub fn submit_new_product(session: &mut PosSession) -> Result<Product, ApiError> {
    debug!("submit_new_product command");
    Ok(session.submit_new_product()?)
}

/// Opens the edit draft for `product_id`.
///
/// ## Errors
/// - `NOT_FOUND`: no product with that id
pub fn start_editing(session: &mut PosSession, product_id: String) -> Result<EditDraft, ApiError> {
    debug!(product_id = %product_id, "start_editing command");
    session
        .start_editing(&product_id)?
        .cloned()
        .ok_or_else(|| ApiError::not_found("Product", &product_id))
}

/// Changes the draft fields of the edit in progress.
pub fn update_edit_draft(
    session: &mut PosSession,
    update: FormUpdate,
) -> Result<EditDraft, ApiError> {
    debug!(?update, "update_edit_draft command");
    if let Some(name) = update.name {
        session.set_edit_name(name)?;
    }
    if let Some(price_text) = update.price_text {
        session.set_edit_price(price_text)?;
    }
    session
        .edit_draft()
        .cloned()
        .ok_or_else(|| CoreError::from(PreconditionError::NotEditing).into())
}

/// Saves the edit in progress.
///
/// Returns `None` when the product was deleted while it was being edited.
pub fn save_edit(session: &mut PosSession) -> Result<Option<Product>, ApiError> {
    debug!("save_edit command");
    Ok(session.save_edit()?)
}

pub fn cancel_edit(session: &mut PosSession) -> Result<(), ApiError> {
    debug!("cancel_edit command");
    Ok(session.cancel_edit()?)
}

/// Opens a delete confirmation for `product_id`.
pub fn request_delete(
    session: &mut PosSession,
    product_id: String,
) -> Result<ConfirmationRequest, ApiError> {
    debug!(product_id = %product_id, "request_delete command");
    Ok(session.request_delete(&product_id)?)
}

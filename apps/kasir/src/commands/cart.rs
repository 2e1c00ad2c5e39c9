//! # Cart Commands
//!
//! Commands for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Confirm  │────►│ Ledger   │       │
//! │  │  Cart    │     │          │     │ Prompt   │     │ Entry    │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │       ▲                │                 │                │             │
//! │       │           add_to_cart      request_checkout       │             │
//! │       │           remove_from_cart (sale.rs)              │             │
//! │       │                                                   │             │
//! │       └──────────── cart emptied on confirm ◄─────────────┘             │
//! │                     undo puts the lines back                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Lines are independent copies: adding Kopi twice gives two lines, and
//! later catalog edits never change a line already in the cart.

use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::error::ApiError;
use kasir_core::{Cart, Money, PosSession, Product};

/// Line count and running total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub line_count: usize,
    pub total: Money,
}

/// Cart response including items and totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<Product>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            items: cart.lines().to_vec(),
            totals: CartTotals {
                line_count: cart.len(),
                total: cart.total(),
            },
        }
    }
}

/// Gets the current cart contents.
///
/// ## Cart Display
/// ```text
/// ┌────────────────────────────────────────────────────────────────┐
/// │  KERANJANG                                        3 item       │
/// ├────────────────────────────────────────────────────────────────┤
/// │  Kopi                                     Rp10000   [Hapus]    │
/// │  Kopi                                     Rp10000   [Hapus]    │
/// │  Roti                                     Rp15000   [Hapus]    │
/// ├────────────────────────────────────────────────────────────────┤
/// │  TOTAL                                    Rp35000              │
/// └────────────────────────────────────────────────────────────────┘
/// ```
pub fn get_cart(session: &PosSession) -> CartResponse {
    debug!("get_cart command");
    CartResponse::from(session.cart())
}

/// Appends a copy of the catalog product to the cart.
///
/// The price is frozen at the moment of adding.
///
/// ## Errors
/// - `NOT_FOUND`: no product with that id
/// - `PRECONDITION_FAILED`: a confirmation is pending
pub fn add_to_cart(session: &mut PosSession, product_id: String) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, "add_to_cart command");

    if !session.add_to_cart_by_id(&product_id)? {
        return Err(ApiError::not_found("Product", &product_id));
    }
    Ok(get_cart(session))
}

/// Removes exactly the line at `index`, leaving identical lines alone.
///
/// ## Errors
/// - `INTERNAL`: `index` does not address a line (stale UI)
/// - `PRECONDITION_FAILED`: a confirmation is pending
pub fn remove_from_cart(session: &mut PosSession, index: usize) -> Result<CartResponse, ApiError> {
    debug!(index, "remove_from_cart command");

    let line_count = session.cart().len();
    if index >= line_count {
        error!(index, line_count, "remove_from_cart with stale index");
        return Err(ApiError::internal(format!(
            "Cart index {} out of range ({} lines)",
            index, line_count
        )));
    }

    session.remove_from_cart(index)?;
    Ok(get_cart(session))
}

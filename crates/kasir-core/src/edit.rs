//! # Product Edit State
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │          start(product)                 save / cancel                  │
//! │   Idle ─────────────────► Editing ─────────────────────► Idle          │
//! │                             │  ▲                                        │
//! │                             └──┘ start(other): draft replaced          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only one product is edited at a time. The draft holds raw text so the
//! price field can hold anything the user types until save.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::Product;

/// Editable copy of a product's fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct EditDraft {
    /// Id of the catalog entry being edited.
    pub target_id: String,
    pub name: String,
    pub price_text: String,
}

impl EditDraft {
    /// Loads a product's current values.
    pub fn from_product(product: &Product) -> Self {
        EditDraft {
            target_id: product.id.clone(),
            name: product.name.clone(),
            price_text: product.price.minor().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum EditState {
    #[default]
    Idle,
    Editing(EditDraft),
}

impl EditState {
    /// Enters `Editing`, silently replacing any draft in progress.
    pub fn start(&mut self, product: &Product) {
        *self = EditState::Editing(EditDraft::from_product(product));
    }

    /// Leaves `Editing`, returning the draft if there was one.
    pub fn finish(&mut self) -> Option<EditDraft> {
        match std::mem::take(self) {
            EditState::Editing(draft) => Some(draft),
            EditState::Idle => None,
        }
    }

    pub fn draft(&self) -> Option<&EditDraft> {
        match self {
            EditState::Editing(draft) => Some(draft),
            EditState::Idle => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut EditDraft> {
        match self {
            EditState::Editing(draft) => Some(draft),
            EditState::Idle => None,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EditState::Editing(_))
    }
}

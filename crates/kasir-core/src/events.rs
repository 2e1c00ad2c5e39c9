//! # Session Events
//!
//! Every successful mutation publishes a [`SessionEvent`]. The presentation
//! layer subscribes once and redraws whenever something arrives.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PosSession ── emit(event) ──┬──► Receiver (screen)                    │
//! │                              ├──► Receiver (receipt preview)           │
//! │                              ├──► full Receiver    → event skipped     │
//! │                              └──► dropped Receiver → pruned            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Delivery is in-process: `emit` never blocks and never fails. Each
//! subscriber has a queue of [`EVENT_BUFFER`] events; a subscriber that stops
//! draining misses events until it catches up.

use serde::{Deserialize, Serialize};
use std::sync::mpsc::{self, Receiver, SyncSender, TrySendError};
use tracing::debug;
use ts_rs::TS;

use crate::confirm::ConfirmationKind;
use crate::money::Money;

/// Queue capacity per subscriber.
pub const EVENT_BUFFER: usize = 128;

/// What changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "camelCase")]
#[ts(export)]
pub enum SessionEvent {
    ProductAdded { id: String },
    ProductUpdated { id: String },
    ProductDeleted { id: String },
    #[serde(rename_all = "camelCase")]
    CartChanged { line_count: usize, total: Money },
    #[serde(rename_all = "camelCase")]
    CheckedOut { transaction_id: String, total: Money },
    #[serde(rename_all = "camelCase")]
    TransactionUndone {
        transaction_id: String,
        restored_lines: usize,
    },
    EditStarted { id: String },
    EditEnded,
    ConfirmationRequested { kind: ConfirmationKind },
    ConfirmationCancelled { kind: ConfirmationKind },
    /// A form field or the search query changed.
    InputChanged,
}

/// Fan-out list of subscribers.
#[derive(Debug, Default)]
pub struct EventBus {
    subscribers: Vec<SyncSender<SessionEvent>>,
}

impl EventBus {
    pub fn new() -> Self {
        EventBus::default()
    }

    /// Registers a new subscriber.
    pub fn subscribe(&mut self) -> Receiver<SessionEvent> {
        let (tx, rx) = mpsc::sync_channel(EVENT_BUFFER);
        self.subscribers.push(tx);
        rx
    }

    /// Delivers `event` to every live subscriber, dropping the dead ones.
    ///
    /// A subscriber whose queue is full skips this event.
    pub fn emit(&mut self, event: SessionEvent) {
        self.subscribers
            .retain(|tx| match tx.try_send(event.clone()) {
                Ok(()) => true,
                Err(TrySendError::Full(skipped)) => {
                    debug!(event = ?skipped, "Subscriber queue full, event skipped");
                    true
                }
                Err(TrySendError::Disconnected(_)) => false,
            });
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

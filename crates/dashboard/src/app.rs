//! The dashboard view-model: operations tying state to the backend.
//!
//! Every mutation goes to the backend first and, on success, triggers a full
//! snapshot reload; there is no optimistic local editing. Failures surface
//! as a transient notice and leave local state untouched.

use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use thiserror::Error;

use stockroom_client::{
    AnalyticsReport, ApiClient, ChatMessage, ClientError, PushEvent, QuantityChange,
};
use stockroom_core::{DomainError, ItemId};
use stockroom_inventory::{Aggregates, InventoryItem, ItemDraft};

use crate::charts::{self, ChartData};
use crate::notify::Notice;
use crate::state::{DashboardState, FilterState, ModalTarget};
use crate::view::{self, TableRow};

/// Failure of a user-initiated dashboard operation.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error(transparent)]
    Invalid(#[from] DomainError),
    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Single source of truth for the client's view of the inventory.
///
/// Shareable across tasks: operations take `&self`, state sits behind a lock
/// that is only held for non-async critical sections, and snapshot installs
/// are revision-gated so concurrent completions cannot reorder state.
pub struct Dashboard {
    client: ApiClient,
    state: RwLock<DashboardState>,
    next_revision: AtomicU64,
}

impl Dashboard {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            state: RwLock::new(DashboardState::new()),
            next_revision: AtomicU64::new(0),
        }
    }

    // ---- snapshot sources ----

    /// Fetch the full inventory and replace the local snapshot.
    ///
    /// On failure the local snapshot is left unchanged and an error notice
    /// is raised.
    pub async fn load_snapshot(&self) -> Result<(), ClientError> {
        let revision = self.begin_revision();
        match self.client.fetch_inventory().await {
            Ok(items) => {
                self.write_state(|state| {
                    state.install_snapshot(revision, items);
                });
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "inventory load failed");
                self.notice_error(format!("Failed to load inventory: {err}"));
                Err(err)
            }
        }
    }

    /// Apply an event delivered by the push channel.
    ///
    /// Snapshot deliveries are stamped at arrival, so they always supersede
    /// whatever is installed and whatever is still in flight.
    pub fn apply_push_event(&self, event: PushEvent) {
        match event {
            PushEvent::InventoryUpdate(items) => {
                let revision = self.begin_revision();
                self.write_state(|state| {
                    state.install_snapshot(revision, items);
                });
            }
            PushEvent::NewMessage(message) => {
                self.write_state(|state| state.push_message(message));
            }
        }
    }

    // ---- mutations ----

    /// Create an item. The backend assigns the id; on success the snapshot
    /// is reloaded rather than patched.
    pub async fn create_item(&self, draft: ItemDraft) -> Result<(), OperationError> {
        if let Err(err) = draft.validate() {
            self.notice_error(err.to_string());
            return Err(err.into());
        }
        match self.client.add_item(&draft).await {
            Ok(()) => {
                self.notice_success(format!("Added {}", draft.name));
                self.load_snapshot().await.ok();
                Ok(())
            }
            Err(err) => {
                self.notice_error(err.to_string());
                Err(err.into())
            }
        }
    }

    /// Overwrite the fields of an existing item.
    pub async fn update_item(&self, id: &ItemId, draft: ItemDraft) -> Result<(), OperationError> {
        if let Err(err) = draft.validate() {
            self.notice_error(err.to_string());
            return Err(err.into());
        }
        match self.client.update_item(id, &draft).await {
            Ok(()) => {
                self.notice_success(format!("Updated {}", draft.name));
                self.load_snapshot().await.ok();
                Ok(())
            }
            Err(err) => {
                self.notice_error(err.to_string());
                Err(err.into())
            }
        }
    }

    /// Set an item's quantity; the returned change carries the signed delta
    /// confirmed by the backend.
    pub async fn update_quantity(
        &self,
        id: &ItemId,
        new_quantity: u32,
    ) -> Result<QuantityChange, OperationError> {
        match self.client.update_quantity(id, new_quantity).await {
            Ok(change) => {
                self.notice_success(format!("Quantity updated ({:+})", change.delta()));
                self.load_snapshot().await.ok();
                Ok(change)
            }
            Err(err) => {
                self.notice_error(err.to_string());
                Err(err.into())
            }
        }
    }

    /// Delete an item. Destructive: callers must obtain explicit user
    /// confirmation before invoking this.
    pub async fn delete_item(&self, id: &ItemId) -> Result<(), OperationError> {
        match self.client.delete_item(id).await {
            Ok(()) => {
                self.notice_success("Item deleted");
                self.load_snapshot().await.ok();
                Ok(())
            }
            Err(err) => {
                self.notice_error(err.to_string());
                Err(err.into())
            }
        }
    }

    // ---- analytics / messages ----

    pub async fn refresh_analytics(&self) -> Result<(), ClientError> {
        match self.client.fetch_analytics().await {
            Ok(report) => {
                self.write_state(|state| state.set_analytics(report));
                Ok(())
            }
            Err(err) => {
                self.notice_error(format!("Failed to load analytics: {err}"));
                Err(err)
            }
        }
    }

    pub async fn load_messages(&self) -> Result<(), ClientError> {
        match self.client.fetch_messages().await {
            Ok(messages) => {
                self.write_state(|state| state.set_messages(messages));
                Ok(())
            }
            Err(err) => {
                self.notice_error(format!("Failed to load messages: {err}"));
                Err(err)
            }
        }
    }

    /// Send a team-chat message. The local log is not appended here; the
    /// sender's own message echoes back over the push channel like everyone
    /// else's.
    pub async fn send_message(&self, text: &str) -> Result<(), OperationError> {
        let text = text.trim();
        if text.is_empty() {
            let err = DomainError::validation("message cannot be empty");
            self.notice_error(err.to_string());
            return Err(err.into());
        }
        match self.client.send_message(text).await {
            Ok(()) => Ok(()),
            Err(err) => {
                self.notice_error(err.to_string());
                Err(err.into())
            }
        }
    }

    // ---- filters / modal ----

    pub fn set_search_term(&self, term: impl Into<String>) {
        let term = term.into();
        self.write_state(|state| state.set_search_term(term));
    }

    pub fn set_category_filter(&self, category: impl Into<String>) {
        let category = category.into();
        self.write_state(|state| state.set_category_filter(category));
    }

    pub fn filter(&self) -> FilterState {
        self.read_state(|state| state.filter().clone())
    }

    pub fn open_modal(&self, target: ModalTarget) {
        self.write_state(|state| state.open_modal(target));
    }

    pub fn close_modal(&self) {
        self.write_state(|state| state.close_modal());
    }

    pub fn modal(&self) -> ModalTarget {
        self.read_state(|state| state.modal().clone())
    }

    // ---- derived views (owned, for the shell) ----

    pub fn aggregates(&self) -> Aggregates {
        self.read_state(|state| state.aggregates())
    }

    pub fn table_rows(&self) -> Vec<TableRow> {
        self.read_state(view::table_rows)
    }

    pub fn category_chart(&self) -> ChartData {
        self.read_state(|state| charts::category_chart(state.snapshot()))
    }

    pub fn top_stock_chart(&self) -> ChartData {
        self.read_state(|state| charts::top_stock_chart(state.snapshot()))
    }

    pub fn categories(&self) -> Vec<String> {
        self.read_state(|state| state.categories())
    }

    /// Cloned item for modal prefill.
    pub fn item(&self, id: &ItemId) -> Option<InventoryItem> {
        self.read_state(|state| state.snapshot().get(id).cloned())
    }

    pub fn snapshot_revision(&self) -> u64 {
        self.read_state(|state| state.revision())
    }

    pub fn current_notice(&self) -> Option<Notice> {
        self.read_state(|state| state.notice().cloned())
    }

    pub fn clear_expired_notice(&self, now: DateTime<Utc>) {
        self.write_state(|state| state.clear_expired_notice(now));
    }

    pub fn messages(&self) -> Vec<ChatMessage> {
        self.read_state(|state| state.messages().to_vec())
    }

    pub fn analytics(&self) -> Option<AnalyticsReport> {
        self.read_state(|state| state.analytics().cloned())
    }

    // ---- internals ----

    fn begin_revision(&self) -> u64 {
        self.next_revision.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn read_state<R>(&self, f: impl FnOnce(&DashboardState) -> R) -> R {
        let guard = self.state.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&guard)
    }

    fn write_state<R>(&self, f: impl FnOnce(&mut DashboardState) -> R) -> R {
        let mut guard = self.state.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut guard)
    }

    fn notice_success(&self, text: impl Into<String>) {
        let notice = Notice::success(text, Utc::now());
        self.write_state(|state| state.raise_notice(notice));
    }

    fn notice_error(&self, text: impl Into<String>) {
        let notice = Notice::error(text, Utc::now());
        self.write_state(|state| state.raise_notice(notice));
    }
}

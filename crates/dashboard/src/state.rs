//! Explicit dashboard state.
//!
//! One value holds everything the shell reads: the installed snapshot and
//! its revision, filter selections, the modal target, the current notice,
//! the message log, and the latest backend analytics. Mutation is confined
//! to the named operations below; every view is derived on demand from the
//! snapshot plus filter input.

use chrono::{DateTime, Utc};

use stockroom_client::{AnalyticsReport, ChatMessage};
use stockroom_core::ItemId;
use stockroom_inventory::{Aggregates, InventoryItem, InventorySnapshot};

use crate::notify::Notice;

/// Which modal the user currently has open.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalTarget {
    #[default]
    Closed,
    Add,
    Edit(ItemId),
    AdjustQuantity(ItemId),
}

/// Current filter selections for the inventory table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search_term: String,
    /// Empty means "all categories".
    pub category: String,
}

/// The dashboard's entire client-side state.
#[derive(Debug, Default)]
pub struct DashboardState {
    snapshot: InventorySnapshot,
    revision: u64,
    filter: FilterState,
    modal: ModalTarget,
    notice: Option<Notice>,
    messages: Vec<ChatMessage>,
    analytics: Option<AnalyticsReport>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> &InventorySnapshot {
        &self.snapshot
    }

    /// Revision of the installed snapshot (0 before the first install).
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace the snapshot wholesale, unless something newer is already
    /// installed.
    ///
    /// Revisions are allocated when a load *starts* (push deliveries are
    /// stamped at arrival), so a slow request that completes after a newer
    /// source has landed is rejected here instead of clobbering it.
    pub fn install_snapshot(&mut self, revision: u64, items: Vec<InventoryItem>) -> bool {
        if revision <= self.revision {
            tracing::debug!(
                stale = revision,
                installed = self.revision,
                "discarding superseded snapshot"
            );
            return false;
        }
        self.snapshot = InventorySnapshot::from_items(items);
        self.revision = revision;
        true
    }

    // ---- filters ----

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.filter.search_term = term.into();
    }

    pub fn set_category_filter(&mut self, category: impl Into<String>) {
        self.filter.category = category.into();
    }

    // ---- modal ----

    pub fn modal(&self) -> &ModalTarget {
        &self.modal
    }

    pub fn open_modal(&mut self, target: ModalTarget) {
        self.modal = target;
    }

    pub fn close_modal(&mut self) {
        self.modal = ModalTarget::Closed;
    }

    // ---- notices ----

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Show a notice, replacing any currently displayed one.
    pub fn raise_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    /// Drop the current notice once its display window has passed.
    pub fn clear_expired_notice(&mut self, now: DateTime<Utc>) {
        if self.notice.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.notice = None;
        }
    }

    // ---- messages / analytics ----

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn set_messages(&mut self, messages: Vec<ChatMessage>) {
        self.messages = messages;
    }

    pub fn push_message(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn analytics(&self) -> Option<&AnalyticsReport> {
        self.analytics.as_ref()
    }

    pub fn set_analytics(&mut self, report: AnalyticsReport) {
        self.analytics = Some(report);
    }

    // ---- derived views ----

    /// Items matching the current filter selections, in snapshot order.
    pub fn visible_items(&self) -> Vec<&InventoryItem> {
        self.snapshot
            .filtered_view(&self.filter.search_term, &self.filter.category)
    }

    pub fn aggregates(&self) -> Aggregates {
        self.snapshot.aggregates()
    }

    /// The category filter vocabulary, derived from the snapshot.
    pub fn categories(&self) -> Vec<String> {
        self.snapshot.categories()
    }
}

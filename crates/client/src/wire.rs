//! Wire shapes for the backend REST contract.
//!
//! Field names and envelope conventions match the backend exactly; keep
//! these in lockstep with the server, not with internal naming taste.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockroom_core::ItemId;
use stockroom_inventory::{InventoryItem, ItemDraft};

use crate::error::ClientError;

// -------------------------
// Response payloads
// -------------------------

/// Body of `GET /api/inventory`.
#[derive(Debug, Deserialize)]
pub struct InventoryPayload {
    #[serde(default)]
    pub items: Vec<InventoryItem>,
}

/// The `{ success, error? }` envelope every mutation endpoint returns.
#[derive(Debug, Deserialize)]
pub struct CommandEnvelope {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

impl CommandEnvelope {
    /// Fold the envelope into a result, mapping `success: false` to
    /// [`ClientError::Rejected`].
    pub fn into_result(self) -> Result<(), ClientError> {
        if self.success {
            Ok(())
        } else {
            Err(ClientError::Rejected(
                self.error
                    .unwrap_or_else(|| "backend rejected the request".to_string()),
            ))
        }
    }
}

/// Body of `POST /api/update_quantity` responses.
#[derive(Debug, Deserialize)]
pub struct QuantityEnvelope {
    pub success: bool,
    #[serde(default)]
    pub old_quantity: Option<u32>,
    #[serde(default)]
    pub discrepancy: Option<i64>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Outcome of a quantity update, as confirmed by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantityChange {
    pub old_quantity: u32,
    pub new_quantity: u32,
}

impl QuantityChange {
    /// Signed difference the caller reports to the user.
    pub fn delta(&self) -> i64 {
        i64::from(self.new_quantity) - i64::from(self.old_quantity)
    }
}

/// Backend-computed analytics from `GET /api/analytics`.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsReport {
    pub total_items: u64,
    pub total_value: Decimal,
    pub category_counts: BTreeMap<String, u64>,
    /// Display currency code, e.g. `KSH`.
    pub currency: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AnalyticsEnvelope {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub total_items: u64,
    #[serde(default)]
    pub total_value: Decimal,
    #[serde(default)]
    pub category_counts: BTreeMap<String, u64>,
    #[serde(default)]
    pub currency: String,
}

impl AnalyticsEnvelope {
    pub fn into_result(self) -> Result<AnalyticsReport, ClientError> {
        if !self.success {
            return Err(ClientError::Rejected(
                self.error
                    .unwrap_or_else(|| "backend rejected the request".to_string()),
            ));
        }
        Ok(AnalyticsReport {
            total_items: self.total_items,
            total_value: self.total_value,
            category_counts: self.category_counts,
            currency: self.currency,
        })
    }
}

/// One team-chat message as delivered by `GET /api/messages` or the push
/// channel. Timestamps are naive local time, as the backend writes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: String,
    pub message: String,
    pub timestamp: NaiveDateTime,
}

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub(crate) struct UpdateItemRequest<'a> {
    pub id: &'a ItemId,
    #[serde(flatten)]
    pub fields: &'a ItemDraft,
}

#[derive(Debug, Serialize)]
pub(crate) struct UpdateQuantityRequest<'a> {
    pub item_id: &'a ItemId,
    pub quantity: u32,
}

#[derive(Debug, Serialize)]
pub(crate) struct DeleteItemRequest<'a> {
    pub id: &'a ItemId,
}

#[derive(Debug, Serialize)]
pub(crate) struct SendMessageRequest<'a> {
    pub message: &'a str,
}

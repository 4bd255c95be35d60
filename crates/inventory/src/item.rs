use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, ItemId};

/// Items with a quantity strictly below this count as "low stock".
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// A single inventory record as the backend reports it.
///
/// The backend owns these; the client holds a read-through cached copy and
/// never mutates one in place. Audit metadata is attached server-side and is
/// carried through untouched (the backend sends naive local timestamps, hence
/// [`NaiveDateTime`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: ItemId,
    pub name: String,
    pub category: String,
    pub size: String,
    pub color: String,
    pub price: Decimal,
    pub quantity: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
}

impl InventoryItem {
    /// Whether the item is flagged as low stock (quantity < 10).
    pub fn is_low_stock(&self) -> bool {
        self.quantity < LOW_STOCK_THRESHOLD
    }

    /// Stock value of this line: price × quantity.
    pub fn line_value(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// The user-editable fields of an item, without an id.
///
/// Used as the body of create and update submissions. A draft is only sent
/// after [`ItemDraft::validate`] passes; the backend remains the authority
/// and may still reject it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub name: String,
    pub category: String,
    pub size: String,
    pub color: String,
    pub price: Decimal,
    pub quantity: u32,
}

impl ItemDraft {
    /// Build a draft from raw form input, parsing the numeric fields.
    ///
    /// Price and quantity arrive as strings from whatever input surface is in
    /// front of the dashboard; parse failures and negative values are
    /// validation errors, not panics.
    pub fn from_input(
        name: &str,
        category: &str,
        size: &str,
        color: &str,
        price: &str,
        quantity: &str,
    ) -> DomainResult<Self> {
        let price: Decimal = price
            .trim()
            .parse()
            .map_err(|_| DomainError::validation("price must be a number"))?;
        let quantity: u32 = quantity
            .trim()
            .parse()
            .map_err(|_| DomainError::validation("quantity must be a non-negative integer"))?;

        let draft = Self {
            name: name.trim().to_string(),
            category: category.trim().to_string(),
            size: size.trim().to_string(),
            color: color.trim().to_string(),
            price,
            quantity,
        };
        draft.validate()?;
        Ok(draft)
    }

    /// Check every required field before submission.
    pub fn validate(&self) -> DomainResult<()> {
        for (field, value) in [
            ("name", &self.name),
            ("category", &self.category),
            ("size", &self.size),
            ("color", &self.color),
        ] {
            if value.trim().is_empty() {
                return Err(DomainError::validation(format!("{field} is required")));
            }
        }
        if self.price.is_sign_negative() {
            return Err(DomainError::validation("price cannot be negative"));
        }
        Ok(())
    }
}

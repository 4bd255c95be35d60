//! Presentation rows for the inventory table.

use rust_decimal::Decimal;
use serde::Serialize;

use stockroom_inventory::{InventoryItem, display_color};

use crate::state::DashboardState;

/// One row of the inventory table, ready for a renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub id: String,
    pub name: String,
    pub category: String,
    pub size: String,
    pub color: String,
    /// Display hex for the color swatch.
    pub swatch: &'static str,
    pub price: Decimal,
    pub quantity: u32,
    pub low_stock: bool,
}

impl TableRow {
    pub fn from_item(item: &InventoryItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            category: item.category.clone(),
            size: item.size.clone(),
            color: item.color.clone(),
            swatch: display_color(&item.color),
            price: item.price,
            quantity: item.quantity,
            low_stock: item.is_low_stock(),
        }
    }
}

/// Rows for the current filter selections, in snapshot order.
pub fn table_rows(state: &DashboardState) -> Vec<TableRow> {
    state.visible_items().into_iter().map(TableRow::from_item).collect()
}

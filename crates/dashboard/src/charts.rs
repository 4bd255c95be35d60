//! Chart dataset adapters.
//!
//! Renderer-agnostic: given a snapshot, produce the numeric datasets a chart
//! library consumes. Instance lifecycle (create once, update in place,
//! destroy/recreate) is the renderer's business, not part of this contract.

use serde::Serialize;

use stockroom_inventory::InventorySnapshot;

/// How many items the stock-level bar chart shows.
pub const TOP_STOCK_LIMIT: usize = 10;

/// Slice/bar colors, cycled when there are more entries than colors.
const PALETTE: &[&str] = &[
    "#e74c3c", "#3498db", "#2ecc71", "#f1c40f", "#9b59b6", "#e67e22", "#1abc9c", "#34495e",
];

/// Labels, values and colors for one chart, index-aligned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub values: Vec<u64>,
    pub colors: Vec<&'static str>,
}

impl ChartData {
    fn from_pairs(pairs: impl IntoIterator<Item = (String, u64)>) -> Self {
        let mut labels = Vec::new();
        let mut values = Vec::new();
        let mut colors = Vec::new();
        for (i, (label, value)) in pairs.into_iter().enumerate() {
            labels.push(label);
            values.push(value);
            colors.push(PALETTE[i % PALETTE.len()]);
        }
        Self {
            labels,
            values,
            colors,
        }
    }
}

/// Proportion chart: summed quantity per category.
pub fn category_chart(snapshot: &InventorySnapshot) -> ChartData {
    ChartData::from_pairs(snapshot.category_distribution())
}

/// Bar chart: the best-stocked items, descending.
pub fn top_stock_chart(snapshot: &InventorySnapshot) -> ChartData {
    ChartData::from_pairs(
        snapshot
            .top_stock(TOP_STOCK_LIMIT)
            .into_iter()
            .map(|(name, quantity)| (name, u64::from(quantity))),
    )
}

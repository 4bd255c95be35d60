//! Inventory domain module.
//!
//! This crate contains the client-side inventory model: the item record, the
//! whole-inventory snapshot, and every view derived from it, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod color;
pub mod item;
pub mod snapshot;

pub use color::{DEFAULT_DISPLAY_COLOR, display_color};
pub use item::{InventoryItem, ItemDraft, LOW_STOCK_THRESHOLD};
pub use snapshot::{Aggregates, InventorySnapshot};

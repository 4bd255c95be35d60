//! `stockroom-dashboard`
//!
//! **Responsibility:** the inventory dashboard view-model.
//!
//! This crate provides:
//! - Explicit dashboard state with whole-snapshot replacement
//! - Operations that mutate remote state and reload afterwards
//! - Transient notifications
//! - Chart dataset adapters
//!
//! The dashboard is a **thin shell** around the backend API: it never edits
//! an item locally; it asks the backend and re-fetches.

pub mod app;
pub mod charts;
pub mod notify;
pub mod state;
pub mod view;

pub use app::{Dashboard, OperationError};
pub use charts::{ChartData, TOP_STOCK_LIMIT, category_chart, top_stock_chart};
pub use notify::{Notice, NoticeKind};
pub use state::{DashboardState, FilterState, ModalTarget};
pub use view::{TableRow, table_rows};

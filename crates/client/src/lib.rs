//! `stockroom-client`
//!
//! **Responsibility:** all IO with the inventory backend.
//!
//! This crate provides:
//! - The REST contract ([`ApiClient`] + [`wire`] shapes)
//! - The transport error taxonomy ([`ClientError`])
//! - The push-channel abstraction ([`PushChannel`]) with an in-memory
//!   implementation for tests and local wiring
//!
//! Nothing here derives views or holds dashboard state; that belongs to the
//! dashboard crate.

pub mod api;
pub mod error;
pub mod push;
pub mod wire;

pub use api::ApiClient;
pub use error::ClientError;
pub use push::{InMemoryPushChannel, PushChannel, PushEvent, PushSubscription};
pub use wire::{AnalyticsReport, ChatMessage, QuantityChange};

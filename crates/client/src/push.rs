//! Push-channel abstraction (server-initiated updates).
//!
//! The transport itself is an external collaborator; this module only fixes
//! the contract: subscribers receive [`PushEvent`]s fanned out to every
//! subscription. The in-memory implementation backs tests and local wiring.

use tokio::sync::broadcast;

use stockroom_inventory::InventoryItem;

use crate::wire::ChatMessage;

/// An event delivered by the push channel.
#[derive(Debug, Clone)]
pub enum PushEvent {
    /// The whole inventory after a change, regardless of which client caused
    /// it.
    InventoryUpdate(Vec<InventoryItem>),
    /// A team-chat message broadcast to every connected client.
    NewMessage(ChatMessage),
}

/// Source of server-initiated events.
pub trait PushChannel: Send + Sync {
    fn subscribe(&self) -> PushSubscription;
}

/// A subscription to the push channel.
#[derive(Debug)]
pub struct PushSubscription {
    receiver: broadcast::Receiver<PushEvent>,
}

impl PushSubscription {
    pub fn new(receiver: broadcast::Receiver<PushEvent>) -> Self {
        Self { receiver }
    }

    /// Receive the next event; `None` once the channel is closed.
    ///
    /// A lagged subscriber skips the missed events: a newer inventory
    /// snapshot supersedes anything it replaced, so there is nothing worth
    /// replaying.
    pub async fn recv(&mut self) -> Option<PushEvent> {
        loop {
            match self.receiver.recv().await {
                Ok(event) => return Some(event),
                Err(broadcast::error::RecvError::Closed) => return None,
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "push subscriber lagged, dropping missed events");
                }
            }
        }
    }
}

/// In-memory pub/sub channel.
///
/// - No IO
/// - Best-effort fan-out (publishing with no subscribers is a no-op)
#[derive(Debug, Clone)]
pub struct InMemoryPushChannel {
    sender: broadcast::Sender<PushEvent>,
}

impl InMemoryPushChannel {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Deliver an event to all current subscribers; returns how many
    /// received it.
    pub fn publish(&self, event: PushEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

impl Default for InMemoryPushChannel {
    fn default() -> Self {
        Self::new(16)
    }
}

impl PushChannel for InMemoryPushChannel {
    fn subscribe(&self) -> PushSubscription {
        PushSubscription::new(self.sender.subscribe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn subscribers_receive_published_events() {
        let channel = InMemoryPushChannel::default();
        let mut sub = channel.subscribe();

        let delivered = channel.publish(PushEvent::InventoryUpdate(Vec::new()));
        assert_eq!(delivered, 1);

        match sub.recv().await {
            Some(PushEvent::InventoryUpdate(items)) => assert!(items.is_empty()),
            other => panic!("expected inventory update, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn publish_without_subscribers_is_a_noop() {
        let channel = InMemoryPushChannel::default();
        assert_eq!(channel.publish(PushEvent::InventoryUpdate(Vec::new())), 0);
    }

    #[tokio::test]
    async fn each_subscriber_gets_its_own_copy() {
        let channel = InMemoryPushChannel::default();
        let mut first = channel.subscribe();
        let mut second = channel.subscribe();

        assert_eq!(channel.publish(PushEvent::InventoryUpdate(Vec::new())), 2);
        assert!(first.recv().await.is_some());
        assert!(second.recv().await.is_some());
    }

    #[tokio::test]
    async fn recv_returns_none_when_channel_closes() {
        let channel = InMemoryPushChannel::default();
        let mut sub = channel.subscribe();
        drop(channel);
        assert!(sub.recv().await.is_none());
    }
}

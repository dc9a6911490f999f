//! Event publication seam between services and the WebSocket layer.
//!
//! Services publish only after their transaction committed, so viewers
//! never observe state that later rolls back.

use std::sync::Arc;

use tracing::debug;

use crate::ws::hub::WsRegistry;
use crate::ws::protocol::AuctionEvent;

/// Fire-and-forget event publisher. Delivery is best-effort; clients
/// recover by re-reading the snapshot.
pub trait Broadcaster: Send + Sync {
    fn publish(&self, event: AuctionEvent);
}

/// Production broadcaster fanning out over the in-process registry.
pub struct WsBroadcaster {
    registry: Arc<WsRegistry>,
}

impl WsBroadcaster {
    pub fn new(registry: Arc<WsRegistry>) -> Self {
        Self { registry }
    }
}

impl Broadcaster for WsBroadcaster {
    fn publish(&self, event: AuctionEvent) {
        debug!(viewers = self.registry.viewer_count(), ?event, "publishing auction event");
        self.registry.broadcast(event);
    }
}

/// Broadcaster that drops everything (migration tooling, contexts with
/// no viewers).
pub struct NoopBroadcaster;

impl Broadcaster for NoopBroadcaster {
    fn publish(&self, _event: AuctionEvent) {}
}

#[cfg(test)]
pub mod testing {
    use std::sync::Mutex;

    use super::*;

    /// Records published events for assertion.
    #[derive(Default)]
    pub struct RecordingBroadcaster {
        events: Mutex<Vec<AuctionEvent>>,
    }

    impl RecordingBroadcaster {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn events(&self) -> Vec<AuctionEvent> {
            self.events.lock().unwrap().clone()
        }
    }

    impl Broadcaster for RecordingBroadcaster {
        fn publish(&self, event: AuctionEvent) {
            self.events.lock().unwrap().push(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::RecordingBroadcaster;
    use super::*;

    #[test]
    fn recording_broadcaster_captures_events() {
        let broadcaster = RecordingBroadcaster::new();
        broadcaster.publish(AuctionEvent::CurrentPlayerChanged { player_id: Some(4) });
        broadcaster.publish(AuctionEvent::SettingsUpdated {
            min_increment: 500,
            base_price: 2500,
        });

        let events = broadcaster.events();
        assert_eq!(events.len(), 2);
        assert_eq!(
            events[0],
            AuctionEvent::CurrentPlayerChanged { player_id: Some(4) }
        );
    }
}

use actix::prelude::*;
use dashmap::DashMap;
use uuid::Uuid;

use crate::ws::protocol::AuctionEvent;

/// Actor message wrapping one auction event for delivery to a viewer.
#[derive(Message, Clone)]
#[rtype(result = "()")]
pub struct EventBroadcast {
    pub event: AuctionEvent,
}

/// Connected-viewer registry. There is a single auction floor, so the
/// registry is flat: every viewer receives every event.
#[derive(Default)]
pub struct WsRegistry {
    viewers: DashMap<Uuid, Recipient<EventBroadcast>>,
}

impl WsRegistry {
    pub fn new() -> Self {
        Self {
            viewers: DashMap::new(),
        }
    }

    pub fn register(&self, recipient: Recipient<EventBroadcast>) -> Uuid {
        let token = Uuid::new_v4();
        self.viewers.insert(token, recipient);
        token
    }

    pub fn unregister(&self, token: Uuid) {
        self.viewers.remove(&token);
    }

    pub fn viewer_count(&self) -> usize {
        self.viewers.len()
    }

    /// Fan an event out to every connected viewer. Dropped mailboxes are
    /// ignored; the session actor unregisters itself on stop.
    pub fn broadcast(&self, event: AuctionEvent) {
        let message = EventBroadcast { event };
        for recipient in self.viewers.iter() {
            let _ = recipient.value().do_send(message.clone());
        }
    }
}

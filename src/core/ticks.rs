// src/core/ticks.rs

//! Defines the subscription contract between a host's processing loop and the
//! components that observe it.

use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// A component notified once per host processing cycle.
///
/// Handlers run synchronously on the host's thread and must not block.
pub trait TickHandler: Send + Sync {
    fn on_tick(&self);
}

/// Identifies a registered handler so it can later be removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// The event source a host fires once per cycle.
///
/// Handlers are invoked in subscription order. `fire` only takes a read lock,
/// so concurrent fires from multiple host threads do not serialize each other.
#[derive(Default)]
pub struct TickBus {
    handlers: RwLock<Vec<(SubscriptionId, Arc<dyn TickHandler>)>>,
    next_id: AtomicU64,
}

impl fmt::Debug for TickBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TickBus")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

impl TickBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler to be called on every subsequent `fire`.
    pub fn subscribe(&self, handler: Arc<dyn TickHandler>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.handlers.write().push((id, handler));
        id
    }

    /// Removes a handler. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut handlers = self.handlers.write();
        let before = handlers.len();
        handlers.retain(|(existing, _)| *existing != id);
        handlers.len() != before
    }

    /// Notifies every subscribed handler of one host tick.
    pub fn fire(&self) {
        for (_, handler) in self.handlers.read().iter() {
            handler.on_tick();
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.handlers.read().len()
    }
}

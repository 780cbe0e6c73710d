//! Fan-out bus for recorder state.
//!
//! The authority publishes a fresh snapshot after every accepted change;
//! presentation surfaces subscribe and re-render. Surfaces come and go, so
//! publishing with nobody listening is normal, not an error.

use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::trace;

/// Bound for payload types carried on the bus.
pub trait Event: Clone + Send + Sync + std::fmt::Debug + 'static {}

impl<T> Event for T where T: Clone + Send + Sync + std::fmt::Debug + 'static {}

/// In-memory broadcast bus; the only transport the recorder needs inside a
/// single process.
pub struct InMemoryBus<E>
where
    E: Event,
{
    sender: broadcast::Sender<E>,
}

impl<E> InMemoryBus<E>
where
    E: Event,
{
    pub fn new(capacity: usize) -> Arc<Self> {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Arc::new(Self { sender })
    }

    /// Publish without treating "no subscribers" as a failure. State
    /// broadcasts are fire-and-forget; a surface that attaches later will
    /// query current state instead of replaying history.
    pub fn publish_lossy(&self, event: E) {
        if self.sender.send(event).is_err() {
            trace!("state broadcast dropped; no surface attached");
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<E> {
        self.sender.subscribe()
    }
}

//! Broadcast channel for tracking events.
//!
//! Uses [`tokio::sync::broadcast`] so every subscriber receives every
//! found/lost event without any single subscriber blocking the others.
//!
//! Events on the bus are already serialized: the tracker publishes them one
//! at a time, and each consumer drains them in order between frame ticks.

use fusemark_types::{FuseMarkError, TrackingEvent};
use tokio::sync::broadcast;
use tracing::warn;

/// Default channel capacity (number of buffered events before old ones are
/// dropped for slow subscribers).
const DEFAULT_CAPACITY: usize = 256;

/// Shared tracking-event bus. Clone it cheaply – all clones share the same
/// underlying broadcast channel.
#[derive(Clone, Debug)]
pub struct TrackerBus {
    sender: broadcast::Sender<TrackingEvent>,
}

impl TrackerBus {
    /// Create a new bus with the given channel capacity.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish a found/lost event to every active subscriber.
    ///
    /// Returns the number of receivers that were handed the event, or
    /// [`FuseMarkError::Channel`] when nobody is listening.
    pub fn publish(&self, event: TrackingEvent) -> Result<usize, FuseMarkError> {
        self.sender.send(event).map_err(|_| {
            FuseMarkError::Channel("no subscribers on the tracker bus".to_string())
        })
    }

    /// Subscribe to all subsequent tracking events.
    pub fn subscribe(&self) -> TrackerReceiver {
        TrackerReceiver {
            receiver: self.sender.subscribe(),
        }
    }
}

impl Default for TrackerBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

/// Receiving half of the tracker bus.
///
/// Obtained via [`TrackerBus::subscribe`].
pub struct TrackerReceiver {
    receiver: broadcast::Receiver<TrackingEvent>,
}

impl TrackerReceiver {
    /// Wait for the next tracking event.
    ///
    /// Returns:
    /// * `Ok(event)` – a successfully received event.
    /// * `Err(broadcast::error::RecvError::Lagged(n))` – the subscriber fell
    ///   behind and `n` events were dropped. The caller decides whether to
    ///   continue or abort.
    /// * `Err(broadcast::error::RecvError::Closed)` – the bus has shut down.
    pub async fn recv(&mut self) -> Result<TrackingEvent, broadcast::error::RecvError> {
        self.receiver.recv().await
    }

    /// Drain every event that is already buffered, without waiting.
    ///
    /// Used by frame-tick consumers that pick up events between renders. A
    /// lag is logged and skipped – dropped found/lost events are superseded
    /// by the latest flag values anyway, since visibility is a pure function
    /// of the most recent state of each flag.
    pub fn drain(&mut self) -> Vec<TrackingEvent> {
        let mut events = Vec::new();
        loop {
            match self.receiver.try_recv() {
                Ok(event) => events.push(event),
                Err(broadcast::error::TryRecvError::Lagged(n)) => {
                    warn!(lagged_by = n, "tracker bus subscriber lagged");
                }
                Err(broadcast::error::TryRecvError::Empty)
                | Err(broadcast::error::TryRecvError::Closed) => break,
            }
        }
        events
    }
}

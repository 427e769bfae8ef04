//! # Block Scheduler Adapters
//!
//! The admitter signals the block producer through the `BlockScheduler`
//! port. The channel adapter delivers at-least-once over an unbounded
//! sender; the producer side must treat duplicate wakeups as harmless.

use crate::ports::outbound::BlockScheduler;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::debug;

/// Scheduler notifications delivered over a tokio channel.
#[derive(Debug, Clone)]
pub struct ChannelScheduler {
    sender: UnboundedSender<()>,
}

impl ChannelScheduler {
    /// Creates the scheduler and the receiver the block producer listens on.
    pub fn new() -> (Self, UnboundedReceiver<()>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl BlockScheduler for ChannelScheduler {
    fn notify_ready(&self) {
        // A closed receiver means the producer is gone; the notification is
        // advisory, so the send result is ignored.
        if self.sender.send(()).is_err() {
            debug!("block producer receiver dropped, notification skipped");
        }
    }
}

/// Scheduler double that records how many notifications were delivered.
#[derive(Debug, Clone, Default)]
pub struct CountingScheduler {
    count: Arc<AtomicUsize>,
}

impl CountingScheduler {
    /// Creates a scheduler with a zero count.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of notifications delivered so far.
    pub fn notified(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl BlockScheduler for CountingScheduler {
    fn notify_ready(&self) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}

/// Scheduler double that drops notifications.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpScheduler;

impl BlockScheduler for NoOpScheduler {
    fn notify_ready(&self) {}
}

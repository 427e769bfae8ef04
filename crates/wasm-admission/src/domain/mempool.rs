//! # Mempool - Shared Pending Queue
//!
//! The ordered sequence of admitted-but-not-yet-finalized transactions.
//! From this subsystem's perspective the pool is append-only: draining is
//! the block producer's job. Insertion order is preserved and observable.
//!
//! The pool itself is a plain single-threaded structure; concurrent access
//! goes through [`SharedMempool`], a single mutex shared by all requests.

use crate::domain::tx::{PendingTransaction, TxId};
use parking_lot::Mutex;
use std::sync::Arc;

/// Handle to the process-wide pending queue.
///
/// Created once at service start and injected into the admitter; never a
/// module-level singleton.
pub type SharedMempool = Arc<Mutex<Mempool>>;

/// The ordered pending-transaction queue.
#[derive(Debug, Default)]
pub struct Mempool {
    txs: Vec<PendingTransaction>,
}

impl Mempool {
    /// Creates an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty pool behind its shared mutex.
    pub fn shared() -> SharedMempool {
        Arc::new(Mutex::new(Self::new()))
    }

    /// Appends a transaction, preserving FIFO admission order.
    pub fn push(&mut self, tx: PendingTransaction) {
        self.txs.push(tx);
    }

    /// Number of pending transactions.
    pub fn len(&self) -> usize {
        self.txs.len()
    }

    /// True if no transactions are pending.
    pub fn is_empty(&self) -> bool {
        self.txs.is_empty()
    }

    /// True if a transaction with this identifier is pending.
    pub fn contains(&self, id: &TxId) -> bool {
        self.txs.iter().any(|tx| tx.id() == *id)
    }

    /// Iterates transactions in admission order.
    pub fn iter(&self) -> impl Iterator<Item = &PendingTransaction> {
        self.txs.iter()
    }

    /// Removes and returns every pending transaction, in admission order.
    ///
    /// Called by the block producer, not by the admission pipeline.
    pub fn drain(&mut self) -> Vec<PendingTransaction> {
        std::mem::take(&mut self.txs)
    }
}

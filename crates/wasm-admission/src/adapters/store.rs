//! # In-Memory Transaction Store
//!
//! Store adapter backed by a map. Stands in for the persistent store in
//! tests and single-process deployments; the interface is the same either
//! way, so the pipeline never knows the difference.

use crate::domain::tx::{Receipt, TxId};
use crate::errors::StoreError;
use crate::ports::outbound::TxStore;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Map-backed transaction store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTxStore {
    inner: Arc<RwLock<HashMap<TxId, Receipt>>>,
}

impl InMemoryTxStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored receipts.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// True if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

impl TxStore for InMemoryTxStore {
    fn get_tx(&self, id: &TxId) -> Result<Option<Receipt>, StoreError> {
        Ok(self.inner.read().get(id).cloned())
    }

    fn put_tx(&self, receipt: Receipt) -> Result<(), StoreError> {
        self.inner.write().insert(receipt.id(), receipt);
        Ok(())
    }
}

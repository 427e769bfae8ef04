//! # Integration Test: Admission to Block Production Handoff
//!
//! The admission side only appends to the mempool and signals the block
//! producer; draining the pool and recording receipts is the producer's
//! job. These tests play the producer role against the same store the
//! service answers GetTx from.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use tokio::time::timeout;

    use shared_codec::cb58_encode;
    use wasm_admission::adapters::{
        ChannelScheduler, InMemoryTxStore, Secp256k1KeyFactory, SignedTxFactory,
    };
    use wasm_admission::api::{GetTxRequest, InvokeRequest};
    use wasm_admission::domain::mempool::{Mempool, SharedMempool};
    use wasm_admission::domain::tx::{Receipt, TxStatus};
    use wasm_admission::ports::inbound::AdmissionApi;
    use wasm_admission::ports::outbound::TxStore;
    use wasm_admission::{AdmissionError, AdmissionService};

    type Service =
        AdmissionService<Secp256k1KeyFactory, SignedTxFactory, InMemoryTxStore, ChannelScheduler>;

    struct Harness {
        service: Arc<Service>,
        mempool: SharedMempool,
        store: InMemoryTxStore,
        wakeups: tokio::sync::mpsc::UnboundedReceiver<()>,
    }

    fn harness() -> Harness {
        crate::init_tracing();
        let mempool = Mempool::shared();
        let store = InMemoryTxStore::new();
        let (scheduler, wakeups) = ChannelScheduler::new();
        let service = AdmissionService::new(
            Secp256k1KeyFactory,
            SignedTxFactory,
            store.clone(),
            scheduler,
            Arc::clone(&mempool),
        );
        Harness {
            service: Arc::new(service),
            mempool,
            store,
            wakeups,
        }
    }

    async fn admit_one(service: &Service) -> wasm_admission::domain::tx::TxId {
        let sender_key = service.new_key().await.unwrap().private_key.to_string();
        let request: InvokeRequest = serde_json::from_value(serde_json::json!({
            "contractID": cb58_encode(&[7u8; 32]).unwrap(),
            "function": "transfer",
            "senderKey": sender_key,
            "senderNonce": "1"
        }))
        .unwrap();
        service.invoke(request).await.unwrap().tx_id
    }

    /// Drains the pool into the store, the way the producer does when a
    /// block is accepted.
    fn produce_block(mempool: &SharedMempool, store: &InMemoryTxStore) {
        for tx in mempool.lock().drain() {
            store
                .put_tx(Receipt {
                    tx,
                    status: TxStatus::Accepted,
                })
                .unwrap();
        }
    }

    /// Before any block is produced, an admitted transaction is queued but
    /// not yet retrievable.
    #[tokio::test]
    async fn test_get_tx_before_production_is_not_found() {
        let harness = harness();
        let tx_id = admit_one(&harness.service).await;

        let err = harness
            .service
            .get_tx(GetTxRequest { id: tx_id })
            .await
            .unwrap_err();
        assert!(matches!(err, AdmissionError::NotFound(_)));
        assert!(err.to_string().contains(&tx_id.to_string()));
    }

    /// After the producer drains the pool and records receipts, GetTx
    /// returns the accepted transaction.
    #[tokio::test]
    async fn test_get_tx_after_production_returns_receipt() {
        let mut harness = harness();
        let tx_id = admit_one(&harness.service).await;

        // The admission must have signaled the producer.
        timeout(Duration::from_secs(1), harness.wakeups.recv())
            .await
            .expect("no wakeup delivered")
            .expect("scheduler channel closed");

        produce_block(&harness.mempool, &harness.store);
        assert!(harness.mempool.lock().is_empty());

        let response = harness
            .service
            .get_tx(GetTxRequest { id: tx_id })
            .await
            .unwrap();
        assert_eq!(response.receipt.id(), tx_id);
        assert_eq!(response.receipt.status, TxStatus::Accepted);
    }

    /// A producer task driven purely by scheduler wakeups sees every
    /// admitted transaction.
    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_wakeup_driven_producer_drains_everything() {
        const REQUESTS: usize = 16;

        let Harness {
            service,
            mempool,
            store,
            mut wakeups,
        } = harness();

        let producer_pool = Arc::clone(&mempool);
        let producer_store = store.clone();
        let producer = tokio::spawn(async move {
            let mut produced = 0;
            while produced < REQUESTS {
                if wakeups.recv().await.is_none() {
                    break;
                }
                let drained = producer_pool.lock().drain();
                produced += drained.len();
                for tx in drained {
                    producer_store
                        .put_tx(Receipt {
                            tx,
                            status: TxStatus::Accepted,
                        })
                        .unwrap();
                }
            }
            produced
        });

        let mut ids = Vec::with_capacity(REQUESTS);
        for _ in 0..REQUESTS {
            ids.push(admit_one(&service).await);
        }

        let produced = timeout(Duration::from_secs(5), producer)
            .await
            .expect("producer stalled")
            .unwrap();
        assert_eq!(produced, REQUESTS);

        for id in ids {
            let response = service.get_tx(GetTxRequest { id }).await.unwrap();
            assert_eq!(response.receipt.status, TxStatus::Accepted);
        }
    }
}

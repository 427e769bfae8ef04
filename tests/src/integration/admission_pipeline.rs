//! # Integration Test: Wire-to-Mempool Admission
//!
//! Drives the admission service the way a JSON-RPC caller would: requests
//! enter as `serde_json` values, responses and errors are checked by their
//! wire form. Exercises the full pipeline across shared-codec,
//! shared-crypto, and wasm-admission.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use shared_codec::{cb58_encode, Cb58};
    use wasm_admission::adapters::{
        CountingScheduler, InMemoryTxStore, Secp256k1KeyFactory, SignedTxFactory,
    };
    use wasm_admission::api::{CreateContractRequest, InvokeRequest};
    use wasm_admission::domain::mempool::{Mempool, SharedMempool};
    use wasm_admission::domain::tx::TxPayload;
    use wasm_admission::ports::inbound::AdmissionApi;
    use wasm_admission::{AdmissionError, AdmissionService};

    type Service =
        AdmissionService<Secp256k1KeyFactory, SignedTxFactory, InMemoryTxStore, CountingScheduler>;

    // =========================================================================
    // TEST FIXTURES
    // =========================================================================

    struct Harness {
        service: Arc<Service>,
        mempool: SharedMempool,
        scheduler: CountingScheduler,
    }

    fn harness() -> Harness {
        crate::init_tracing();
        let mempool = Mempool::shared();
        let scheduler = CountingScheduler::new();
        let service = AdmissionService::new(
            Secp256k1KeyFactory,
            SignedTxFactory,
            InMemoryTxStore::new(),
            scheduler.clone(),
            Arc::clone(&mempool),
        );
        Harness {
            service: Arc::new(service),
            mempool,
            scheduler,
        }
    }

    /// A CB58 contract identifier for a deployed contract.
    fn contract_id_text() -> String {
        cb58_encode(&[7u8; 32]).unwrap()
    }

    /// A fresh sender key, obtained the way a caller would: via NewKey.
    async fn wire_sender_key(service: &Service) -> String {
        let response = service.new_key().await.unwrap();
        response.private_key.to_string()
    }

    fn invoke_from_json(value: serde_json::Value) -> InvokeRequest {
        serde_json::from_value(value).unwrap()
    }

    // =========================================================================
    // INVOKE: FULL PIPELINE
    // =========================================================================

    /// NewKey, then an invocation signed with that key, checked all the way
    /// into the mempool.
    #[tokio::test]
    async fn test_new_key_then_invoke_lands_in_mempool() {
        let harness = harness();
        let sender_key = wire_sender_key(&harness.service).await;

        let request = invoke_from_json(serde_json::json!({
            "contractID": contract_id_text(),
            "function": "transfer",
            "senderKey": sender_key,
            "senderNonce": "1",
            "args": [
                {"type": "int32", "value": 250},
                {"type": "int64", "value": 3.7}
            ]
        }));

        let response = harness.service.invoke(request).await.unwrap();

        let pool = harness.mempool.lock();
        assert_eq!(pool.len(), 1);
        let tx = pool.iter().next().unwrap();
        assert_eq!(tx.id(), response.tx_id);
        assert_eq!(tx.nonce(), 1);
        match tx.payload() {
            TxPayload::Invoke { function, args, .. } => {
                assert_eq!(function, "transfer");
                // 3.7 truncates toward zero during coercion
                assert_eq!(args.len(), 2);
            }
            other => panic!("unexpected payload: {other:?}"),
        }
        drop(pool);
        assert_eq!(harness.scheduler.notified(), 1);
    }

    /// 64-bit nonces travel as decimal strings and survive intact.
    #[tokio::test]
    async fn test_large_nonce_survives_wire_form() {
        let harness = harness();
        let sender_key = wire_sender_key(&harness.service).await;

        let request = invoke_from_json(serde_json::json!({
            "contractID": contract_id_text(),
            "function": "transfer",
            "senderKey": sender_key,
            "senderNonce": "18446744073709551615"
        }));

        harness.service.invoke(request).await.unwrap();
        let pool = harness.mempool.lock();
        assert_eq!(pool.iter().next().unwrap().nonce(), u64::MAX);
    }

    // =========================================================================
    // INVOKE: BYTE-ARGUMENT BRANCHING
    // =========================================================================

    /// Structured JSON byte args are serialized canonically, never treated
    /// as text for the codec branch.
    #[tokio::test]
    async fn test_byte_args_json_branch() {
        let harness = harness();
        let sender_key = wire_sender_key(&harness.service).await;

        let request = invoke_from_json(serde_json::json!({
            "contractID": contract_id_text(),
            "function": "store",
            "senderKey": sender_key,
            "senderNonce": "1",
            "byteArgs": [1, 2, 3]
        }));

        harness.service.invoke(request).await.unwrap();
        let pool = harness.mempool.lock();
        match pool.iter().next().unwrap().payload() {
            TxPayload::Invoke { byte_args, .. } => {
                assert_eq!(byte_args.as_bytes(), b"[1,2,3]");
            }
            other => panic!("unexpected payload: {other:?}"),
        };
    }

    /// A string byte arg takes the codec branch: the decoded payload, not
    /// the character data, reaches the transaction.
    #[tokio::test]
    async fn test_byte_args_codec_branch() {
        let harness = harness();
        let sender_key = wire_sender_key(&harness.service).await;

        let encoded = cb58_encode(&[1, 2, 3]).unwrap();
        let request = invoke_from_json(serde_json::json!({
            "contractID": contract_id_text(),
            "function": "store",
            "senderKey": sender_key,
            "senderNonce": "1",
            "byteArgs": encoded
        }));

        harness.service.invoke(request).await.unwrap();
        let pool = harness.mempool.lock();
        match pool.iter().next().unwrap().payload() {
            TxPayload::Invoke { byte_args, .. } => {
                assert_eq!(byte_args.as_bytes(), &[1, 2, 3]);
            }
            other => panic!("unexpected payload: {other:?}"),
        };
    }

    /// A string that fails the checksum is a request error, not silently
    /// empty bytes.
    #[tokio::test]
    async fn test_byte_args_bad_checksum_rejected() {
        let harness = harness();
        let sender_key = wire_sender_key(&harness.service).await;

        let request = invoke_from_json(serde_json::json!({
            "contractID": contract_id_text(),
            "function": "store",
            "senderKey": sender_key,
            "senderNonce": "1",
            "byteArgs": "zzzz"
        }));

        let err = harness.service.invoke(request).await.unwrap_err();
        assert!(err.to_string().contains("byteArgs"));
        assert!(harness.mempool.lock().is_empty());
    }

    // =========================================================================
    // INVOKE: WIRE-LEVEL ERROR MESSAGES
    // =========================================================================

    /// An empty request fails on the first missing field, with a message
    /// naming that field.
    #[tokio::test]
    async fn test_empty_request_names_sender_key_first() {
        let harness = harness();
        let request = invoke_from_json(serde_json::json!({}));

        let err = harness.service.invoke(request).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "arguments failed validation: argument 'senderKey' not provided"
        );
        assert_eq!(harness.scheduler.notified(), 0);
    }

    /// A bad argument is reported by position.
    #[tokio::test]
    async fn test_bad_argument_reported_by_index() {
        let harness = harness();
        let sender_key = wire_sender_key(&harness.service).await;

        let request = invoke_from_json(serde_json::json!({
            "contractID": contract_id_text(),
            "function": "transfer",
            "senderKey": sender_key,
            "senderNonce": "1",
            "args": [
                {"type": "int32", "value": 1},
                {"type": "int16", "value": 2}
            ]
        }));

        let err = harness.service.invoke(request).await.unwrap_err();
        assert!(matches!(err, AdmissionError::Argument { index: 1, .. }));
        assert!(err.to_string().contains("index 1"));
        assert!(err.to_string().contains("int16"));
    }

    /// Key bytes that decode but do not form a valid secp256k1 scalar fail
    /// at key resolution, after validation.
    #[tokio::test]
    async fn test_invalid_key_bytes_rejected_at_resolution() {
        let harness = harness();
        let request = invoke_from_json(serde_json::json!({
            "contractID": contract_id_text(),
            "function": "transfer",
            "senderKey": Cb58::new(vec![0u8; 32]).to_string(),
            "senderNonce": "1"
        }));

        let err = harness.service.invoke(request).await.unwrap_err();
        assert!(matches!(err, AdmissionError::KeyParse(_)));
        assert!(err.to_string().contains("secp256k1"));
    }

    // =========================================================================
    // CREATE CONTRACT
    // =========================================================================

    #[tokio::test]
    async fn test_create_contract_wire_flow() {
        let harness = harness();
        let sender_key = wire_sender_key(&harness.service).await;

        let wasm_module = vec![0x00, 0x61, 0x73, 0x6D, 0x01, 0x00, 0x00, 0x00];
        let request: CreateContractRequest = serde_json::from_value(serde_json::json!({
            "contract": Cb58::new(wasm_module.clone()).to_string(),
            "senderKey": sender_key,
            "senderNonce": "1"
        }))
        .unwrap();

        let response = harness.service.create_contract(request).await.unwrap();

        let pool = harness.mempool.lock();
        let tx = pool.iter().next().unwrap();
        assert_eq!(tx.id(), response.tx_id);
        match tx.payload() {
            TxPayload::CreateContract { contract } => {
                assert_eq!(contract.as_bytes(), wasm_module.as_slice());
            }
            other => panic!("unexpected payload: {other:?}"),
        }
    }

    // =========================================================================
    // CONCURRENCY
    // =========================================================================

    /// Concurrent invocations all land: no admission is lost or duplicated,
    /// and every admission produces a wakeup.
    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_invokes_all_admitted() {
        const REQUESTS: u64 = 64;

        let harness = harness();
        let sender_key = wire_sender_key(&harness.service).await;

        let mut handles = Vec::new();
        for nonce in 1..=REQUESTS {
            let service = Arc::clone(&harness.service);
            let sender_key = sender_key.clone();
            handles.push(tokio::spawn(async move {
                let request = invoke_from_json(serde_json::json!({
                    "contractID": contract_id_text(),
                    "function": "transfer",
                    "senderKey": sender_key,
                    "senderNonce": nonce.to_string()
                }));
                service.invoke(request).await.unwrap().tx_id
            }));
        }

        let mut ids = std::collections::HashSet::new();
        for handle in handles {
            ids.insert(handle.await.unwrap());
        }

        assert_eq!(ids.len(), REQUESTS as usize);
        let pool = harness.mempool.lock();
        assert_eq!(pool.len(), REQUESTS as usize);
        for tx in pool.iter() {
            assert!(ids.contains(&tx.id()));
        }
        drop(pool);
        assert_eq!(harness.scheduler.notified(), REQUESTS as usize);
    }
}

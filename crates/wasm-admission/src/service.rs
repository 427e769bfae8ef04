//! # Admission Service
//!
//! Orchestrates the pipeline: validate → coerce args → decode byte args →
//! resolve key → build → admit → notify. Every collaborator is injected at
//! construction, so each can be replaced with a double; the mempool handle
//! is the only state shared between concurrent requests.
//!
//! Once a request begins admission it runs to completion or failure.
//! Partially-built transactions are never admitted, and no failure here
//! requires rollback of shared state.

use crate::api::{
    CreateContractRequest, CreateContractResponse, GetTxRequest, GetTxResponse, InvokeRequest,
    InvokeResponse, NewKeyResponse,
};
use crate::domain::args::coerce_argument;
use crate::domain::byte_args::resolve_byte_args;
use crate::domain::mempool::SharedMempool;
use crate::domain::requests::{ContractCreationRequest, InvocationRequest};
use crate::domain::tx::PendingTransaction;
use crate::errors::{AdmissionError, KeyError};
use crate::ports::inbound::AdmissionApi;
use crate::ports::outbound::{BlockScheduler, KeyFactory, PrivateKey, TxFactory, TxStore};
use async_trait::async_trait;
use shared_codec::Cb58;
use shared_crypto::Secp256k1KeyPair;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// The admission pipeline with its injected collaborators.
pub struct AdmissionService<K, B, S, N>
where
    K: KeyFactory,
    B: TxFactory,
    S: TxStore,
    N: BlockScheduler,
{
    key_factory: K,
    tx_factory: B,
    store: S,
    scheduler: N,
    mempool: SharedMempool,
}

impl<K, B, S, N> AdmissionService<K, B, S, N>
where
    K: KeyFactory,
    B: TxFactory,
    S: TxStore,
    N: BlockScheduler,
{
    /// Creates the service around an existing mempool handle.
    pub fn new(
        key_factory: K,
        tx_factory: B,
        store: S,
        scheduler: N,
        mempool: SharedMempool,
    ) -> Self {
        Self {
            key_factory,
            tx_factory,
            store,
            scheduler,
            mempool,
        }
    }

    /// A handle to the shared mempool.
    pub fn mempool(&self) -> SharedMempool {
        Arc::clone(&self.mempool)
    }

    /// Resolves raw key bytes to the secp256k1 key transactions are signed
    /// with. A parsed key of any other scheme is fatal to the request.
    fn resolve_sender_key(&self, bytes: &[u8]) -> Result<Secp256k1KeyPair, KeyError> {
        match self.key_factory.to_private_key(bytes)? {
            PrivateKey::Secp256k1(keypair) => Ok(keypair),
            other => Err(KeyError::WrongScheme {
                actual: other.scheme().to_string(),
            }),
        }
    }

    /// Appends the built transaction to the pending queue and wakes the
    /// block producer. Admission order is whatever total order the mutex
    /// gives concurrent requests.
    fn admit(&self, tx: PendingTransaction) {
        {
            let mut pool = self.mempool.lock();
            pool.push(tx);
        }
        self.scheduler.notify_ready();
    }
}

#[async_trait]
impl<K, B, S, N> AdmissionApi for AdmissionService<K, B, S, N>
where
    K: KeyFactory,
    B: TxFactory,
    S: TxStore,
    N: BlockScheduler,
{
    #[instrument(skip_all)]
    async fn new_key(&self) -> Result<NewKeyResponse, AdmissionError> {
        let key = self.key_factory.new_private_key()?;
        debug!("generated new private key");
        Ok(NewKeyResponse {
            private_key: Cb58::new(key.to_bytes()),
        })
    }

    #[instrument(skip_all)]
    async fn invoke(&self, request: InvokeRequest) -> Result<InvokeResponse, AdmissionError> {
        debug!("in invoke");
        let request: InvocationRequest = request.into();
        request.validate()?;

        let mut fn_args = Vec::with_capacity(request.args.len());
        for (index, argument) in request.args.iter().enumerate() {
            let arg = coerce_argument(argument)
                .map_err(|source| AdmissionError::Argument { index, source })?;
            fn_args.push(arg);
        }

        let byte_args = resolve_byte_args(&request.byte_args)?;
        let sender_key = self.resolve_sender_key(&request.sender_key)?;

        let tx = self.tx_factory.build_invoke_tx(
            request.contract_id,
            &request.function,
            fn_args,
            byte_args,
            request.sender_nonce,
            &sender_key,
        )?;

        let tx_id = tx.id();
        self.admit(tx);
        info!(%tx_id, contract_id = %request.contract_id, "admitted invocation tx");
        Ok(InvokeResponse { tx_id })
    }

    #[instrument(skip_all)]
    async fn create_contract(
        &self,
        request: CreateContractRequest,
    ) -> Result<CreateContractResponse, AdmissionError> {
        debug!("in create_contract");
        let request: ContractCreationRequest = request.into();
        request.validate()?;

        let sender_key = self.resolve_sender_key(&request.sender_key)?;

        let tx = self
            .tx_factory
            .build_create_tx(request.contract, request.sender_nonce, &sender_key)?;

        let tx_id = tx.id();
        self.admit(tx);
        info!(%tx_id, "admitted contract-creation tx");
        Ok(CreateContractResponse { tx_id })
    }

    #[instrument(skip_all)]
    async fn get_tx(&self, request: GetTxRequest) -> Result<GetTxResponse, AdmissionError> {
        match self.store.get_tx(&request.id)? {
            Some(receipt) => Ok(GetTxResponse { receipt }),
            None => Err(AdmissionError::NotFound(request.id)),
        }
    }
}

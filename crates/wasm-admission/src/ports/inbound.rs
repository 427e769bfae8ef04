//! # Driving Port (Inbound)
//!
//! The request/response surface of the admission subsystem. Errors cross
//! this boundary as a single human-readable message per call
//! (`AdmissionError` implements `Display`); no structured error code exists
//! here.

use crate::api::{
    CreateContractRequest, CreateContractResponse, GetTxRequest, GetTxResponse, InvokeRequest,
    InvokeResponse, NewKeyResponse,
};
use crate::errors::AdmissionError;
use async_trait::async_trait;

/// The four operations of the admission pipeline.
///
/// Each inbound request runs on its own task; implementations share no
/// mutable state across requests except the mempool.
#[async_trait]
pub trait AdmissionApi: Send + Sync {
    /// Generates and returns a new private key, text-encoded.
    async fn new_key(&self) -> Result<NewKeyResponse, AdmissionError>;

    /// Validates an invocation request, builds the transaction, admits it,
    /// and returns its identifier.
    async fn invoke(&self, request: InvokeRequest) -> Result<InvokeResponse, AdmissionError>;

    /// Validates a contract-creation request, builds the transaction,
    /// admits it, and returns its identifier.
    async fn create_contract(
        &self,
        request: CreateContractRequest,
    ) -> Result<CreateContractResponse, AdmissionError>;

    /// Looks up a previously stored transaction by identifier.
    async fn get_tx(&self, request: GetTxRequest) -> Result<GetTxResponse, AdmissionError>;
}

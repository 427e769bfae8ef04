//! # Wire Request/Response Types
//!
//! The serde-facing shapes of the four admission operations. Conventions at
//! this boundary:
//!
//! - every 64-bit quantity travels as a decimal string, never a JSON number,
//!   to avoid precision loss in text-based encodings;
//! - every byte payload other than `byteArgs` travels as a CB58 string;
//! - missing fields deserialize to their zero forms and are caught by
//!   domain validation, so the caller sees a field-specific message instead
//!   of a serde error.

use crate::domain::args::TypedArgument;
use crate::domain::requests::{ContractCreationRequest, InvocationRequest};
use crate::domain::tx::{ContractId, Receipt, TxId};
use crate::domain::wire::WireValue;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};
use shared_codec::Cb58;

// =============================================================================
// NEW KEY
// =============================================================================

/// Response to `NewKey`: a freshly generated private key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewKeyResponse {
    /// The new private key, CB58-encoded.
    pub private_key: Cb58,
}

// =============================================================================
// INVOKE
// =============================================================================

/// Request to invoke a function on a deployed contract.
#[serde_as]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvokeRequest {
    /// Contract to invoke, as a CB58 identifier.
    #[serde(default, rename = "contractID")]
    pub contract_id: ContractId,
    /// Function in the contract to invoke.
    #[serde(default)]
    pub function: String,
    /// Private key signing the invocation tx; its address is the sender.
    /// Must be the byte representation of a secp256k1 private key.
    #[serde(default)]
    pub sender_key: Cb58,
    /// Sender's next unused nonce, as a decimal string.
    #[serde_as(as = "DisplayFromStr")]
    #[serde(default)]
    pub sender_nonce: u64,
    /// Integer arguments to the function.
    #[serde(default)]
    pub args: Vec<TypedArgument>,
    /// Byte arguments to the function: JSON array/object, or CB58 string.
    #[serde(default)]
    pub byte_args: WireValue,
}

impl From<InvokeRequest> for InvocationRequest {
    fn from(request: InvokeRequest) -> Self {
        Self {
            contract_id: request.contract_id,
            function: request.function,
            sender_key: request.sender_key.into_bytes(),
            sender_nonce: request.sender_nonce,
            args: request.args,
            byte_args: request.byte_args,
        }
    }
}

/// Response to `Invoke`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvokeResponse {
    /// Identifier of the admitted transaction.
    pub tx_id: TxId,
}

// =============================================================================
// CREATE CONTRACT
// =============================================================================

/// Request to deploy a new contract.
#[serde_as]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContractRequest {
    /// The byte representation of the contract, CB58-encoded.
    /// Must be a valid wasm module.
    #[serde(default)]
    pub contract: Cb58,
    /// Private key of the sender, CB58-encoded.
    #[serde(default)]
    pub sender_key: Cb58,
    /// Sender's next unused nonce, as a decimal string.
    #[serde_as(as = "DisplayFromStr")]
    #[serde(default)]
    pub sender_nonce: u64,
}

impl From<CreateContractRequest> for ContractCreationRequest {
    fn from(request: CreateContractRequest) -> Self {
        Self {
            contract: request.contract.into_bytes(),
            sender_key: request.sender_key.into_bytes(),
            sender_nonce: request.sender_nonce,
        }
    }
}

/// Response to `CreateContract`. The contract's identifier is the
/// identifier of the transaction that creates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContractResponse {
    /// Identifier of the admitted transaction.
    pub tx_id: TxId,
}

// =============================================================================
// GET TX
// =============================================================================

/// Request to look up a stored transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTxRequest {
    /// The transaction identifier.
    pub id: TxId,
}

/// Response to `GetTx`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTxResponse {
    /// The stored receipt.
    pub receipt: Receipt,
}

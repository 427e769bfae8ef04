//! # Transactions and Identifiers
//!
//! `PendingTransaction` is the immutable, identifier-bearing unit of work
//! the pipeline produces. After admission it is owned by the mempool and
//! never mutated. Identifiers are 32-byte values that travel as CB58 strings
//! on the wire.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use shared_codec::{cb58_decode, cb58_encode, Cb58, CodecError};
use thiserror::Error;

use crate::domain::args::FnArg;

/// Width of a chain identifier in bytes.
pub const ID_LEN: usize = 32;

/// Errors from parsing a textual identifier.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum IdError {
    /// The CB58 envelope was invalid.
    #[error("invalid CB58: {0}")]
    Codec(#[from] CodecError),

    /// The decoded payload is not exactly 32 bytes.
    #[error("expected {ID_LEN} byte ID, got {0} bytes")]
    Length(usize),
}

fn parse_id_bytes(text: &str) -> Result<[u8; ID_LEN], IdError> {
    let decoded = cb58_decode(text)?;
    if decoded.len() != ID_LEN {
        return Err(IdError::Length(decoded.len()));
    }
    let mut bytes = [0u8; ID_LEN];
    bytes.copy_from_slice(&decoded);
    Ok(bytes)
}

fn format_id_bytes(bytes: &[u8; ID_LEN], f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match cb58_encode(bytes) {
        Ok(text) => f.write_str(&text),
        Err(_) => Err(std::fmt::Error),
    }
}

/// Opaque 32-byte identifier of a deployed contract.
///
/// The all-zero value means "not specified" and never names a real contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ContractId([u8; ID_LEN]);

impl ContractId {
    /// Wraps raw identifier bytes.
    pub fn from_bytes(bytes: [u8; ID_LEN]) -> Self {
        Self(bytes)
    }

    /// Raw identifier bytes.
    pub fn as_bytes(&self) -> &[u8; ID_LEN] {
        &self.0
    }

    /// True for the zero (unspecified) identifier.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; ID_LEN]
    }
}

impl std::fmt::Display for ContractId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format_id_bytes(&self.0, f)
    }
}

impl std::str::FromStr for ContractId {
    type Err = IdError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        parse_id_bytes(text).map(Self)
    }
}

impl Serialize for ContractId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ContractId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Identifier of an admitted transaction: 32 bytes derived from the signed
/// transaction content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TxId([u8; ID_LEN]);

impl TxId {
    /// Wraps raw identifier bytes.
    pub fn from_bytes(bytes: [u8; ID_LEN]) -> Self {
        Self(bytes)
    }

    /// Raw identifier bytes.
    pub fn as_bytes(&self) -> &[u8; ID_LEN] {
        &self.0
    }
}

impl std::fmt::Display for TxId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format_id_bytes(&self.0, f)
    }
}

impl std::str::FromStr for TxId {
    type Err = IdError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        parse_id_bytes(text).map(Self)
    }
}

impl Serialize for TxId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TxId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// What an admitted transaction does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TxPayload {
    /// Invoke a function on a deployed contract.
    #[serde(rename_all = "camelCase")]
    Invoke {
        /// Target contract.
        contract_id: ContractId,
        /// Function name within the contract.
        function: String,
        /// Coerced integer arguments, in request order.
        args: Vec<FnArg>,
        /// Resolved byte arguments.
        byte_args: Cb58,
    },
    /// Deploy a new contract module.
    #[serde(rename_all = "camelCase")]
    CreateContract {
        /// The binary execution module.
        contract: Cb58,
    },
}

/// A signed, identifier-bearing transaction awaiting block inclusion.
///
/// Fields are private: this value is immutable after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingTransaction {
    id: TxId,
    payload: TxPayload,
    nonce: u64,
    sender_public_key: Cb58,
    signature: Cb58,
}

impl PendingTransaction {
    /// Assembles a transaction. Called by the transaction factory once the
    /// payload has been encoded and signed.
    pub fn new(
        id: TxId,
        payload: TxPayload,
        nonce: u64,
        sender_public_key: Cb58,
        signature: Cb58,
    ) -> Self {
        Self {
            id,
            payload,
            nonce,
            sender_public_key,
            signature,
        }
    }

    /// The transaction identifier.
    pub fn id(&self) -> TxId {
        self.id
    }

    /// What the transaction does.
    pub fn payload(&self) -> &TxPayload {
        &self.payload
    }

    /// The sender's nonce.
    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    /// The sender's compressed public key.
    pub fn sender_public_key(&self) -> &Cb58 {
        &self.sender_public_key
    }

    /// The sender's signature over the encoded payload.
    pub fn signature(&self) -> &Cb58 {
        &self.signature
    }
}

/// Lifecycle status recorded with a stored transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TxStatus {
    /// Admitted to the pending queue, not yet in a block.
    Admitted,
    /// Included in an accepted block.
    Accepted,
    /// Dropped by the block producer.
    Rejected,
}

/// The stored representation of a transaction, retrievable by identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// The transaction itself.
    pub tx: PendingTransaction,
    /// Where the transaction is in its lifecycle.
    pub status: TxStatus,
}

impl Receipt {
    /// The identifier of the underlying transaction.
    pub fn id(&self) -> TxId {
        self.tx.id()
    }
}

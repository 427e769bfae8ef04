//! # Error Types
//!
//! The full request-scoped error taxonomy of the admission pipeline. None of
//! these corrupt shared state or need rollback: mempool admission happens
//! only after every prior step has succeeded. None are process-fatal.

use crate::domain::args::ArgType;
use crate::domain::tx::TxId;
use shared_codec::CodecError;
use shared_crypto::CryptoError;
use thiserror::Error;

// =============================================================================
// ARGUMENT COERCION
// =============================================================================

/// Errors from coercing a typed wire argument to a fixed-width integer.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ArgError {
    /// The declared type tag is outside the closed set.
    #[error("arg type must be one of: int32, int64, but was '{0}'")]
    UnknownType(String),

    /// The wire value has no numeric representation for the declared type.
    #[error("value '{value}' is not convertible to {target}")]
    NotConvertible {
        /// Offending wire value, rendered for the caller.
        value: String,
        /// The declared target type.
        target: ArgType,
    },
}

// =============================================================================
// BYTE-ARGUMENT RESOLUTION
// =============================================================================

/// Errors from resolving the ambiguous `byteArgs` wire field.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ByteArgsError {
    /// The value is syntactically neither structured JSON nor a string.
    #[error("expected 'byteArgs' to be JSON or CB58 formatted bytes but was neither")]
    Ambiguous,

    /// The string branch failed to decode (bad alphabet, checksum mismatch).
    #[error("invalid CB58: {0}")]
    Decode(#[from] CodecError),

    /// The JSON branch failed to serialize canonically.
    #[error("couldn't serialize JSON byte args: {0}")]
    Encode(String),
}

// =============================================================================
// KEY RESOLUTION
// =============================================================================

/// Errors from turning raw key bytes into a usable signing key.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum KeyError {
    /// The key factory rejected the bytes.
    #[error("{0}")]
    Parse(#[from] CryptoError),

    /// The factory parsed a key, but of the wrong signature scheme.
    ///
    /// A capability mismatch after parsing is fatal to the request, never
    /// silently ignored.
    #[error("expected a secp256k1 key, got {actual}")]
    WrongScheme {
        /// Name of the scheme the factory actually produced.
        actual: String,
    },
}

// =============================================================================
// REQUEST VALIDATION
// =============================================================================

/// First-violation validation failures for incoming requests.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// `senderKey` missing or empty.
    #[error("argument 'senderKey' not provided")]
    MissingSenderKey,

    /// `senderNonce` is zero.
    #[error("'senderNonce' must be at least 1")]
    ZeroNonce,

    /// `contractID` missing or the zero identifier.
    #[error("'contractID' not specified")]
    EmptyContractId,

    /// `function` missing or empty.
    #[error("'function' not specified")]
    EmptyFunction,

    /// `contract` bytes missing or empty.
    #[error("argument 'contract' not provided")]
    MissingContract,
}

// =============================================================================
// DOWNSTREAM COLLABORATORS
// =============================================================================

/// Errors from the delegated transaction build (encoding, signing).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TxBuildError {
    /// Payload could not be encoded for signing.
    #[error("encoding failed: {0}")]
    Encoding(String),

    /// The signing step failed.
    #[error("signing failed: {0}")]
    Signing(String),
}

/// Errors from the external transaction store.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StoreError {
    /// The store could not be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The stored record could not be decoded.
    #[error("corrupt record: {0}")]
    Corrupt(String),
}

// =============================================================================
// SERVICE-LEVEL WRAPPER
// =============================================================================

/// An admission request failure, wrapped with which field or step failed.
///
/// `Display` yields the single human-readable message returned to the
/// caller; no structured error code exists at this boundary.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AdmissionError {
    /// A required field was missing or zero.
    #[error("arguments failed validation: {0}")]
    Validation(#[from] ValidationError),

    /// A numeric argument could not be coerced.
    #[error("couldn't parse arg at index {index}: {source}")]
    Argument {
        /// Position of the offending argument in the request sequence.
        index: usize,
        /// The underlying coercion failure.
        source: ArgError,
    },

    /// The `byteArgs` field could not be resolved.
    #[error("couldn't parse 'byteArgs': {0}")]
    ByteArgs(#[from] ByteArgsError),

    /// The sender key bytes did not form a usable secp256k1 key.
    #[error("couldn't parse 'senderKey' to a secp256k1 private key: {0}")]
    KeyParse(#[from] KeyError),

    /// Fresh key generation failed.
    #[error("couldn't create new private key: {0}")]
    NewKey(#[from] CryptoError),

    /// The delegated transaction build failed.
    #[error("couldn't create tx: {0}")]
    TxBuild(#[from] TxBuildError),

    /// The external store failed during lookup.
    #[error("couldn't read tx: {0}")]
    Store(#[from] StoreError),

    /// No transaction with the given identifier exists.
    #[error("couldn't find tx with ID {0}")]
    NotFound(TxId),
}

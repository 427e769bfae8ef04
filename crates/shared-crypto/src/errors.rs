//! Crypto error types.

use thiserror::Error;

/// Cryptographic operation errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// Key bytes have the wrong length
    #[error("invalid key length: expected {expected}, got {actual}")]
    InvalidKeyLength {
        /// Expected key length in bytes
        expected: usize,
        /// Actual key length in bytes
        actual: usize,
    },

    /// Key bytes do not form a valid private key
    #[error("invalid private key")]
    InvalidPrivateKey,

    /// Key bytes do not form a valid public key
    #[error("invalid public key")]
    InvalidPublicKey,

    /// Signature bytes are malformed
    #[error("invalid signature")]
    InvalidSignature,

    /// Signature does not verify against the message
    #[error("signature verification failed")]
    SignatureVerificationFailed,

    /// Fresh key generation failed
    #[error("key generation failed: {0}")]
    KeyGenerationFailed(String),
}

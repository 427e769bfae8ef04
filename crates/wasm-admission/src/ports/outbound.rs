//! # Driven Ports (Outbound)
//!
//! The external collaborators the admission pipeline depends on. Each is an
//! explicit dependency passed in at construction time, never an ambient
//! singleton, so every one can be substituted with a test double.
//!
//! The delegated build and lookup calls are treated as opaque synchronous
//! calls; timeout policy, if any, belongs to the implementing adapter.

use crate::domain::args::FnArg;
use crate::domain::tx::{ContractId, PendingTransaction, Receipt, TxId};
use crate::errors::{StoreError, TxBuildError};
use shared_crypto::{CryptoError, Ed25519KeyPair, Secp256k1KeyPair};

// =============================================================================
// KEY FACTORY
// =============================================================================

/// Signature scheme of a parsed private key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyScheme {
    /// secp256k1 ECDSA, the scheme transaction senders use.
    Secp256k1,
    /// Ed25519, used for node identity keys.
    Ed25519,
}

impl std::fmt::Display for KeyScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Secp256k1 => f.write_str("secp256k1"),
            Self::Ed25519 => f.write_str("ed25519"),
        }
    }
}

/// A parsed private key of some scheme.
///
/// The factory reports what it parsed; callers that require a specific
/// scheme must check, and treat a mismatch as fatal to the request.
#[derive(Debug)]
pub enum PrivateKey {
    /// A secp256k1 keypair.
    Secp256k1(Secp256k1KeyPair),
    /// An Ed25519 keypair.
    Ed25519(Ed25519KeyPair),
}

impl PrivateKey {
    /// The scheme this key belongs to.
    pub fn scheme(&self) -> KeyScheme {
        match self {
            Self::Secp256k1(_) => KeyScheme::Secp256k1,
            Self::Ed25519(_) => KeyScheme::Ed25519,
        }
    }

    /// Serializable secret bytes, in the scheme's canonical form.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Self::Secp256k1(keypair) => keypair.to_bytes().to_vec(),
            Self::Ed25519(keypair) => keypair.to_seed().to_vec(),
        }
    }
}

/// Interface to the key-parsing collaborator.
///
/// Cryptographic validity is this collaborator's concern; the pipeline only
/// checks that the returned key has the scheme it needs.
pub trait KeyFactory: Send + Sync {
    /// Generates a fresh private key.
    fn new_private_key(&self) -> Result<PrivateKey, CryptoError>;

    /// Parses raw bytes into a private key.
    fn to_private_key(&self, bytes: &[u8]) -> Result<PrivateKey, CryptoError>;
}

// =============================================================================
// TRANSACTION FACTORY
// =============================================================================

/// Interface to the VM collaborator that encodes and signs transactions.
///
/// Both calls are made only after every prior validation, coercion, and
/// decoding step has succeeded; a build failure is request-scoped and not
/// retried here.
pub trait TxFactory: Send + Sync {
    /// Builds a signed contract-invocation transaction.
    #[allow(clippy::too_many_arguments)]
    fn build_invoke_tx(
        &self,
        contract_id: ContractId,
        function: &str,
        args: Vec<FnArg>,
        byte_args: Vec<u8>,
        nonce: u64,
        sender_key: &Secp256k1KeyPair,
    ) -> Result<PendingTransaction, TxBuildError>;

    /// Builds a signed contract-creation transaction.
    fn build_create_tx(
        &self,
        contract: Vec<u8>,
        nonce: u64,
        sender_key: &Secp256k1KeyPair,
    ) -> Result<PendingTransaction, TxBuildError>;
}

// =============================================================================
// TRANSACTION STORE
// =============================================================================

/// Interface to the external transaction store.
///
/// The pipeline only reads; writing happens downstream when blocks are
/// produced and accepted.
pub trait TxStore: Send + Sync {
    /// Looks up a stored transaction by identifier.
    fn get_tx(&self, id: &TxId) -> Result<Option<Receipt>, StoreError>;

    /// Records a transaction's receipt. Called by the block-production side,
    /// not by the admission pipeline.
    fn put_tx(&self, receipt: Receipt) -> Result<(), StoreError>;
}

// =============================================================================
// BLOCK SCHEDULER
// =============================================================================

/// Interface to the block-production scheduler.
///
/// Notification is at-least-once; the scheduler must treat duplicates as
/// harmless. This subsystem does not deduplicate.
pub trait BlockScheduler: Send + Sync {
    /// Signals that new work exists in the mempool.
    fn notify_ready(&self);
}

//! # Shared Crypto - Asymmetric Key Primitives
//!
//! Key material handling for transaction signing. The admission layer parses
//! attacker-controlled key bytes, so every constructor here validates its
//! input and secret material is zeroized on drop.
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `ecdsa` | secp256k1 | Transaction sender keys |
//! | `signatures` | Ed25519 | Node/validator identity keys |
//!
//! ## Security Properties
//!
//! - **secp256k1**: RFC 6979 deterministic nonces, no RNG dependency for signing
//! - **Ed25519**: Deterministic nonces, complete addition formulas

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ecdsa;
pub mod errors;
pub mod signatures;

// Re-exports
pub use ecdsa::{Secp256k1KeyPair, Secp256k1PublicKey, Secp256k1Signature};
pub use errors::CryptoError;
pub use signatures::{Ed25519KeyPair, Ed25519PublicKey, Ed25519Signature};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! # Shared Codec - Checksummed Text Encoding
//!
//! CB58 is the text encoding used for every binary payload at the service
//! boundary: a base58 payload with a trailing 4-byte SHA-256 checksum that is
//! validated on decode.
//!
//! ## Components
//!
//! | Module | Purpose |
//! |--------|---------|
//! | `cb58` | Encode/decode functions and the `Cb58` serde wrapper |
//! | `errors` | `CodecError` |
//!
//! The base58 alphabet itself comes from the `bs58` crate; this crate owns
//! only the checksum framing and the wire-facing wrapper type.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cb58;
pub mod errors;

// Re-exports
pub use cb58::{cb58_decode, cb58_encode, Cb58};
pub use errors::CodecError;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

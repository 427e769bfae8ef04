//! Codec error types.

use thiserror::Error;

/// Errors from CB58 encoding and decoding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Input contains a character outside the base58 alphabet.
    #[error("invalid base58 character at index {0}")]
    InvalidCharacter(usize),

    /// Decoded payload is shorter than the checksum it must carry.
    #[error("decoded input too short: {length} bytes, need at least {minimum}")]
    TooShort {
        /// Decoded length in bytes.
        length: usize,
        /// Minimum decoded length (the checksum width).
        minimum: usize,
    },

    /// Trailing checksum does not match the payload.
    #[error("bad checksum: expected {expected:02x?}, got {actual:02x?}")]
    BadChecksum {
        /// Checksum recomputed from the payload.
        expected: [u8; 4],
        /// Checksum carried by the input.
        actual: [u8; 4],
    },

    /// Payload exceeds the maximum encodable size.
    #[error("payload too large: {length} bytes, maximum {maximum}")]
    TooLarge {
        /// Payload length in bytes.
        length: usize,
        /// Maximum payload length.
        maximum: usize,
    },
}

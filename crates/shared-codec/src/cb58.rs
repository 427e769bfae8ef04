//! # CB58 - Checksummed Base58
//!
//! Wire format: `base58(payload || sha256(payload)[28..32])`.
//!
//! Decoding validates the trailing checksum, so a corrupted or truncated
//! string never yields a payload.

use crate::errors::CodecError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};

/// Width of the trailing checksum in bytes.
pub const CHECKSUM_LEN: usize = 4;

/// Maximum payload size accepted for encoding (and produced by decoding).
///
/// Large enough for any contract module this chain accepts, small enough
/// that a hostile string cannot force an unbounded allocation.
pub const MAX_PAYLOAD_LEN: usize = 1 << 24;

fn checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let digest = Sha256::digest(payload);
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&digest[digest.len() - CHECKSUM_LEN..]);
    out
}

/// Encodes a byte payload as a CB58 string.
pub fn cb58_encode(payload: &[u8]) -> Result<String, CodecError> {
    if payload.len() > MAX_PAYLOAD_LEN {
        return Err(CodecError::TooLarge {
            length: payload.len(),
            maximum: MAX_PAYLOAD_LEN,
        });
    }
    let mut framed = Vec::with_capacity(payload.len() + CHECKSUM_LEN);
    framed.extend_from_slice(payload);
    framed.extend_from_slice(&checksum(payload));
    Ok(bs58::encode(framed).into_string())
}

/// Decodes a CB58 string, validating the trailing checksum.
pub fn cb58_decode(text: &str) -> Result<Vec<u8>, CodecError> {
    let decoded = bs58::decode(text).into_vec().map_err(|err| match err {
        bs58::decode::Error::InvalidCharacter { index, .. } => {
            CodecError::InvalidCharacter(index)
        }
        bs58::decode::Error::NonAsciiCharacter { index } => CodecError::InvalidCharacter(index),
        _ => CodecError::InvalidCharacter(0),
    })?;

    if decoded.len() < CHECKSUM_LEN {
        return Err(CodecError::TooShort {
            length: decoded.len(),
            minimum: CHECKSUM_LEN,
        });
    }
    let split = decoded.len() - CHECKSUM_LEN;
    if split > MAX_PAYLOAD_LEN {
        return Err(CodecError::TooLarge {
            length: split,
            maximum: MAX_PAYLOAD_LEN,
        });
    }

    let (payload, carried) = decoded.split_at(split);
    let expected = checksum(payload);
    if carried != expected {
        let mut actual = [0u8; CHECKSUM_LEN];
        actual.copy_from_slice(carried);
        return Err(CodecError::BadChecksum { expected, actual });
    }
    Ok(payload.to_vec())
}

/// A byte payload that travels as a CB58 string on the wire.
///
/// Serializes to the checksummed text form; deserialization validates the
/// checksum, so a `Cb58` obtained from the wire always holds intact bytes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cb58(pub Vec<u8>);

impl Cb58 {
    /// Wraps raw bytes for encoding.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// The wrapped bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consumes the wrapper, returning the bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// True if no bytes are wrapped.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Cb58 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match cb58_encode(&self.0) {
            Ok(text) => f.write_str(&text),
            Err(_) => Err(std::fmt::Error),
        }
    }
}

impl std::str::FromStr for Cb58 {
    type Err = CodecError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        cb58_decode(text).map(Self)
    }
}

impl Serialize for Cb58 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let text = cb58_encode(&self.0).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&text)
    }
}

impl<'de> Deserialize<'de> for Cb58 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        cb58_decode(&text)
            .map(Self)
            .map_err(serde::de::Error::custom)
    }
}

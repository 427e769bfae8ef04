//! # secp256k1 Key Factory
//!
//! Default key-factory adapter. Every key it generates or parses is a
//! secp256k1 key; parsing validates the scalar, so bad bytes fail here and
//! never reach the transaction builder.

use crate::ports::outbound::{KeyFactory, PrivateKey};
use shared_crypto::{CryptoError, Secp256k1KeyPair};

/// Key factory producing secp256k1 keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct Secp256k1KeyFactory;

impl KeyFactory for Secp256k1KeyFactory {
    fn new_private_key(&self) -> Result<PrivateKey, CryptoError> {
        Ok(PrivateKey::Secp256k1(Secp256k1KeyPair::generate()))
    }

    fn to_private_key(&self, bytes: &[u8]) -> Result<PrivateKey, CryptoError> {
        Ok(PrivateKey::Secp256k1(Secp256k1KeyPair::from_slice(bytes)?))
    }
}

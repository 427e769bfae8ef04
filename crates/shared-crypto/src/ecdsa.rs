//! # ECDSA Signatures (secp256k1)
//!
//! Sender keys for contract invocation and deployment transactions. The
//! 32-byte secret scalar is the form that crosses the service boundary
//! (CB58-encoded), so parsing from untrusted slices is the primary entry
//! point here.
//!
//! ## Security Properties
//!
//! - RFC 6979 deterministic nonces (no RNG dependency for signing)
//! - Secret material zeroized on drop

use crate::CryptoError;
use k256::ecdsa::{
    signature::{Signer, Verifier},
    Signature, SigningKey, VerifyingKey,
};
use zeroize::Zeroize;

/// Length of a secp256k1 secret scalar in bytes.
pub const SECRET_KEY_LEN: usize = 32;

/// Compressed secp256k1 public key (33 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Secp256k1PublicKey([u8; 33]);

impl Secp256k1PublicKey {
    /// Parses a compressed SEC1 point (33 bytes, 0x02/0x03 prefix).
    pub fn from_bytes(bytes: [u8; 33]) -> Result<Self, CryptoError> {
        VerifyingKey::from_sec1_bytes(&bytes).map_err(|_| CryptoError::InvalidPublicKey)?;
        Ok(Self(bytes))
    }

    /// Raw compressed bytes.
    pub fn as_bytes(&self) -> &[u8; 33] {
        &self.0
    }

    /// Verifies a signature over `message`.
    pub fn verify(
        &self,
        message: &[u8],
        signature: &Secp256k1Signature,
    ) -> Result<(), CryptoError> {
        let verifying_key =
            VerifyingKey::from_sec1_bytes(&self.0).map_err(|_| CryptoError::InvalidPublicKey)?;
        let sig = Signature::from_slice(&signature.0).map_err(|_| CryptoError::InvalidSignature)?;
        verifying_key
            .verify(message, &sig)
            .map_err(|_| CryptoError::SignatureVerificationFailed)
    }
}

/// ECDSA signature in fixed r||s form (64 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Secp256k1Signature([u8; 64]);

impl Secp256k1Signature {
    /// Wraps raw r||s bytes.
    pub fn from_bytes(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }

    /// Raw r||s bytes.
    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }
}

/// secp256k1 keypair holding the sender's secret scalar.
pub struct Secp256k1KeyPair {
    signing_key: SigningKey,
}

impl Secp256k1KeyPair {
    /// Generates a fresh random keypair.
    pub fn generate() -> Self {
        Self {
            signing_key: SigningKey::random(&mut rand::thread_rng()),
        }
    }

    /// Parses a secret scalar from an untrusted byte slice.
    ///
    /// Rejects slices that are not exactly 32 bytes before touching the
    /// curve arithmetic, so the error distinguishes a wrong-length payload
    /// from an out-of-range scalar.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CryptoError> {
        if bytes.len() != SECRET_KEY_LEN {
            return Err(CryptoError::InvalidKeyLength {
                expected: SECRET_KEY_LEN,
                actual: bytes.len(),
            });
        }
        let mut scalar = [0u8; SECRET_KEY_LEN];
        scalar.copy_from_slice(bytes);
        let result = Self::from_bytes(scalar);
        scalar.zeroize();
        result
    }

    /// Parses a secret scalar from exactly 32 bytes.
    pub fn from_bytes(bytes: [u8; SECRET_KEY_LEN]) -> Result<Self, CryptoError> {
        let signing_key =
            SigningKey::from_bytes((&bytes).into()).map_err(|_| CryptoError::InvalidPrivateKey)?;
        Ok(Self { signing_key })
    }

    /// Compressed public key (33 bytes).
    pub fn public_key(&self) -> Secp256k1PublicKey {
        let sec1_bytes = self.signing_key.verifying_key().to_sec1_bytes();
        // SEC1 compressed form is always exactly 33 bytes
        let mut bytes = [0u8; 33];
        bytes.copy_from_slice(&sec1_bytes[..33]);
        Secp256k1PublicKey(bytes)
    }

    /// Signs `message` (deterministic, RFC 6979).
    pub fn sign(&self, message: &[u8]) -> Secp256k1Signature {
        let sig: Signature = self.signing_key.sign(message);
        Secp256k1Signature(sig.to_bytes().into())
    }

    /// Secret scalar bytes (for serialization back to the wire form).
    pub fn to_bytes(&self) -> [u8; SECRET_KEY_LEN] {
        self.signing_key.to_bytes().into()
    }
}

impl std::fmt::Debug for Secp256k1KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the secret scalar
        f.debug_struct("Secp256k1KeyPair")
            .field("public_key", &self.public_key())
            .finish()
    }
}

impl Drop for Secp256k1KeyPair {
    fn drop(&mut self) {
        let mut bytes: [u8; SECRET_KEY_LEN] = self.signing_key.to_bytes().into();
        bytes.zeroize();
    }
}

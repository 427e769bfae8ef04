//! # Signed Transaction Factory
//!
//! Default transaction-builder adapter. Encodes the payload with bincode,
//! signs the encoding with the sender's secp256k1 key (RFC 6979, so the
//! same inputs always produce the same transaction), and derives the
//! identifier as the SHA-256 of the signed bytes.

use crate::domain::args::FnArg;
use crate::domain::tx::{ContractId, PendingTransaction, TxId, TxPayload};
use crate::errors::TxBuildError;
use crate::ports::outbound::TxFactory;
use serde::Serialize;
use sha2::{Digest, Sha256};
use shared_codec::Cb58;
use shared_crypto::Secp256k1KeyPair;

/// The bytes the sender signs: everything except the signature itself.
#[derive(Serialize)]
struct TxPreimage<'a> {
    payload: &'a TxPayload,
    nonce: u64,
    sender_public_key: &'a [u8],
}

/// Transaction factory that encodes, signs, and derives identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignedTxFactory;

impl SignedTxFactory {
    fn build(
        &self,
        payload: TxPayload,
        nonce: u64,
        sender_key: &Secp256k1KeyPair,
    ) -> Result<PendingTransaction, TxBuildError> {
        let public_key = sender_key.public_key();
        let preimage = bincode::serialize(&TxPreimage {
            payload: &payload,
            nonce,
            sender_public_key: public_key.as_bytes(),
        })
        .map_err(|err| TxBuildError::Encoding(err.to_string()))?;

        let signature = sender_key.sign(&preimage);

        let mut hasher = Sha256::new();
        hasher.update(&preimage);
        hasher.update(signature.as_bytes());
        let id = TxId::from_bytes(hasher.finalize().into());

        Ok(PendingTransaction::new(
            id,
            payload,
            nonce,
            Cb58::new(public_key.as_bytes().to_vec()),
            Cb58::new(signature.as_bytes().to_vec()),
        ))
    }
}

impl TxFactory for SignedTxFactory {
    fn build_invoke_tx(
        &self,
        contract_id: ContractId,
        function: &str,
        args: Vec<FnArg>,
        byte_args: Vec<u8>,
        nonce: u64,
        sender_key: &Secp256k1KeyPair,
    ) -> Result<PendingTransaction, TxBuildError> {
        self.build(
            TxPayload::Invoke {
                contract_id,
                function: function.to_string(),
                args,
                byte_args: Cb58::new(byte_args),
            },
            nonce,
            sender_key,
        )
    }

    fn build_create_tx(
        &self,
        contract: Vec<u8>,
        nonce: u64,
        sender_key: &Secp256k1KeyPair,
    ) -> Result<PendingTransaction, TxBuildError> {
        self.build(
            TxPayload::CreateContract {
                contract: Cb58::new(contract),
            },
            nonce,
            sender_key,
        )
    }
}

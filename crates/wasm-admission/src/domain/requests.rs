//! # Validated Requests
//!
//! Domain-side request types with all-or-nothing validation: the first
//! violated rule short-circuits, and no downstream work (argument coercion,
//! key parsing, building) happens until validation has passed.

use crate::domain::args::TypedArgument;
use crate::domain::tx::ContractId;
use crate::domain::wire::WireValue;
use crate::errors::ValidationError;

/// A request to invoke a function on a deployed contract.
#[derive(Debug, Clone, PartialEq)]
pub struct InvocationRequest {
    /// Target contract; the zero identifier is invalid.
    pub contract_id: ContractId,
    /// Function name; must be non-empty.
    pub function: String,
    /// Sender's private key material; must be non-empty.
    pub sender_key: Vec<u8>,
    /// Sender's next unused nonce; must be at least 1.
    pub sender_nonce: u64,
    /// Integer arguments, in wire order.
    pub args: Vec<TypedArgument>,
    /// Unresolved byte-argument source.
    pub byte_args: WireValue,
}

impl InvocationRequest {
    /// Checks every scalar/byte field, stopping at the first violation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.sender_key.is_empty() {
            return Err(ValidationError::MissingSenderKey);
        }
        if self.sender_nonce == 0 {
            return Err(ValidationError::ZeroNonce);
        }
        if self.contract_id.is_zero() {
            return Err(ValidationError::EmptyContractId);
        }
        if self.function.is_empty() {
            return Err(ValidationError::EmptyFunction);
        }
        Ok(())
    }
}

/// A request to deploy a new contract module.
#[derive(Debug, Clone, PartialEq)]
pub struct ContractCreationRequest {
    /// The binary execution module; must be non-empty.
    pub contract: Vec<u8>,
    /// Sender's private key material; must be non-empty.
    pub sender_key: Vec<u8>,
    /// Sender's next unused nonce; must be at least 1.
    pub sender_nonce: u64,
}

impl ContractCreationRequest {
    /// Checks every field, stopping at the first violation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.sender_key.is_empty() {
            return Err(ValidationError::MissingSenderKey);
        }
        if self.contract.is_empty() {
            return Err(ValidationError::MissingContract);
        }
        if self.sender_nonce == 0 {
            return Err(ValidationError::ZeroNonce);
        }
        Ok(())
    }
}

//! Core domain logic: pure types and functions of the admission pipeline.

pub mod args;
pub mod byte_args;
pub mod mempool;
pub mod requests;
pub mod tx;
pub mod wire;

pub use args::{coerce_argument, ArgType, FnArg, TypedArgument};
pub use byte_args::resolve_byte_args;
pub use mempool::{Mempool, SharedMempool};
pub use requests::{ContractCreationRequest, InvocationRequest};
pub use tx::{ContractId, PendingTransaction, Receipt, TxId, TxPayload, TxStatus};
pub use wire::WireValue;

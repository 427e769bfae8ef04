//! Adapters: concrete implementations of the outbound ports, plus the
//! doubles tests substitute for them.

pub mod key_factory;
pub mod scheduler;
pub mod store;
pub mod tx_factory;

pub use key_factory::Secp256k1KeyFactory;
pub use scheduler::{ChannelScheduler, CountingScheduler, NoOpScheduler};
pub use store::InMemoryTxStore;
pub use tx_factory::SignedTxFactory;

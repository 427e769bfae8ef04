//! Ports: the traits this subsystem exposes (inbound) and depends on
//! (outbound). Adapters implement these; dependencies point inward.

pub mod inbound;
pub mod outbound;

pub use inbound::AdmissionApi;
pub use outbound::{BlockScheduler, KeyFactory, KeyScheme, PrivateKey, TxFactory, TxStore};

//! # Contract-Invocation Admission Subsystem
//!
//! The boundary layer of the wasm smart-contract chain: accepts untyped
//! wire-format requests to invoke or deploy a contract, converts them into
//! strongly-typed, validated transactions, and admits them into the shared
//! pending queue for downstream block production.
//!
//! ## Pipeline
//!
//! ```text
//! request ──→ validate ──→ coerce args ──→ decode byte args ──→ resolve key
//!                                                                   │
//!            tx id ←── notify scheduler ←── admit to mempool ←── build tx
//! ```
//!
//! Lookup (`GetTx`) is a separate read-only path against the external store.
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | Validation is all-or-nothing, first violation short-circuits | `domain/requests.rs` |
//! | Byte-argument resolution is unambiguous, JSON branch first | `domain/byte_args.rs` |
//! | Admission happens only after every prior step succeeds | `service.rs` |
//! | Mempool is append-only FIFO, single mutex | `domain/mempool.rs` |
//! | Pending transactions are never mutated post-construction | `domain/tx.rs` |
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      OUTER LAYER                                │
//! │  adapters/ - key factory, tx factory, store, scheduler         │
//! │  api/      - wire request/response types                        │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ implements ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      MIDDLE LAYER                               │
//! │  ports/inbound.rs  - AdmissionApi trait                         │
//! │  ports/outbound.rs - KeyFactory, TxFactory, TxStore,            │
//! │                      BlockScheduler traits                      │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ uses ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      INNER LAYER                                │
//! │  domain/wire.rs      - WireValue sum type                       │
//! │  domain/args.rs      - numeric argument coercion                │
//! │  domain/byte_args.rs - byte-argument resolution                 │
//! │  domain/requests.rs  - validated request types                  │
//! │  domain/tx.rs        - PendingTransaction, TxId, Receipt        │
//! │  domain/mempool.rs   - append-only pending queue                │
//! │  errors.rs           - error taxonomy                           │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod api;
pub mod domain;
pub mod errors;
pub mod ports;
pub mod service;

pub use domain::*;
pub use errors::AdmissionError;
pub use service::AdmissionService;

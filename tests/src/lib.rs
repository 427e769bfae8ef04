//! # Wasmchain Test Suite
//!
//! Unified test crate for cross-crate behavior that no single crate can
//! exercise alone.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/      # Wire-to-mempool admission pipeline flows
//!     ├── admission_pipeline.rs
//!     └── block_production.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p wasmchain-tests
//!
//! # By category
//! cargo test -p wasmchain-tests integration::
//! ```

#![allow(dead_code)]

pub mod integration;

/// Installs a tracing subscriber for test runs. Subsequent calls are a
/// no-op; filtering follows `RUST_LOG`.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

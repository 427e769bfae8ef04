//! Cross-crate integration tests for the admission pipeline.

pub mod admission_pipeline;
pub mod block_production;

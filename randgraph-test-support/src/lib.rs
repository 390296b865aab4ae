//! Shared test utilities used across randgraph crates.

pub mod fixtures;
pub mod property;
pub mod tracing;

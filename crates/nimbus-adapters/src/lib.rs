//! Infrastructure adapters for Nimbus.
//!
//! This crate implements the ports defined in `nimbus-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod remote;

// Re-export commonly used adapters
pub use remote::{HttpRemoteLookup, StaticRemoteLookup};

//! Application layer for Nimbus.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ValidationEngine)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! format rules itself. All format rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::ValidationEngine;

// Re-export port types (for adapter implementation)
pub use ports::{NameAvailability, ProjectRef, RemoteLookup};

pub use error::EngineError;

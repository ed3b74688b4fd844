//! Core domain layer for Nimbus.
//!
//! This module contains pure business logic with ZERO external calls.
//! All I/O (the remote lookup service) is reached via ports (traits)
//! defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: validation logic is synchronous
//! - **No I/O**: no filesystem, network, or external calls
//! - **Pure rules**: every format rule is a free function `&str -> bool`
//!   or `&str -> String`, trivially testable in isolation

pub mod bag;
pub mod error;
pub mod properties;
pub mod rules;
pub mod user;

// Re-exports for convenience
pub use bag::{ParamBag, ParamValue};
pub use error::{DomainError, ErrorCategory};
pub use properties::{fold_properties, parse_property};
pub use user::{ProjectMembership, Role, User, UserType};

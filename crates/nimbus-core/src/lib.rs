//! Nimbus Core - parameter validation for the Nimbus CLI
//!
//! This crate provides the domain and application layers for the Nimbus
//! cloud-platform CLI, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           nimbus-cli (CLI)              │
//! │   (builds the bag, runs validators)     │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │          (ValidationEngine)             │
//! │     normalize + validate parameters     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │         (Driven: RemoteLookup)          │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     nimbus-adapters (Infrastructure)    │
//! │   (HttpRemoteLookup, StaticRemoteLookup)│
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (ParamBag, format rules, User record)  │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use nimbus_core::{application::ValidationEngine, domain::ParamBag};
//! # fn remote() -> Box<dyn nimbus_core::application::RemoteLookup> { unimplemented!() }
//!
//! let mut bag = ParamBag::new();
//! bag.insert_str("version", "1.2.3");
//!
//! let engine = ValidationEngine::new(remote());
//! engine.source_version(&mut bag, None).unwrap();
//! assert_eq!(bag.get_str("version"), Some("v1.2.3"));
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ValidationEngine,
        ports::{NameAvailability, ProjectRef, RemoteLookup},
    };
    pub use crate::domain::{ParamBag, ParamValue, ProjectMembership, Role, User, UserType};
    pub use crate::error::{NimbusError, NimbusResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

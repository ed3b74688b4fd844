//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "validate deployment arguments".

pub mod validation_engine;

pub use validation_engine::ValidationEngine;

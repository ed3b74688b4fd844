//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `nimbus-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `RemoteLookup`: platform and release-registry queries
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

use uuid::Uuid;

use crate::application::error::EngineError;

/// A resolved project reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRef {
    pub id: Uuid,
    pub name: String,
}

/// Result of a deployment-name availability probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameAvailability {
    pub available: bool,
    /// Human-readable reason when the name is taken.
    pub message: String,
}

impl NameAvailability {
    pub fn available() -> Self {
        Self {
            available: true,
            message: String::new(),
        }
    }

    pub fn taken(message: impl Into<String>) -> Self {
        Self {
            available: false,
            message: message.into(),
        }
    }
}

/// Remote queries the validation engine needs answered.
///
/// Implementations must not mutate anything; every method is a read.
/// Transport failures surface as `EngineError::LookupFailed` so callers
/// can distinguish "the name is taken" from "we could not ask".
#[cfg_attr(test, mockall::automock)]
pub trait RemoteLookup: Send + Sync {
    /// Resolve a project by display name or id. `Ok(None)` means the
    /// project does not exist; `Err` means the lookup itself failed.
    fn resolve_project_by_name_or_id(
        &self,
        name_or_id: &str,
    ) -> Result<Option<ProjectRef>, EngineError>;

    /// Probe whether a sanitized deployment name is still free for the
    /// given resource kind (e.g. `"Site"`).
    fn check_name_availability(
        &self,
        name: &str,
        resource_kind: &str,
    ) -> Result<NameAvailability, EngineError>;

    /// Whether `version` exists as a release tag of `repository`.
    fn release_version_exists(&self, version: &str, repository: &str)
    -> Result<bool, EngineError>;
}

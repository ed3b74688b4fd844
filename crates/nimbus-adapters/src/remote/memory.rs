//! In-memory remote-lookup adapter for testing.

use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use nimbus_core::application::{
    EngineError,
    ports::{NameAvailability, ProjectRef, RemoteLookup},
};

/// Fixture-backed [`RemoteLookup`] for tests and offline runs.
///
/// Unknown projects resolve to `None`, unknown names are available, and
/// unknown release tags do not exist; populate the fixtures with the
/// builder methods.
#[derive(Debug, Clone, Default)]
pub struct StaticRemoteLookup {
    projects: HashMap<String, ProjectRef>,
    taken_names: HashMap<String, String>,
    releases: HashSet<(String, String)>,
    fail_all: bool,
}

impl StaticRemoteLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resolvable project under both its name and its id.
    pub fn with_project(mut self, name: &str, id: Uuid) -> Self {
        let project = ProjectRef {
            id,
            name: name.to_string(),
        };
        self.projects.insert(name.to_string(), project.clone());
        self.projects.insert(id.to_string(), project);
        self
    }

    /// Mark a deployment name as taken.
    pub fn with_taken_name(mut self, name: &str, message: &str) -> Self {
        self.taken_names
            .insert(name.to_string(), message.to_string());
        self
    }

    /// Register an existing release tag.
    pub fn with_release(mut self, repository: &str, version: &str) -> Self {
        self.releases
            .insert((repository.to_string(), version.to_string()));
        self
    }

    /// Make every lookup fail, simulating an unreachable platform.
    pub fn unreachable() -> Self {
        Self {
            fail_all: true,
            ..Self::default()
        }
    }

    fn guard(&self) -> Result<(), EngineError> {
        if self.fail_all {
            return Err(EngineError::LookupFailed {
                reason: "platform unreachable".into(),
            });
        }
        Ok(())
    }
}

impl RemoteLookup for StaticRemoteLookup {
    fn resolve_project_by_name_or_id(
        &self,
        name_or_id: &str,
    ) -> Result<Option<ProjectRef>, EngineError> {
        self.guard()?;
        Ok(self.projects.get(name_or_id).cloned())
    }

    fn check_name_availability(
        &self,
        name: &str,
        _resource_kind: &str,
    ) -> Result<NameAvailability, EngineError> {
        self.guard()?;
        Ok(match self.taken_names.get(name) {
            Some(message) => NameAvailability::taken(message.clone()),
            None => NameAvailability::available(),
        })
    }

    fn release_version_exists(
        &self,
        version: &str,
        repository: &str,
    ) -> Result<bool, EngineError> {
        self.guard()?;
        Ok(self
            .releases
            .contains(&(repository.to_string(), version.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_entries_have_benign_defaults() {
        let remote = StaticRemoteLookup::new();
        assert_eq!(remote.resolve_project_by_name_or_id("ghost").unwrap(), None);
        assert!(remote.check_name_availability("fresh", "Site").unwrap().available);
        assert!(!remote.release_version_exists("v1.0.0", "repo").unwrap());
    }

    #[test]
    fn project_resolves_by_name_and_id() {
        let id = Uuid::new_v4();
        let remote = StaticRemoteLookup::new().with_project("web-shop", id);
        let by_name = remote.resolve_project_by_name_or_id("web-shop").unwrap();
        let by_id = remote
            .resolve_project_by_name_or_id(&id.to_string())
            .unwrap();
        assert_eq!(by_name.unwrap().id, id);
        assert_eq!(by_id.unwrap().name, "web-shop");
    }

    #[test]
    fn unreachable_fails_every_call() {
        let remote = StaticRemoteLookup::unreachable();
        assert!(remote.resolve_project_by_name_or_id("x").is_err());
        assert!(remote.check_name_availability("x", "Site").is_err());
        assert!(remote.release_version_exists("v1.0.0", "r").is_err());
    }
}

//! Validation Engine - main application orchestrator.
//!
//! One method per CLI validator. Each method reads its parameters out of the
//! bag, applies the domain's format rules, performs any remote confirmation
//! through the injected [`RemoteLookup`] port, and only then writes
//! normalized values back. A returned error means the bag was not mutated
//! by that method.

use tracing::{debug, instrument, warn};

use crate::{
    application::{
        error::EngineError,
        ports::RemoteLookup,
    },
    domain::{DomainError, ParamBag, fold_properties, rules},
};

/// Resource kind probed when checking deployment-name availability.
const NAME_RESOURCE_KIND: &str = "Site";

/// Runs normalization and validation rules over a parameter bag.
///
/// The engine is stateless apart from the remote port; one instance can
/// validate any number of bags.
pub struct ValidationEngine {
    remote: Box<dyn RemoteLookup>,
}

impl ValidationEngine {
    pub fn new(remote: Box<dyn RemoteLookup>) -> Self {
        Self { remote }
    }

    /// Validate the full argument set of `deploy`.
    ///
    /// Checks, in order: the service-principal pair, the source-version
    /// option group (confirmed against `repository`'s release tags), the
    /// custom index URL, and finally the deployment name, which is
    /// sanitized and probed for availability unless `skip_name_validation`
    /// is set.
    #[instrument(skip_all)]
    pub fn deploy(&self, bag: &mut ParamBag, repository: &str) -> Result<(), EngineError> {
        self.require_pair(bag, "principal_name", "principal_password")?;
        self.source_version(bag, Some(repository))?;

        if let Some(name) = bag.get_str("name") {
            let sanitized = rules::sanitize_resource_name(name);
            if bag.is_set("skip_name_validation") {
                warn!(name = %sanitized, "skipping deployment name availability check");
            } else {
                debug!(name = %sanitized, "checking deployment name availability");
                let probe = self
                    .remote
                    .check_name_availability(&sanitized, NAME_RESOURCE_KIND)?;
                if !probe.available {
                    return Err(EngineError::NameUnavailable {
                        name: sanitized,
                        message: probe.message,
                    });
                }
            }
            bag.set_str("name", sanitized);
        }
        Ok(())
    }

    /// `name` must be a UUID or a display name of acceptable length.
    pub fn project_name(&self, bag: &mut ParamBag) -> Result<(), EngineError> {
        if let Some(name) = bag.get_str("name") {
            if !rules::is_valid_uuid(name) && !rules::is_valid_project_name(name) {
                return Err(DomainError::invalid_format(
                    "name",
                    "a project id, or a name between 4 and 30 characters",
                )
                .into());
            }
        }
        Ok(())
    }

    /// Resolve a project reference in place.
    ///
    /// A UUID passes untouched. A display name is length-checked, resolved
    /// through the platform, and REPLACED in the bag with the resolved
    /// project id. Both `--project` and `--name` style options route here,
    /// distinguished by `key`.
    pub fn project_ref(&self, bag: &mut ParamBag, key: &str) -> Result<(), EngineError> {
        let Some(value) = bag.get_str(key).map(str::to_owned) else {
            return Ok(());
        };
        if rules::is_valid_uuid(&value) {
            return Ok(());
        }
        if !rules::is_valid_project_name(&value) {
            return Err(DomainError::invalid_format(
                key,
                "a project id, or a name between 4 and 30 characters",
            )
            .into());
        }
        debug!(%key, name = %value, "resolving project reference");
        match self.remote.resolve_project_by_name_or_id(&value)? {
            Some(project) => {
                bag.set_str(key, project.id.to_string());
                Ok(())
            }
            None => Err(EngineError::ProjectNotFound {
                param: key.to_string(),
                identifier: value,
            }),
        }
    }

    /// Normalize a user reference: UUIDs and emails pass as-is, anything
    /// else has a leading URL scheme stripped. Never fails.
    pub fn user_ref(&self, bag: &mut ParamBag) -> Result<(), EngineError> {
        let stripped = match bag.get_str("user") {
            Some(v) if !rules::is_valid_uuid(v) && !rules::has_basic_email_format(v) => {
                Some(rules::strip_url_scheme(v))
            }
            _ => None,
        };
        if let Some(value) = stripped {
            bag.set_str("user", value);
        }
        Ok(())
    }

    /// Project-type / provider id rule.
    pub fn type_id(&self, bag: &mut ParamBag, key: &str) -> Result<(), EngineError> {
        if let Some(value) = bag.get_str(key) {
            if !rules::is_valid_type_id(value) {
                return Err(DomainError::invalid_format(
                    key,
                    "lowercase alphanumeric segments separated by periods, 5 to 255 characters",
                )
                .into());
            }
        }
        Ok(())
    }

    /// Every element of a list parameter must be a canonical UUID.
    pub fn uuid_list(&self, bag: &mut ParamBag, key: &str) -> Result<(), EngineError> {
        if let Some(values) = bag.get_list(key) {
            for value in values {
                if !rules::is_valid_uuid(value) {
                    return Err(DomainError::invalid_format(
                        key,
                        format!("'{value}' is not a valid id"),
                    )
                    .into());
                }
            }
        }
        Ok(())
    }

    /// Every element of a list parameter must match the type-id rule.
    pub fn id_list(&self, bag: &mut ParamBag, key: &str) -> Result<(), EngineError> {
        if let Some(values) = bag.get_list(key) {
            for value in values {
                if !rules::is_valid_type_id(value) {
                    return Err(DomainError::invalid_format(
                        key,
                        format!("'{value}' is not a valid event id"),
                    )
                    .into());
                }
            }
        }
        Ok(())
    }

    /// `tracking_id` must be a canonical UUID.
    pub fn tracking_id(&self, bag: &mut ParamBag) -> Result<(), EngineError> {
        if let Some(value) = bag.get_str("tracking_id") {
            if !rules::is_valid_uuid(value) {
                return Err(
                    DomainError::invalid_format("tracking_id", "a valid tracking id").into(),
                );
            }
        }
        Ok(())
    }

    /// A `http`/`https` URL.
    pub fn url(&self, bag: &mut ParamBag, key: &str) -> Result<(), EngineError> {
        if let Some(value) = bag.get_str(key) {
            if !rules::is_valid_url(value) {
                return Err(
                    DomainError::invalid_format(key, "a well-formed http(s) url").into(),
                );
            }
        }
        Ok(())
    }

    /// Function-host auth code format.
    pub fn auth_code(&self, bag: &mut ParamBag) -> Result<(), EngineError> {
        if let Some(value) = bag.get_str("auth_code") {
            if !rules::is_valid_auth_code(value) {
                return Err(
                    DomainError::invalid_format("auth_code", "a valid auth code").into(),
                );
            }
        }
        Ok(())
    }

    /// Validate the `version` | `prerelease` | `index_url` option group.
    ///
    /// At most one of the three may be set. A version is normalized
    /// (`1.2.3` → `v1.2.3`), format-checked, and - when `repository` is
    /// given - confirmed to exist as a published release tag before the
    /// normalized form is written back. An index URL is format-checked.
    pub fn source_version(
        &self,
        bag: &mut ParamBag,
        repository: Option<&str>,
    ) -> Result<(), EngineError> {
        self.mutually_exclusive(bag, &["version", "prerelease", "index_url"])?;

        if let Some(version) = bag.get_str("version") {
            let normalized = rules::normalize_version(version);
            if !rules::is_valid_version(&normalized) {
                return Err(DomainError::invalid_format(
                    "version",
                    "a release version like 'v1.0.0' or '1.0.0'",
                )
                .into());
            }
            if let Some(repository) = repository {
                debug!(version = %normalized, %repository, "confirming release tag");
                if !self.remote.release_version_exists(&normalized, repository)? {
                    return Err(EngineError::VersionNotFound {
                        version: normalized,
                        repository: repository.to_string(),
                    });
                }
            }
            bag.set_str("version", normalized);
        }

        self.url(bag, "index_url")
    }

    /// Fold a list of `key=value` tokens into a map parameter.
    pub fn properties(&self, bag: &mut ParamBag) -> Result<(), EngineError> {
        if let Some(tokens) = bag.get_list("properties") {
            let map = fold_properties(tokens.iter().map(String::as_str));
            bag.set_map("properties", map);
        }
        Ok(())
    }

    /// Both parameters must be set together, or neither.
    fn require_pair(&self, bag: &ParamBag, a: &str, b: &str) -> Result<(), EngineError> {
        match (bag.is_set(a), bag.is_set(b)) {
            (true, false) => Err(DomainError::MissingCounterpart {
                present: a.to_string(),
                missing: b.to_string(),
            }
            .into()),
            (false, true) => Err(DomainError::MissingCounterpart {
                present: b.to_string(),
                missing: a.to_string(),
            }
            .into()),
            _ => Ok(()),
        }
    }

    /// At most one of `keys` may carry a truthy value.
    fn mutually_exclusive(&self, bag: &ParamBag, keys: &[&str]) -> Result<(), EngineError> {
        let set: Vec<String> = keys
            .iter()
            .filter(|k| bag.is_set(k))
            .map(ToString::to_string)
            .collect();
        if set.len() > 1 {
            return Err(DomainError::ConflictingOptions { options: set }.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::application::ports::{MockRemoteLookup, NameAvailability, ProjectRef};

    fn engine(mock: MockRemoteLookup) -> ValidationEngine {
        ValidationEngine::new(Box::new(mock))
    }

    fn offline_engine() -> ValidationEngine {
        // Panics on any remote call; local-only paths must not reach out.
        engine(MockRemoteLookup::new())
    }

    // ── source version ────────────────────────────────────────────────────

    #[test]
    fn version_is_normalized_in_the_bag() {
        let mut bag = ParamBag::new();
        bag.insert_str("version", "1.2.3");
        let engine = offline_engine();
        engine.source_version(&mut bag, None).unwrap();
        assert_eq!(bag.get_str("version"), Some("v1.2.3"));
    }

    #[test]
    fn bad_version_leaves_bag_untouched() {
        let mut bag = ParamBag::new();
        bag.insert_str("version", "1.2");
        let err = offline_engine().source_version(&mut bag, None).unwrap_err();
        assert!(matches!(
            err,
            EngineError::Domain(DomainError::InvalidFormat { .. })
        ));
        assert_eq!(bag.get_str("version"), Some("1.2"));
    }

    #[test]
    fn version_and_prerelease_conflict() {
        let mut bag = ParamBag::new();
        bag.insert_str("version", "v1.0.0");
        bag.insert_bool("prerelease", true);
        let err = offline_engine().source_version(&mut bag, None).unwrap_err();
        assert!(matches!(
            err,
            EngineError::Domain(DomainError::ConflictingOptions { .. })
        ));
    }

    #[test]
    fn prerelease_false_does_not_conflict() {
        let mut bag = ParamBag::new();
        bag.insert_str("version", "v1.0.0");
        bag.insert_bool("prerelease", false);
        offline_engine().source_version(&mut bag, None).unwrap();
    }

    #[test]
    fn unknown_release_tag_is_not_found() {
        let mut bag = ParamBag::new();
        bag.insert_str("version", "9.9.9");
        let mut mock = MockRemoteLookup::new();
        mock.expect_release_version_exists()
            .withf(|v, r| v == "v9.9.9" && r == "nimbus-platform")
            .returning(|_, _| Ok(false));
        let err = engine(mock)
            .source_version(&mut bag, Some("nimbus-platform"))
            .unwrap_err();
        assert!(matches!(err, EngineError::VersionNotFound { .. }));
        // Not normalized on failure.
        assert_eq!(bag.get_str("version"), Some("9.9.9"));
    }

    #[test]
    fn existing_release_tag_passes_and_normalizes() {
        let mut bag = ParamBag::new();
        bag.insert_str("version", "V2.0.1");
        let mut mock = MockRemoteLookup::new();
        mock.expect_release_version_exists()
            .returning(|_, _| Ok(true));
        engine(mock)
            .source_version(&mut bag, Some("nimbus-platform"))
            .unwrap();
        assert_eq!(bag.get_str("version"), Some("v2.0.1"));
    }

    // ── deploy ────────────────────────────────────────────────────────────

    #[test]
    fn principal_name_without_password_fails() {
        let mut bag = ParamBag::new();
        bag.insert_str("principal_name", "svc-app");
        let err = offline_engine().deploy(&mut bag, "nimbus-platform").unwrap_err();
        assert!(matches!(
            err,
            EngineError::Domain(DomainError::MissingCounterpart { .. })
        ));
    }

    #[test]
    fn deploy_sanitizes_name_and_checks_availability() {
        let mut bag = ParamBag::new();
        bag.insert_str("name", "My_Cool Name!");
        let mut mock = MockRemoteLookup::new();
        mock.expect_check_name_availability()
            .withf(|name, kind| name == "mycoolname" && kind == "Site")
            .returning(|_, _| Ok(NameAvailability::available()));
        engine(mock).deploy(&mut bag, "nimbus-platform").unwrap();
        assert_eq!(bag.get_str("name"), Some("mycoolname"));
    }

    #[test]
    fn taken_name_is_rejected() {
        let mut bag = ParamBag::new();
        bag.insert_str("name", "webshop");
        let mut mock = MockRemoteLookup::new();
        mock.expect_check_name_availability()
            .returning(|_, _| Ok(NameAvailability::taken("already in use")));
        let err = engine(mock).deploy(&mut bag, "nimbus-platform").unwrap_err();
        assert!(matches!(err, EngineError::NameUnavailable { .. }));
        assert_eq!(bag.get_str("name"), Some("webshop"));
    }

    #[test]
    fn skip_name_validation_makes_no_remote_call() {
        let mut bag = ParamBag::new();
        bag.insert_str("name", "WebShop");
        bag.insert_bool("skip_name_validation", true);
        // Offline engine: any remote call would panic.
        offline_engine().deploy(&mut bag, "nimbus-platform").unwrap();
        assert_eq!(bag.get_str("name"), Some("webshop"));
    }

    #[test]
    fn lookup_failure_propagates() {
        let mut bag = ParamBag::new();
        bag.insert_str("name", "webshop");
        let mut mock = MockRemoteLookup::new();
        mock.expect_check_name_availability().returning(|_, _| {
            Err(EngineError::LookupFailed {
                reason: "connection refused".into(),
            })
        });
        let err = engine(mock).deploy(&mut bag, "nimbus-platform").unwrap_err();
        assert!(err.is_retryable());
    }

    // ── project refs ──────────────────────────────────────────────────────

    #[test]
    fn project_ref_replaces_name_with_resolved_id() {
        let id = Uuid::new_v4();
        let mut bag = ParamBag::new();
        bag.insert_str("project", "web-shop");
        let mut mock = MockRemoteLookup::new();
        mock.expect_resolve_project_by_name_or_id()
            .withf(|n| n == "web-shop")
            .returning(move |_| {
                Ok(Some(ProjectRef {
                    id,
                    name: "web-shop".into(),
                }))
            });
        engine(mock).project_ref(&mut bag, "project").unwrap();
        assert_eq!(bag.get_str("project"), Some(id.to_string().as_str()));
    }

    #[test]
    fn project_ref_passes_uuid_without_lookup() {
        let id = Uuid::new_v4().to_string();
        let mut bag = ParamBag::new();
        bag.insert_str("project", &id);
        offline_engine().project_ref(&mut bag, "project").unwrap();
        assert_eq!(bag.get_str("project"), Some(id.as_str()));
    }

    #[test]
    fn unresolved_project_is_not_found() {
        let mut bag = ParamBag::new();
        bag.insert_str("project", "ghost-project");
        let mut mock = MockRemoteLookup::new();
        mock.expect_resolve_project_by_name_or_id()
            .returning(|_| Ok(None));
        let err = engine(mock).project_ref(&mut bag, "project").unwrap_err();
        assert!(matches!(err, EngineError::ProjectNotFound { .. }));
        assert_eq!(bag.get_str("project"), Some("ghost-project"));
    }

    #[test]
    fn too_short_project_ref_fails_locally() {
        let mut bag = ParamBag::new();
        bag.insert_str("project", "abc");
        let err = offline_engine().project_ref(&mut bag, "project").unwrap_err();
        assert!(matches!(err, EngineError::Domain(_)));
    }

    // ── user refs ─────────────────────────────────────────────────────────

    #[test]
    fn user_ref_strips_url_scheme() {
        let mut bag = ParamBag::new();
        bag.insert_str("user", "https://login.example.com/me");
        offline_engine().user_ref(&mut bag).unwrap();
        assert_eq!(bag.get_str("user"), Some("login.example.com/me"));
    }

    #[test]
    fn user_ref_leaves_email_and_uuid_alone() {
        let mut bag = ParamBag::new();
        bag.insert_str("user", "user@example.com");
        offline_engine().user_ref(&mut bag).unwrap();
        assert_eq!(bag.get_str("user"), Some("user@example.com"));
    }

    // ── simple format rules ───────────────────────────────────────────────

    #[test]
    fn type_id_rejects_uppercase() {
        let mut bag = ParamBag::new();
        bag.insert_str("name", "My.Provider");
        assert!(offline_engine().type_id(&mut bag, "name").is_err());
    }

    #[test]
    fn uuid_list_rejects_first_bad_element() {
        let mut bag = ParamBag::new();
        bag.insert_list(
            "subscriptions",
            vec![Uuid::new_v4().to_string(), "nope".into()],
        );
        assert!(offline_engine().uuid_list(&mut bag, "subscriptions").is_err());
    }

    #[test]
    fn id_list_accepts_provider_ids() {
        let mut bag = ParamBag::new();
        bag.insert_list("events", vec!["azure.devops".into(), "github.ci1".into()]);
        offline_engine().id_list(&mut bag, "events").unwrap();
    }

    #[test]
    fn tracking_id_must_be_uuid() {
        let mut bag = ParamBag::new();
        bag.insert_str("tracking_id", "not-a-uuid");
        assert!(offline_engine().tracking_id(&mut bag).is_err());
    }

    #[test]
    fn properties_fold_into_a_map() {
        let mut bag = ParamBag::new();
        bag.insert_list(
            "properties",
            vec!["a=b=c".into(), "flag".into(), "a=z".into()],
        );
        offline_engine().properties(&mut bag).unwrap();
        let map = bag.get_map("properties").unwrap();
        assert_eq!(map["a"], "z");
        assert_eq!(map["flag"], "");
    }
}

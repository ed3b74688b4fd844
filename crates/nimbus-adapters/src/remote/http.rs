//! HTTP adapter for the `RemoteLookup` port.
//!
//! Talks to two services: the platform API (project resolution and name
//! availability, under a configurable base URL) and the GitHub releases API
//! (release-tag existence). All calls are blocking, single-shot, with a
//! 10 second timeout on the shared client.

use std::time::Duration;

use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;
use uuid::Uuid;

use nimbus_core::application::{
    EngineError,
    ports::{NameAvailability, ProjectRef, RemoteLookup},
};

const GITHUB_API: &str = "https://api.github.com";
const DEFAULT_RELEASES_OWNER: &str = "nimbus-platform";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Deserialize)]
struct ProjectResponse {
    id: String,
    name: String,
}

#[derive(Deserialize)]
struct AvailabilityResponse {
    available: bool,
    #[serde(default)]
    message: String,
}

/// Platform-backed implementation of [`RemoteLookup`].
pub struct HttpRemoteLookup {
    client: reqwest::blocking::Client,
    base_url: String,
    releases_owner: String,
}

impl HttpRemoteLookup {
    /// Build an adapter against the given platform base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self, EngineError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(format!("nimbus/{}", nimbus_core::VERSION))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| EngineError::LookupFailed {
                reason: format!("could not create HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            releases_owner: DEFAULT_RELEASES_OWNER.to_string(),
        })
    }

    /// Override the GitHub organization release tags are looked up under.
    pub fn with_releases_owner(mut self, owner: impl Into<String>) -> Self {
        self.releases_owner = owner.into();
        self
    }

    fn lookup_failed(e: reqwest::Error) -> EngineError {
        EngineError::LookupFailed {
            reason: e.to_string(),
        }
    }

    fn unexpected_status(context: &str, status: StatusCode) -> EngineError {
        EngineError::LookupFailed {
            reason: format!("{context} returned HTTP {status}"),
        }
    }
}

impl RemoteLookup for HttpRemoteLookup {
    fn resolve_project_by_name_or_id(
        &self,
        name_or_id: &str,
    ) -> Result<Option<ProjectRef>, EngineError> {
        let url = format!("{}/api/projects/{}", self.base_url, name_or_id);
        debug!(%url, "resolving project");

        let response = self.client.get(&url).send().map_err(Self::lookup_failed)?;
        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            StatusCode::OK => {
                let body: ProjectResponse = response.json().map_err(Self::lookup_failed)?;
                let id = Uuid::parse_str(&body.id).map_err(|e| EngineError::LookupFailed {
                    reason: format!("platform returned malformed project id: {e}"),
                })?;
                Ok(Some(ProjectRef {
                    id,
                    name: body.name,
                }))
            }
            status => Err(Self::unexpected_status("project lookup", status)),
        }
    }

    fn check_name_availability(
        &self,
        name: &str,
        resource_kind: &str,
    ) -> Result<NameAvailability, EngineError> {
        let url = format!("{}/api/names/check", self.base_url);
        debug!(%url, %name, %resource_kind, "checking name availability");

        let response = self
            .client
            .get(&url)
            .query(&[("name", name), ("kind", resource_kind)])
            .send()
            .map_err(Self::lookup_failed)?;
        if response.status() != StatusCode::OK {
            return Err(Self::unexpected_status(
                "availability check",
                response.status(),
            ));
        }

        let body: AvailabilityResponse = response.json().map_err(Self::lookup_failed)?;
        Ok(NameAvailability {
            available: body.available,
            message: body.message,
        })
    }

    fn release_version_exists(
        &self,
        version: &str,
        repository: &str,
    ) -> Result<bool, EngineError> {
        let url = format!(
            "{GITHUB_API}/repos/{}/{}/releases/tags/{}",
            self.releases_owner, repository, version
        );
        debug!(%url, "checking release tag");

        let response = self.client.get(&url).send().map_err(Self::lookup_failed)?;
        match response.status() {
            StatusCode::OK => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            status => Err(Self::unexpected_status("release lookup", status)),
        }
    }
}

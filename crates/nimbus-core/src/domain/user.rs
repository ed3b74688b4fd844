//! The `User` client record and its wire representation.
//!
//! Field names and enum values follow the platform API's JSON contract:
//! camelCase object keys, PascalCase enum values. Optional fields are
//! omitted from the serialized form when unset.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// How a principal authenticates against the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserType {
    User,
    System,
    Provider,
    Application,
}

/// Organization-level role of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    None,
    Creator,
    Admin,
}

/// A user's role within a single project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMembership {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, String>,
}

/// A platform user as returned by (and sent to) the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_type: Option<UserType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub project_memberships: Vec<ProjectMembership>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, String>,
    pub id: String,
}

impl User {
    /// A bare user record with only the required id set.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            tenant: None,
            user_type: None,
            role: None,
            project_memberships: Vec::new(),
            properties: BTreeMap::new(),
            id: id.into(),
        }
    }
}

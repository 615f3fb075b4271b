//! The permission model.
//!
//! A [`Permission`] grants one [`Action`] on a [`Resource`]. A resource
//! without an id stands for every resource of its type; with an id it names
//! exactly one instance.
//!
//! Permissions have a compact text form used in logs, errors and config:
//!
//! ```
//! use warden_acl::{Action, Permission, ResourceType};
//! use warden_core::Id;
//!
//! let user = Id::new(1).unwrap();
//! let p = Permission::instance(Action::Write, ResourceType::Users, user);
//! assert_eq!(p.to_string(), "write:users/0000000000000001");
//!
//! let all: Permission = "read:orgs".parse().unwrap();
//! assert_eq!(all, Permission::type_wide(Action::Read, ResourceType::Orgs));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use warden_core::{Error, Id, Result};

// ============================================================================
// Action
// ============================================================================

/// The kind of operation a permission authorizes.
///
/// Actions are flat: `Write` does not imply `Read` and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Read access.
    Read,
    /// Write access.
    Write,
}

impl Action {
    /// All actions.
    pub const ALL: [Action; 2] = [Action::Read, Action::Write];

    /// Stable string name of the action.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Write => "write",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Action::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| Error::invalid(format!("unknown action '{s}'")))
    }
}

// ============================================================================
// ResourceType
// ============================================================================

/// The kinds of resource a permission can apply to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResourceType {
    /// API tokens.
    Authorizations,
    /// Storage buckets.
    Buckets,
    /// Dashboards.
    Dashboards,
    /// Organizations.
    Orgs,
    /// External data sources.
    Sources,
    /// Scheduled tasks.
    Tasks,
    /// Collection agent configurations.
    Telegrafs,
    /// User accounts.
    Users,
    /// Query variables.
    Variables,
    /// Scraper targets.
    Scrapers,
    /// Secrets.
    Secrets,
    /// Labels.
    Labels,
    /// Views.
    Views,
    /// Documents.
    Documents,
    /// Notification rules.
    NotificationRules,
    /// Notification endpoints.
    NotificationEndpoints,
    /// Checks.
    Checks,
    /// Database/retention-policy mappings.
    Dbrp,
}

impl ResourceType {
    /// All resource types.
    pub const ALL: [ResourceType; 18] = [
        ResourceType::Authorizations,
        ResourceType::Buckets,
        ResourceType::Dashboards,
        ResourceType::Orgs,
        ResourceType::Sources,
        ResourceType::Tasks,
        ResourceType::Telegrafs,
        ResourceType::Users,
        ResourceType::Variables,
        ResourceType::Scrapers,
        ResourceType::Secrets,
        ResourceType::Labels,
        ResourceType::Views,
        ResourceType::Documents,
        ResourceType::NotificationRules,
        ResourceType::NotificationEndpoints,
        ResourceType::Checks,
        ResourceType::Dbrp,
    ];

    /// Stable string name of the resource type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Authorizations => "authorizations",
            Self::Buckets => "buckets",
            Self::Dashboards => "dashboards",
            Self::Orgs => "orgs",
            Self::Sources => "sources",
            Self::Tasks => "tasks",
            Self::Telegrafs => "telegrafs",
            Self::Users => "users",
            Self::Variables => "variables",
            Self::Scrapers => "scrapers",
            Self::Secrets => "secrets",
            Self::Labels => "labels",
            Self::Views => "views",
            Self::Documents => "documents",
            Self::NotificationRules => "notificationRules",
            Self::NotificationEndpoints => "notificationEndpoints",
            Self::Checks => "checks",
            Self::Dbrp => "dbrp",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ResourceType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::invalid(format!("unknown resource type '{s}'")))
    }
}

// ============================================================================
// Resource
// ============================================================================

/// What a permission applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resource {
    /// Type of the resource.
    #[serde(rename = "type")]
    pub kind: ResourceType,
    /// Specific instance, or `None` for every resource of `kind`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
}

impl Resource {
    /// Every resource of the given type.
    pub fn all(kind: ResourceType) -> Self {
        Self { kind, id: None }
    }

    /// One resource instance.
    pub fn one(kind: ResourceType, id: Id) -> Self {
        Self { kind, id: Some(id) }
    }

    /// Whether this resource covers `other`.
    ///
    /// Types must be equal. A resource without an id covers every id of its
    /// type; otherwise the ids must be equal.
    pub fn covers(&self, other: &Resource) -> bool {
        if self.kind != other.kind {
            return false;
        }
        match self.id {
            None => true,
            Some(id) => other.id == Some(id),
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "{}/{id}", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

// ============================================================================
// Permission
// ============================================================================

/// A single grant: an action on a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Permission {
    /// What may be done.
    pub action: Action,
    /// What it may be done to.
    pub resource: Resource,
}

impl Permission {
    /// Creates a permission from its parts.
    pub fn new(action: Action, resource: Resource) -> Self {
        Self { action, resource }
    }

    /// A permission over every resource of a type.
    pub fn type_wide(action: Action, kind: ResourceType) -> Self {
        Self::new(action, Resource::all(kind))
    }

    /// A permission over a single resource instance.
    pub fn instance(action: Action, kind: ResourceType, id: Id) -> Self {
        Self::new(action, Resource::one(kind, id))
    }

    /// Whether holding `self` satisfies a requirement for `required`.
    ///
    /// Actions must match exactly and `self.resource` must cover
    /// `required.resource` (see [`Resource::covers`]).
    pub fn matches(&self, required: &Permission) -> bool {
        self.action == required.action && self.resource.covers(&required.resource)
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.action, self.resource)
    }
}

impl FromStr for Permission {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (action, resource) = s
            .split_once(':')
            .ok_or_else(|| Error::invalid(format!("permission '{s}' is missing ':'")))?;
        let action: Action = action.parse()?;
        let resource = match resource.split_once('/') {
            Some((kind, id)) => Resource::one(kind.parse()?, id.parse()?),
            None => Resource::all(resource.parse()?),
        };
        Ok(Self::new(action, resource))
    }
}

// ============================================================================
// PermissionSet
// ============================================================================

/// The permissions granted to one caller for one request.
///
/// Order carries no meaning and duplicates are harmless.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet(Vec<Permission>);

impl PermissionSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any permission in the set satisfies `required`.
    pub fn allows(&self, required: &Permission) -> bool {
        self.0.iter().any(|p| p.matches(required))
    }

    /// Iterates over the granted permissions.
    pub fn iter(&self) -> std::slice::Iter<'_, Permission> {
        self.0.iter()
    }

    /// Number of granted permissions.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing is granted.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Permission>> for PermissionSet {
    fn from(permissions: Vec<Permission>) -> Self {
        Self(permissions)
    }
}

impl FromIterator<Permission> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = Permission>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a PermissionSet {
    type Item = &'a Permission;
    type IntoIter = std::slice::Iter<'a, Permission>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ============================================================================
// Tests
// ============================================================================

//! Caller identities and the permission check.

use std::fmt;

use warden_core::{Error, Id, Result};

use crate::permission::{Permission, PermissionSet};

/// The authenticated caller attached to a request.
///
/// Implement this for each way a caller can authenticate (API token,
/// browser session, ...). Implementations are read-only for the lifetime
/// of a request.
pub trait Authorizer: fmt::Debug + Send + Sync {
    /// Every permission the caller holds.
    fn permissions(&self) -> &PermissionSet;

    /// Id of the entity that authenticated, when there is one.
    fn identifier(&self) -> Option<Id>;

    /// Short name for the kind of authorizer, used in logs.
    fn kind(&self) -> &str;
}

/// Check that `authorizer` holds a permission covering `required`.
///
/// Returns [`Error::Forbidden`] naming `required` otherwise.
pub fn is_allowed(authorizer: &dyn Authorizer, required: &Permission) -> Result<()> {
    if authorizer.permissions().allows(required) {
        log::debug!(
            "{} authorizer {} granted {required}",
            authorizer.kind(),
            display_identifier(authorizer.identifier()),
        );
        return Ok(());
    }
    log::warn!(
        "{} authorizer {} denied {required}",
        authorizer.kind(),
        display_identifier(authorizer.identifier()),
    );
    Err(Error::forbidden(required))
}

fn display_identifier(id: Option<Id>) -> String {
    id.map(|id| id.to_string())
        .unwrap_or_else(|| "(anonymous)".to_string())
}

/// An authorizer with a fixed set of permissions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticAuthorizer {
    identifier: Option<Id>,
    kind: String,
    permissions: PermissionSet,
}

impl StaticAuthorizer {
    /// Default value of [`Authorizer::kind`].
    pub const DEFAULT_KIND: &'static str = "static";

    /// Create an anonymous authorizer holding `permissions`.
    pub fn new(permissions: impl Into<PermissionSet>) -> Self {
        Self {
            identifier: None,
            kind: Self::DEFAULT_KIND.to_string(),
            permissions: permissions.into(),
        }
    }

    /// Set the id of the entity that authenticated.
    pub fn with_identifier(mut self, id: Id) -> Self {
        self.identifier = Some(id);
        self
    }

    /// Set the kind reported in logs.
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }
}

impl Default for StaticAuthorizer {
    fn default() -> Self {
        Self::new(PermissionSet::new())
    }
}

impl Authorizer for StaticAuthorizer {
    fn permissions(&self) -> &PermissionSet {
        &self.permissions
    }

    fn identifier(&self) -> Option<Id> {
        self.identifier
    }

    fn kind(&self) -> &str {
        &self.kind
    }
}

//! Static grants loaded from TOML.
//!
//! ```toml
//! identifier = "0000000000000001"
//! kind = "service"
//! permissions = [
//!     "write:users/0000000000000001",
//!     "read:orgs",
//! ]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use warden_core::{Error, Id, Result};

use crate::authorizer::StaticAuthorizer;
use crate::permission::{Permission, PermissionSet};

/// Configuration for a [`StaticAuthorizer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizerConfig {
    /// Id of the entity these grants belong to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Id>,
    /// Kind reported in logs.
    #[serde(default = "default_kind")]
    pub kind: String,
    /// Permissions in text form (`write:users/0000000000000001`).
    #[serde(default)]
    pub permissions: Vec<String>,
}

fn default_kind() -> String {
    StaticAuthorizer::DEFAULT_KIND.to_string()
}

impl Default for AuthorizerConfig {
    fn default() -> Self {
        Self {
            identifier: None,
            kind: default_kind(),
            permissions: Vec::new(),
        }
    }
}

impl AuthorizerConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        log::debug!("Loading authorizer config from {}", path.display());
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Parse every permission string.
    ///
    /// Fails with [`Error::Config`] naming the first entry that does not parse.
    pub fn permission_set(&self) -> Result<PermissionSet> {
        self.permissions
            .iter()
            .enumerate()
            .map(|(i, raw)| {
                raw.parse::<Permission>().map_err(|e| {
                    Error::config(format!("permissions[{i}] ('{raw}') is invalid: {e}"))
                })
            })
            .collect()
    }

    /// Build the authorizer these grants describe.
    pub fn into_authorizer(self) -> Result<StaticAuthorizer> {
        let permissions = self.permission_set()?;
        let mut authorizer = StaticAuthorizer::new(permissions).with_kind(self.kind);
        if let Some(id) = self.identifier {
            authorizer = authorizer.with_identifier(id);
        }
        Ok(authorizer)
    }
}

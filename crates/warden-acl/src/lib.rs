//! # warden-acl
//!
//! Access control primitives for Warden:
//! - [`Permission`] — an action on a resource type, optionally one instance
//! - [`PermissionSet`] — the permissions granted to one caller
//! - [`Authorizer`] — the caller identity attached to a request
//! - [`RequestContext`] — the per-request value every service call receives
//! - [`AuthorizerConfig`] — static grants loaded from TOML

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod authorizer;
pub mod config;
pub mod context;
pub mod permission;

pub use authorizer::{Authorizer, StaticAuthorizer, is_allowed};
pub use config::AuthorizerConfig;
pub use context::RequestContext;
pub use permission::{Action, Permission, PermissionSet, Resource, ResourceType};
pub use warden_core::{Error, Id, Result};

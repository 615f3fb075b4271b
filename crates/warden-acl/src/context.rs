//! Per-request context.
//!
//! Every service call receives a [`RequestContext`] explicitly. The context
//! carries the caller's [`Authorizer`], attached once at request entry by
//! whatever authenticated the request, and a request id for log
//! correlation.
//!
//! # Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use warden_acl::{RequestContext, StaticAuthorizer};
//!
//! let ctx = RequestContext::background();
//! assert!(ctx.authorizer().is_err());
//!
//! let ctx = ctx.with_authorizer(Arc::new(StaticAuthorizer::default()));
//! assert!(ctx.authorizer().is_ok());
//! ```

use std::sync::Arc;

use uuid::Uuid;
use warden_core::{Error, Result};

use crate::authorizer::Authorizer;
use crate::permission::PermissionSet;

/// The execution context threaded through every service call.
///
/// Cheap to clone (Arc internals).
#[derive(Debug, Clone)]
pub struct RequestContext {
    request_id: Uuid,
    authorizer: Option<Arc<dyn Authorizer>>,
}

impl RequestContext {
    /// A fresh context with no authorizer attached.
    pub fn background() -> Self {
        Self {
            request_id: Uuid::new_v4(),
            authorizer: None,
        }
    }

    /// Attach the caller's authorizer, replacing any previous one.
    pub fn with_authorizer(mut self, authorizer: Arc<dyn Authorizer>) -> Self {
        self.authorizer = Some(authorizer);
        self
    }

    /// Id of this request, for log correlation.
    pub fn request_id(&self) -> Uuid {
        self.request_id
    }

    /// The caller's authorizer.
    ///
    /// Fails with [`Error::MissingAuthorizer`] when none was attached.
    pub fn authorizer(&self) -> Result<&Arc<dyn Authorizer>> {
        self.authorizer.as_ref().ok_or(Error::MissingAuthorizer)
    }

    /// The caller's permissions.
    ///
    /// Fails with [`Error::MissingAuthorizer`] when no authorizer was attached.
    pub fn permissions(&self) -> Result<&PermissionSet> {
        Ok(self.authorizer()?.permissions())
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::background()
    }
}

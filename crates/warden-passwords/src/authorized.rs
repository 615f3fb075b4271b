//! Permission-checked password service.

use std::sync::Arc;

use async_trait::async_trait;
use warden_acl::{Action, Permission, RequestContext, ResourceType, is_allowed};
use warden_core::{Id, Result};

use crate::service::PasswordService;

/// Wraps a [`PasswordService`] with a permission check.
///
/// A call is delegated only if the caller holds `write` on the target user
/// (either that user or every user). Otherwise the call fails and the
/// wrapped service is never invoked. Errors from the wrapped service are
/// returned as-is.
pub struct AuthorizedPasswordService<S: ?Sized> {
    next: Arc<S>,
}

impl<S: PasswordService + ?Sized> AuthorizedPasswordService<S> {
    /// Wrap `next`.
    pub fn new(next: Arc<S>) -> Self {
        Self { next }
    }

    /// Permission a caller must hold to set the password of `user_id`.
    pub fn required_permission(user_id: Id) -> Permission {
        Permission::instance(Action::Write, ResourceType::Users, user_id)
    }
}

impl<S: ?Sized> Clone for AuthorizedPasswordService<S> {
    fn clone(&self) -> Self {
        Self {
            next: Arc::clone(&self.next),
        }
    }
}

#[async_trait]
impl<S: PasswordService + ?Sized> PasswordService for AuthorizedPasswordService<S> {
    async fn set_password(&self, ctx: &RequestContext, user_id: Id, password: &str) -> Result<()> {
        let authorizer = ctx.authorizer().inspect_err(|_| {
            log::warn!(
                "request {}: no authorizer, refusing to set password for user {user_id}",
                ctx.request_id()
            );
        })?;
        is_allowed(&**authorizer, &Self::required_permission(user_id))?;

        log::debug!(
            "request {}: setting password for user {user_id}",
            ctx.request_id()
        );
        self.next.set_password(ctx, user_id, password).await
    }
}

//! The password capability.

use async_trait::async_trait;
use warden_acl::RequestContext;
use warden_core::{Id, Result};

/// Sets user passwords.
///
/// How passwords are validated, hashed and stored is up to the
/// implementation. Wrappers such as
/// [`AuthorizedPasswordService`](crate::AuthorizedPasswordService)
/// implement this same trait, so callers cannot tell a wrapped service from
/// an unwrapped one.
#[async_trait]
pub trait PasswordService: Send + Sync {
    /// Overwrite the password of `user_id`.
    async fn set_password(&self, ctx: &RequestContext, user_id: Id, password: &str) -> Result<()>;
}

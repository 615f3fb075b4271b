//! Common test utilities for password service integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use warden_acl::{Action, Permission, RequestContext, ResourceType, StaticAuthorizer};
use warden_core::{Id, Result};
use warden_passwords::PasswordService;

type SetPasswordFn = dyn Fn(Id, &str) -> Result<()> + Send + Sync;

/// A password service that records every call it receives.
///
/// The outcome of each call is decided by a configurable function, so
/// tests can check that results pass through the gate unchanged.
pub struct SpyPasswordService {
    calls: Mutex<Vec<(Id, String)>>,
    set_password_fn: Box<SetPasswordFn>,
    delay: Option<Duration>,
}

impl SpyPasswordService {
    /// A spy that accepts every call.
    pub fn new() -> Self {
        Self::with_fn(|_, _| Ok(()))
    }

    /// A spy whose calls are answered by `f`.
    pub fn with_fn<F>(f: F) -> Self
    where
        F: Fn(Id, &str) -> Result<()> + Send + Sync + 'static,
    {
        Self {
            calls: Mutex::new(Vec::new()),
            set_password_fn: Box::new(f),
            delay: None,
        }
    }

    /// A spy that accepts every call after sleeping for `delay`.
    ///
    /// The call is recorded before the sleep starts.
    pub fn slow(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::new()
        }
    }

    /// Every `(user_id, password)` received so far.
    pub fn calls(&self) -> Vec<(Id, String)> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of calls received so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Default for SpyPasswordService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PasswordService for SpyPasswordService {
    async fn set_password(&self, _ctx: &RequestContext, user_id: Id, password: &str) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push((user_id, password.to_string()));
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        (self.set_password_fn)(user_id, password)
    }
}

/// Shorthand for a valid id.
pub fn id(n: u64) -> Id {
    Id::new(n).unwrap()
}

/// `{action, type, id}` permission.
pub fn permission(action: Action, kind: ResourceType, n: u64) -> Permission {
    Permission::instance(action, kind, id(n))
}

/// A context whose caller holds exactly `permissions`.
pub fn ctx_with(permissions: Vec<Permission>) -> RequestContext {
    RequestContext::background().with_authorizer(Arc::new(StaticAuthorizer::new(permissions)))
}

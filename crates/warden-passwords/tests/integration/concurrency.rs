//! Concurrent callers sharing one gate.

use crate::common::{SpyPasswordService, ctx_with, id, permission};
use futures::future::join_all;
use proptest::prelude::*;
use std::sync::Arc;
use std::time::Duration;
use warden_acl::{Action, Permission, ResourceType};
use warden_passwords::{AuthorizedPasswordService, PasswordService};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_callers_are_decided_independently() {
    let spy = Arc::new(SpyPasswordService::new());
    let svc = Arc::new(AuthorizedPasswordService::new(spy.clone()));

    // Caller n may only write user n. Even callers target themselves,
    // odd callers target their neighbour.
    let handles = (1..=50u64).map(|n| {
        let svc = svc.clone();
        tokio::spawn(async move {
            let ctx = ctx_with(vec![permission(Action::Write, ResourceType::Users, n)]);
            let target = if n % 2 == 0 { n } else { n + 1 };
            svc.set_password(&ctx, id(target), "pw").await.is_ok()
        })
    });

    let results: Vec<bool> = join_all(handles)
        .await
        .into_iter()
        .map(|r| r.unwrap())
        .collect();

    assert_eq!(results.iter().filter(|ok| **ok).count(), 25);
    assert_eq!(spy.call_count(), 25);
    assert!(spy.calls().iter().all(|(user, _)| user.get() % 2 == 0));
}

#[tokio::test(start_paused = true)]
async fn test_cancellation_passes_through() {
    let spy = Arc::new(SpyPasswordService::slow(Duration::from_secs(3600)));
    let svc = AuthorizedPasswordService::new(spy.clone());
    let ctx = ctx_with(vec![permission(Action::Write, ResourceType::Users, 1)]);

    // The caller's deadline applies to the wrapped call as-is
    let result =
        tokio::time::timeout(Duration::from_secs(1), svc.set_password(&ctx, id(1), "pw")).await;

    assert!(result.is_err(), "expected the caller's timeout to elapse");
    assert_eq!(spy.call_count(), 1);
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop::sample::select(vec![Action::Read, Action::Write])
}

fn arb_kind() -> impl Strategy<Value = ResourceType> {
    prop::sample::select(vec![
        ResourceType::Users,
        ResourceType::Orgs,
        ResourceType::Buckets,
    ])
}

proptest! {
    #[test]
    fn test_delegates_exactly_when_allowed(
        granted in prop::collection::vec(
            (arb_action(), arb_kind(), prop::option::of(1u64..5)),
            0..6,
        ),
        target in 1u64..5,
    ) {
        let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let spy = Arc::new(SpyPasswordService::new());
        let svc = AuthorizedPasswordService::new(spy.clone());

        let allowed = granted.iter().any(|(action, kind, n)| {
            *action == Action::Write
                && *kind == ResourceType::Users
                && (n.is_none() || *n == Some(target))
        });
        let ctx = ctx_with(
            granted
                .into_iter()
                .map(|(action, kind, n)| match n {
                    Some(n) => permission(action, kind, n),
                    None => Permission::type_wide(action, kind),
                })
                .collect(),
        );

        let result = rt.block_on(svc.set_password(&ctx, id(target), "pw"));
        prop_assert_eq!(result.is_ok(), allowed);
        prop_assert_eq!(spy.call_count(), usize::from(allowed));
    }
}

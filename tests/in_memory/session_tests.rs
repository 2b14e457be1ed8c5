//! In-memory integration tests for the session service.

use std::sync::Arc;
use std::time::Duration;

use super::helpers::identity;
use rstest::{fixture, rstest};
use taskboard::session::{
    adapters::memory::InMemoryIdentityProvider,
    domain::{Role, RolePolicy, SessionEvent, SessionPhase},
    services::SessionService,
};

type TestSession = SessionService<InMemoryIdentityProvider>;

#[fixture]
fn provider() -> Arc<InMemoryIdentityProvider> {
    let provider = InMemoryIdentityProvider::new();
    provider
        .set_account(identity("uid-grace", "grace@example.com").with_display_name("Grace"))
        .expect("script account");
    Arc::new(provider)
}

#[fixture]
fn session(provider: Arc<InMemoryIdentityProvider>) -> TestSession {
    SessionService::new(provider, RolePolicy::new(Role::User))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_logins_settle_on_one_user(session: TestSession) {
    let (first, second) = tokio::join!(session.login_with_provider(), session.login_with_provider());

    let state = session.state();
    assert_eq!(state.phase(), SessionPhase::Authenticated);
    assert_eq!(first.user(), state.user());
    assert_eq!(second.user(), state.user());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn clones_share_one_session(session: TestSession) {
    let other = session.clone();

    session.login_with_provider().await;

    assert!(other.state().is_authenticated());
    other.logout().await;
    assert!(!session.state().is_authenticated());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn subscribers_see_dispatched_events(session: TestSession) {
    let mut changes = session.subscribe();

    let dispatched = session.dispatch(SessionEvent::Error("token expired".to_owned()));

    tokio::time::timeout(Duration::from_secs(1), changes.changed())
        .await
        .expect("change should be observed in time")
        .expect("session channel should stay open");
    let observed = changes.borrow_and_update().clone();
    assert_eq!(observed, dispatched);
    assert_eq!(observed.error(), Some("token expired"));
    assert!(!observed.is_loading());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn state_read_model_serializes_for_presentation(session: TestSession) {
    let state = session.login_with_provider().await;

    let value = serde_json::to_value(&state).expect("state should serialize");

    assert_eq!(
        value,
        serde_json::json!({
            "user": {
                "id": "uid-grace",
                "email": "grace@example.com",
                "name": "Grace",
                "role": "user"
            },
            "isAuthenticated": true,
            "isLoading": false,
            "error": null
        })
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dropped_listener_stops_mirroring(provider: Arc<InMemoryIdentityProvider>) {
    let session = SessionService::new(Arc::clone(&provider), RolePolicy::new(Role::User));
    let listener = session.spawn_identity_listener();
    let mut changes = session.subscribe();
    let settled = tokio::time::timeout(
        Duration::from_secs(1),
        changes.wait_for(|state| !state.is_loading()),
    )
    .await
    .expect("listener should resolve loading in time")
    .expect("session channel should stay open")
    .clone();

    drop(listener);
    tokio::time::sleep(Duration::from_millis(20)).await;
    provider.push_identity(Some(identity("uid-grace", "grace@example.com")));
    tokio::time::sleep(Duration::from_millis(20)).await;

    assert_eq!(session.state(), settled);
    assert_eq!(settled.phase(), SessionPhase::Unauthenticated);
}

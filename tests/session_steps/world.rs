//! Shared world state for session BDD scenarios.

use std::sync::Arc;
use std::time::Duration;

use rstest::fixture;
use taskboard::session::{
    adapters::memory::InMemoryIdentityProvider,
    domain::{Role, RolePolicy, SessionState},
    services::{IdentityListener, SessionService},
};

/// How long a step waits for the listener to apply a provider push.
pub const PUSH_TIMEOUT: Duration = Duration::from_secs(2);

/// Scenario world for session behaviour tests.
pub struct SessionWorld {
    pub provider: Arc<InMemoryIdentityProvider>,
    pub service: SessionService<InMemoryIdentityProvider>,
    pub listener: Option<IdentityListener>,
    pub last_state: Option<SessionState>,
}

impl SessionWorld {
    /// Creates a world with a provider that has nobody signed in.
    #[must_use]
    pub fn new() -> Self {
        let provider = Arc::new(InMemoryIdentityProvider::new());
        let service = SessionService::new(Arc::clone(&provider), RolePolicy::new(Role::User));

        Self {
            provider,
            service,
            listener: None,
            last_state: None,
        }
    }
}

impl Default for SessionWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> SessionWorld {
    SessionWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

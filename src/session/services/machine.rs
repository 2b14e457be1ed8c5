//! Session state machine service.
//!
//! All writes to the session state go through [`apply`], which runs the
//! pure reducer inside the state channel's `send_modify`. Direct calls and
//! the identity listener therefore share one writer.

use super::listener::IdentityListener;
use crate::session::{
    domain::{ProviderIdentity, RolePolicy, SessionEvent, SessionState, User, reduce},
    ports::IdentityProvider,
};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Error recorded when an in-flight provider call is abandoned.
pub(crate) const CANCELLED_MESSAGE: &str = "authentication request was cancelled";

/// Error recorded when a refresh is requested with nobody signed in.
pub(crate) const NO_ACTIVE_SESSION_MESSAGE: &str = "no active session to refresh";

/// Session service reconciling direct login/logout/refresh calls and
/// provider pushes into a single [`SessionState`].
///
/// Authentication failures are captured in [`SessionState::error`] rather
/// than returned as errors: every operation returns the state it left
/// behind.
pub struct SessionService<P>
where
    P: IdentityProvider,
{
    provider: Arc<P>,
    policy: Arc<RolePolicy>,
    state: Arc<watch::Sender<SessionState>>,
}

impl<P> Clone for SessionService<P>
where
    P: IdentityProvider,
{
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            policy: Arc::clone(&self.policy),
            state: Arc::clone(&self.state),
        }
    }
}

impl<P> SessionService<P>
where
    P: IdentityProvider,
{
    /// Creates a session service in the initial, loading state.
    #[must_use]
    pub fn new(provider: Arc<P>, policy: RolePolicy) -> Self {
        let (state, _) = watch::channel(SessionState::initial());
        Self {
            provider,
            policy: Arc::new(policy),
            state: Arc::new(state),
        }
    }

    /// Returns a snapshot of the current session state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Subscribes to session state changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Applies a single event to the session state.
    #[must_use = "the returned state is the outcome of the event"]
    pub fn dispatch(&self, event: SessionEvent) -> SessionState {
        apply(&self.state, event)
    }

    /// Signs in through the identity provider.
    ///
    /// On success the mapped user becomes the session user; on failure the
    /// provider's message is recorded and any previous user is kept.
    pub async fn login_with_provider(&self) -> SessionState {
        let pending = PendingAuth::begin(&self.state);
        let event = match self.provider.sign_in().await {
            Ok(identity) => identity_event(&identity, &self.policy),
            Err(err) => {
                warn!(error = %err, "provider sign-in failed");
                SessionEvent::Error(err.to_string())
            }
        };
        let state = pending.settle(event);
        if let Some(user) = state.user().filter(|_| state.error().is_none()) {
            info!(user_id = %user.id(), role = user.role().as_str(), "signed in");
        }
        state
    }

    /// Signs out through the identity provider.
    ///
    /// The local session is cleared only once the provider confirms the
    /// sign-out.
    pub async fn logout(&self) -> SessionState {
        let pending = PendingAuth::begin(&self.state);
        let event = match self.provider.sign_out().await {
            Ok(()) => {
                info!("signed out");
                SessionEvent::Logout
            }
            Err(err) => {
                warn!(error = %err, "provider sign-out failed");
                SessionEvent::Error(err.to_string())
            }
        };
        pending.settle(event)
    }

    /// Re-validates the current session with the identity provider.
    ///
    /// With nobody signed in this records an error instead of calling the
    /// provider. A failed refresh keeps the current user.
    pub async fn refresh_token(&self) -> SessionState {
        let pending = PendingAuth::begin(&self.state);
        let current = self.state.borrow().user().map(|user| user.id().clone());
        let Some(user_id) = current else {
            warn!("refresh requested without an active session");
            return pending.settle(SessionEvent::Error(NO_ACTIVE_SESSION_MESSAGE.to_owned()));
        };
        let event = match self.provider.revalidate(&user_id).await {
            Ok(identity) => identity_event(&identity, &self.policy),
            Err(err) => {
                warn!(user_id = %user_id, error = %err, "session revalidation failed");
                SessionEvent::Error(err.to_string())
            }
        };
        pending.settle(event)
    }

    /// Starts mirroring provider identity changes into the session state.
    ///
    /// The provider's current identity is applied immediately, resolving the
    /// initial loading state. Must be called from within a Tokio runtime.
    #[must_use = "dropping the listener stops it"]
    pub fn spawn_identity_listener(&self) -> IdentityListener {
        IdentityListener::spawn(
            self.provider.subscribe(),
            Arc::clone(&self.state),
            Arc::clone(&self.policy),
        )
    }
}

/// Applies `event` through the reducer and returns the resulting state.
pub(crate) fn apply(state: &watch::Sender<SessionState>, event: SessionEvent) -> SessionState {
    let kind = event.kind();
    let mut next = SessionState::initial();
    state.send_modify(|current| {
        *current = reduce(current, event);
        next = current.clone();
    });
    debug!(event = kind, phase = ?next.phase(), "session transition");
    next
}

/// Maps a provider identity to the event it should produce.
pub(crate) fn identity_event(identity: &ProviderIdentity, policy: &RolePolicy) -> SessionEvent {
    match User::from_identity(identity, policy) {
        Ok(user) => SessionEvent::Success(user),
        Err(err) => {
            warn!(error = %err, "provider identity could not be mapped to a user");
            SessionEvent::Error(err.to_string())
        }
    }
}

/// Marks a provider call as in flight.
///
/// Dropping it without calling [`PendingAuth::settle`], as happens when the
/// calling future is cancelled, records [`CANCELLED_MESSAGE`] so the
/// session does not stay loading.
struct PendingAuth<'a> {
    state: &'a watch::Sender<SessionState>,
    settled: bool,
}

impl<'a> PendingAuth<'a> {
    fn begin(state: &'a watch::Sender<SessionState>) -> Self {
        apply(state, SessionEvent::Start);
        Self {
            state,
            settled: false,
        }
    }

    fn settle(mut self, event: SessionEvent) -> SessionState {
        self.settled = true;
        apply(self.state, event)
    }
}

impl Drop for PendingAuth<'_> {
    fn drop(&mut self) {
        if !self.settled {
            warn!("authentication request dropped before completion");
            apply(self.state, SessionEvent::Error(CANCELLED_MESSAGE.to_owned()));
        }
    }
}

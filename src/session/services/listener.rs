//! Background task mirroring provider identity pushes.

use super::machine::{apply, identity_event};
use crate::session::{
    domain::{RolePolicy, SessionEvent, SessionState},
    ports::IdentitySubscription,
};
use std::sync::Arc;
use tokio::{sync::watch, task::JoinHandle};
use tracing::{debug, warn};

/// Handle to the task that applies provider identity changes to the session.
///
/// Each reported identity becomes a success event and each "nobody signed
/// in" report becomes a logout. The task stops when
/// [`IdentityListener::shutdown`] is called, when the handle is dropped, or
/// when the provider closes its subscription.
#[derive(Debug)]
pub struct IdentityListener {
    handle: Option<JoinHandle<()>>,
}

impl IdentityListener {
    pub(crate) fn spawn(
        mut identities: IdentitySubscription,
        state: Arc<watch::Sender<SessionState>>,
        policy: Arc<RolePolicy>,
    ) -> Self {
        let handle = tokio::spawn(async move {
            loop {
                let identity = identities.borrow_and_update().clone();
                let event = identity.as_ref().map_or(SessionEvent::Logout, |reported| {
                    identity_event(reported, &policy)
                });
                apply(&state, event);
                if identities.changed().await.is_err() {
                    debug!("identity provider closed its subscription");
                    break;
                }
            }
        });
        Self {
            handle: Some(handle),
        }
    }

    /// Returns `true` once the background task has stopped.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Stops the background task and waits for it to wind down.
    pub async fn shutdown(mut self) {
        let Some(handle) = self.handle.take() else {
            return;
        };
        handle.abort();
        match handle.await {
            Err(err) if err.is_panic() => warn!(error = %err, "identity listener panicked"),
            _ => debug!("identity listener stopped"),
        }
    }
}

impl Drop for IdentityListener {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

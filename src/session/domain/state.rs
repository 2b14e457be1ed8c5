//! Session read model and its pure transition function.

use super::User;
use serde::{Serialize, Serializer};

/// Authentication state of the current client.
///
/// `is_authenticated` is derived from the presence of a user, so a state
/// can never claim to be authenticated without one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    user: Option<User>,
    is_loading: bool,
    error: Option<String>,
}

impl SessionState {
    /// Returns the state a client starts in: unauthenticated and waiting for
    /// the identity provider to report.
    #[must_use]
    pub const fn initial() -> Self {
        Self {
            user: None,
            is_loading: true,
            error: None,
        }
    }

    /// Returns the authenticated user, if any.
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Returns `true` when a user is signed in.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Returns `true` while a provider call or the initial check is pending.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Returns the last authentication error message, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Classifies the state into a [`SessionPhase`].
    #[must_use]
    pub const fn phase(&self) -> SessionPhase {
        match (self.is_loading, self.user.is_some(), self.error.is_some()) {
            // Nobody known yet: the initial provider check, or a sign-in
            // started from a signed-out state.
            (true, false, _) | (false, false, false) => SessionPhase::Unauthenticated,
            (true, true, _) => SessionPhase::Authenticating,
            (false, _, true) => SessionPhase::AuthError,
            (false, true, false) => SessionPhase::Authenticated,
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::initial()
    }
}

impl Serialize for SessionState {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct View<'a> {
            user: Option<&'a User>,
            is_authenticated: bool,
            is_loading: bool,
            error: Option<&'a str>,
        }

        View {
            user: self.user.as_ref(),
            is_authenticated: self.is_authenticated(),
            is_loading: self.is_loading,
            error: self.error.as_deref(),
        }
        .serialize(serializer)
    }
}

/// Coarse grouping of session states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionPhase {
    /// No user. May be loading while the provider has not reported yet.
    Unauthenticated,
    /// A provider call is in flight for a signed-in user, whose identity is
    /// untouched until the call settles.
    Authenticating,
    /// A user is signed in and nothing is pending.
    Authenticated,
    /// The last provider call failed; the previous identity is retained.
    AuthError,
}

/// Event applied to a [`SessionState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A provider call has started.
    Start,
    /// The provider confirmed an identity.
    Success(User),
    /// A provider call failed with a human-readable message.
    Error(String),
    /// The provider reported that nobody is signed in.
    Logout,
}

impl SessionEvent {
    /// Returns a short name for logging.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Start => "auth_start",
            Self::Success(_) => "auth_success",
            Self::Error(_) => "auth_error",
            Self::Logout => "auth_logout",
        }
    }
}

/// Computes the state that follows `state` after `event`.
///
/// | event        | result                                               |
/// |--------------|------------------------------------------------------|
/// | `Start`      | loading, error cleared, identity unchanged           |
/// | `Success(u)` | user `u`, authenticated, not loading, error cleared  |
/// | `Error(m)`   | identity unchanged, error `m`, not loading           |
/// | `Logout`     | initial state, not loading                           |
///
/// Applying `Success(u)` twice yields the same state as applying it once.
#[must_use]
pub fn reduce(state: &SessionState, event: SessionEvent) -> SessionState {
    match event {
        SessionEvent::Start => SessionState {
            user: state.user.clone(),
            is_loading: true,
            error: None,
        },
        SessionEvent::Success(user) => SessionState {
            user: Some(user),
            is_loading: false,
            error: None,
        },
        SessionEvent::Error(message) => SessionState {
            user: state.user.clone(),
            is_loading: false,
            error: Some(message),
        },
        SessionEvent::Logout => SessionState {
            is_loading: false,
            ..SessionState::initial()
        },
    }
}

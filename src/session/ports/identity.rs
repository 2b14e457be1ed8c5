//! Identity provider port.
//!
//! The provider is the external system of record for who the user is. The
//! session service mirrors what it reports but never owns it.

use crate::session::domain::{ProviderIdentity, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::watch;

/// Result type for identity provider operations.
pub type IdentityProviderResult<T> = Result<T, IdentityProviderError>;

/// Stream of identity changes pushed by the provider.
///
/// The receiver holds the provider's current identity as soon as it is
/// created, so subscribers learn about "nobody signed in" without waiting
/// for a change.
pub type IdentitySubscription = watch::Receiver<Option<ProviderIdentity>>;

/// Identity provider contract.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Runs the provider's interactive sign-in.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityProviderError`] with a human-readable message when
    /// sign-in fails or is abandoned.
    async fn sign_in(&self) -> IdentityProviderResult<ProviderIdentity>;

    /// Signs the current principal out.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityProviderError`] when the provider cannot confirm
    /// the sign-out.
    async fn sign_out(&self) -> IdentityProviderResult<()>;

    /// Re-validates the session of `user` and returns its current identity.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityProviderError`] when the session is no longer valid
    /// or the provider cannot be reached.
    async fn revalidate(&self, user: &UserId) -> IdentityProviderResult<ProviderIdentity>;

    /// Subscribes to identity changes.
    fn subscribe(&self) -> IdentitySubscription;
}

/// Errors returned by identity provider implementations.
#[derive(Debug, Clone, Error)]
pub enum IdentityProviderError {
    /// The provider refused the request.
    #[error("{0}")]
    Rejected(String),

    /// The provider could not be reached or failed internally.
    #[error("identity provider unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl IdentityProviderError {
    /// Creates a rejection carrying a message for the user.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected(message.into())
    }

    /// Wraps a transport or runtime failure.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}

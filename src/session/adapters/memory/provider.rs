//! Scriptable in-memory identity provider.

use crate::session::{
    domain::{ProviderIdentity, UserId},
    ports::{IdentityProvider, IdentityProviderError, IdentityProviderResult, IdentitySubscription},
};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::sync::watch;

/// In-memory identity provider.
///
/// This adapter models a provider account without any network traffic. The
/// identity returned by the next sign-in, one-shot failures, and revoked
/// sessions are scripted through its setter methods, and out-of-band identity
/// changes are simulated with [`InMemoryIdentityProvider::push_identity`].
/// Successful sign-in and sign-out are broadcast to subscribers, as a real
/// provider would.
#[derive(Debug, Clone)]
pub struct InMemoryIdentityProvider {
    script: Arc<RwLock<ProviderScript>>,
    current: Arc<watch::Sender<Option<ProviderIdentity>>>,
}

#[derive(Debug, Default)]
struct ProviderScript {
    account: Option<ProviderIdentity>,
    sign_in_failure: Option<String>,
    sign_out_failure: Option<String>,
    revoked: HashSet<UserId>,
}

impl Default for InMemoryIdentityProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryIdentityProvider {
    /// Creates a provider with nobody signed in and no account to sign in
    /// with.
    #[must_use]
    pub fn new() -> Self {
        let (current, _) = watch::channel(None);
        Self {
            script: Arc::new(RwLock::new(ProviderScript::default())),
            current: Arc::new(current),
        }
    }

    /// Creates a provider that already has `identity` signed in.
    #[must_use]
    pub fn signed_in_as(identity: ProviderIdentity) -> Self {
        let provider = Self::new();
        provider.current.send_replace(Some(identity.clone()));
        if let Ok(mut script) = provider.script.write() {
            script.account = Some(identity);
        }
        provider
    }

    /// Sets the account returned by subsequent sign-ins.
    ///
    /// # Errors
    ///
    /// Returns provider errors when lock acquisition fails.
    pub fn set_account(&self, identity: ProviderIdentity) -> IdentityProviderResult<()> {
        self.write()?.account = Some(identity);
        Ok(())
    }

    /// Makes the next sign-in fail with `message`.
    ///
    /// # Errors
    ///
    /// Returns provider errors when lock acquisition fails.
    pub fn fail_next_sign_in(&self, message: impl Into<String>) -> IdentityProviderResult<()> {
        self.write()?.sign_in_failure = Some(message.into());
        Ok(())
    }

    /// Makes the next sign-out fail with `message`.
    ///
    /// # Errors
    ///
    /// Returns provider errors when lock acquisition fails.
    pub fn fail_next_sign_out(&self, message: impl Into<String>) -> IdentityProviderResult<()> {
        self.write()?.sign_out_failure = Some(message.into());
        Ok(())
    }

    /// Revokes the session of `user`, so revalidation fails.
    ///
    /// # Errors
    ///
    /// Returns provider errors when lock acquisition fails.
    pub fn revoke(&self, user: UserId) -> IdentityProviderResult<()> {
        self.write()?.revoked.insert(user);
        Ok(())
    }

    /// Simulates an out-of-band identity change, such as a session expiring
    /// or another tab signing in.
    pub fn push_identity(&self, identity: Option<ProviderIdentity>) {
        self.current.send_replace(identity);
    }

    /// Returns the identity the provider currently reports.
    #[must_use]
    pub fn current_identity(&self) -> Option<ProviderIdentity> {
        self.current.borrow().clone()
    }

    fn read(&self) -> IdentityProviderResult<RwLockReadGuard<'_, ProviderScript>> {
        self.script
            .read()
            .map_err(|err| IdentityProviderError::unavailable(std::io::Error::other(err.to_string())))
    }

    fn write(&self) -> IdentityProviderResult<RwLockWriteGuard<'_, ProviderScript>> {
        self.script
            .write()
            .map_err(|err| IdentityProviderError::unavailable(std::io::Error::other(err.to_string())))
    }
}

#[async_trait]
impl IdentityProvider for InMemoryIdentityProvider {
    async fn sign_in(&self) -> IdentityProviderResult<ProviderIdentity> {
        let identity = {
            let mut script = self.write()?;
            if let Some(message) = script.sign_in_failure.take() {
                return Err(IdentityProviderError::Rejected(message));
            }
            script
                .account
                .clone()
                .ok_or_else(|| IdentityProviderError::rejected("sign-in was cancelled"))?
        };
        self.current.send_replace(Some(identity.clone()));
        Ok(identity)
    }

    async fn sign_out(&self) -> IdentityProviderResult<()> {
        if let Some(message) = self.write()?.sign_out_failure.take() {
            return Err(IdentityProviderError::Rejected(message));
        }
        self.current.send_replace(None);
        Ok(())
    }

    async fn revalidate(&self, user: &UserId) -> IdentityProviderResult<ProviderIdentity> {
        if self.read()?.revoked.contains(user) {
            return Err(IdentityProviderError::rejected("session has expired"));
        }
        self.current_identity()
            .filter(|identity| identity.uid() == user)
            .ok_or_else(|| IdentityProviderError::rejected("no active provider session"))
    }

    fn subscribe(&self) -> IdentitySubscription {
        self.current.subscribe()
    }
}

//! Port contracts for the session state machine.

pub mod identity;

pub use identity::{
    IdentityProvider, IdentityProviderError, IdentityProviderResult, IdentitySubscription,
};

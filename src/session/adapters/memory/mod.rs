//! In-memory adapters for the session state machine.

mod provider;

pub use provider::InMemoryIdentityProvider;

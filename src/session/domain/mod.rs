//! Domain model for the authenticated session.
//!
//! The session is a small read model ([`SessionState`]) advanced only by
//! the pure [`reduce`] function. Provider identities are mapped to
//! [`User`] values here so that services and listeners share one mapping.

mod error;
mod state;
mod user;

pub use error::{ParseRoleError, SessionDomainError};
pub use state::{SessionEvent, SessionPhase, SessionState, reduce};
pub use user::{ProviderIdentity, Role, RolePolicy, User, UserId};

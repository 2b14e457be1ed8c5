//! Error types for session domain values.

use super::UserId;
use thiserror::Error;

/// Errors returned while constructing session domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionDomainError {
    /// A user identifier is empty after trimming.
    #[error("user identifier must not be empty")]
    EmptyUserId,

    /// The provider identity carries no email address to derive a user from.
    #[error("identity {0} has no email address")]
    MissingEmail(UserId),
}

/// Error returned while parsing roles.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);

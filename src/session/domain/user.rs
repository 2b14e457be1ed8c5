//! User identity types derived from identity provider data.

use super::{ParseRoleError, SessionDomainError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an authenticated principal, as issued by the identity
/// provider.
///
/// Deserialisation goes through [`UserId::new`], so a blank identifier is
/// rejected wherever one is read.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Creates a validated user identifier.
    ///
    /// # Errors
    ///
    /// Returns [`SessionDomainError::EmptyUserId`] when the value is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, SessionDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SessionDomainError::EmptyUserId);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<String> for UserId {
    type Error = SessionDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Role carried by a user. Not enforced by the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Administrator.
    Admin,
    /// Regular user.
    #[default]
    User,
}

impl Role {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }
}

impl TryFrom<&str> for Role {
    type Error = ParseRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            _ => Err(ParseRoleError(value.to_owned())),
        }
    }
}

/// Decides which role a freshly mapped user receives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RolePolicy {
    default_role: Role,
    admin_emails: Vec<String>,
}

impl RolePolicy {
    /// Creates a policy granting `default_role` to everyone.
    #[must_use]
    pub const fn new(default_role: Role) -> Self {
        Self {
            default_role,
            admin_emails: Vec::new(),
        }
    }

    /// Grants [`Role::Admin`] to the given email addresses, compared
    /// case-insensitively.
    #[must_use]
    pub fn with_admin_emails(mut self, emails: impl IntoIterator<Item = String>) -> Self {
        self.admin_emails = emails
            .into_iter()
            .map(|email| email.trim().to_lowercase())
            .collect();
        self
    }

    /// Returns the role for a user with the given email.
    #[must_use]
    pub fn role_for(&self, email: &str) -> Role {
        let normalized = email.trim().to_lowercase();
        if self.admin_emails.contains(&normalized) {
            Role::Admin
        } else {
            self.default_role
        }
    }
}

/// Identity record pushed or returned by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderIdentity {
    uid: UserId,
    email: Option<String>,
    display_name: Option<String>,
    photo_url: Option<String>,
}

impl ProviderIdentity {
    /// Creates an identity with only a provider identifier.
    #[must_use]
    pub const fn new(uid: UserId) -> Self {
        Self {
            uid,
            email: None,
            display_name: None,
            photo_url: None,
        }
    }

    /// Sets the email address.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Sets the profile picture URL.
    #[must_use]
    pub fn with_photo_url(mut self, photo_url: impl Into<String>) -> Self {
        self.photo_url = Some(photo_url.into());
        self
    }

    /// Returns the provider identifier.
    #[must_use]
    pub const fn uid(&self) -> &UserId {
        &self.uid
    }
}

/// Authenticated user as seen by the rest of the system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: UserId,
    email: String,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    picture: Option<String>,
    role: Role,
}

impl User {
    /// Maps a provider identity to a user.
    ///
    /// The name is the display name when one is present and not blank,
    /// otherwise the part of the email address before `@`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionDomainError::MissingEmail`] when the identity has no
    /// email address.
    pub fn from_identity(
        identity: &ProviderIdentity,
        policy: &RolePolicy,
    ) -> Result<Self, SessionDomainError> {
        let email = identity
            .email
            .as_deref()
            .map(str::trim)
            .filter(|email| !email.is_empty())
            .ok_or_else(|| SessionDomainError::MissingEmail(identity.uid.clone()))?;

        let name = identity
            .display_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| email_local_part(email));

        Ok(Self {
            id: identity.uid.clone(),
            email: email.to_owned(),
            name: name.to_owned(),
            picture: identity
                .photo_url
                .clone()
                .filter(|url| !url.trim().is_empty()),
            role: policy.role_for(email),
        })
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> &UserId {
        &self.id
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the profile picture URL, if any.
    #[must_use]
    pub fn picture(&self) -> Option<&str> {
        self.picture.as_deref()
    }

    /// Returns the user's role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }
}

fn email_local_part(email: &str) -> &str {
    email.split_once('@').map_or(email, |(local, _)| local)
}

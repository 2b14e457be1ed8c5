//! Unit tests for the session state machine.


use crate::session::domain::{ProviderIdentity, Role, RolePolicy, User, UserId};

pub(crate) fn identity(uid: &str, email: &str) -> ProviderIdentity {
    ProviderIdentity::new(UserId::new(uid).expect("valid user id")).with_email(email)
}

pub(crate) fn ada() -> ProviderIdentity {
    identity("uid-ada", "ada@example.com").with_display_name("Ada Lovelace")
}

pub(crate) fn mapped(identity: &ProviderIdentity) -> User {
    User::from_identity(identity, &RolePolicy::new(Role::User)).expect("identity should map")
}

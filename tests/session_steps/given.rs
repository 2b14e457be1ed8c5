//! Given steps for session BDD scenarios.

use super::world::{SessionWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::session::domain::{ProviderIdentity, UserId};

#[given(r#"a provider account "{uid}" with email "{email}" named "{name}""#)]
fn provider_account(
    world: &mut SessionWorld,
    uid: String,
    email: String,
    name: String,
) -> Result<(), eyre::Report> {
    let user_id = UserId::new(uid).wrap_err("scenario user id")?;
    let identity = ProviderIdentity::new(user_id)
        .with_email(email)
        .with_display_name(name);
    world
        .provider
        .set_account(identity)
        .wrap_err("script provider account")?;
    Ok(())
}

#[given(r#"the provider will reject the next sign-in with "{message}""#)]
fn provider_rejects_sign_in(world: &mut SessionWorld, message: String) -> Result<(), eyre::Report> {
    world
        .provider
        .fail_next_sign_in(message)
        .wrap_err("script sign-in failure")?;
    Ok(())
}

#[given(r#"the provider has revoked the session of "{uid}""#)]
fn provider_revoked_session(world: &mut SessionWorld, uid: String) -> Result<(), eyre::Report> {
    let user_id = UserId::new(uid).wrap_err("scenario user id")?;
    world.provider.revoke(user_id).wrap_err("script revocation")?;
    Ok(())
}

#[given("the user has logged in")]
fn user_has_logged_in(world: &mut SessionWorld) -> Result<(), eyre::Report> {
    let state = run_async(world.service.login_with_provider());
    if !state.is_authenticated() {
        return Err(eyre::eyre!("scenario login failed: {:?}", state.error()));
    }
    world.last_state = Some(state);
    Ok(())
}

#[given("the identity listener is running")]
fn identity_listener_running(world: &mut SessionWorld) {
    world.listener = Some(world.service.spawn_identity_listener());
}

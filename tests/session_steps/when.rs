//! When steps for session BDD scenarios.

use super::world::{SessionWorld, run_async};
use rstest_bdd_macros::when;

#[when("the user logs in with the provider")]
fn log_in(world: &mut SessionWorld) {
    world.last_state = Some(run_async(world.service.login_with_provider()));
}

#[when("the session is refreshed")]
fn refresh(world: &mut SessionWorld) {
    world.last_state = Some(run_async(world.service.refresh_token()));
}

#[when("the provider reports that nobody is signed in")]
fn provider_signs_out(world: &mut SessionWorld) {
    world.provider.push_identity(None);
}

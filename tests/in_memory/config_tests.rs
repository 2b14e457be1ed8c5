//! Integration tests wiring stores and sessions from configuration files.

use std::sync::Arc;

use super::helpers::{identity, sample_tasks};
use eyre::{Result, WrapErr};
use mockable::DefaultClock;
use rstest::rstest;
use taskboard::{
    config::TaskboardConfig,
    session::{adapters::memory::InMemoryIdentityProvider, domain::Role, services::SessionService},
    task::{domain::TaskFilters, services::TaskStore},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn configured_store_starts_with_seed_tasks() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let seeds = sample_tasks();
    std::fs::write(dir.path().join("tasks.json"), serde_json::to_string(&seeds)?)?;
    let config_path = dir.path().join("taskboard.toml");
    std::fs::write(&config_path, "[tasks]\nseed_path = \"tasks.json\"\n")?;

    let config = TaskboardConfig::load(&config_path).wrap_err("load configuration")?;
    let repository = config.seeded_repository().wrap_err("seed repository")?;
    let store = TaskStore::new(Arc::new(repository), Arc::new(DefaultClock));

    let listed = store.list(&TaskFilters::new()).await?;
    assert_eq!(listed, seeds);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn configured_admins_receive_admin_role() -> Result<()> {
    let config = TaskboardConfig::from_toml_str(
        r#"
        [session]
        admin_emails = ["ADA@example.com"]
        "#,
    )?;
    let provider = InMemoryIdentityProvider::new();
    provider.set_account(identity("uid-ada", "ada@example.com"))?;
    let session = SessionService::new(Arc::new(provider), config.role_policy());

    let state = session.login_with_provider().await;

    let user = state
        .user()
        .ok_or_else(|| eyre::eyre!("expected a signed-in user, got {state:?}"))?;
    assert_eq!(user.role(), Role::Admin);
    assert_eq!(user.name(), "ada");
    Ok(())
}

//! Configuration for a Taskboard deployment.
//!
//! Configuration is read from a TOML file. Every section and key is
//! optional and missing values fall back to compiled defaults:
//!
//! ```toml
//! [session]
//! default_role = "user"
//! admin_emails = ["ada@example.com"]
//!
//! [tasks]
//! seed_path = "seed-tasks.json"
//! ```
//!
//! A relative `seed_path` is resolved against the directory holding the
//! configuration file.

use crate::session::domain::{Role, RolePolicy};
use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Task, TaskDomainError},
    ports::TaskRepositoryError,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur when loading configuration or seed data.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a configuration or seed file.
    #[error("failed to read {path}: {source}")]
    ReadFile {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("failed to parse config file: {0}")]
    ParseToml(#[from] toml::de::Error),

    /// The seed file is not a JSON array of tasks.
    #[error("failed to parse seed tasks in {path}: {source}")]
    ParseSeed {
        /// Seed file path.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// A seed task violates a task invariant.
    #[error("invalid seed task in {path}: {source}")]
    InvalidSeed {
        /// Seed file path.
        path: PathBuf,
        /// Violated invariant.
        source: TaskDomainError,
    },

    /// The seed tasks could not be loaded into a repository.
    #[error(transparent)]
    SeedRepository(#[from] TaskRepositoryError),
}

/// Resolved Taskboard configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TaskboardConfig {
    /// `[session]` section.
    pub session: SessionConfig,
    /// `[tasks]` section.
    pub tasks: TasksConfig,
}

/// `[session]` section of the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Role granted to users not listed in `admin_emails`.
    pub default_role: Role,
    /// Email addresses granted [`Role::Admin`], compared case-insensitively.
    pub admin_emails: Vec<String>,
}

/// `[tasks]` section of the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TasksConfig {
    /// JSON file holding the tasks the store starts with.
    pub seed_path: Option<PathBuf>,
}

impl TaskboardConfig {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParseToml`] when the text is not valid
    /// configuration.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Loads configuration from the TOML file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = read_file(path)?;
        let mut config = Self::from_toml_str(&contents)?;
        if let (Some(seed), Some(base)) = (config.tasks.seed_path.as_mut(), path.parent())
            && seed.is_relative()
        {
            *seed = base.join(&*seed);
        }
        debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Builds the role policy described by the `[session]` section.
    #[must_use]
    pub fn role_policy(&self) -> RolePolicy {
        RolePolicy::new(self.session.default_role)
            .with_admin_emails(self.session.admin_emails.iter().cloned())
    }

    /// Reads and validates the seed tasks.
    ///
    /// Returns an empty list when no seed file is configured.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the seed file cannot be read, is not a
    /// JSON array of tasks, or contains a task with blank text or an update
    /// timestamp before its creation timestamp.
    pub fn load_seed_tasks(&self) -> Result<Vec<Task>, ConfigError> {
        let Some(path) = self.tasks.seed_path.as_deref() else {
            return Ok(Vec::new());
        };
        let contents = read_file(path)?;
        let tasks: Vec<Task> =
            serde_json::from_str(&contents).map_err(|source| ConfigError::ParseSeed {
                path: path.to_path_buf(),
                source,
            })?;
        for task in &tasks {
            task.validate_persisted()
                .map_err(|source| ConfigError::InvalidSeed {
                    path: path.to_path_buf(),
                    source,
                })?;
        }
        info!(path = %path.display(), count = tasks.len(), "seed tasks loaded");
        Ok(tasks)
    }

    /// Builds an in-memory repository holding the seed tasks.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the seed tasks cannot be loaded or two
    /// of them share an identifier.
    pub fn seeded_repository(&self) -> Result<InMemoryTaskRepository, ConfigError> {
        let tasks = self.load_seed_tasks()?;
        Ok(InMemoryTaskRepository::with_tasks(tasks)?)
    }
}

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })
}

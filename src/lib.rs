//! Taskboard: a task tracker core with an authenticated session.
//!
//! This crate provides the state model behind a single-user task tracker:
//! a task store answering filtered queries with CRUD writes, and a session
//! state machine that mirrors what an external identity provider reports.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory stores and
//!   providers)
//!
//! # Modules
//!
//! - [`task`]: Task model, filtering and the task store
//! - [`session`]: Session reducer and identity provider reconciliation
//! - [`config`]: TOML configuration and seed task loading

pub mod config;
pub mod session;
pub mod task;

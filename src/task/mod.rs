//! Task store for Taskboard.
//!
//! Holds the canonical set of tasks and answers filtered queries, with CRUD
//! writes that keep derived fields (identifiers, timestamps, default status)
//! consistent. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

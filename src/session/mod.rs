//! Authenticated session lifecycle for Taskboard.
//!
//! An external identity provider decides who the user is. This module
//! mirrors what it reports into a [`domain::SessionState`] read model,
//! reconciling explicit login, logout and refresh calls with identity
//! changes the provider pushes at any time.
//!
//! - Domain types and the pure reducer in [`domain`]
//! - The identity provider port in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The session service and identity listener in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;

//! Application services for the session state machine.

mod listener;
mod machine;

pub use listener::IdentityListener;
pub use machine::SessionService;

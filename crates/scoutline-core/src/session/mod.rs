//! Authentication state machine and session ownership.

mod manager;

pub use manager::{AuthFlow, SessionManager};

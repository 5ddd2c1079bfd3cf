//! Business logic for the Scoutline app core.
//!
//! This crate owns the two stateful components of the app -- the session
//! manager (authentication state machine) and the messaging store
//! (conversations and unread bookkeeping) -- plus the event bus they
//! publish on and the "port" trait (`CredentialDirectory`) that the
//! infrastructure layer implements. It depends only on `scoutline-types`,
//! never on any IO crate.

pub mod directory;
pub mod event;
pub mod messaging;
pub mod session;

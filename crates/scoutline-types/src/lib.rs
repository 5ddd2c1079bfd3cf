//! Shared domain types for Scoutline.
//!
//! This crate contains the core domain types used across the Scoutline app
//! core: Role, profiles, Session, Chat, credential records, messaging
//! events, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod event;
pub mod identity;
pub mod record;

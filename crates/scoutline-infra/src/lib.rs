//! Collaborator implementations for the Scoutline app core.
//!
//! Everything here is in-process and in-memory, matching the demo nature
//! of the app: the credential directory is a seeded map, notifications
//! are locally dispatched alerts, and configuration is an optional TOML
//! file with defaults.

pub mod bootstrap;
pub mod config;
pub mod directory;
pub mod notify;
pub mod seed;

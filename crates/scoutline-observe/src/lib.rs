//! Observability setup for Scoutline.

pub mod tracing_setup;

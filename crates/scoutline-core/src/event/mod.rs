//! Messaging event bus.

mod bus;

pub use bus::EventBus;

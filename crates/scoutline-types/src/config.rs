//! Application configuration types.
//!
//! `AppConfig` represents the optional `config.toml` controlling the demo
//! timings: simulated login latency, the read-receipt debounce, and the
//! event bus capacity. All fields have sensible defaults.

use serde::{Deserialize, Serialize};

/// Top-level configuration for the Scoutline app core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Simulated network latency applied to login, in milliseconds.
    #[serde(default = "default_login_latency_ms")]
    pub login_latency_ms: u64,

    /// Debounce before a visible chat is marked read, in milliseconds.
    #[serde(default = "default_read_receipt_delay_ms")]
    pub read_receipt_delay_ms: u64,

    /// Delay handed to the notification sink for local alerts, in
    /// milliseconds.
    #[serde(default = "default_notification_delay_ms")]
    pub notification_delay_ms: u64,

    /// Capacity of the messaging event broadcast channel.
    #[serde(default = "default_event_capacity")]
    pub event_capacity: usize,
}

fn default_login_latency_ms() -> u64 {
    800
}

fn default_read_receipt_delay_ms() -> u64 {
    600
}

fn default_notification_delay_ms() -> u64 {
    1_000
}

fn default_event_capacity() -> usize {
    256
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            login_latency_ms: default_login_latency_ms(),
            read_receipt_delay_ms: default_read_receipt_delay_ms(),
            notification_delay_ms: default_notification_delay_ms(),
            event_capacity: default_event_capacity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = AppConfig::default();
        assert_eq!(config.login_latency_ms, 800);
        assert_eq!(config.read_receipt_delay_ms, 600);
        assert_eq!(config.notification_delay_ms, 1_000);
        assert_eq!(config.event_capacity, 256);
    }

    #[test]
    fn test_deserialize_empty_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.login_latency_ms, 800);
    }

    #[test]
    fn test_deserialize_partial_override() {
        let config: AppConfig = toml::from_str("read_receipt_delay_ms = 50").unwrap();
        assert_eq!(config.read_receipt_delay_ms, 50);
        assert_eq!(config.login_latency_ms, 800);
    }
}

//! Runtime configuration for the orchestrator and the simulated downstream services.

use crate::error::ConfigError;
use serde::Deserialize;
use std::time::Duration;

/// Environment variable scaling every simulated latency (`0` disables delays).
pub const LATENCY_SCALE_ENV: &str = "FULFILLMENT_LATENCY_SCALE";

/// Environment variable sizing the statistics actor's mailbox.
pub const STATS_BUFFER_ENV: &str = "FULFILLMENT_STATS_BUFFER";

/// Simulated delay per downstream operation, in milliseconds.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LatencyProfile {
    pub validate_customer_ms: u64,
    pub check_inventory_ms: u64,
    pub process_payment_ms: u64,
    pub create_order_ms: u64,
    pub send_notification_ms: u64,
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self {
            validate_customer_ms: 300,
            check_inventory_ms: 500,
            process_payment_ms: 800,
            create_order_ms: 400,
            send_notification_ms: 600,
        }
    }
}

impl LatencyProfile {
    /// No delay at all. Used by tests.
    pub fn zero() -> Self {
        Self {
            validate_customer_ms: 0,
            check_inventory_ms: 0,
            process_payment_ms: 0,
            create_order_ms: 0,
            send_notification_ms: 0,
        }
    }

    /// Same profile with every delay multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        let scale = |ms: u64| (ms as f64 * factor).round() as u64;
        Self {
            validate_customer_ms: scale(self.validate_customer_ms),
            check_inventory_ms: scale(self.check_inventory_ms),
            process_payment_ms: scale(self.process_payment_ms),
            create_order_ms: scale(self.create_order_ms),
            send_notification_ms: scale(self.send_notification_ms),
        }
    }

    pub fn validate_customer(&self) -> Duration {
        Duration::from_millis(self.validate_customer_ms)
    }

    pub fn check_inventory(&self) -> Duration {
        Duration::from_millis(self.check_inventory_ms)
    }

    pub fn process_payment(&self) -> Duration {
        Duration::from_millis(self.process_payment_ms)
    }

    pub fn create_order(&self) -> Duration {
        Duration::from_millis(self.create_order_ms)
    }

    pub fn send_notification(&self) -> Duration {
        Duration::from_millis(self.send_notification_ms)
    }
}

/// Settings for an [`Orchestrator`](crate::runtime::Orchestrator).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OrchestratorConfig {
    /// Mailbox size of the statistics actor.
    pub stats_buffer: usize,
    /// Delays used by [`SimulatedServices`](crate::services::SimulatedServices).
    pub latency: LatencyProfile,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            stats_buffer: 32,
            latency: LatencyProfile::default(),
        }
    }
}

impl OrchestratorConfig {
    /// Default configuration adjusted by `FULFILLMENT_LATENCY_SCALE` and `FULFILLMENT_STATS_BUFFER`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(LATENCY_SCALE_ENV) {
            let factor: f64 = raw.trim().parse().map_err(|e: std::num::ParseFloatError| {
                ConfigError::InvalidValue {
                    key: LATENCY_SCALE_ENV,
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?;
            if !factor.is_finite() || factor < 0.0 {
                return Err(ConfigError::InvalidValue {
                    key: LATENCY_SCALE_ENV,
                    value: raw,
                    reason: "must be a non-negative number".to_string(),
                });
            }
            config.latency = config.latency.scaled(factor);
        }

        if let Some(raw) = lookup(STATS_BUFFER_ENV) {
            let buffer: usize = raw.trim().parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidValue {
                    key: STATS_BUFFER_ENV,
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?;
            if buffer == 0 {
                return Err(ConfigError::InvalidValue {
                    key: STATS_BUFFER_ENV,
                    value: raw,
                    reason: "must be greater than zero".to_string(),
                });
            }
            config.stats_buffer = buffer;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = OrchestratorConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, OrchestratorConfig::default());
        assert_eq!(config.latency.process_payment_ms, 800);
    }

    #[test]
    fn test_latency_scale_applies_to_every_step() {
        let config =
            OrchestratorConfig::from_lookup(lookup(&[(LATENCY_SCALE_ENV, "0.5")])).unwrap();
        assert_eq!(config.latency.validate_customer_ms, 150);
        assert_eq!(config.latency.send_notification_ms, 300);

        let config = OrchestratorConfig::from_lookup(lookup(&[(LATENCY_SCALE_ENV, "0")])).unwrap();
        assert_eq!(config.latency, LatencyProfile::zero());
    }

    #[test]
    fn test_rejects_malformed_values() {
        let err = OrchestratorConfig::from_lookup(lookup(&[(LATENCY_SCALE_ENV, "fast")]));
        assert!(matches!(
            err,
            Err(ConfigError::InvalidValue { key: LATENCY_SCALE_ENV, .. })
        ));

        let err = OrchestratorConfig::from_lookup(lookup(&[(LATENCY_SCALE_ENV, "-1")]));
        assert!(err.is_err());

        let err = OrchestratorConfig::from_lookup(lookup(&[(STATS_BUFFER_ENV, "0")]));
        assert!(matches!(
            err,
            Err(ConfigError::InvalidValue { key: STATS_BUFFER_ENV, .. })
        ));
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: OrchestratorConfig =
            serde_json::from_str(r#"{ "latency": { "process_payment_ms": 5 } }"#).unwrap();
        assert_eq!(config.stats_buffer, 32);
        assert_eq!(config.latency.process_payment_ms, 5);
        assert_eq!(config.latency.check_inventory_ms, 500);
    }
}

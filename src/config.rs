//! Device endpoint configuration.
//!
//! The host framework hands this core a (host, port, unit id, poll interval)
//! tuple; everything else about scheduling and presentation lives outside.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::constants::defaults;
use crate::error::ConfigError;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct PumpConfig {
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_unit_id")]
    pub unit_id: u8,
    #[serde(default = "default_poll_interval_s")]
    pub poll_interval_s: u64,
}

fn default_port() -> u16 {
    defaults::PORT
}

fn default_unit_id() -> u8 {
    defaults::UNIT_ID
}

fn default_poll_interval_s() -> u64 {
    defaults::POLL_INTERVAL_S
}

impl PumpConfig {
    pub fn new(host: impl Into<String>) -> Self {
        PumpConfig {
            host: host.into(),
            port: defaults::PORT,
            unit_id: defaults::UNIT_ID,
            poll_interval_s: defaults::POLL_INTERVAL_S,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(defaults::MIN_UNIT_ID..=defaults::MAX_UNIT_ID).contains(&self.unit_id) {
            return Err(ConfigError::UnitId(self.unit_id));
        }
        if !(defaults::MIN_POLL_INTERVAL_S..=defaults::MAX_POLL_INTERVAL_S)
            .contains(&self.poll_interval_s)
        {
            return Err(ConfigError::PollInterval(self.poll_interval_s));
        }
        Ok(())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_s)
    }
}

impl std::str::FromStr for PumpConfig {
    type Err = ConfigError;

    /// Parse and validate a JSON endpoint description.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let config: PumpConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_applied_on_parse() {
        let config: PumpConfig = r#"{"host": "192.168.1.40"}"#.parse().unwrap();
        assert_eq!(config.port, 502);
        assert_eq!(config.unit_id, 1);
        assert_eq!(config.poll_interval_s, 30);
    }

    #[test]
    fn full_config_round_trips() {
        let config: PumpConfig =
            r#"{"host": "10.0.0.5", "port": 1502, "unit_id": 7, "poll_interval_s": 60}"#
                .parse()
                .unwrap();
        assert_eq!(config.port, 1502);
        assert_eq!(config.unit_id, 7);
        assert_eq!(config.poll_interval(), Duration::from_secs(60));
    }

    #[test]
    fn rejects_out_of_range_unit_id() {
        let err = r#"{"host": "h", "unit_id": 0}"#.parse::<PumpConfig>().unwrap_err();
        assert!(matches!(err, ConfigError::UnitId(0)));
        let err = r#"{"host": "h", "unit_id": 248}"#.parse::<PumpConfig>().unwrap_err();
        assert!(matches!(err, ConfigError::UnitId(248)));
    }

    #[test]
    fn rejects_out_of_range_poll_interval() {
        let err = r#"{"host": "h", "poll_interval_s": 4}"#
            .parse::<PumpConfig>()
            .unwrap_err();
        assert!(matches!(err, ConfigError::PollInterval(4)));
        let err = r#"{"host": "h", "poll_interval_s": 301}"#
            .parse::<PumpConfig>()
            .unwrap_err();
        assert!(matches!(err, ConfigError::PollInterval(301)));
    }
}

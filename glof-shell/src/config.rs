use crate::error::ConfigError;
use crate::nav::MenuPolicy;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::Level;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Brand {
    pub title: String,
    pub tagline: String,
}

impl Default for Brand {
    fn default() -> Self {
        Self {
            title: "GLOF".into(),
            tagline: "Tracker".into(),
        }
    }
}

/// Runtime settings for the shell. Every field is optional in the JSON form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub brand: Brand,
    pub log_level: String,
    pub clock_tick_ms: u64,
    pub menu_policy: MenuPolicy,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            brand: Brand::default(),
            log_level: "info".into(),
            clock_tick_ms: 1000,
            menu_policy: MenuPolicy::Independent,
        }
    }
}

impl ShellConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.clock_tick_ms == 0 {
            return Err(ConfigError::ZeroClockTick);
        }
        self.log_level
            .parse::<Level>()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))?;
        Ok(())
    }

    pub fn level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::INFO)
    }

    pub fn clock_tick(&self) -> Duration {
        Duration::from_millis(self.clock_tick_ms.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = ShellConfig::from_json("{}").expect("config");
        assert_eq!(config, ShellConfig::default());
        assert_eq!(config.level(), Level::INFO);
        assert_eq!(config.clock_tick(), Duration::from_secs(1));
    }

    #[test]
    fn partial_override() {
        let config = ShellConfig::from_json(
            r#"{ "menu_policy": "exclusive", "brand": { "title": "GLOF Watch" }, "log_level": "DEBUG" }"#,
        )
        .expect("config");
        assert_eq!(config.menu_policy, MenuPolicy::Exclusive);
        assert_eq!(config.brand.title, "GLOF Watch");
        assert_eq!(config.brand.tagline, "Tracker");
        assert_eq!(config.level(), Level::DEBUG);
    }

    #[test]
    fn rejects_zero_tick() {
        let err = ShellConfig::from_json(r#"{ "clock_tick_ms": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroClockTick));
    }

    #[test]
    fn rejects_unknown_level() {
        let err = ShellConfig::from_json(r#"{ "log_level": "loud" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::LogLevel(level) if level == "loud"));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            ShellConfig::from_json("{ nope"),
            Err(ConfigError::Parse(_))
        ));
    }
}

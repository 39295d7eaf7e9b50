/// Session settings — simulated processing delay and notification lifetime.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("invalid delay range: {min}ms..{max}ms")]
    DelayRange { min: u64, max: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Half-open range `[min, max)` the generate delay is drawn from, in ms.
    pub delay_ms: (u64, u64),
    /// How long a notification stays on screen, in ms.
    pub notification_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            delay_ms: (1500, 3500),
            notification_ms: 3000,
        }
    }
}

impl SessionConfig {
    /// No artificial delay at all.
    pub fn immediate() -> Self {
        Self {
            delay_ms: (0, 0),
            ..Self::default()
        }
    }

    pub fn load_from_ron(path: &Path) -> Result<SessionConfig, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    pub fn parse_ron(input: &str) -> Result<SessionConfig, ConfigError> {
        let config: SessionConfig = ron::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let (min, max) = self.delay_ms;
        if min > max {
            return Err(ConfigError::DelayRange { min, max });
        }
        Ok(())
    }

    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.notification_ms)
    }
}

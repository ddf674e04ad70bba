use crate::{ConfigError, ConfigErrorResult, DEFAULT_USER};

use serde::Deserialize;

pub const MAX_LOAD_DELAY_MS: u64 = 10_000;
pub const DEFAULT_LOAD_DELAY_MS: u64 = 100;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Identity used on first load and when the selection is empty
    pub default_user: String,
    /// Settle delay before each (re)mount in milliseconds
    pub load_delay_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_user: String::from(DEFAULT_USER),
            load_delay_ms: DEFAULT_LOAD_DELAY_MS,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.default_user.trim().is_empty() {
            return Err(ConfigError::session("session.default_user cannot be empty"));
        }

        if self.load_delay_ms > MAX_LOAD_DELAY_MS {
            return Err(ConfigError::session(format!(
                "session.load_delay_ms must be 0-{}, got {}",
                MAX_LOAD_DELAY_MS, self.load_delay_ms
            )));
        }

        Ok(())
    }
}

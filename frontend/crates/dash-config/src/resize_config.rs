use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

// Resize constraints
pub const MIN_INTERVAL_MS: u64 = 10;
pub const MAX_INTERVAL_MS: u64 = 10_000;
pub const DEFAULT_INTERVAL_MS: u64 = 100;

pub const MIN_VIEWPORT_DIMENSION: u32 = 1;
pub const MAX_VIEWPORT_DIMENSION: u32 = 16_384;
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1280;
pub const DEFAULT_VIEWPORT_HEIGHT: u32 = 720;

/// Frame tracking configuration.
///
/// The frame is re-pinned to the viewport on every tick of `interval_ms`
/// and on every viewport change in between.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ResizeConfig {
    /// Corrective loop period in milliseconds
    pub interval_ms: u64,
    /// Initial viewport width for headless hosts
    pub viewport_width: u32,
    /// Initial viewport height for headless hosts
    pub viewport_height: u32,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL_MS,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}

impl ResizeConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.interval_ms < MIN_INTERVAL_MS || self.interval_ms > MAX_INTERVAL_MS {
            return Err(ConfigError::resize(format!(
                "resize.interval_ms must be {}-{}, got {}",
                MIN_INTERVAL_MS, MAX_INTERVAL_MS, self.interval_ms
            )));
        }

        for (field, value) in [
            ("resize.viewport_width", self.viewport_width),
            ("resize.viewport_height", self.viewport_height),
        ] {
            if !(MIN_VIEWPORT_DIMENSION..=MAX_VIEWPORT_DIMENSION).contains(&value) {
                return Err(ConfigError::resize(format!(
                    "{} must be {}-{}, got {}",
                    field, MIN_VIEWPORT_DIMENSION, MAX_VIEWPORT_DIMENSION, value
                )));
            }
        }

        Ok(())
    }
}

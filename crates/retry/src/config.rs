//! Scheduler configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{RetryError, RetryResult};

/// Default value for `base_delay_secs` in [`SchedulerConfig`].
const DEFAULT_BASE_DELAY_SECS: u64 = 5;

/// Default value for `tick_interval_ms` in [`SchedulerConfig`].
const DEFAULT_TICK_INTERVAL_MS: u64 = 1_000;

/// Number of retries that wait the base delay before the delay starts growing.
const CONSTANT_DELAY_RETRIES: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Backoff factor in seconds.
    #[serde(default = "default_base_delay_secs")]
    pub base_delay_secs: u64,

    /// How often the consumer looks for due entries.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

fn default_base_delay_secs() -> u64 {
    DEFAULT_BASE_DELAY_SECS
}

fn default_tick_interval_ms() -> u64 {
    DEFAULT_TICK_INTERVAL_MS
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            base_delay_secs: DEFAULT_BASE_DELAY_SECS,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}

impl SchedulerConfig {
    /// Parses a config from TOML, filling in defaults for missing keys.
    pub fn from_toml_str(s: &str) -> RetryResult<Self> {
        let config: Self = toml::from_str(s).map_err(|e| RetryError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> RetryResult<()> {
        if self.base_delay_secs == 0 {
            return Err(RetryError::Config("base_delay_secs must be positive".into()));
        }
        if self.tick_interval_ms == 0 {
            return Err(RetryError::Config("tick_interval_ms must be positive".into()));
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// [`retry_delay_secs`] with this config's base delay.
    pub fn retry_delay_secs(&self, attempt_count: u32) -> u64 {
        retry_delay_secs(self.base_delay_secs, attempt_count)
    }
}

/// Delay before the next attempt of an entry that has been retried `attempt_count` times.
///
/// The first three retries wait `base_secs`; after that the delay grows linearly with the
/// attempt count.
pub fn retry_delay_secs(base_secs: u64, attempt_count: u32) -> u64 {
    if attempt_count < CONSTANT_DELAY_RETRIES {
        return base_secs;
    }
    base_secs.saturating_mul(u64::from(attempt_count))
}

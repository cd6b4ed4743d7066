use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{GenieError, Result};

/// Karma a fresh process starts with.
pub const DEFAULT_INITIAL_KARMA: u32 = 120;

/// Delays of the simulated transitions, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Map → traveling: background swap happens this long after selection.
    pub background_swap_ms: u64,
    /// Map → traveling → chat: arrival happens this long after selection.
    pub arrival_ms: u64,
    /// Simulated "thinking" latency before a reply.
    pub response_latency_ms: u64,
    /// Chat → traveling → scrapbook.
    pub scrapbook_transition_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            background_swap_ms: 1000,
            arrival_ms: 2500,
            response_latency_ms: 1000,
            scrapbook_transition_ms: 2000,
        }
    }
}

impl TimingConfig {
    pub fn background_swap(&self) -> Duration {
        Duration::from_millis(self.background_swap_ms)
    }

    pub fn arrival(&self) -> Duration {
        Duration::from_millis(self.arrival_ms)
    }

    pub fn response_latency(&self) -> Duration {
        Duration::from_millis(self.response_latency_ms)
    }

    pub fn scrapbook_transition(&self) -> Duration {
        Duration::from_millis(self.scrapbook_transition_ms)
    }
}

/// Root configuration, stored as TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenieConfig {
    pub initial_karma: u32,
    /// Appends the trip-phase rules (flights, ideas, nearby, summary).
    pub extended_rules: bool,
    pub timing: TimingConfig,
}

impl Default for GenieConfig {
    fn default() -> Self {
        Self {
            initial_karma: DEFAULT_INITIAL_KARMA,
            extended_rules: false,
            timing: TimingConfig::default(),
        }
    }
}

impl GenieConfig {
    /// Rejects timings where the background swap would land after arrival.
    pub fn validate(&self) -> Result<()> {
        if self.timing.background_swap_ms > self.timing.arrival_ms {
            return Err(GenieError::config(format!(
                "background_swap_ms ({}) must not exceed arrival_ms ({})",
                self.timing.background_swap_ms, self.timing.arrival_ms
            )));
        }
        Ok(())
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: GenieConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

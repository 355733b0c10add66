use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub effects: EffectsConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Settings for the simulated backend operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectsConfig {
    /// Simulated latency before an intent resolves, in milliseconds (default: 1000).
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    /// Make every N-th operation fail (default: 0, never).
    #[serde(default)]
    pub fail_every: u32,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Number of dispatched actions kept for the history popup (default: 25).
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

fn default_delay_ms() -> u64 {
    1000
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_history_limit() -> usize {
    25
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            fail_every: 0,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            history_limit: default_history_limit(),
        }
    }
}

impl EffectsConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

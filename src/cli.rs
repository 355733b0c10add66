//! Command-line flags. Values given here override the config file.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};

#[derive(Debug, Parser)]
#[command(
    name = "tally",
    version,
    about = "Terminal counter driven by an action/reducer/effect store"
)]
pub struct Cli {
    /// Config file to load instead of the default location.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Simulated latency before each request resolves, in milliseconds.
    #[arg(long = "delay-ms", value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// Make every N-th request fail (0 never fails).
    #[arg(long = "fail-every", value_name = "N")]
    pub fail_every: Option<u32>,

    /// Number of dispatched actions kept in the history popup.
    #[arg(long, value_name = "N")]
    pub history: Option<usize>,
}

impl Cli {
    /// Load the config file and apply flag overrides on top.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let path = self.config.clone().unwrap_or_else(Config::config_path);
        let config = Config::load_from(&path)?;
        let config = self.apply_overrides(config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(&self, mut config: Config) -> Config {
        if let Some(delay_ms) = self.delay_ms {
            config.effects.delay_ms = delay_ms;
        }
        if let Some(fail_every) = self.fail_every {
            config.effects.fail_every = fail_every;
        }
        if let Some(history) = self.history {
            config.ui.history_limit = history;
        }
        config
    }
}

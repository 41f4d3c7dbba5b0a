//! Configuration module
//!
//! Defines the settings for a single `tally` invocation: what to process,
//! whether to wire the in-memory store, and how to report.

use anyhow::{Context, Result};
use tally_core::RunSettings;
use tracing_subscriber::EnvFilter;

/// Default tracing filter when neither RUST_LOG nor --log-filter is given
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Name passed to `process` by `run`
    pub name: String,

    /// Count passed to `process` by `run`
    pub count: i64,

    /// Whether the in-memory store is wired into the service
    pub with_store: bool,

    /// Print a JSON summary after the run
    pub json: bool,

    /// Tracing filter used when RUST_LOG is unset
    pub log_filter: String,
}

impl Config {
    /// Settings handed to the processing service
    pub fn run_settings(&self) -> RunSettings {
        RunSettings::new(self.name.clone(), self.count)
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.log_filter.trim().is_empty() {
            anyhow::bail!("log_filter cannot be empty");
        }

        EnvFilter::try_new(&self.log_filter)
            .with_context(|| format!("Invalid log filter: {}", self.log_filter))?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        let settings = RunSettings::default();
        Self {
            name: settings.name,
            count: settings.count,
            with_store: true,
            json: false,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

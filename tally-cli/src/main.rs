//! Tally CLI
//!
//! Runs the processing service once and exits.
//!
//! Output lines (`base ..`, `count ..`, `saved ..`) go to stdout; tracing
//! diagnostics go to stderr.

mod app;
mod config;

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tally_core::StdoutSink;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, DEFAULT_LOG_FILTER};

#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Log a count, optionally save a name, print its label", long_about = None)]
struct Cli {
    /// Name passed to the processing step
    #[arg(long, env = "TALLY_NAME", default_value = "demo")]
    name: String,

    /// Count passed to the processing step
    #[arg(long, env = "TALLY_COUNT", default_value_t = 3, allow_negative_numbers = true)]
    count: i64,

    /// Run without the in-memory store
    #[arg(long)]
    no_store: bool,

    /// Print a JSON summary after the run
    #[arg(long)]
    json: bool,

    /// Tracing filter used when RUST_LOG is unset
    #[arg(long, env = "TALLY_LOG", default_value = DEFAULT_LOG_FILTER)]
    log_filter: String,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            name: cli.name,
            count: cli.count,
            with_store: !cli.no_store,
            json: cli.json,
            log_filter: cli.log_filter,
        }
    }
}

fn main() -> Result<()> {
    let config = Config::from(Cli::parse());
    config.validate()?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!(
        "Starting tally: name={}, count={}, with_store={}",
        config.name, config.count, config.with_store
    );

    let summary = app::execute(&config, Arc::new(StdoutSink));

    if config.json {
        let json = serde_json::to_string(&summary).context("Failed to serialize run summary")?;
        println!("{}", json);
    }

    Ok(())
}

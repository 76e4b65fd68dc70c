//! hof-predictor - Hall of Fame induction estimator
//!
//! # Usage
//! ```sh
//! cargo run -- predict --name "Joe Mauer" --war 55.2 --hofm 118 --jaws 47.1
//! cargo run -- batch --roster players.toml --json
//! ```
//!
//! # Environment Variables
//! - `HOF_MODEL_REGULARIZATION` - L2 penalty for the classifiers (default: 1.0)
//! - `HOF_DEFAULT_WAR` / `HOF_DEFAULT_HOFM` / `HOF_DEFAULT_JAWS` - form defaults
//! - `HOF_REGISTER_CSV` / `HOF_BATTING_CSV` - lookup tables for `--autofill` and `lookup`

use anyhow::Result;
use clap::Parser;
use hof_predictor::config::Config;
use hof_predictor::interfaces::cli::{self, Cli};
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Cli::parse();

    // Logs go to stderr so reports on stdout stay clean
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stderr_layer)
        .init();

    info!("hof-predictor {} starting...", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: alpha={}, lookup={}",
        config.model.regularization,
        if config.lookup.sources().is_some() {
            "csv"
        } else {
            "disabled"
        }
    );

    cli::run(args, config)
}

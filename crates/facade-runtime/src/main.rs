//! # Facade Runtime
//!
//! Demo executable for the facade.
//!
//! ## Startup Sequence
//!
//! 1. Load configuration (from env)
//! 2. Initialize logging on stderr
//! 3. Run the client against a borrowing facade, then an owning facade

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use facade_runtime::{load_config, run_demo};

fn main() -> Result<()> {
    // Load configuration
    let config = load_config();
    let level = config.level().context("Invalid FC_LOG_LEVEL")?;

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(config.with_target)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install tracing subscriber")?;

    info!(?config, "Starting facade demo");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_demo(&mut out).context("Failed to write demo output")?;
    out.flush().context("Failed to flush stdout")?;

    info!("Facade demo finished");
    Ok(())
}

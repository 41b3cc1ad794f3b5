//! Rolodex - Main entry point
//!
//! Wires configuration and logging together, then hands control to the
//! interactive command loop.

use anyhow::Result;
use rolodex::{repl, Config};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only to keep stdout for the command loop)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Configuration loaded successfully");

    if let Err(e) = repl::run(&config) {
        error!("Command loop failed: {}", e);
        return Err(e.into());
    }

    info!("Shutdown complete");
    Ok(())
}

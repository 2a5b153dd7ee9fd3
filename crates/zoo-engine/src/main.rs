//! Demonstration driver for the zoo simulation.
//!
//! Wires together configuration, logging, the fixed roster, one announcer,
//! and the keeper, then runs one daily routine with its transcript on
//! stdout. Logs go to stderr so the transcript stays clean.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `zoo-config.yaml` (defaults if absent)
//! 2. Initialize structured logging (tracing)
//! 3. Build the roster and register the announcer
//! 4. Run the daily routine, then the optional runtime reconfiguration
//! 5. Flush the transcript and log the result

mod demo;
mod error;

use std::io;
use std::path::Path;

use tracing::info;
use tracing_subscriber::EnvFilter;
use zoo_core::config::LoggingConfig;
use zoo_core::{WriterTranscript, ZooConfig};

use crate::error::EngineError;

/// Config file looked up in the working directory.
const CONFIG_PATH: &str = "zoo-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration loading or the demonstration fails.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration.
    let config = load_config()?;

    // 2. Initialize structured logging.
    init_logging(&config.logging);
    info!(
        level = config.logging.level,
        json = config.logging.json,
        reassign_after_routine = ?config.demo.reassign_after_routine,
        "zoo-engine starting"
    );

    // 3-4. Run the demonstration against stdout.
    let mut transcript = WriterTranscript::new(io::stdout().lock());
    let keeper = demo::run_demonstration(&config.demo, &mut transcript)?;
    let lines = transcript.lines_written();

    // 5. Flush and report.
    drop(transcript.into_inner()?);
    info!(
        residents = keeper.residents().len(),
        lines, "zoo-engine shutdown complete"
    );

    Ok(())
}

/// Load the zoo configuration from `zoo-config.yaml`.
///
/// Looks for the config file relative to the current working directory.
fn load_config() -> Result<ZooConfig, EngineError> {
    let config_path = Path::new(CONFIG_PATH);
    if config_path.exists() {
        Ok(ZooConfig::from_file(config_path)?)
    } else {
        let mut config = ZooConfig::default();
        config.logging.apply_env_overrides();
        Ok(config)
    }
}

/// Install the global tracing subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true);
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

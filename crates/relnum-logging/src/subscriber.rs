// ABOUTME: Installs the global tracing subscriber
// ABOUTME: One level filter in front of the console and file outputs

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, Registry, layer::Layered, prelude::*, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::layers::{level_filter, output_layers};

type FilteredRegistry = Layered<EnvFilter, Registry>;

/// Install the global subscriber described by `config`.
///
/// Fails if a global subscriber is already set.
pub fn init_subscriber(config: LoggingConfig) -> Result<()> {
    let filter = level_filter(&config)?;
    let outputs = output_layers::<FilteredRegistry>(&config)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(outputs)
        .try_init()
        .context("Failed to install global tracing subscriber")?;

    tracing::debug!(
        filter = %config.filter_directives(),
        console = ?config.console,
        file = ?config.file,
        "relnum logging initialized"
    );
    Ok(())
}

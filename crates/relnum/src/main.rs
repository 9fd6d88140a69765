use std::io::IsTerminal;

use anyhow::{Context, Result};
use clap::Parser;
use relnum::Cli;
use relnum_logging::{Level, LoggingConfig};

/// Console level for `-v` repeated `verbosity` times, if any were given
fn verbosity_level(verbosity: u8) -> Option<Level> {
    match verbosity {
        0 => None,
        1 => Some(Level::INFO),
        2 => Some(Level::DEBUG),
        _3_or_more => Some(Level::TRACE),
    }
}

fn setup_logging(verbosity: u8) -> Result<()> {
    let mut config =
        LoggingConfig::from_env().context("Failed to create logging config from environment")?;

    // Command line verbosity wins over the environment
    if let Some(level) = verbosity_level(verbosity) {
        config.level = level;
    }

    relnum_logging::init_subscriber(config).context("Failed to initialize relnum logging")?;
    relnum_logging::debug!("relnum logging system initialized");

    Ok(())
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();
    setup_logging(cli.verbose).context("failed to initialize logging")?;

    let stdout = std::io::stdout();
    cli.no_color |= !stdout.is_terminal();

    let mut out = stdout.lock();
    relnum::run(&cli, &mut out).inspect_err(|err| {
        relnum_logging::error!(error = %err, "relnum failed");
    })
}

//! NetCDF header inspector CLI.

use std::io::{self, IsTerminal};
use std::time::Instant;

use anyhow::Context;
use clap::{ColorChoice, Parser};
use tracing::{debug, info};

use nc_cli::logging::{LogConfig, init_logging};
use nc_cli::summary::print_header;
use nc_header::read_header;

mod cli;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    if let Err(error) = run(&cli) {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let started = Instant::now();
    let header = read_header(&cli.file)
        .with_context(|| format!("failed to read header of {}", cli.file.display()))?;
    debug!(elapsed = ?started.elapsed(), "header parsed");
    info!(
        dimensions = header.dimensions.len(),
        attributes = header.attributes.len(),
        variables = header.variables.len(),
        "parsed {}",
        cli.file.display()
    );
    print_header(&header, !cli.no_attributes);
    Ok(())
}

/// Build logging configuration from CLI flags.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        use_env_filter: !cli.verbosity.is_present(),
        with_ansi: match cli.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => io::stderr().is_terminal(),
        },
    }
}

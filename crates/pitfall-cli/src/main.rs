// SPDX-License-Identifier: Apache-2.0

//! Pitfall - deliberately vulnerable code samples with a training scanner.
//!
//! A CLI that demonstrates classic vulnerabilities against throwaway targets,
//! pairs each with its safe counterpart, and scans code for the same
//! anti-patterns.

mod cli;
mod commands;
mod errors;
mod logging;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use pitfall_core::config;
use tracing::debug;

use crate::cli::{Cli, OutputContext};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.output, cli.verbose);

    let output_ctx = OutputContext::from_cli(cli.output, cli.quiet, cli.verbose);

    // Load config early to validate it works
    let config = config::load_config().context("Failed to load configuration")?;
    debug!("Configuration loaded successfully");

    match commands::run(cli.command, output_ctx, &config) {
        Ok(()) => Ok(()),
        Err(e) => {
            let formatted = errors::format_error(&e);
            eprintln!("Error: {formatted}");
            Err(e)
        }
    }
}

// SPDX-License-Identifier: Apache-2.0

//! Logging initialization for the Pitfall CLI.
//!
//! Uses `tracing` with `tracing-subscriber` for structured logging.
//! Log level can be controlled via the `RUST_LOG` environment variable.
//!
//! The `-v` flag controls user-facing verbose output (handled separately by
//! `OutputContext`). For debug-level tracing, use `RUST_LOG`:
//!
//! ```bash
//! # Show which patterns matched where during a scan
//! RUST_LOG=pitfall=debug pitfall scan path src/
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

use crate::cli::OutputFormat;

/// Initialize the logging subsystem.
///
/// Structured output formats keep stderr quiet so piped output stays clean;
/// `RUST_LOG` overrides the default filter either way.
pub fn init_logging(format: OutputFormat, _verbose: bool) {
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    // Derive quiet mode from format (structured formats are quiet)
    let quiet = matches!(
        format,
        OutputFormat::Json | OutputFormat::Yaml | OutputFormat::Markdown
    );

    let default_filter = if quiet {
        "pitfall=error"
    } else {
        "pitfall=warn"
    };
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .expect("valid default filter directives");

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}

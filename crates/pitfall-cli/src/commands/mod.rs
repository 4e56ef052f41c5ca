// SPDX-License-Identifier: Apache-2.0

//! Command handlers for the Pitfall CLI.

pub mod completion;
pub mod demo;
pub mod patterns;
pub mod scan;

use std::time::Duration;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

use crate::cli::{
    Commands, CompletionCommand, DemoCommand, OutputContext, PatternsCommand, ScanCommand,
};
use crate::output;
use pitfall_core::AppConfig;

/// Creates a styled spinner (only if interactive).
fn maybe_spinner(ctx: &OutputContext, message: &str) -> Option<ProgressBar> {
    if ctx.is_interactive() {
        let s = ProgressBar::new_spinner();
        s.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("Invalid spinner template"),
        );
        s.set_message(message.to_string());
        s.enable_steady_tick(Duration::from_millis(100));
        Some(s)
    } else {
        None
    }
}

/// Dispatch to the appropriate command handler.
pub fn run(command: Commands, ctx: OutputContext, config: &AppConfig) -> Result<()> {
    match command {
        Commands::Demo(demo_cmd) => match demo_cmd {
            DemoCommand::SqlInjection { input, database } => {
                let result = demo::run_sql_injection(&input, database.as_deref(), config)?;
                output::render(&result, &ctx)
            }
            DemoCommand::WeakCrypto { password, message } => {
                let result = demo::run_weak_crypto(&password, &message)?;
                output::render(&result, &ctx)
            }
            DemoCommand::CommandInjection { host } => {
                let result = demo::run_command_injection(&host);
                output::render(&result, &ctx)
            }
            DemoCommand::PathTraversal { name } => {
                let result = demo::run_path_traversal(&name)?;
                output::render(&result, &ctx)
            }
        },

        Commands::Scan(scan_cmd) => match scan_cmd {
            ScanCommand::Path { target, sarif } => {
                let spinner = maybe_spinner(&ctx, "Scanning...");
                let result = scan::run_path(&target, sarif.as_deref(), config);
                if let Some(s) = spinner {
                    s.finish_and_clear();
                }
                output::render(&result?, &ctx)
            }
            ScanCommand::Diff { file } => {
                let result = scan::run_diff(file.as_deref(), config)?;
                output::render(&result, &ctx)
            }
        },

        Commands::Patterns(patterns_cmd) => match patterns_cmd {
            PatternsCommand::List => {
                let result = patterns::run();
                output::render(&result, &ctx)
            }
        },

        Commands::Completion(completion_cmd) => match completion_cmd {
            CompletionCommand::Generate { shell } => completion::run_generate(shell),
        },
    }
}

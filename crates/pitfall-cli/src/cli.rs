// SPDX-License-Identifier: Apache-2.0

//! Command-line interface definition for Pitfall.
//!
//! Uses clap's derive API for declarative CLI parsing with hierarchical
//! noun-verb subcommands for autocomplete-optimal design.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Extended help text for the generate subcommand with shell-specific examples.
const COMPLETION_GENERATE_HELP: &str = r#"EXAMPLES

  bash
    Add to ~/.bashrc or ~/.bash_profile:
      eval "$(pitfall completion generate bash)"

  zsh
    Generate completion file:
      mkdir -p ~/.zsh/completions
      pitfall completion generate zsh > ~/.zsh/completions/_pitfall

    Add to ~/.zshrc (before compinit):
      fpath=(~/.zsh/completions $fpath)
      autoload -U compinit && compinit -i

  fish
    Generate completion file:
      pitfall completion generate fish > ~/.config/fish/completions/pitfall.fish
"#;

/// Output format for CLI results.
#[derive(Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text with colors (default)
    #[default]
    Text,
    /// JSON output for programmatic consumption
    Json,
    /// YAML output for programmatic consumption
    Yaml,
    /// Markdown output for reports and issues
    Markdown,
}

/// Global output configuration passed to commands.
#[derive(Clone)]
pub struct OutputContext {
    /// Output format (text, json, yaml, markdown)
    pub format: OutputFormat,
    /// Suppress non-essential output (spinners, progress)
    pub quiet: bool,
    /// Enable verbose output
    pub verbose: bool,
    /// Whether stdout is a terminal (TTY)
    pub is_tty: bool,
}

impl OutputContext {
    /// Creates an `OutputContext` from CLI arguments.
    pub fn from_cli(format: OutputFormat, quiet: bool, verbose: bool) -> Self {
        Self {
            format,
            quiet,
            verbose,
            is_tty: std::io::stdout().is_terminal(),
        }
    }

    /// Returns true if interactive elements (spinners, colors) should be shown.
    pub fn is_interactive(&self) -> bool {
        self.is_tty && !self.quiet && matches!(self.format, OutputFormat::Text)
    }
}

/// Pitfall - deliberately vulnerable code samples with a training scanner.
///
/// Every demo pairs an intentionally broken function with its safe
/// counterpart; the scan commands flag the broken halves the way a security
/// review would.
#[derive(Parser)]
#[command(name = "pitfall")]
#[command(version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Output format (text, json, yaml, markdown)
    #[arg(long, short = 'o', global = true, default_value = "text", value_enum)]
    pub output: OutputFormat,

    /// Suppress non-essential output (spinners, progress)
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output (debug-level logging)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run a vulnerability demonstration against a throwaway target
    #[command(subcommand)]
    Demo(DemoCommand),

    /// Scan files, directories, or diffs for the corpus anti-patterns
    #[command(subcommand)]
    Scan(ScanCommand),

    /// Inspect the embedded pattern database
    #[command(subcommand)]
    Patterns(PatternsCommand),

    /// Generate shell completion scripts
    #[command(subcommand)]
    Completion(CompletionCommand),
}

/// Vulnerability demonstration subcommands
#[derive(Subcommand)]
pub enum DemoCommand {
    /// SQL lookup built by string concatenation vs. a bound parameter
    SqlInjection {
        /// Lookup input; try the classic "' OR '1'='1"
        #[arg(long, default_value = "' OR '1'='1")]
        input: String,

        /// Throwaway database path (defaults to the configured demo path)
        #[arg(long)]
        database: Option<String>,
    },

    /// MD5 and repeating-key XOR vs. Argon2id and an AEAD
    WeakCrypto {
        /// Password to hash on both sides
        #[arg(long, default_value = "hunter2")]
        password: String,

        /// Message to encrypt on both sides
        #[arg(long, default_value = "attack at dawn")]
        message: String,
    },

    /// Shell-interpolated ping vs. an argument-vector ping
    CommandInjection {
        /// Host input; try "127.0.0.1; echo INJECTED"
        #[arg(long, default_value = "127.0.0.1; echo INJECTED")]
        host: String,
    },

    /// Unchecked filename join vs. a basename-confined lookup
    PathTraversal {
        /// File name input; try "../secret.txt"
        #[arg(long, default_value = "../secret.txt")]
        name: String,
    },
}

/// Scan subcommands
#[derive(Subcommand)]
pub enum ScanCommand {
    /// Scan a file or directory tree
    Path {
        /// File or directory to scan
        target: PathBuf,

        /// Write a SARIF 2.1.0 report to this file as well
        #[arg(long)]
        sarif: Option<PathBuf>,
    },

    /// Scan the added lines of a unified diff (reads stdin if no file given)
    Diff {
        /// Diff file to scan; omit to read from stdin
        file: Option<PathBuf>,
    },
}

/// Pattern database subcommands
#[derive(Subcommand)]
pub enum PatternsCommand {
    /// List the embedded detection patterns
    List,
}

/// Completion subcommands
#[derive(Subcommand)]
pub enum CompletionCommand {
    /// Generate a completion script to stdout
    #[command(after_long_help = COMPLETION_GENERATE_HELP)]
    Generate {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

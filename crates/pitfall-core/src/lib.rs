// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! # Pitfall Core
//!
//! Core library for Pitfall - deliberately vulnerable code samples paired
//! with safe counterparts, plus the training scanner that flags them.
//!
//! Nothing in [`vuln`] is meant for reuse: the unsafe halves are the subject
//! matter of security training sessions and static-analysis validation, and
//! every one of them is paired with the vetted alternative.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pitfall_core::scan::Scanner;
//! use anyhow::Result;
//!
//! # fn example() -> Result<()> {
//! let scanner = Scanner::new();
//! let report = scanner.scan_path(std::path::Path::new("src/"))?;
//! for finding in &report.findings {
//!     println!("{}:{} {}", finding.file_path, finding.line_number, finding.pattern_id);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`vuln`] - vulnerable demonstrations and their safe counterparts
//! - [`scan`] - pattern engine, scanner, and SARIF output
//! - [`config`] - configuration loading and paths
//! - [`error`] - error types

// ============================================================================
// Error Handling
// ============================================================================

pub use error::PitfallError;

/// Convenience Result type for Pitfall operations.
///
/// This is equivalent to `std::result::Result<T, PitfallError>`.
pub type Result<T> = std::result::Result<T, PitfallError>;

// ============================================================================
// Configuration
// ============================================================================

pub use config::{AppConfig, DemoConfig, config_dir, config_file_path, load_config};

// ============================================================================
// Vulnerability Demonstrations
// ============================================================================

pub use vuln::{ShellCommand, UserRecord};

// ============================================================================
// Scanning
// ============================================================================

pub use scan::{
    Confidence, Finding, PatternEngine, SarifReport, ScanConfig, ScanReport, ScanSummary, Scanner,
    Severity,
};

// ============================================================================
// Modules
// ============================================================================

pub mod config;
pub mod error;
pub mod scan;
pub mod vuln;

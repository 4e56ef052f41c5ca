// SPDX-License-Identifier: Apache-2.0

//! CLI-specific error formatting with user-friendly hints.
//!
//! This module provides a formatting layer that downcasts `anyhow::Error` to
//! `PitfallError` and adds hints for the error types a demo or scan can hit.
//! Structured error data stays in the library; presentation lives here.

use anyhow::Error;
use pitfall_core::error::PitfallError;

/// Formats an error for CLI display with helpful hints.
///
/// Downcasts `anyhow::Error` to `PitfallError` and attaches a hint where one
/// exists. If the error is not a `PitfallError`, returns the original error
/// message.
pub fn format_error(error: &Error) -> String {
    if let Some(pitfall_err) = error.downcast_ref::<PitfallError>() {
        match pitfall_err {
            PitfallError::Config { message: _ } => {
                format!(
                    "{pitfall_err}\n\nTip: Check your config file at {}",
                    pitfall_core::config::config_file_path().display()
                )
            }
            PitfallError::Database(_) => {
                format!(
                    "{pitfall_err}\n\nTip: The demo database is throwaway - delete it and rerun \
                     to reseed. An error here may be the demonstration itself (injected input \
                     can produce malformed SQL)."
                )
            }
            PitfallError::CommandFailed { .. } => {
                format!(
                    "{pitfall_err}\n\nTip: Demo commands run real processes. Check that the \
                     program exists on PATH."
                )
            }
            _ => pitfall_err.to_string(),
        }
    } else {
        format!("{error:#}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_includes_path_hint() {
        let err = Error::new(PitfallError::Config {
            message: "bad toml".to_string(),
        });

        let formatted = format_error(&err);
        assert!(formatted.contains("bad toml"));
        assert!(formatted.contains("config.toml"));
    }

    #[test]
    fn test_non_pitfall_error_passes_through() {
        let err = anyhow::anyhow!("plain failure");
        assert_eq!(format_error(&err), "plain failure");
    }

    #[test]
    fn test_crypto_error_has_no_hint() {
        let err = Error::new(PitfallError::Crypto {
            message: "tag mismatch".to_string(),
        });

        let formatted = format_error(&err);
        assert!(formatted.contains("tag mismatch"));
        assert!(!formatted.contains("Tip:"));
    }
}

// SPDX-License-Identifier: Apache-2.0

//! Error types for the Pitfall library.
//!
//! Uses `thiserror` for deriving `std::error::Error` implementations.
//! Application code should use `anyhow::Result` for top-level error handling.

use thiserror::Error;

/// Errors that can occur during Pitfall operations.
#[derive(Error, Debug)]
pub enum PitfallError {
    /// Demo database error from rusqlite.
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Cryptographic operation failed.
    ///
    /// The AEAD and password-hash crates return opaque errors; the message
    /// carries whatever context they expose.
    #[error("Crypto error: {message}")]
    Crypto {
        /// Error message.
        message: String,
    },

    /// Input rejected before reaching the unsafe operation.
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Why the input was rejected.
        message: String,
    },

    /// Filesystem error while reading demo data or scan targets.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file error.
    #[error("Configuration error: {message}")]
    Config {
        /// Error message.
        message: String,
    },

    /// Pattern database failed to load or compile.
    #[error("Pattern engine error: {message}")]
    Patterns {
        /// Error message.
        message: String,
    },

    /// Spawned demo command failed.
    #[error("Command failed with status {status}: {stderr}")]
    CommandFailed {
        /// Process exit status.
        status: i32,
        /// Captured stderr.
        stderr: String,
    },
}

impl From<config::ConfigError> for PitfallError {
    fn from(err: config::ConfigError) -> Self {
        PitfallError::Config {
            message: err.to_string(),
        }
    }
}

impl From<argon2::password_hash::Error> for PitfallError {
    fn from(err: argon2::password_hash::Error) -> Self {
        PitfallError::Crypto {
            message: err.to_string(),
        }
    }
}

impl From<chacha20poly1305::Error> for PitfallError {
    fn from(_: chacha20poly1305::Error) -> Self {
        PitfallError::Crypto {
            message: "AEAD operation failed (wrong key or tampered ciphertext)".to_string(),
        }
    }
}

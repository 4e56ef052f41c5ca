// SPDX-License-Identifier: Apache-2.0

//! Demonstration runners.
//!
//! Each runner drives one vulnerable function and its safe counterpart
//! against a throwaway target, and returns a serializable comparison for the
//! output layer. Nothing here touches state outside the demo database file
//! and per-run temp directories.

use std::fs;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

use pitfall_core::AppConfig;
use pitfall_core::vuln::{
    self, ShellCommand, UserRecord, demo_database, lookup_user_safe, lookup_user_vulnerable,
};

/// Outcome of the SQL injection demonstration.
#[derive(Serialize)]
pub struct SqlInjectionResult {
    /// Lookup input as typed.
    pub input: String,
    /// The concatenated SQL actually sent by the vulnerable lookup.
    pub concatenated_query: String,
    /// Row returned by the vulnerable lookup, if any.
    pub vulnerable_row: Option<UserRecord>,
    /// Error from the vulnerable lookup (malformed SQL), if any.
    pub vulnerable_error: Option<String>,
    /// Row returned by the parameterized lookup, if any.
    pub safe_row: Option<UserRecord>,
}

/// Runs both lookups against the throwaway demo database.
pub fn run_sql_injection(
    input: &str,
    database: Option<&str>,
    config: &AppConfig,
) -> Result<SqlInjectionResult> {
    let path = database.unwrap_or(&config.demo.database_path);
    debug!(path, "Opening demo database");
    let conn = demo_database(path).context("Failed to open demo database")?;

    let (vulnerable_row, vulnerable_error) = match lookup_user_vulnerable(&conn, input) {
        Ok(row) => (row, None),
        Err(e) => (None, Some(e.to_string())),
    };
    let safe_row = lookup_user_safe(&conn, input)?;

    Ok(SqlInjectionResult {
        input: input.to_string(),
        concatenated_query: format!(
            "SELECT id, username, email FROM users WHERE username = '{input}'"
        ),
        vulnerable_row,
        vulnerable_error,
        safe_row,
    })
}

/// Outcome of the weak-crypto demonstration.
#[derive(Serialize)]
pub struct WeakCryptoResult {
    /// Password fed to both hashers.
    pub password: String,
    /// Hex MD5 digest - identical on every run, reversible by lookup table.
    pub weak_digest: String,
    /// Argon2id PHC string - salted, slow, different on every run.
    pub safe_hash: String,
    /// Message fed to both ciphers.
    pub message: String,
    /// The hardcoded XOR key every deployment shares.
    pub xor_key: String,
    /// Base64 XOR ciphertext.
    pub xor_ciphertext: String,
    /// Plaintext recovered from the XOR ciphertext with the known key.
    pub xor_recovered: String,
    /// Hex of the AEAD blob (nonce plus ciphertext plus tag).
    pub aead_blob: String,
    /// Whether AEAD decryption with the right key round-tripped.
    pub aead_roundtrip: bool,
    /// Whether two AEAD encryptions of the same message differed.
    pub aead_nonces_differ: bool,
}

/// Runs the weak and vetted primitives side by side.
pub fn run_weak_crypto(password: &str, message: &str) -> Result<WeakCryptoResult> {
    let weak_digest = vuln::hash_password_weak(password);
    let safe_hash = vuln::hash_password_safe(password)?;

    let xor_key = vuln::predictable_key();
    let xor_ciphertext = vuln::xor_encrypt(message.as_bytes(), xor_key.as_bytes());
    let xor_recovered =
        String::from_utf8_lossy(&vuln::xor_decrypt(&xor_ciphertext, xor_key.as_bytes())?)
            .into_owned();

    let key = vuln::generate_key();
    let blob = vuln::encrypt_safe(&key, message.as_bytes())?;
    let again = vuln::encrypt_safe(&key, message.as_bytes())?;
    let aead_roundtrip = vuln::decrypt_safe(&key, &blob)? == message.as_bytes();

    Ok(WeakCryptoResult {
        password: password.to_string(),
        weak_digest,
        safe_hash,
        message: message.to_string(),
        xor_key: xor_key.to_string(),
        xor_ciphertext,
        xor_recovered,
        aead_blob: hex::encode(&blob),
        aead_roundtrip,
        aead_nonces_differ: blob != again,
    })
}

/// Outcome of the command injection demonstration.
#[derive(Serialize)]
pub struct CommandInjectionResult {
    /// Host input as typed.
    pub host: String,
    /// The shell invocation the vulnerable builder produces.
    pub vulnerable_command: ShellCommand,
    /// The argument-vector invocation the safe builder produces.
    pub safe_command: ShellCommand,
}

/// Builds both command lines without executing either.
#[must_use]
pub fn run_command_injection(host: &str) -> CommandInjectionResult {
    CommandInjectionResult {
        host: host.to_string(),
        vulnerable_command: vuln::ping_command_vulnerable(host),
        safe_command: vuln::ping_command_safe(host),
    }
}

/// Outcome of the path traversal demonstration.
#[derive(Serialize)]
pub struct PathTraversalResult {
    /// File name input as typed.
    pub name: String,
    /// Demo data root (a per-run temp directory).
    pub root: String,
    /// What the unchecked join read, or the error it hit.
    pub vulnerable_outcome: String,
    /// What the basename-confined lookup read, or the error it hit.
    pub safe_outcome: String,
    /// Whether the vulnerable read escaped the data root.
    pub escaped: bool,
}

/// Runs both reads against a freshly laid-out temp directory.
///
/// The layout mirrors the classic exercise: a public file inside the data
/// root and a "secret" one directory above it.
pub fn run_path_traversal(name: &str) -> Result<PathTraversalResult> {
    let tmp = tempfile::tempdir().context("Failed to create demo directory")?;
    let root = tmp.path().join("data");
    fs::create_dir(&root)?;
    fs::write(root.join("notes.txt"), "public notes")?;
    fs::write(tmp.path().join("secret.txt"), "top secret")?;

    let vulnerable = vuln::read_data_file_vulnerable(&root, name);
    let escaped = matches!(&vulnerable, Ok(content) if content == "top secret");
    let vulnerable_outcome = vulnerable.unwrap_or_else(|e| e.to_string());
    let safe_outcome = vuln::read_data_file_safe(&root, name).unwrap_or_else(|e| e.to_string());

    Ok(PathTraversalResult {
        name: name.to_string(),
        root: root.display().to_string(),
        vulnerable_outcome,
        safe_outcome,
        escaped,
    })
}

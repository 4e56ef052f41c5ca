// SPDX-License-Identifier: Apache-2.0

//! Command injection via shell interpolation (CWE-78).
//!
//! WARNING: `ping_command_vulnerable` is intentionally injectable. It exists
//! to be flagged by the scanner and demonstrated in training sessions.
//! DO NOT copy it into production code.
//!
//! Both builders return the argv they would execute, so the difference is
//! observable without spawning anything; [`run`] is the thin execution layer.

use std::process::Command;

use serde::Serialize;

use crate::error::PitfallError;

/// A command line about to be executed, in argv form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShellCommand {
    /// Program to execute.
    pub program: String,
    /// Arguments, one element per argv entry.
    pub args: Vec<String>,
}

impl ShellCommand {
    /// Renders the command for display, quoting arguments that contain
    /// whitespace so the argv boundaries stay visible.
    #[must_use]
    pub fn render(&self) -> String {
        let mut parts = vec![self.program.clone()];
        for arg in &self.args {
            if arg.contains(char::is_whitespace) {
                parts.push(format!("'{arg}'"));
            } else {
                parts.push(arg.clone());
            }
        }
        parts.join(" ")
    }
}

/// Builds a ping invocation by interpolating the host into a shell string.
///
/// The host lands inside `sh -c "..."`, so `127.0.0.1; rm -rf /tmp/x` runs
/// the second command with the caller's privileges.
#[must_use]
pub fn ping_command_vulnerable(host: &str) -> ShellCommand {
    // Vulnerable to command injection
    ShellCommand {
        program: "sh".to_string(),
        args: vec!["-c".to_string(), format!("ping -c 1 {host}")],
    }
}

/// Builds the same ping invocation as an argument vector.
///
/// No shell is involved: whatever the host string contains, it reaches ping
/// as a single argv entry and can only fail hostname resolution.
#[must_use]
pub fn ping_command_safe(host: &str) -> ShellCommand {
    ShellCommand {
        program: "ping".to_string(),
        args: vec!["-c".to_string(), "1".to_string(), host.to_string()],
    }
}

/// Executes a [`ShellCommand`] and captures stdout.
pub fn run(cmd: &ShellCommand) -> Result<String, PitfallError> {
    tracing::debug!(command = %cmd.render(), "Spawning demo command");
    let output = Command::new(&cmd.program).args(&cmd.args).output()?;

    if !output.status.success() {
        return Err(PitfallError::CommandFailed {
            status: output.status.code().unwrap_or(-1),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

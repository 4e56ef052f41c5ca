// SPDX-License-Identifier: Apache-2.0

//! Path traversal via unchecked filename joins (CWE-22).
//!
//! WARNING: `read_data_file_vulnerable` is intentionally traversable. It
//! exists to be flagged by the scanner and demonstrated in training sessions.
//! DO NOT copy it into production code.

use std::fs;
use std::path::Path;

use crate::error::PitfallError;

/// Reads a file by joining the caller-supplied name onto the data root.
///
/// `../` components walk out of the root, and an absolute name replaces the
/// root entirely, so any readable file on the machine is reachable.
pub fn read_data_file_vulnerable(root: &Path, name: &str) -> Result<String, PitfallError> {
    // Vulnerable to path traversal
    let path = root.join(name);
    tracing::debug!(path = %path.display(), "Reading data file");
    Ok(fs::read_to_string(path)?)
}

/// Reads a file after stripping the name to its final component.
///
/// Mirrors the original's `path.basename` fix: whatever directory structure
/// the name claims, only its last component is looked up under the root.
/// Names with no usable final component (`..`, `/`, the empty string) are
/// rejected outright.
pub fn read_data_file_safe(root: &Path, name: &str) -> Result<String, PitfallError> {
    let base = Path::new(name)
        .file_name()
        .ok_or_else(|| PitfallError::InvalidInput {
            message: format!("No usable file name in {name:?}"),
        })?;

    Ok(fs::read_to_string(root.join(base))?)
}

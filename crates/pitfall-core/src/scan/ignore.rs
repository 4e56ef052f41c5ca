// SPDX-License-Identifier: Apache-2.0

//! Ignore rules for scan findings.
//!
//! Lets users silence known-noisy patterns or whole path prefixes, e.g. the
//! fixture corpus itself when scanning a checkout of this repository.

use serde::{Deserialize, Serialize};

use super::types::Finding;

/// Ignore rules applied after pattern matching.
///
/// Configured through the `[scan]` table of the application config file (see
/// [`crate::config`]).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Pattern IDs to ignore (e.g., `["weak-crypto-md5", "xor-cipher"]`).
    pub ignore_patterns: Vec<String>,

    /// File path prefixes to ignore (e.g., `["tests/", "vendor/"]`).
    pub ignore_paths: Vec<String>,
}

impl ScanConfig {
    /// Check if a finding should be ignored based on configuration.
    ///
    /// A finding is ignored if its pattern ID matches any entry in
    /// `ignore_patterns` or its file path starts with any entry in
    /// `ignore_paths`.
    #[must_use]
    pub fn should_ignore(&self, finding: &Finding) -> bool {
        if self.ignore_patterns.contains(&finding.pattern_id) {
            return true;
        }

        self.should_ignore_path(&finding.file_path)
    }

    /// Check if a path falls under an ignored prefix.
    #[must_use]
    pub fn should_ignore_path(&self, path: &str) -> bool {
        self.ignore_paths
            .iter()
            .any(|prefix| path.starts_with(prefix.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(pattern_id: &str, file_path: &str) -> Finding {
        Finding {
            pattern_id: pattern_id.to_string(),
            file_path: file_path.to_string(),
            ..Finding::default()
        }
    }

    #[test]
    fn test_default_ignores_nothing() {
        let config = ScanConfig::default();
        assert!(!config.should_ignore(&finding("weak-crypto-md5", "src/lib.rs")));
        assert!(!config.should_ignore_path("tests/fixture.rs"));
    }

    #[test]
    fn test_ignores_by_pattern_id() {
        let config = ScanConfig {
            ignore_patterns: vec!["xor-cipher".to_string()],
            ignore_paths: vec![],
        };

        assert!(config.should_ignore(&finding("xor-cipher", "src/lib.rs")));
        assert!(!config.should_ignore(&finding("weak-crypto-md5", "src/lib.rs")));
    }

    #[test]
    fn test_ignores_by_path_prefix() {
        let config = ScanConfig {
            ignore_patterns: vec![],
            ignore_paths: vec!["vendor/".to_string(), "third_party/".to_string()],
        };

        assert!(config.should_ignore(&finding("xor-cipher", "vendor/lib.js")));
        assert!(config.should_ignore_path("third_party/sql.py"));
        assert!(!config.should_ignore_path("src/vendor.rs"));
    }

    #[test]
    fn test_round_trips_through_toml() {
        let toml_src = r#"
            ignore_patterns = ["predictable-key"]
            ignore_paths = ["tests/"]
        "#;

        let config: ScanConfig = toml::from_str(toml_src).unwrap();
        assert_eq!(config.ignore_patterns, vec!["predictable-key"]);
        assert!(config.should_ignore_path("tests/security_fixtures/x.rs"));
    }
}

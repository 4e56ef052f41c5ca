// SPDX-License-Identifier: Apache-2.0

//! Scanner orchestration over files, directory trees, and diffs.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::PitfallError;
use crate::scan::ignore::ScanConfig;
use crate::scan::patterns::PatternEngine;
use crate::scan::types::{Finding, ScanReport};

/// Pattern scanner for code and diffs.
#[derive(Debug)]
pub struct Scanner {
    engine: &'static PatternEngine,
    config: ScanConfig,
}

impl Scanner {
    /// Creates a new scanner using the global pattern engine.
    #[must_use]
    pub fn new() -> Self {
        Self {
            engine: PatternEngine::global(),
            config: ScanConfig::default(),
        }
    }

    /// Creates a new scanner with custom ignore configuration.
    #[must_use]
    pub fn with_config(config: ScanConfig) -> Self {
        Self {
            engine: PatternEngine::global(),
            config,
        }
    }

    /// Scans file content directly.
    ///
    /// Skips scanning entirely if the file path is in an ignored directory.
    /// Otherwise, filters out findings based on configured ignore rules.
    #[must_use]
    pub fn scan_file(&self, content: &str, file_path: &str) -> Vec<Finding> {
        // Early exit: skip scanning if path is in an ignored directory
        if self.config.should_ignore_path(file_path) {
            return Vec::new();
        }

        let findings = self.engine.scan(content, file_path);
        findings
            .into_iter()
            .filter(|finding| !self.config.should_ignore(finding))
            .collect()
    }

    /// Scans a file or directory tree on disk and assembles a report.
    ///
    /// Directories are walked recursively; hidden entries and files that are
    /// not valid UTF-8 are skipped. The report records how many files were
    /// actually inspected.
    pub fn scan_path(&self, target: &Path) -> Result<ScanReport, PitfallError> {
        let mut findings = Vec::new();
        let mut files_scanned = 0;

        let walker = WalkDir::new(target).into_iter().filter_entry(|entry| {
            // Skip hidden files and directories (.git, .cache, ...)
            entry.depth() == 0
                || !entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| name.starts_with('.'))
        });

        for entry in walker {
            let entry = entry.map_err(|e| PitfallError::Io(e.into()))?;
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path().to_string_lossy().into_owned();
            let Ok(content) = fs::read_to_string(entry.path()) else {
                tracing::debug!(file = %path, "Skipping non-UTF-8 file");
                continue;
            };

            files_scanned += 1;
            findings.extend(self.scan_file(&content, &path));
        }

        tracing::info!(
            target = %target.display(),
            files = files_scanned,
            findings = findings.len(),
            "Scan complete"
        );

        Ok(ScanReport::new(
            vec![target.to_string_lossy().into_owned()],
            files_scanned,
            findings,
        ))
    }

    /// Scans a unified diff, looking only at added lines.
    ///
    /// File paths come from `+++ b/` markers and line numbers from hunk
    /// headers, so findings point at the post-change file.
    #[must_use]
    pub fn scan_diff(&self, diff: &str) -> Vec<Finding> {
        let mut findings = Vec::new();
        let mut current_file = String::new();
        let mut current_line_num = 0;

        for line in diff.lines() {
            // Track current file being processed
            if line.starts_with("+++") {
                // Extract file path from "+++ b/path/to/file"
                if let Some(path) = line.strip_prefix("+++ b/") {
                    current_file = path.to_string();
                }
                continue;
            }

            // Track line numbers from diff hunks
            if line.starts_with("@@") {
                // Parse hunk header: @@ -old_start,old_count +new_start,new_count @@
                if let Some(new_pos) = line.split('+').nth(1)
                    && let Some(line_num_str) = new_pos.split(',').next()
                {
                    current_line_num = line_num_str
                        .split_whitespace()
                        .next()
                        .and_then(|s| s.parse::<usize>().ok())
                        .unwrap_or(0);
                }
                continue;
            }

            // Only scan added lines (starting with '+')
            if let Some(code) = line.strip_prefix('+') {
                // Skip if it's the file marker line
                if code.starts_with("++") {
                    continue;
                }

                if !self.config.should_ignore_path(&current_file) {
                    let line_findings = self.engine.scan(code, &current_file);
                    for mut finding in line_findings {
                        // Override line number with actual diff position
                        finding.line_number = current_line_num;
                        if !self.config.should_ignore(&finding) {
                            findings.push(finding);
                        }
                    }
                }

                current_line_num += 1;
            } else if !line.starts_with('-') && !line.starts_with('\\') {
                // Context lines (no prefix) also increment line number
                current_line_num += 1;
            }
        }

        findings
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_scanner_creation() {
        let scanner = Scanner::new();
        assert!(scanner.engine.pattern_count() > 0);
    }

    #[test]
    fn test_scan_file() {
        let scanner = Scanner::new();
        let code = r#"
            let api_key = "sk-1234567890abcdefghijklmnopqrstuvwxyz";
        "#;

        let findings = scanner.scan_file(code, "config.rs");
        assert!(!findings.is_empty(), "Should detect hardcoded secret");
    }

    #[test]
    fn test_scan_path_walks_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let sub = tmp.path().join("src");
        std::fs::create_dir(&sub).unwrap();

        let mut bad = std::fs::File::create(sub.join("db.py")).unwrap();
        writeln!(bad, r#"query = "SELECT * FROM users WHERE id = " + uid"#).unwrap();
        let mut clean = std::fs::File::create(sub.join("ok.py")).unwrap();
        writeln!(clean, "print('hello')").unwrap();

        let report = Scanner::new().scan_path(tmp.path()).unwrap();
        assert_eq!(report.files_scanned, 2);
        assert_eq!(report.findings.len(), 1);
        assert_eq!(report.findings[0].pattern_id, "sql-injection-concat");
        assert_eq!(report.summary.critical, 1);
    }

    #[test]
    fn test_scan_path_skips_hidden_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let hidden = tmp.path().join(".git");
        std::fs::create_dir(&hidden).unwrap();

        let mut f = std::fs::File::create(hidden.join("config.rb")).unwrap();
        writeln!(f, r#"system("rm -rf #{{dir}}")"#).unwrap();

        let report = Scanner::new().scan_path(tmp.path()).unwrap();
        assert_eq!(report.files_scanned, 0);
        assert!(report.findings.is_empty());
    }

    #[test]
    fn test_scan_diff_basic() {
        let scanner = Scanner::new();
        let diff = r#"
diff --git a/src/config.rs b/src/config.rs
index 1234567..abcdefg 100644
--- a/src/config.rs
+++ b/src/config.rs
@@ -10,3 +10,4 @@ fn load_config() {
     let host = "localhost";
+    let api_key = "sk-1234567890abcdefghijklmnopqrstuvwxyz";
 }
"#;

        let findings = scanner.scan_diff(diff);
        assert!(
            !findings.is_empty(),
            "Should detect hardcoded API key in diff"
        );
        assert_eq!(findings[0].file_path, "src/config.rs");
    }

    #[test]
    fn test_scan_diff_ignores_removed_lines() {
        let scanner = Scanner::new();
        let diff = r#"
diff --git a/src/old.rs b/src/old.rs
--- a/src/old.rs
+++ b/src/old.rs
@@ -1,2 +1,1 @@
-let api_key = "sk-1234567890abcdefghijklmnopqrstuvwxyz";
+let api_key = env::var("API_KEY").unwrap();
"#;

        let findings = scanner.scan_diff(diff);
        assert!(
            findings.is_empty(),
            "Should not detect secrets in removed lines"
        );
    }

    #[test]
    fn test_scan_diff_line_numbers() {
        let scanner = Scanner::new();
        let diff = r#"
diff --git a/test.rs b/test.rs
--- a/test.rs
+++ b/test.rs
@@ -5,2 +5,3 @@ fn main() {
     println!("line 5");
     println!("line 6");
+    let api_key = "sk-1234567890abcdefghijklmnopqrstuvwxyz";
"#;

        let findings = scanner.scan_diff(diff);
        assert_eq!(findings.len(), 1);
        // The added line should be at line 7 (after lines 5 and 6)
        assert_eq!(findings[0].line_number, 7);
    }

    #[test]
    fn test_scan_empty_diff() {
        let scanner = Scanner::new();
        let findings = scanner.scan_diff("");
        assert!(findings.is_empty());
    }

    #[test]
    fn test_scan_file_honors_ignore_rules() {
        let config = ScanConfig {
            ignore_patterns: vec!["hardcoded-api-key".to_string()],
            ignore_paths: vec!["vendor/".to_string()],
        };
        let scanner = Scanner::with_config(config);

        let code = r#"let api_key = "sk-1234567890abcdefghijklmnopqrstuvwxyz";"#;

        // Pattern ignored everywhere
        assert!(scanner.scan_file(code, "src/config.rs").is_empty());

        // Path prefix ignored entirely
        let sql = r#"query("SELECT * FROM t WHERE id = " + id)"#;
        assert!(scanner.scan_file(sql, "vendor/db.js").is_empty());
        assert!(!scanner.scan_file(sql, "src/db.js").is_empty());
    }
}

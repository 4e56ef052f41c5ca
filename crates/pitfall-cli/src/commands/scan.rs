// SPDX-License-Identifier: Apache-2.0

//! Scan command handlers.

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use pitfall_core::AppConfig;
use pitfall_core::scan::{SarifReport, ScanReport, Scanner};

/// Scans a file or directory and optionally writes a SARIF report.
pub fn run_path(target: &Path, sarif: Option<&Path>, config: &AppConfig) -> Result<ScanReport> {
    let scanner = Scanner::with_config(config.scan.clone());
    let report = scanner
        .scan_path(target)
        .with_context(|| format!("Failed to scan {}", target.display()))?;

    if let Some(sarif_path) = sarif {
        let sarif_report = SarifReport::from(report.findings.clone());
        let json = serde_json::to_string_pretty(&sarif_report)
            .context("Failed to serialize SARIF report")?;
        fs::write(sarif_path, json)
            .with_context(|| format!("Failed to write {}", sarif_path.display()))?;
        info!(path = %sarif_path.display(), "Wrote SARIF report");
    }

    Ok(report)
}

/// Scans the added lines of a unified diff from a file or stdin.
pub fn run_diff(file: Option<&Path>, config: &AppConfig) -> Result<ScanReport> {
    let (diff, label) = match file {
        Some(path) => (
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?,
            path.display().to_string(),
        ),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read diff from stdin")?;
            (buf, "<stdin>".to_string())
        }
    };

    let scanner = Scanner::with_config(config.scan.clone());
    let findings = scanner.scan_diff(&diff);

    // One "file" per post-image marker in the diff.
    let files_touched = diff
        .lines()
        .filter(|line| line.starts_with("+++ "))
        .count();

    Ok(ScanReport::new(
        vec![format!("diff:{label}")],
        files_touched,
        findings,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_run_path_writes_sarif() {
        let tmp = tempfile::tempdir().unwrap();
        let mut f = fs::File::create(tmp.path().join("bad.py")).unwrap();
        writeln!(f, r#"q = "SELECT * FROM users WHERE id = " + uid"#).unwrap();

        let sarif_path = tmp.path().join("report.sarif");
        let config = AppConfig::default();
        let report = run_path(tmp.path(), Some(&sarif_path), &config).unwrap();

        assert_eq!(report.findings.len(), 1);

        let sarif: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&sarif_path).unwrap()).unwrap();
        assert_eq!(sarif["version"], "2.1.0");
        assert_eq!(
            sarif["runs"][0]["results"][0]["ruleId"],
            "sql-injection-concat"
        );
    }

    #[test]
    fn test_run_diff_from_file() {
        let tmp = tempfile::tempdir().unwrap();
        let diff_path = tmp.path().join("change.diff");
        fs::write(
            &diff_path,
            concat!(
                "--- a/src/db.py\n",
                "+++ b/src/db.py\n",
                "@@ -1,1 +1,2 @@\n",
                " import sqlite3\n",
                "+query = \"SELECT * FROM users WHERE id = \" + uid\n",
            ),
        )
        .unwrap();

        let config = AppConfig::default();
        let report = run_diff(Some(&diff_path), &config).unwrap();

        assert_eq!(report.files_scanned, 1);
        assert_eq!(report.findings.len(), 1);
        assert_eq!(report.findings[0].file_path, "src/db.py");
        assert_eq!(report.targets, vec![format!("diff:{}", diff_path.display())]);
    }
}

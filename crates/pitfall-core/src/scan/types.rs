// SPDX-License-Identifier: Apache-2.0

//! Scan types and data structures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Severity level of a security finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Critical security vulnerability requiring immediate attention.
    Critical,
    /// High severity issue that should be addressed soon.
    High,
    /// Medium severity issue.
    Medium,
    /// Low severity issue or informational finding.
    #[default]
    Low,
}

/// Confidence level of a security finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// High confidence - very likely a real issue.
    High,
    /// Medium confidence - may require manual review.
    Medium,
    /// Low confidence - may be a false positive.
    #[default]
    Low,
}

/// A security finding from pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Finding {
    /// Pattern ID that matched.
    #[serde(default)]
    pub pattern_id: String,
    /// Human-readable description of the issue.
    #[serde(default)]
    pub description: String,
    /// Severity level.
    #[serde(default)]
    pub severity: Severity,
    /// Confidence level.
    #[serde(default)]
    pub confidence: Confidence,
    /// File path where the finding was detected.
    #[serde(default)]
    pub file_path: String,
    /// Line number in the file (1-indexed).
    #[serde(default)]
    pub line_number: usize,
    /// The matched code snippet.
    #[serde(default)]
    pub matched_text: String,
    /// Optional CWE identifier (e.g., "CWE-89").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cwe: Option<String>,
}

/// Pattern definition for security scanning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternDefinition {
    /// Unique identifier for this pattern.
    pub id: String,
    /// Human-readable description.
    pub description: String,
    /// Regex pattern to match.
    pub pattern: String,
    /// Severity level for matches.
    pub severity: Severity,
    /// Confidence level for matches.
    pub confidence: Confidence,
    /// Optional CWE identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cwe: Option<String>,
    /// File extensions to scan (empty = all files).
    #[serde(default)]
    pub file_extensions: Vec<String>,
}

/// Per-severity finding counts for a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ScanSummary {
    /// Number of critical findings.
    pub critical: usize,
    /// Number of high findings.
    pub high: usize,
    /// Number of medium findings.
    pub medium: usize,
    /// Number of low findings.
    pub low: usize,
}

impl ScanSummary {
    /// Tallies findings by severity.
    #[must_use]
    pub fn from_findings(findings: &[Finding]) -> Self {
        let mut summary = Self::default();
        for finding in findings {
            match finding.severity {
                Severity::Critical => summary.critical += 1,
                Severity::High => summary.high += 1,
                Severity::Medium => summary.medium += 1,
                Severity::Low => summary.low += 1,
            }
        }
        summary
    }

    /// Total finding count across all severities.
    #[must_use]
    pub fn total(&self) -> usize {
        self.critical + self.high + self.medium + self.low
    }
}

/// A completed scan: findings plus identifying metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    /// Unique scan identifier.
    pub scan_id: Uuid,
    /// When the scan ran.
    pub timestamp: DateTime<Utc>,
    /// Paths that were scanned, as given by the caller.
    pub targets: Vec<String>,
    /// Number of files inspected.
    pub files_scanned: usize,
    /// All findings, in file order.
    pub findings: Vec<Finding>,
    /// Per-severity tallies of `findings`.
    pub summary: ScanSummary,
}

impl ScanReport {
    /// Assembles a report from scan output, tallying the summary.
    #[must_use]
    pub fn new(targets: Vec<String>, files_scanned: usize, findings: Vec<Finding>) -> Self {
        let summary = ScanSummary::from_findings(&findings);
        Self {
            scan_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            targets,
            files_scanned,
            findings,
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finding_serialization() {
        let finding = Finding {
            pattern_id: "sql-injection-concat".to_string(),
            description: "SQL query built by string concatenation".to_string(),
            severity: Severity::Critical,
            confidence: Confidence::High,
            file_path: "src/db.rs".to_string(),
            line_number: 42,
            matched_text: "\"SELECT * FROM users WHERE id = \" + id".to_string(),
            cwe: Some("CWE-89".to_string()),
        };

        let json = serde_json::to_string(&finding).unwrap();
        let deserialized: Finding = serde_json::from_str(&json).unwrap();
        assert_eq!(finding, deserialized);
    }

    #[test]
    fn test_severity_serialization() {
        assert_eq!(
            serde_json::to_string(&Severity::Critical).unwrap(),
            "\"critical\""
        );
        assert_eq!(serde_json::to_string(&Severity::High).unwrap(), "\"high\"");
    }

    #[test]
    fn test_pattern_definition_deserialization() {
        let json = r#"{
            "id": "test-pattern",
            "description": "Test pattern",
            "pattern": "test.*regex",
            "severity": "high",
            "confidence": "medium",
            "cwe": "CWE-123",
            "file_extensions": [".rs", ".py"]
        }"#;

        let pattern: PatternDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(pattern.id, "test-pattern");
        assert_eq!(pattern.severity, Severity::High);
        assert_eq!(pattern.confidence, Confidence::Medium);
        assert_eq!(pattern.cwe, Some("CWE-123".to_string()));
        assert_eq!(pattern.file_extensions, vec![".rs", ".py"]);
    }

    #[test]
    fn test_summary_tallies_by_severity() {
        let findings = vec![
            Finding {
                severity: Severity::Critical,
                ..Finding::default()
            },
            Finding {
                severity: Severity::Critical,
                ..Finding::default()
            },
            Finding {
                severity: Severity::Medium,
                ..Finding::default()
            },
        ];

        let summary = ScanSummary::from_findings(&findings);
        assert_eq!(summary.critical, 2);
        assert_eq!(summary.high, 0);
        assert_eq!(summary.medium, 1);
        assert_eq!(summary.total(), 3);
    }

    #[test]
    fn test_report_round_trips_through_json() {
        let report = ScanReport::new(
            vec!["src/".to_string()],
            3,
            vec![Finding {
                severity: Severity::High,
                ..Finding::default()
            }],
        );

        let json = serde_json::to_string(&report).unwrap();
        let back: ScanReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.scan_id, report.scan_id);
        assert_eq!(back.summary, report.summary);
        assert_eq!(back.files_scanned, 3);
    }
}

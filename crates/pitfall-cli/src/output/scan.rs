// SPDX-License-Identifier: Apache-2.0

use console::style;
use std::io::{self, Write};

use pitfall_core::scan::{ScanReport, Severity};

use super::{OutputContext, Renderable};

fn severity_label(severity: Severity) -> console::StyledObject<String> {
    let padded = format!(
        "{:<8}",
        match severity {
            Severity::Critical => "CRITICAL",
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
        }
    );
    match severity {
        Severity::Critical => style(padded).red().bold(),
        Severity::High => style(padded).red(),
        Severity::Medium => style(padded).yellow(),
        Severity::Low => style(padded).dim(),
    }
}

impl Renderable for ScanReport {
    fn render_text(&self, w: &mut dyn Write, _ctx: &OutputContext) -> io::Result<()> {
        writeln!(w)?;
        writeln!(
            w,
            "{} {}",
            style("Scan").bold(),
            style(self.scan_id).dim()
        )?;
        writeln!(
            w,
            "  {}  {}",
            style("targets:").dim(),
            self.targets.join(", ")
        )?;
        writeln!(w, "  {}  {}", style("files:").dim(), self.files_scanned)?;
        writeln!(w)?;

        if self.findings.is_empty() {
            writeln!(w, "  {}", style("No findings.").green())?;
            writeln!(w)?;
            return Ok(());
        }

        for finding in &self.findings {
            let location = format!("{}:{}", finding.file_path, finding.line_number);
            let pattern = format!("{:<28}", finding.pattern_id);
            writeln!(
                w,
                "  {} {} {}",
                severity_label(finding.severity),
                style(pattern).cyan(),
                style(&location).dim()
            )?;
            writeln!(w, "           {}", finding.description)?;
            if let Some(cwe) = &finding.cwe {
                writeln!(w, "           {}", style(cwe).dim())?;
            }
        }

        writeln!(w)?;
        writeln!(
            w,
            "  {} {} critical, {} high, {} medium, {} low",
            style("Summary:").bold(),
            self.summary.critical,
            self.summary.high,
            self.summary.medium,
            self.summary.low
        )?;
        writeln!(w)?;
        Ok(())
    }

    fn render_markdown(&self, w: &mut dyn Write, _ctx: &OutputContext) -> io::Result<()> {
        writeln!(w, "## Scan Report\n")?;
        writeln!(w, "- Targets: {}", self.targets.join(", "))?;
        writeln!(w, "- Files scanned: {}", self.files_scanned)?;
        writeln!(
            w,
            "- Findings: {} ({} critical, {} high, {} medium, {} low)\n",
            self.summary.total(),
            self.summary.critical,
            self.summary.high,
            self.summary.medium,
            self.summary.low
        )?;

        if self.findings.is_empty() {
            writeln!(w, "No findings.")?;
            return Ok(());
        }

        writeln!(w, "| Severity | Pattern | Location | CWE |")?;
        writeln!(w, "|----------|---------|----------|-----|")?;
        for finding in &self.findings {
            writeln!(
                w,
                "| {:?} | {} | {}:{} | {} |",
                finding.severity,
                finding.pattern_id,
                finding.file_path,
                finding.line_number,
                finding.cwe.as_deref().unwrap_or("-")
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use pitfall_core::scan::Finding;

    fn ctx() -> OutputContext {
        OutputContext {
            format: OutputFormat::Text,
            quiet: false,
            verbose: false,
            is_tty: false,
        }
    }

    fn report() -> ScanReport {
        ScanReport::new(
            vec!["src/".to_string()],
            2,
            vec![Finding {
                pattern_id: "weak-crypto-md5".to_string(),
                description: "MD5 is cryptographically broken".to_string(),
                severity: Severity::Critical,
                file_path: "src/hash.rs".to_string(),
                line_number: 7,
                cwe: Some("CWE-327".to_string()),
                ..Finding::default()
            }],
        )
    }

    #[test]
    fn test_text_rendering_includes_finding_and_summary() {
        let mut buf = Vec::new();
        report().render_text(&mut buf, &ctx()).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("weak-crypto-md5"));
        assert!(text.contains("src/hash.rs:7"));
        assert!(text.contains("1 critical"));
    }

    #[test]
    fn test_markdown_rendering_is_a_table() {
        let mut buf = Vec::new();
        report().render_markdown(&mut buf, &ctx()).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("| Severity | Pattern | Location | CWE |"));
        assert!(text.contains("| Critical | weak-crypto-md5 | src/hash.rs:7 | CWE-327 |"));
    }

    #[test]
    fn test_empty_report_renders_clean() {
        let empty = ScanReport::new(vec!["src/".to_string()], 5, vec![]);
        let mut buf = Vec::new();
        empty.render_text(&mut buf, &ctx()).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("No findings."));
    }
}

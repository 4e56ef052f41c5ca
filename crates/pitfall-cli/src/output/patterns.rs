// SPDX-License-Identifier: Apache-2.0

use console::style;
use std::io::{self, Write};

use crate::commands::patterns::PatternsResult;

use super::{OutputContext, Renderable};

impl Renderable for PatternsResult {
    fn render_text(&self, w: &mut dyn Write, _ctx: &OutputContext) -> io::Result<()> {
        writeln!(w)?;
        writeln!(w, "{}", style("Detection patterns:").bold())?;
        writeln!(w)?;

        for pattern in &self.patterns {
            let id = format!("{:<26}", pattern.id);
            let severity = format!("{:<9}", format!("{:?}", pattern.severity).to_lowercase());
            let cwe = format!("{:<8}", pattern.cwe.as_deref().unwrap_or("-"));

            writeln!(
                w,
                "  {} {} {} {}",
                style(id).cyan(),
                style(severity).yellow(),
                style(cwe).dim(),
                pattern.description
            )?;
        }

        writeln!(w)?;
        Ok(())
    }

    fn render_markdown(&self, w: &mut dyn Write, _ctx: &OutputContext) -> io::Result<()> {
        writeln!(w, "## Detection Patterns\n")?;
        writeln!(w, "| ID | Severity | CWE | Description |")?;
        writeln!(w, "|----|----------|-----|-------------|")?;
        for pattern in &self.patterns {
            writeln!(
                w,
                "| {} | {:?} | {} | {} |",
                pattern.id,
                pattern.severity,
                pattern.cwe.as_deref().unwrap_or("-"),
                pattern.description
            )?;
        }
        Ok(())
    }
}

// SPDX-License-Identifier: Apache-2.0

use console::style;
use std::io::{self, Write};

use crate::commands::demo::{
    CommandInjectionResult, PathTraversalResult, SqlInjectionResult, WeakCryptoResult,
};

use super::{OutputContext, Renderable};

fn section(w: &mut dyn Write, label: &str) -> io::Result<()> {
    writeln!(w)?;
    writeln!(w, "{}", style(label).bold())
}

fn unsafe_line(w: &mut dyn Write, key: &str, value: &str) -> io::Result<()> {
    writeln!(
        w,
        "  {} {}  {}",
        style("UNSAFE").red().bold(),
        style(format!("{key}:")).dim(),
        value
    )
}

fn safe_line(w: &mut dyn Write, key: &str, value: &str) -> io::Result<()> {
    writeln!(
        w,
        "  {}   {}  {}",
        style("SAFE").green().bold(),
        style(format!("{key}:")).dim(),
        value
    )
}

impl Renderable for SqlInjectionResult {
    fn render_text(&self, w: &mut dyn Write, _ctx: &OutputContext) -> io::Result<()> {
        section(w, "SQL injection (CWE-89)")?;
        writeln!(w, "  {}  {:?}", style("input:").dim(), self.input)?;
        writeln!(w)?;

        unsafe_line(w, "query", &self.concatenated_query)?;
        match (&self.vulnerable_row, &self.vulnerable_error) {
            (Some(row), _) => unsafe_line(
                w,
                "result",
                &format!("leaked row {} <{}>", row.username, row.email),
            )?,
            (None, Some(err)) => unsafe_line(w, "result", &format!("query broke: {err}"))?,
            (None, None) => unsafe_line(w, "result", "no match")?,
        }

        writeln!(w)?;
        safe_line(w, "query", "SELECT id, username, email FROM users WHERE username = ?1")?;
        match &self.safe_row {
            Some(row) => safe_line(w, "result", &format!("matched {}", row.username))?,
            None => safe_line(w, "result", "no match - payload treated as data")?,
        }
        writeln!(w)?;
        Ok(())
    }
}

impl Renderable for WeakCryptoResult {
    fn render_text(&self, w: &mut dyn Write, _ctx: &OutputContext) -> io::Result<()> {
        section(w, "Password hashing (CWE-916)")?;
        unsafe_line(w, "md5", &self.weak_digest)?;
        safe_line(w, "argon2id", &self.safe_hash)?;

        section(w, "Encryption (CWE-327, CWE-321)")?;
        unsafe_line(w, "xor key", &format!("{:?} (hardcoded)", self.xor_key))?;
        unsafe_line(w, "xor blob", &self.xor_ciphertext)?;
        unsafe_line(
            w,
            "recovered",
            &format!("{:?} - anyone with the key reverses it", self.xor_recovered),
        )?;
        safe_line(w, "aead blob", &self.aead_blob)?;
        safe_line(
            w,
            "roundtrip",
            if self.aead_roundtrip { "ok" } else { "FAILED" },
        )?;
        safe_line(
            w,
            "nonces",
            if self.aead_nonces_differ {
                "fresh per message"
            } else {
                "REUSED"
            },
        )?;
        writeln!(w)?;
        Ok(())
    }
}

impl Renderable for CommandInjectionResult {
    fn render_text(&self, w: &mut dyn Write, _ctx: &OutputContext) -> io::Result<()> {
        section(w, "Command injection (CWE-78)")?;
        writeln!(w, "  {}  {:?}", style("host:").dim(), self.host)?;
        writeln!(w)?;

        unsafe_line(w, "spawns", &self.vulnerable_command.render())?;
        unsafe_line(
            w,
            "argv",
            &format!("{:?} - the shell parses the payload", self.vulnerable_command.args),
        )?;
        writeln!(w)?;
        safe_line(w, "spawns", &self.safe_command.render())?;
        safe_line(
            w,
            "argv",
            &format!("{:?} - the payload stays one argument", self.safe_command.args),
        )?;
        writeln!(w)?;
        Ok(())
    }
}

impl Renderable for PathTraversalResult {
    fn render_text(&self, w: &mut dyn Write, _ctx: &OutputContext) -> io::Result<()> {
        section(w, "Path traversal (CWE-22)")?;
        writeln!(w, "  {}  {:?}", style("name:").dim(), self.name)?;
        writeln!(w, "  {}  {}", style("root:").dim(), self.root)?;
        writeln!(w)?;

        unsafe_line(w, "read", &self.vulnerable_outcome)?;
        if self.escaped {
            unsafe_line(w, "escaped", "yes - the read left the data root")?;
        }
        safe_line(w, "read", &self.safe_outcome)?;
        writeln!(w)?;
        Ok(())
    }
}

// SPDX-License-Identifier: Apache-2.0

//! Pattern database listing.

use serde::Serialize;

use pitfall_core::scan::{PatternDefinition, PatternEngine};

/// The embedded pattern database, for listing.
#[derive(Serialize)]
pub struct PatternsResult {
    /// All loaded pattern definitions.
    pub patterns: Vec<PatternDefinition>,
}

/// Returns the embedded pattern definitions.
#[must_use]
pub fn run() -> PatternsResult {
    PatternsResult {
        patterns: PatternEngine::global()
            .definitions()
            .into_iter()
            .cloned()
            .collect(),
    }
}

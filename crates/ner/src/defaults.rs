// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ready-made demonstration patterns.

use crate::pattern_set::PatternSet;

/// Demonstration patterns for people, locations, and organizations.
///
/// Coarse and English-oriented: honorific-prefixed and capitalized full
/// names under `PER`, a short city list under `LOC`, corporate suffixes
/// and well-known bodies under `ORG`. Useful as a starting point or for
/// smoke-testing a pipeline; real deployments should load their own
/// pattern file.
pub fn builtin_patterns() -> PatternSet {
    let mut patterns = PatternSet::new();
    patterns.add(
        "PER",
        r"\b(Mr\.|Ms\.|Mrs\.|Dr\.)\s+[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*\b",
    );
    // Capitalized full names
    patterns.add("PER", r"\b[A-Z][a-z]+(?:\s+[A-Z][a-z]+)+\b");
    patterns.add(
        "LOC",
        r"\b(New York|London|Tokyo|Paris|Berlin|Sydney|Beijing|Toronto|Delhi)\b",
    );
    patterns.add(
        "ORG",
        r"\b[A-Z][a-zA-Z0-9&\-. ]+(Inc\.|Corp\.|LLC|Ltd\.|PLC|Company|Corporation|Bank|Group)\b",
    );
    patterns.add(
        "ORG",
        r"\b(United Nations|UNICEF|Google|Microsoft|Apple|NASA|WHO|IMF|World Bank)\b",
    );
    patterns
}

#[cfg(test)]
#[path = "defaults_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The pattern-driven entity matcher.

use std::path::Path;

use regex::{Regex, RegexBuilder};
use serde::Serialize;

use crate::codec;
use crate::error::NerError;
use crate::pattern_set::PatternSet;

/// Compile flags applied uniformly to every pattern a matcher owns,
/// both at construction and through later [`RegexNer::add_pattern`] calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    /// Letters match regardless of case (`(?i)`).
    pub case_insensitive: bool,
    /// `^` and `$` match at line boundaries (`(?m)`).
    pub multi_line: bool,
    /// `.` also matches `\n` (`(?s)`).
    pub dot_matches_new_line: bool,
    /// Whitespace in the pattern is insignificant (`(?x)`).
    pub ignore_whitespace: bool,
}

impl Flags {
    fn compile(self, source: &str) -> Result<Regex, regex::Error> {
        RegexBuilder::new(source)
            .case_insensitive(self.case_insensitive)
            .multi_line(self.multi_line)
            .dot_matches_new_line(self.dot_matches_new_line)
            .ignore_whitespace(self.ignore_whitespace)
            .build()
    }
}

/// One successfully compiled pattern source, tied to its label.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    label: String,
    source: String,
    regex: Regex,
}

impl CompiledPattern {
    /// Label the pattern was registered under.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The original pattern source text.
    pub fn source(&self) -> &str {
        &self.source
    }
}

/// One located occurrence of a pattern in the scanned text.
///
/// Offsets are character-based with an exclusive end. Overlapping and
/// duplicate matches across patterns and labels are all reported; any
/// conflict resolution is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    /// Entity-type label that owns the producing pattern.
    pub label: String,
    /// The matched substring.
    pub text: String,
    /// Character offset of the first matched character.
    pub start: usize,
    /// Character offset one past the last matched character.
    pub end: usize,
    /// Pattern source that produced the match.
    pub pattern: String,
}

/// A small, deterministic regex-based entity matcher.
///
/// Owns a raw [`PatternSet`] and the regexes compiled from it. The two
/// steady states are empty and compiled-and-ready; scanning is a pure
/// read and [`RegexNer::add_pattern`] is append-and-recompile. There is
/// no interior locking: concurrent `find_entities` calls are fine as
/// long as no mutation is in flight, and callers wanting concurrent
/// mutation must bring their own exclusion.
#[derive(Debug, Clone, Default)]
pub struct RegexNer {
    flags: Flags,
    patterns: PatternSet,
    compiled: Vec<CompiledPattern>,
}

impl RegexNer {
    /// Creates a matcher with no patterns and default flags.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a matcher with no patterns and the given flags.
    pub fn with_flags(flags: Flags) -> Self {
        Self {
            flags,
            ..Self::default()
        }
    }

    /// Builds a matcher from an in-memory pattern set.
    ///
    /// Bulk compilation is best-effort: a source that fails to compile
    /// is skipped with a warning so one bad pattern does not sink the
    /// rest of the set. Use [`RegexNer::add_pattern`] for the strict
    /// path.
    pub fn from_patterns(patterns: PatternSet, flags: Flags) -> Self {
        let compiled = compile_all(&patterns, flags);
        Self {
            flags,
            patterns,
            compiled,
        }
    }

    /// Loads a pattern file and builds a matcher from it.
    ///
    /// The file format follows the path's extension (see
    /// [`codec::Format::from_path`]). Load failures are fatal; compile
    /// failures within a loaded set follow the bulk skip policy.
    pub fn from_file(path: impl AsRef<Path>, flags: Flags) -> Result<Self, NerError> {
        let patterns = codec::load(path.as_ref())?;
        Ok(Self::from_patterns(patterns, flags))
    }

    /// The raw pattern set, including any sources that failed to compile.
    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    /// Successfully compiled patterns, in compile order.
    pub fn compiled(&self) -> &[CompiledPattern] {
        &self.compiled
    }

    /// The compile flags this matcher applies to every pattern.
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Scans `text` and returns every match from every compiled pattern.
    ///
    /// Each pattern contributes its standard leftmost non-overlapping
    /// matches. The combined result is stable-sorted by ascending start
    /// offset, so matches starting at the same position keep compile
    /// order. Nothing is deduplicated or arbitrated.
    pub fn find_entities(&self, text: &str) -> Vec<Match> {
        let offsets = CharOffsets::new(text);
        let mut matches = Vec::new();
        for pattern in &self.compiled {
            for found in pattern.regex.find_iter(text) {
                matches.push(Match {
                    label: pattern.label.clone(),
                    text: found.as_str().to_string(),
                    start: offsets.at(found.start()),
                    end: offsets.at(found.end()),
                    pattern: pattern.source.clone(),
                });
            }
        }
        matches.sort_by_key(|m| m.start);
        matches
    }

    /// Appends one pattern source under `label` and compiles it.
    ///
    /// Unlike bulk construction, a source that fails to compile is a
    /// hard error here. The raw pattern set keeps the appended source
    /// even on failure; only the compiled list is left untouched. A
    /// later save therefore persists the bad source as-is.
    pub fn add_pattern(
        &mut self,
        label: impl Into<String>,
        source: impl Into<String>,
    ) -> Result<(), NerError> {
        let label = label.into();
        let source = source.into();
        self.patterns.add(label.clone(), source.clone());
        let regex = self
            .flags
            .compile(&source)
            .map_err(|e| NerError::Compile {
                label: label.clone(),
                pattern: source.clone(),
                source: e,
            })?;
        self.compiled.push(CompiledPattern {
            label,
            source,
            regex,
        });
        Ok(())
    }

    /// Writes the raw pattern set to `path`, format chosen by extension.
    ///
    /// Compiled artifacts are never persisted; loading the saved file
    /// reproduces an equivalent pattern set.
    pub fn save_patterns(&self, path: impl AsRef<Path>) -> Result<(), NerError> {
        codec::save(path.as_ref(), &self.patterns)
    }
}

fn compile_all(patterns: &PatternSet, flags: Flags) -> Vec<CompiledPattern> {
    let mut compiled = Vec::with_capacity(patterns.source_count());
    for (label, sources) in patterns.iter() {
        for source in sources {
            match flags.compile(source) {
                Ok(regex) => compiled.push(CompiledPattern {
                    label: label.to_string(),
                    source: source.clone(),
                    regex,
                }),
                Err(e) => {
                    tracing::warn!(
                        "skipping invalid pattern {:?} for label {:?}: {}",
                        source,
                        label,
                        e
                    );
                }
            }
        }
    }
    compiled
}

/// Byte-to-character offset translation for one scanned text.
struct CharOffsets<'a> {
    text: &'a str,
    ascii: bool,
}

impl<'a> CharOffsets<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            ascii: text.is_ascii(),
        }
    }

    fn at(&self, byte: usize) -> usize {
        if self.ascii {
            byte
        } else {
            self.text[..byte].chars().count()
        }
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;

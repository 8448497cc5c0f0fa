// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Deterministic regex-based named entity matching.
//!
//! Patterns are grouped under entity-type labels in a [`PatternSet`],
//! compiled once, and applied to text with [`RegexNer::find_entities`],
//! which reports every match from every pattern — overlaps and duplicates
//! included — sorted by start offset. Conflict resolution belongs to the
//! caller.
//!
//! Pattern files are plain JSON or YAML mappings from label to one regex
//! source or a list of them:
//!
//! ```yaml
//! PER:
//!   - '\b(Mr\.|Ms\.|Mrs\.|Dr\.)\s+[A-Z][a-z]+\b'
//! NUM: '\d+'
//! ```
//!
//! Two compile policies apply on purpose: bulk construction skips sources
//! that fail to compile (one bad pattern must not sink a large file),
//! while [`RegexNer::add_pattern`] surfaces the failure to the caller.
//!
//! YAML support sits behind the default-on `yaml` cargo feature. With the
//! feature off, JSON keeps working and YAML operations fail with
//! [`NerError::YamlUnsupported`] only when actually invoked.

pub mod codec;
pub mod defaults;
mod error;
mod matcher;
mod pattern_set;

pub use error::NerError;
pub use matcher::{CompiledPattern, Flags, Match, RegexNer};
pub use pattern_set::PatternSet;

#[cfg(test)]
pub(crate) mod test_utils;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern-file loading and saving.
//!
//! The format is chosen by the path's extension: a `.json` suffix
//! (case-insensitive) selects JSON, anything else selects YAML. Both
//! directions are complete-or-fail; nothing is streamed.
//!
//! YAML sits behind the `yaml` cargo feature. With the feature off, a
//! YAML load or save fails with [`NerError::YamlUnsupported`] before any
//! I/O happens, and JSON paths are unaffected.

use std::fs;
use std::path::Path;

use crate::error::NerError;
use crate::pattern_set::PatternSet;

/// On-disk pattern-file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// Selects the format for `path`: `.json` means JSON, everything else YAML.
    pub fn from_path(path: &Path) -> Self {
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json { Format::Json } else { Format::Yaml }
    }
}

/// Reads and parses a pattern file.
pub fn load(path: &Path) -> Result<PatternSet, NerError> {
    let patterns = match Format::from_path(path) {
        Format::Json => {
            let content = read(path)?;
            serde_json::from_str(&content).map_err(|source| NerError::ParseJson {
                path: path.to_path_buf(),
                source,
            })?
        }
        Format::Yaml => load_yaml(path)?,
    };
    tracing::debug!("loaded {} label(s) from {}", patterns.len(), path.display());
    Ok(patterns)
}

/// Writes a pattern set to `path` in the format its extension implies.
pub fn save(path: &Path, patterns: &PatternSet) -> Result<(), NerError> {
    let content = match Format::from_path(path) {
        Format::Json => {
            serde_json::to_string_pretty(patterns).map_err(|source| NerError::SerializeJson {
                path: path.to_path_buf(),
                source,
            })?
        }
        Format::Yaml => to_yaml(path, patterns)?,
    };
    fs::write(path, content).map_err(|source| NerError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("saved {} label(s) to {}", patterns.len(), path.display());
    Ok(())
}

fn read(path: &Path) -> Result<String, NerError> {
    fs::read_to_string(path).map_err(|source| NerError::Read {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(feature = "yaml")]
fn load_yaml(path: &Path) -> Result<PatternSet, NerError> {
    let content = read(path)?;
    // An empty YAML document is an empty set, not an error.
    serde_yaml::from_str::<Option<PatternSet>>(&content)
        .map(Option::unwrap_or_default)
        .map_err(|source| NerError::ParseYaml {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(not(feature = "yaml"))]
fn load_yaml(path: &Path) -> Result<PatternSet, NerError> {
    Err(NerError::YamlUnsupported {
        path: path.to_path_buf(),
    })
}

#[cfg(feature = "yaml")]
fn to_yaml(path: &Path, patterns: &PatternSet) -> Result<String, NerError> {
    serde_yaml::to_string(patterns).map_err(|source| NerError::SerializeYaml {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(not(feature = "yaml"))]
fn to_yaml(path: &Path, _patterns: &PatternSet) -> Result<String, NerError> {
    Err(NerError::YamlUnsupported {
        path: path.to_path_buf(),
    })
}

#[cfg(test)]
#[path = "codec_tests.rs"]
mod tests;

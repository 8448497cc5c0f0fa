// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error taxonomy for pattern loading, compilation, and persistence.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the matcher and the pattern-file codec.
///
/// Load failures are fatal to construction: there is no partial
/// [`PatternSet`](crate::PatternSet) recovery from a malformed file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NerError {
    /// Pattern file missing or unreadable.
    #[error("failed to read pattern file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Pattern file is not valid JSON.
    #[error("malformed JSON in pattern file {}", path.display())]
    ParseJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Pattern file is not valid YAML.
    #[cfg(feature = "yaml")]
    #[error("malformed YAML in pattern file {}", path.display())]
    ParseYaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// A single pattern source failed to compile.
    ///
    /// Only [`RegexNer::add_pattern`](crate::RegexNer::add_pattern)
    /// returns this; bulk construction skips bad sources instead.
    #[error("invalid pattern {pattern:?} for label {label:?}")]
    Compile {
        label: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Destination unwritable.
    #[error("failed to write pattern file {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Patterns could not be serialized as JSON.
    #[error("failed to serialize patterns for {}", path.display())]
    SerializeJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Patterns could not be serialized as YAML.
    #[cfg(feature = "yaml")]
    #[error("failed to serialize patterns for {}", path.display())]
    SerializeYaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// A YAML pattern file was requested but the `yaml` feature is off.
    #[error(
        "YAML support is not enabled for {}; rebuild with the `yaml` feature or use a .json path",
        path.display()
    )]
    YamlUnsupported { path: PathBuf },
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Raw label → pattern-source mapping.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Ordered mapping from entity-type label to its regex pattern sources.
///
/// Labels keep insertion order and each label keeps the order its
/// patterns were registered in; the matcher compiles and tries them in
/// exactly that order. Nothing is deduplicated: registering the same
/// source twice keeps both copies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PatternSet(IndexMap<String, Vec<String>>);

/// A pattern-file entry: one pattern source or a list of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl<'de> Deserialize<'de> for PatternSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = IndexMap::<String, OneOrMany>::deserialize(deserializer)?;
        Ok(Self(
            raw.into_iter()
                .map(|(label, entry)| {
                    let sources = match entry {
                        // A bare string normalizes to a one-element list.
                        OneOrMany::One(source) => vec![source],
                        OneOrMany::Many(sources) => sources,
                    };
                    (label, sources)
                })
                .collect(),
        ))
    }
}

impl PatternSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a pattern source under `label`, creating the label if absent.
    pub fn add(&mut self, label: impl Into<String>, source: impl Into<String>) {
        self.0.entry(label.into()).or_default().push(source.into());
    }

    /// Pattern sources registered under `label`, in registration order.
    pub fn sources(&self, label: &str) -> Option<&[String]> {
        self.0.get(label).map(Vec::as_slice)
    }

    /// Iterates labels and their pattern sources in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0
            .iter()
            .map(|(label, sources)| (label.as_str(), sources.as_slice()))
    }

    /// Number of registered labels.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no labels are registered.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of pattern sources across all labels.
    pub fn source_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }
}

impl<L, S> FromIterator<(L, Vec<S>)> for PatternSet
where
    L: Into<String>,
    S: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (L, Vec<S>)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(label, sources)| {
                    (
                        label.into(),
                        sources.into_iter().map(Into::into).collect(),
                    )
                })
                .collect(),
        )
    }
}

#[cfg(test)]
#[path = "pattern_set_tests.rs"]
mod tests;

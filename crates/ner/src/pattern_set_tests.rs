// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Unit tests for the raw pattern mapping.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;

#[test]
fn add_creates_label_and_appends_in_order() {
    let mut patterns = PatternSet::new();
    patterns.add("NUM", r"\d+");
    patterns.add("NUM", r"[0-9]+");

    assert_eq!(patterns.len(), 1);
    assert_eq!(patterns.sources("NUM").unwrap(), [r"\d+", r"[0-9]+"]);
}

#[test]
fn duplicates_are_kept() {
    let mut patterns = PatternSet::new();
    patterns.add("NUM", r"\d+");
    patterns.add("NUM", r"\d+");

    assert_eq!(patterns.sources("NUM").unwrap().len(), 2);
    assert_eq!(patterns.source_count(), 2);
}

#[test]
fn labels_keep_insertion_order() {
    let mut patterns = PatternSet::new();
    patterns.add("Z", "z");
    patterns.add("A", "a");
    patterns.add("M", "m");

    let labels: Vec<&str> = patterns.iter().map(|(label, _)| label).collect();
    assert_eq!(labels, ["Z", "A", "M"]);
}

#[test]
fn deserializes_bare_string_as_one_element_list() {
    let patterns: PatternSet = serde_json::from_str(r#"{"NUM": "\\d+"}"#).unwrap();
    assert_eq!(patterns.sources("NUM").unwrap(), [r"\d+"]);
}

#[test]
fn deserializes_list_of_sources() {
    let patterns: PatternSet =
        serde_json::from_str(r#"{"NUM": ["\\d+", "[0-9]+"], "WORD": ["\\w+"]}"#).unwrap();

    assert_eq!(patterns.sources("NUM").unwrap(), [r"\d+", r"[0-9]+"]);
    assert_eq!(patterns.sources("WORD").unwrap(), [r"\w+"]);
}

#[test]
fn serializes_every_entry_as_a_list() {
    let patterns: PatternSet = serde_json::from_str(r#"{"NUM": "\\d+"}"#).unwrap();
    let value = serde_json::to_value(&patterns).unwrap();

    assert!(value["NUM"].is_array());
    assert_eq!(value["NUM"][0], r"\d+");
}

#[test]
fn from_iterator_preserves_order() {
    let patterns = PatternSet::from_iter([("B", vec!["b1", "b2"]), ("A", vec!["a1"])]);

    let labels: Vec<&str> = patterns.iter().map(|(label, _)| label).collect();
    assert_eq!(labels, ["B", "A"]);
    assert_eq!(patterns.source_count(), 3);
}

#[test]
fn empty_set_reports_empty() {
    let patterns = PatternSet::new();
    assert!(patterns.is_empty());
    assert_eq!(patterns.len(), 0);
    assert_eq!(patterns.source_count(), 0);
    assert!(patterns.sources("NUM").is_none());
}

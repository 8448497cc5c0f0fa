// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared unit test utilities.
//!
//! Provides common helpers for unit tests in the ner crate.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::io::Write;

use tempfile::{Builder, NamedTempFile, TempDir};

/// Creates a temp file with the given suffix and content.
///
/// Returns the NamedTempFile which keeps the file alive.
pub fn temp_pattern_file(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    write!(file, "{}", content).unwrap();
    file.flush().unwrap();
    file
}

/// Creates a temp directory for save/load round-trips.
pub fn temp_dir() -> TempDir {
    TempDir::new().unwrap()
}

// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Path tests
//!
//! Tests for initial directory resolution and the suggested save name.

use std::fs;
use std::path::{PathBuf, MAIN_SEPARATOR};
use tempfile::TempDir;

use crate::core::paths::{resolve_initial_dir, suggested_file_path, HOME_PATH};

#[test]
fn test_suggested_path_is_plain_concatenation() {
    let dir = PathBuf::from("/home/user/Documents");
    let suggested = suggested_file_path(&dir, "report", ".pdf");

    let expected = format!("/home/user/Documents{}report.pdf", MAIN_SEPARATOR);
    assert_eq!(suggested, PathBuf::from(expected));
}

#[test]
fn test_suggested_path_keeps_trailing_separator() {
    let dir = PathBuf::from(format!("/home/user{}", MAIN_SEPARATOR));
    let suggested = suggested_file_path(&dir, "report", ".pdf");

    let expected = format!("/home/user{0}{0}report.pdf", MAIN_SEPARATOR);
    assert_eq!(suggested.as_os_str(), expected.as_str());
}

#[test]
fn test_empty_initial_dir_is_home() {
    assert_eq!(resolve_initial_dir(""), *HOME_PATH);
    assert_eq!(resolve_initial_dir("   "), *HOME_PATH);
}

#[test]
fn test_existing_initial_dir_is_kept() {
    let temp_dir = TempDir::new().unwrap();
    let requested = temp_dir.path().to_str().unwrap();

    assert_eq!(resolve_initial_dir(requested), temp_dir.path());
}

#[test]
fn test_missing_initial_dir_walks_up() {
    let temp_dir = TempDir::new().unwrap();
    let existing = temp_dir.path().join("exports");
    fs::create_dir(&existing).unwrap();

    let requested = existing.join("2025").join("march");
    let resolved = resolve_initial_dir(requested.to_str().unwrap());

    assert_eq!(resolved, existing);
}

#[test]
fn test_file_as_initial_dir_uses_parent() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("notes.txt");
    fs::write(&file, "hello").unwrap();

    assert_eq!(resolve_initial_dir(file.to_str().unwrap()), temp_dir.path());
}

#[test]
fn test_relative_missing_dir_falls_back_to_home() {
    let resolved = resolve_initial_dir("surely-not-a-directory-here-7f3a");
    assert_eq!(resolved, *HOME_PATH);
}

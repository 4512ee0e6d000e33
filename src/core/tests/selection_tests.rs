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

//! Selection tests
//!
//! Tests for turning a dialog outcome into a `FileSelection`.

use std::path::{Path, PathBuf};

use crate::core::filter::ExtensionFilter;
use crate::core::selection::{resolve_open, resolve_save, FileSelection};

fn text_filter() -> Vec<ExtensionFilter> {
    vec![ExtensionFilter::new("Text", &["txt"]).unwrap()]
}

#[test]
fn test_save_cancelled_is_none() {
    let result = resolve_save(None, &text_filter(), ".txt", Path::new("/home/user"));
    assert!(result.is_none());
}

#[test]
fn test_save_matching_path_unchanged() {
    let chosen = PathBuf::from("/home/user/docs/notes.txt");
    let result = resolve_save(Some(chosen.clone()), &text_filter(), ".txt", Path::new("/home/user"))
        .unwrap();

    assert_eq!(result.path, chosen);
    assert_eq!(result.directory, PathBuf::from("/home/user/docs"));
}

#[test]
fn test_save_non_matching_path_gets_default_extension() {
    let chosen = PathBuf::from("/home/user/notes");
    let result = resolve_save(Some(chosen), &text_filter(), ".txt", Path::new("/home/user"))
        .unwrap();

    assert_eq!(result.path, PathBuf::from("/home/user/notes.txt"));
}

#[test]
fn test_open_returns_path_as_is() {
    let chosen = PathBuf::from("/home/user/notes");
    let result = resolve_open(Some(chosen.clone()), Path::new("/home/user")).unwrap();

    assert_eq!(result.path, chosen);
    assert_eq!(result.directory, PathBuf::from("/home/user"));
}

#[test]
fn test_open_cancelled_is_none() {
    assert!(resolve_open(None, Path::new("/home/user")).is_none());
}

#[test]
fn test_selection_without_parent_uses_fallback() {
    let selection = FileSelection::new(PathBuf::from("notes.txt"), Path::new("/srv/data"));
    assert_eq!(selection.directory, PathBuf::from("/srv/data"));
}

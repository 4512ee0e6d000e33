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

//! Outcome of a completed file dialog
//!
//! The GTK side only reports "a path was chosen" or "nothing was chosen";
//! turning that into a `FileSelection` lives here so it can be tested
//! without a display server.

use std::path::{Path, PathBuf};

use crate::core::filter::{repair_extension, ExtensionFilter};

/// A path the user confirmed in a file dialog
///
/// Lives for a single dialog invocation. Nothing is written to disk;
/// acting on the path is up to the caller.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FileSelection {
    /// Absolute path of the chosen file
    pub path: PathBuf,

    /// Directory the dialog was in when the user confirmed
    pub directory: PathBuf,
}

impl FileSelection {
    /// Build a selection, taking the directory from the path's parent
    ///
    /// `fallback_dir` is used when the path has no parent.
    pub fn new(path: PathBuf, fallback_dir: &Path) -> Self {
        let directory = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| fallback_dir.to_path_buf());

        Self { path, directory }
    }
}

/// Resolve a save dialog's outcome
///
/// `None` (cancelled or dismissed) stays `None`. A confirmed path goes
/// through [`repair_extension`] before being returned.
pub fn resolve_save(
    chosen: Option<PathBuf>,
    filters: &[ExtensionFilter],
    default_extension: &str,
    current_dir: &Path,
) -> Option<FileSelection> {
    let chosen = chosen?;
    let repaired = repair_extension(&chosen, filters, default_extension);
    Some(FileSelection::new(repaired, current_dir))
}

/// Resolve an open dialog's outcome
///
/// Open targets are taken as-is: no extension repair.
pub fn resolve_open(chosen: Option<PathBuf>, current_dir: &Path) -> Option<FileSelection> {
    chosen.map(|path| FileSelection::new(path, current_dir))
}

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

//! src/core/filter.rs
//!
//! File extension filters for chooser dialogs
//!
//! This module defines:
//! - `ExtensionFilter`: a description plus the extensions it accepts
//! - `FilterTarget`: anything a list of filters can be registered on
//! - `register_filters`: registration with the first filter active
//! - `repair_extension`: the sequential save-path repair pass
//!
//! Matching is purely name-based. Nothing here touches the filesystem.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::core::error::GuiError;

/// A named rule describing which file extensions a chooser accepts
///
/// Extensions are stored without their leading dot and in lowercase,
/// so `".PNG"`, `"png"` and `"Png"` all describe the same filter.
///
/// # Example
/// ```
/// use gui_utils::core::ExtensionFilter;
/// use std::path::Path;
///
/// let filter = ExtensionFilter::new("Images", &[".png", "jpg"])?;
/// assert!(filter.accepts(Path::new("/tmp/photo.JPG")));
/// assert!(!filter.accepts(Path::new("/tmp/notes.txt")));
/// # Ok::<(), gui_utils::core::GuiError>(())
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ExtensionFilter {
    description: String,
    extensions: Vec<String>,
}

impl ExtensionFilter {
    /// Create a filter, normalising every extension
    ///
    /// # Errors
    /// - `EmptyExtensionList` when `extensions` is empty
    /// - `BlankExtension` when an extension is empty after normalisation
    pub fn new<S: AsRef<str>>(description: &str, extensions: &[S]) -> Result<Self, GuiError> {
        if extensions.is_empty() {
            return Err(GuiError::EmptyExtensionList(description.to_string()));
        }

        let mut normalised = Vec::with_capacity(extensions.len());
        for ext in extensions {
            let ext = ext.as_ref().trim();
            let ext = ext.strip_prefix('.').unwrap_or(ext);
            if ext.is_empty() {
                return Err(GuiError::BlankExtension(description.to_string()));
            }
            normalised.push(ext.to_ascii_lowercase());
        }

        Ok(Self {
            description: description.to_string(),
            extensions: normalised,
        })
    }

    /// Human-readable description shown in the dialog's filter dropdown
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Accepted extensions, lowercase and without the leading dot
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Whether the file name's extension is one this filter accepts
    ///
    /// The extension is whatever follows the last `.` of the file name.
    /// A dot in first or last position does not start an extension, so
    /// `.png` and `photo.` are both rejected.
    /// Names that are not valid UTF-8 are matched lossily; only the
    /// extension has to be readable.
    pub fn accepts(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().map(|n| n.to_string_lossy()) else {
            return false;
        };

        match name.rfind('.') {
            Some(i) if i > 0 && i < name.len() - 1 => {
                let suffix = name[i + 1..].to_ascii_lowercase();
                self.extensions.iter().any(|ext| *ext == suffix)
            }
            _ => false,
        }
    }
}

impl fmt::Display for ExtensionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let patterns = self
            .extensions
            .iter()
            .map(|ext| format!("*.{}", ext))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{} ({})", self.description, patterns)
    }
}

/// Parses `Description:ext[,ext...]`, e.g. `Text files:txt,md`
impl FromStr for ExtensionFilter {
    type Err = GuiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (description, list) = s
            .rsplit_once(':')
            .ok_or_else(|| GuiError::InvalidFilterSyntax(s.to_string()))?;

        let description = description.trim();
        if description.is_empty() {
            return Err(GuiError::InvalidFilterSyntax(s.to_string()));
        }

        let extensions: Vec<&str> = list.split(',').collect();
        ExtensionFilter::new(description, &extensions)
    }
}

/// Something extension filters can be registered on
///
/// Implemented by the GTK file dialog adapter, and by recording
/// doubles in tests.
pub trait FilterTarget {
    /// Make `filter` the one selected when the dialog opens
    fn set_active_filter(&mut self, filter: &ExtensionFilter);

    /// Append `filter` to the dialog's list of choosable filters
    fn add_choosable_filter(&mut self, filter: &ExtensionFilter);
}

/// Register `filters` on a chooser
///
/// `filters[0]` becomes the active filter, then every filter (the first
/// included) is added in input order. That order is the order of the
/// dialog's filter dropdown. An empty slice registers nothing.
pub fn register_filters<T: FilterTarget + ?Sized>(chooser: &mut T, filters: &[ExtensionFilter]) {
    let Some(first) = filters.first() else {
        log::warn!("No extension filters supplied, chooser left unfiltered");
        return;
    };

    chooser.set_active_filter(first);
    for filter in filters {
        chooser.add_choosable_filter(filter);
    }
}

/// Sequential extension repair for a chosen save path
///
/// Walks every filter in order. Each filter that rejects the current
/// path causes `default_extension` to be appended, and the mutated path
/// is what the next filter sees. With several filters this can append
/// the extension more than once; callers relying on a single filter get
/// the usual "add the extension if missing" behaviour.
pub fn repair_extension(
    selected: &Path,
    filters: &[ExtensionFilter],
    default_extension: &str,
) -> PathBuf {
    let mut path = selected.to_path_buf();

    for filter in filters {
        if !filter.accepts(&path) {
            let mut raw: OsString = path.into_os_string();
            raw.push(default_extension);
            path = PathBuf::from(raw);
            log::debug!("Rejected by {}, appended {}: {:?}", filter, default_extension, path);
        }
    }

    path
}

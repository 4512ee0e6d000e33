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

//! Default locations for chooser dialogs

use std::ffi::OsString;
use std::path::{Path, PathBuf, MAIN_SEPARATOR_STR};
use std::sync::LazyLock;

/// The user's home directory, or their Desktop on Windows
///
/// Resolved on first use and reused as the default dialog root.
pub static HOME_PATH: LazyLock<PathBuf> = LazyLock::new(home_directory);

#[cfg(windows)]
fn home_directory() -> PathBuf {
    glib::user_special_dir(glib::UserDirectory::Desktop).unwrap_or_else(glib::home_dir)
}

#[cfg(not(windows))]
fn home_directory() -> PathBuf {
    glib::home_dir()
}

/// Directory a chooser should start in
///
/// Expands a leading `~`, then walks up from the requested directory to
/// the nearest one that exists. An empty request, or one with no existing
/// ancestor, starts at [`HOME_PATH`].
pub fn resolve_initial_dir(requested: &str) -> PathBuf {
    let requested = requested.trim();
    if requested.is_empty() {
        return HOME_PATH.clone();
    }

    let expanded = shellexpand::tilde(requested);
    let path = Path::new(expanded.as_ref());

    match path.ancestors().find(|dir| !dir.as_os_str().is_empty() && dir.is_dir()) {
        Some(dir) => dir.to_path_buf(),
        None => {
            log::debug!("{:?} has no existing ancestor, using {:?}", path, *HOME_PATH);
            HOME_PATH.clone()
        }
    }
}

/// File a save dialog pre-selects
///
/// Plain concatenation: `current_dir + separator + base_name + extension`.
/// No normalisation happens, so a trailing separator on `current_dir`
/// is kept as-is.
pub fn suggested_file_path(current_dir: &Path, base_name: &str, extension: &str) -> PathBuf {
    let mut raw: OsString = current_dir.as_os_str().to_os_string();
    raw.push(MAIN_SEPARATOR_STR);
    raw.push(base_name);
    raw.push(extension);
    PathBuf::from(raw)
}

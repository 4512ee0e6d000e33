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

//! Save and open file dialogs
//!
//! Both operations build a modal `FileDialog`, register the extension
//! filters (first one active) and block until the user answers.
//!
//! # Blocking
//!
//! `FileDialog` only offers a callback API. The helpers start the dialog
//! and iterate the default main context until the callback has fired,
//! so the caller gets the answer as a return value. Events keep flowing
//! while waiting, which is what lets the dialog itself work.
//!
//! # Outcome
//!
//! Confirming yields a `FileSelection`. Cancelling, dismissing the
//! dialog or picking a non-local file (e.g. a remote URI) yields `None`.

use gtk4::{gio, prelude::*, FileDialog, FileFilter, Window};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::core::{
    filter::{register_filters, ExtensionFilter, FilterTarget},
    paths::{resolve_initial_dir, suggested_file_path},
    selection::{resolve_open, resolve_save, FileSelection},
};

type DialogOutcome = Result<gio::File, glib::Error>;

/// Convert an extension filter into a GTK file filter
pub fn file_filter_for(filter: &ExtensionFilter) -> FileFilter {
    let file_filter = FileFilter::new();
    file_filter.set_name(Some(filter.description()));
    for ext in filter.extensions() {
        file_filter.add_suffix(ext);
    }
    file_filter
}

/// Collects filters for a `FileDialog`
///
/// GTK matches the default filter by identity, so the active filter is
/// resolved against the converted list when the dialog is configured.
#[derive(Default)]
pub struct DialogFilters {
    active: Option<ExtensionFilter>,
    choosable: Vec<(ExtensionFilter, FileFilter)>,
}

impl DialogFilters {
    /// Push the collected filters into `dialog`
    pub fn apply_to(&self, dialog: &FileDialog) {
        if self.choosable.is_empty() {
            return;
        }

        let store = gio::ListStore::new::<FileFilter>();
        for (_, file_filter) in &self.choosable {
            store.append(file_filter);
        }
        dialog.set_filters(Some(&store));

        if let Some(active) = &self.active {
            let default = self
                .choosable
                .iter()
                .find(|(filter, _)| filter == active)
                .map(|(_, file_filter)| file_filter.clone())
                .unwrap_or_else(|| file_filter_for(active));
            dialog.set_default_filter(Some(&default));
        }
    }
}

impl FilterTarget for DialogFilters {
    fn set_active_filter(&mut self, filter: &ExtensionFilter) {
        self.active = Some(filter.clone());
    }

    fn add_choosable_filter(&mut self, filter: &ExtensionFilter) {
        self.choosable.push((filter.clone(), file_filter_for(filter)));
    }
}

/// Build a modal dialog rooted at `current_dir` with `filters` registered
fn build_dialog(title: &str, current_dir: &Path, filters: &[ExtensionFilter]) -> FileDialog {
    let dialog = FileDialog::builder().title(title).modal(true).build();
    dialog.set_initial_folder(Some(&gio::File::for_path(current_dir)));

    let mut dialog_filters = DialogFilters::default();
    register_filters(&mut dialog_filters, filters);
    dialog_filters.apply_to(&dialog);

    dialog
}

/// Start a dialog and wait for its callback
///
/// `start` receives the completion callback and must hand it to the
/// dialog. Returns the chosen local path, or `None`.
fn run_modal<F>(start: F) -> Option<PathBuf>
where
    F: FnOnce(Box<dyn FnOnce(DialogOutcome)>),
{
    let outcome: Rc<RefCell<Option<DialogOutcome>>> = Rc::new(RefCell::new(None));

    let slot = outcome.clone();
    start(Box::new(move |result| {
        *slot.borrow_mut() = Some(result);
    }));

    // Keep the main loop running until the dialog answers
    let main_context = glib::MainContext::default();
    while outcome.borrow().is_none() {
        main_context.iteration(true);
    }

    match outcome.take() {
        Some(Ok(file)) => {
            let path = file.path();
            if path.is_none() {
                log::warn!("Selected file {} has no local path", file.uri());
            }
            path
        }
        Some(Err(e)) => {
            log::debug!("File dialog closed without a selection: {}", e);
            None
        }
        None => None,
    }
}

/// Show a modal save dialog and return the repaired target path
///
/// The dialog starts in `initial_dir` (see [`resolve_initial_dir`]) with
/// `initial_dir + separator + default_base_name + default_extension`
/// pre-selected and `filters[0]` active. A confirmed path is passed
/// through the sequential extension repair before being returned.
///
/// `default_extension` includes its leading dot (e.g. `".png"`).
pub fn request_save_target<P: IsA<Window>>(
    initial_dir: &str,
    default_base_name: &str,
    default_extension: &str,
    parent: Option<&P>,
    filters: &[ExtensionFilter],
) -> Option<FileSelection> {
    let current_dir = resolve_initial_dir(initial_dir);
    let dialog = build_dialog("Save", &current_dir, filters);

    let suggested = suggested_file_path(&current_dir, default_base_name, default_extension);
    dialog.set_initial_file(Some(&gio::File::for_path(&suggested)));
    log::debug!("Save dialog in {:?}, suggesting {:?}", current_dir, suggested);

    let chosen = run_modal(|done| {
        dialog.save(parent, None::<&gio::Cancellable>, done);
    });

    let selection = resolve_save(chosen, filters, default_extension, &current_dir);
    match &selection {
        Some(selection) => log::debug!("Save target: {:?}", selection.path),
        None => log::debug!("Save cancelled"),
    }
    selection
}

/// Show a modal open dialog and return the chosen path
///
/// Same filter registration as [`request_save_target`]; no extension
/// repair is applied to the result.
pub fn request_open_target<P: IsA<Window>>(
    initial_dir: &str,
    parent: Option<&P>,
    filters: &[ExtensionFilter],
) -> Option<FileSelection> {
    let current_dir = resolve_initial_dir(initial_dir);
    let dialog = build_dialog("Open", &current_dir, filters);
    log::debug!("Open dialog in {:?}", current_dir);

    let chosen = run_modal(|done| {
        dialog.open(parent, None::<&gio::Cancellable>, done);
    });

    resolve_open(chosen, &current_dir)
}

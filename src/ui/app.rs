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

//! Demo application
//!
//! A small text editor assembled entirely from the helpers in this
//! crate: window setup, grid placement, menu items with accelerators,
//! a text field, a scrollable text area, and the save/open dialogs.
//!
//! # Architecture
//!
//! ```text
//! DemoApp (GTK4 Application)
//!   ├─ Builds main window (set_up_window)
//!   ├─ Grid: path field + text area (place_in_grid)
//!   └─ Menu bar: File (Open, Save As, Quit), Window (Bring to Front)
//! ```

use gtk4::prelude::*;
use gtk4::{gio, Application, ApplicationWindow, Entry, Grid, Label, PopoverMenuBar, TextView};
use std::fs;
use std::path::Path;
use std::rc::Rc;

use crate::core::{
    error::GuiError,
    filter::ExtensionFilter,
    options::{Anchor, Fill, FrameOptions, GridPlacement, Insets, TextAlignment, TextFieldOptions},
};
use crate::ui::{
    file_dialog::{request_open_target, request_save_target},
    layout::place_in_grid,
    menu::menu_item,
    text::{make_text_field, text_area},
    window::{bring_to_front, set_up_window},
};

/// Widgets the menu actions operate on
struct EditorWidgets {
    window: ApplicationWindow,
    path_field: Entry,
    text_view: TextView,
    initial_dir: String,
    filters: Vec<ExtensionFilter>,
}

/// GTK4 demo application
pub struct DemoApp {
    /// GTK4 Application instance
    app: Application,
    /// Directory the dialogs start in
    initial_dir: String,
    /// Filters offered by both dialogs, first one active
    filters: Vec<ExtensionFilter>,
}

impl DemoApp {
    /// Creates the demo application
    ///
    /// # Example
    ///
    /// ```no_run
    /// use gui_utils::core::ExtensionFilter;
    /// use gui_utils::ui::DemoApp;
    ///
    /// let filters = vec![ExtensionFilter::new("Text", &["txt"])?];
    /// DemoApp::new("~", filters).run();
    /// # Ok::<(), gui_utils::core::GuiError>(())
    /// ```
    pub fn new(initial_dir: &str, filters: Vec<ExtensionFilter>) -> Self {
        let app = Application::builder()
            .application_id("com.tidynest.gui-utils-demo")
            .build();

        Self {
            app,
            initial_dir: initial_dir.to_string(),
            filters,
        }
    }

    /// Runs the GTK4 main loop until the window closes
    pub fn run(self) -> glib::ExitCode {
        let initial_dir = self.initial_dir;
        let filters = self.filters;

        self.app.connect_activate(move |app| {
            if let Err(e) = Self::build_ui(app, &initial_dir, &filters) {
                log::error!("Failed to build demo window: {}", e);
                app.quit();
            }
        });

        self.app.run_with_args::<&str>(&[])
    }

    fn build_ui(
        app: &Application,
        initial_dir: &str,
        filters: &[ExtensionFilter],
    ) -> Result<(), GuiError> {
        let window = ApplicationWindow::builder()
            .application(app)
            .title("GUI Utils Demo")
            .build();

        let grid = Grid::builder().row_spacing(6).column_spacing(6).build();

        let path_label = Label::new(Some("File:"));
        place_in_grid(
            &grid,
            &path_label,
            &GridPlacement::at(0, 0, 0, 0)
                .with_anchor(Anchor::West)
                .with_insets(Insets::new(12, 12, 0, 0)),
        );

        let path_field = make_text_field(
            &TextFieldOptions::new(40, None)
                .with_editable(false)
                .with_alignment(TextAlignment::Left),
        );
        place_in_grid(
            &grid,
            &path_field,
            &GridPlacement::new(Anchor::West, Fill::Horizontal, 1, 0, 0, 0, Insets::new(12, 0, 0, 12)),
        );

        let text_view = TextView::new();
        let mono = gtk4::pango::FontDescription::from_string("Monospace 11");
        let scroller = text_area(&text_view, Some(mono));
        place_in_grid(
            &grid,
            &scroller,
            &GridPlacement::at(0, 1, 0, 240)
                .with_fill(Fill::Both)
                .with_span(2, 1)
                .with_insets(Insets::uniform(12)),
        );

        let editor = Rc::new(EditorWidgets {
            window: window.clone(),
            path_field,
            text_view,
            initial_dir: initial_dir.to_string(),
            filters: filters.to_vec(),
        });

        let menu_bar = PopoverMenuBar::from_model(Some(&Self::build_menu(app, &editor)?));

        let main_vbox = gtk4::Box::new(gtk4::Orientation::Vertical, 0);
        main_vbox.append(&menu_bar);
        main_vbox.append(&grid);
        window.set_child(Some(&main_vbox));

        set_up_window(&window, &FrameOptions::new(720, 480));
        Ok(())
    }

    fn build_menu(app: &Application, editor: &Rc<EditorWidgets>) -> Result<gio::Menu, GuiError> {
        let file_menu = gio::Menu::new();

        let editor_for_open = editor.clone();
        file_menu.append_item(&menu_item(app, "Open...", "open", "Ctrl+O", move || {
            open_into_editor(&editor_for_open);
        })?);

        let editor_for_save = editor.clone();
        file_menu.append_item(&menu_item(app, "Save As...", "save-as", "Ctrl+Shift+S", move || {
            save_from_editor(&editor_for_save);
        })?);

        let app_for_quit = app.clone();
        file_menu.append_item(&menu_item(app, "Quit", "quit", "Ctrl+Q", move || {
            app_for_quit.quit();
        })?);

        let window_menu = gio::Menu::new();
        let window_for_raise = editor.window.clone();
        window_menu.append_item(&menu_item(app, "Bring to Front", "raise", "Ctrl+R", move || {
            bring_to_front(&window_for_raise);
        })?);

        let menu = gio::Menu::new();
        menu.append_submenu(Some("File"), &file_menu);
        menu.append_submenu(Some("Window"), &window_menu);
        Ok(menu)
    }
}

/// Load a chosen file into the text view
fn open_into_editor(editor: &EditorWidgets) {
    let Some(selection) =
        request_open_target(&editor.initial_dir, Some(&editor.window), &editor.filters)
    else {
        log::info!("Open cancelled");
        return;
    };

    match fs::read_to_string(&selection.path) {
        Ok(content) => {
            editor.text_view.buffer().set_text(&content);
            show_path(editor, &selection.path);
            log::info!("Opened {:?}", selection.path);
        }
        Err(e) => log::error!("Failed to read {:?}: {}", selection.path, e),
    }
}

/// Write the text view's content to a chosen file
fn save_from_editor(editor: &EditorWidgets) {
    let extension = editor
        .filters
        .first()
        .and_then(|filter| filter.extensions().first())
        .map(|ext| format!(".{}", ext))
        .unwrap_or_default();

    let Some(selection) = request_save_target(
        &editor.initial_dir,
        "untitled",
        &extension,
        Some(&editor.window),
        &editor.filters,
    ) else {
        log::info!("Save cancelled");
        return;
    };

    let buffer = editor.text_view.buffer();
    let content = buffer.text(&buffer.start_iter(), &buffer.end_iter(), false);

    match fs::write(&selection.path, content.as_str()) {
        Ok(()) => {
            show_path(editor, &selection.path);
            log::info!("Saved {:?}", selection.path);
        }
        Err(e) => log::error!("Failed to write {:?}: {}", selection.path, e),
    }
}

fn show_path(editor: &EditorWidgets, path: &Path) {
    editor.path_field.set_text(&path.to_string_lossy());
}

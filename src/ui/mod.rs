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

//! GTK4 helpers built on the `core` option records
//!
//! # Module Structure
//!
//! ```text
//! ui/
//! ├── mod.rs          // This file - exports
//! ├── window.rs       // Window setup, bring to front
//! ├── layout.rs       // Grid placement
//! ├── menu.rs         // Menu items with accelerators
//! ├── text.rs         // Text fields and scrollable text areas
//! ├── file_dialog.rs  // Blocking save/open dialogs
//! └── app.rs          // Demo application using all of the above
//! ```
//!
//! Every helper must be called on the GTK main thread after GTK has
//! been initialised.

pub mod app;
pub mod file_dialog;
pub mod layout;
pub mod menu;
pub mod text;
pub mod window;

pub use app::DemoApp;
pub use file_dialog::{request_open_target, request_save_target};
pub use layout::place_in_grid;
pub use menu::{make_menu_item, menu_item};
pub use text::{make_text_area, make_text_field, text_area, text_area_editable, text_field};
pub use window::{bring_to_front, set_up_window, set_up_window_sized};

#[cfg(test)]
mod tests;

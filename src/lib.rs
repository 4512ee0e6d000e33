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

//! GUI Utils
//!
//! Convenience helpers for setting up GTK4 widgets with less
//! call-site noise.
//!
//! # Features
//!
//! - **Window setup:** Size, resizability and close behaviour in one call
//! - **Grid placement:** Anchor, fill, padding and insets as one record
//! - **Menu items:** Entry, action and keyboard accelerator together
//! - **Text widgets:** Text fields and word-wrapped, scrollable text areas
//! - **File dialogs:** Blocking save/open dialogs with extension filters
//!   and default-extension repair on save
//!
//! # Architecture
//!
//! - **`core`:** Toolkit-free logic (filters, paths, accelerators, options)
//! - **`ui`:** GTK4 wrappers that apply the `core` records
//!
//! Each helper has one primary function taking a full options record,
//! plus short wrappers that fill in the defaults.
//!
//! # Examples
//!
//! ## Asking for a save target
//!
//! ```no_run
//! use gui_utils::core::ExtensionFilter;
//! use gui_utils::ui::request_save_target;
//!
//! gtk4::init()?;
//! let filters = vec![ExtensionFilter::new("PNG image", &["png"])?];
//!
//! match request_save_target("~/Pictures", "drawing", ".png", None::<&gtk4::Window>, &filters) {
//!     Some(selection) => println!("Saving to {}", selection.path.display()),
//!     None => println!("Cancelled"),
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Building a text field
//!
//! ```no_run
//! use gui_utils::core::{TextAlignment, TextFieldOptions};
//! use gui_utils::ui::make_text_field;
//!
//! gtk4::init()?;
//! let field = make_text_field(
//!     &TextFieldOptions::new(5, None).with_alignment(TextAlignment::Right),
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod core;
pub mod ui;

// Re-export commonly used types for convenience
pub use crate::core::{ExtensionFilter, FileSelection, GuiError, HOME_PATH};

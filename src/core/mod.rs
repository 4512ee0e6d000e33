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

//! src/core/mod.rs
//!
//! Toolkit-free logic behind the GTK helpers
//!
//! This module contains:
//! - Extension filters and their registration order
//! - The save-path extension repair pass
//! - Dialog outcome resolution (`FileSelection`)
//! - Default dialog locations
//! - Keyboard accelerator parsing
//! - Option records for every widget helper
//!
//! Nothing here needs a display server, so all of it is unit tested.

pub mod accelerator;
pub mod error;
pub mod filter;
pub mod options;
pub mod paths;
pub mod selection;

pub use accelerator::{Accelerator, Modifier};
pub use error::GuiError;
pub use filter::{register_filters, repair_extension, ExtensionFilter, FilterTarget};
pub use options::*;
pub use paths::{resolve_initial_dir, suggested_file_path, HOME_PATH};
pub use selection::{resolve_open, resolve_save, FileSelection};

#[cfg(test)]
mod tests;

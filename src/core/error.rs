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

use thiserror::Error;

/// Errors raised while building helper inputs.
///
/// Dialog outcomes are never errors: a cancelled or dismissed dialog
/// resolves to `None` instead.
#[derive(Debug, Error, PartialEq)]
pub enum GuiError {
    /// Extension filter created without any extension.
    #[error("Extension filter '{0}' has no extensions")]
    EmptyExtensionList(String),
    /// Extension that is empty once the leading dot is removed.
    #[error("Extension filter '{0}' contains a blank extension")]
    BlankExtension(String),
    /// Filter argument not in `Description:ext[,ext...]` form.
    #[error("Invalid filter '{0}': expected Description:ext[,ext...]")]
    InvalidFilterSyntax(String),
    /// Accelerator text that could not be parsed.
    #[error("Invalid accelerator '{0}'")]
    InvalidAccelerator(String),
    /// Modifier name not recognised.
    #[error("Unknown modifier '{0}'")]
    UnknownModifier(String),
}

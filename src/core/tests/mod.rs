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

//! Core module tests
//!
//! Contains test suites for toolkit-free functionality:
//! - Extension filter tests (normalisation, matching, registration, repair)
//! - Selection tests (save/open outcome resolution)
//! - Path tests (initial directory, suggested file name)
//! - Accelerator tests (parsing, GTK rendering)
//! - Option record tests (defaults and overrides)

#[cfg(test)]
mod accelerator_tests;
#[cfg(test)]
mod paths_tests;
#[cfg(test)]
mod selection_tests;

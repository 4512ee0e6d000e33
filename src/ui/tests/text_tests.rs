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

//! Text helper tests
//!
//! Tests for scroll policy mapping.

use gtk4::PolicyType;

use crate::core::options::{ScrollPolicy, TextAreaOptions};
use crate::ui::text::policy_type;

#[test]
fn test_policy_mapping() {
    assert_eq!(policy_type(ScrollPolicy::AsNeeded), PolicyType::Automatic);
    assert_eq!(policy_type(ScrollPolicy::Never), PolicyType::Never);
    assert_eq!(policy_type(ScrollPolicy::Always), PolicyType::Always);
}

#[test]
fn test_default_text_area_policies() {
    let options = TextAreaOptions::new(None);
    assert_eq!(policy_type(options.vertical), PolicyType::Automatic);
    assert_eq!(policy_type(options.horizontal), PolicyType::Never);
}

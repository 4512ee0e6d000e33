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

//! Accelerator tests
//!
//! Tests for keyboard shortcut parsing:
//! - Separator forms (`+`, spaces, mixed)
//! - Modifier aliases and normalisation
//! - GTK rendering
//! - Malformed input

use crate::core::accelerator::{accelerator_tokens, Accelerator, Modifier};
use crate::core::error::GuiError;

#[test]
fn test_tokens_plus_and_space_separated() {
    let (rest, tokens) = accelerator_tokens("Ctrl+Shift S").unwrap();
    assert_eq!(rest, "");
    assert_eq!(tokens, vec!["Ctrl", "Shift", "S"]);
}

#[test]
fn test_tokens_spaced_plus() {
    let (rest, tokens) = accelerator_tokens("Alt + F4").unwrap();
    assert_eq!(rest, "");
    assert_eq!(tokens, vec!["Alt", "F4"]);
}

#[test]
fn test_parse_simple_accelerator() {
    let accel = Accelerator::parse("Ctrl+S").unwrap();
    assert_eq!(accel.modifiers, vec![Modifier::Ctrl]);
    assert_eq!(accel.key, "S");
}

#[test]
fn test_parse_modifier_aliases() {
    let accel = Accelerator::parse("control mod1 win q").unwrap();
    assert_eq!(
        accel.modifiers,
        vec![Modifier::Ctrl, Modifier::Alt, Modifier::Super]
    );
}

#[test]
fn test_modifier_order_and_duplicates_normalised() {
    let a = Accelerator::parse("Shift+Ctrl+Shift+S").unwrap();
    let b = Accelerator::parse("Ctrl+Shift+S").unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_key_without_modifiers() {
    let accel = Accelerator::parse("F5").unwrap();
    assert!(accel.modifiers.is_empty());
    assert_eq!(accel.to_gtk(), "F5");
}

#[test]
fn test_to_gtk_lowercases_letters() {
    let accel = Accelerator::parse("Ctrl+Shift+S").unwrap();
    assert_eq!(accel.to_gtk(), "<Control><Shift>s");
}

#[test]
fn test_to_gtk_keeps_named_keys() {
    let accel = Accelerator::parse("Alt+Return").unwrap();
    assert_eq!(accel.to_gtk(), "<Alt>Return");
}

#[test]
fn test_display() {
    let accel = Accelerator::parse("shift ctrl s").unwrap();
    assert_eq!(accel.to_string(), "Ctrl+Shift+S");
}

#[test]
fn test_unknown_modifier() {
    let result = Accelerator::parse("Hyper+S");
    assert_eq!(result, Err(GuiError::UnknownModifier("HYPER".to_string())));
}

#[test]
fn test_empty_accelerator_rejected() {
    assert!(matches!(
        Accelerator::parse(""),
        Err(GuiError::InvalidAccelerator(_))
    ));
    assert!(matches!(
        Accelerator::parse("   "),
        Err(GuiError::InvalidAccelerator(_))
    ));
}

#[test]
fn test_trailing_plus_rejected() {
    assert!(matches!(
        Accelerator::parse("Ctrl+"),
        Err(GuiError::InvalidAccelerator(_))
    ));
}

#[test]
fn test_invalid_key_characters_rejected() {
    assert!(matches!(
        Accelerator::parse("Ctrl+$"),
        Err(GuiError::InvalidAccelerator(_))
    ));
}

#[test]
fn test_from_str() {
    let accel: Accelerator = "Ctrl+O".parse().unwrap();
    assert_eq!(accel, Accelerator::new(vec![Modifier::Ctrl], "O"));
}

#[test]
fn test_lowercase_named_keys_are_canonical() {
    assert_eq!(Accelerator::parse("alt f4").unwrap().to_gtk(), "<Alt>F4");
    assert_eq!(
        Accelerator::parse("Ctrl+return").unwrap().to_gtk(),
        "<Control>Return"
    );
    assert_eq!(
        Accelerator::parse("Ctrl+Esc").unwrap().to_gtk(),
        "<Control>Escape"
    );
}

#[test]
fn test_named_key_aliases() {
    assert_eq!(Accelerator::parse("enter").unwrap().key, "Return");
    assert_eq!(Accelerator::parse("Ctrl+pgdn").unwrap().key, "Page_Down");
    assert_eq!(Accelerator::parse("shift+backspace").unwrap().key, "BackSpace");
    assert_eq!(Accelerator::parse("Ctrl+space").unwrap().to_gtk(), "<Control>space");
}

#[test]
fn test_out_of_range_function_key_kept_verbatim() {
    assert_eq!(Accelerator::parse("Ctrl+F25").unwrap().key, "F25");
    assert_eq!(Accelerator::parse("Ctrl+f").unwrap().to_gtk(), "<Control>f");
}

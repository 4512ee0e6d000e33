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

//! src/core/accelerator.rs
//!
//! Keyboard shortcuts for menu items
//!
//! Accepts the loose forms people type (`Ctrl+S`, `ctrl shift s`,
//! `Alt + F4`) and renders the syntax GTK expects (`<Control>s`).
//!
//! # Architecture
//! nom splits the text into tokens separated by `+` or whitespace.
//! Every token but the last must be a modifier; the last is the key.

use nom::{
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{char, space0, space1},
    combinator::value,
    multi::separated_list1,
    IResult, Parser,
};
use std::fmt;
use std::str::FromStr;

use crate::core::error::GuiError;

/// Keyboard modifier keys
///
/// Declaration order is the order modifiers are rendered in.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Modifier {
    /// Control key
    Ctrl,
    /// Shift key
    Shift,
    /// Alt key (MOD1)
    Alt,
    /// Super/Windows/Command key (MOD4)
    Super,
}

impl Modifier {
    /// GTK accelerator prefix for this modifier
    pub fn gtk_name(self) -> &'static str {
        match self {
            Modifier::Ctrl => "<Control>",
            Modifier::Shift => "<Shift>",
            Modifier::Alt => "<Alt>",
            Modifier::Super => "<Super>",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Modifier::Ctrl => write!(f, "Ctrl"),
            Modifier::Shift => write!(f, "Shift"),
            Modifier::Alt => write!(f, "Alt"),
            Modifier::Super => write!(f, "Super"),
        }
    }
}

impl FromStr for Modifier {
    type Err = GuiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "CTRL" | "CONTROL" => Ok(Modifier::Ctrl),
            "SHIFT" => Ok(Modifier::Shift),
            "ALT" | "MOD1" => Ok(Modifier::Alt),
            "SUPER" | "MOD4" | "WIN" | "META" => Ok(Modifier::Super),
            other => Err(GuiError::UnknownModifier(other.to_string())),
        }
    }
}

/// A keyboard shortcut: zero or more modifiers plus one key
///
/// Modifiers are sorted and de-duplicated, so `Shift+Ctrl+S` and
/// `Ctrl+Shift+Shift+S` are the same accelerator.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Accelerator {
    /// Held modifiers, sorted
    pub modifiers: Vec<Modifier>,

    /// Key name, canonical GDK spelling for named keys (e.g. "S", "F4", "Return")
    pub key: String,
}

impl Accelerator {
    /// Create an accelerator with normalised modifiers
    pub fn new(mut modifiers: Vec<Modifier>, key: &str) -> Self {
        modifiers.sort();
        modifiers.dedup();

        Self {
            modifiers,
            key: key.to_string(),
        }
    }

    /// Parse text such as `Ctrl+Shift+S` or `alt F4`
    pub fn parse(text: &str) -> Result<Self, GuiError> {
        let trimmed = text.trim();
        let invalid = || GuiError::InvalidAccelerator(text.to_string());

        let (rest, tokens) = accelerator_tokens(trimmed).map_err(|_| invalid())?;
        if !rest.is_empty() {
            return Err(invalid());
        }

        let Some((key, modifier_tokens)) = tokens.split_last() else {
            return Err(invalid());
        };

        if !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(invalid());
        }

        let modifiers = modifier_tokens
            .iter()
            .map(|token| token.parse::<Modifier>())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(modifiers, &canonical_key_name(key)))
    }

    /// Render in GTK accelerator syntax, e.g. `<Control><Shift>s`
    ///
    /// Single letters are lower-cased; named keys keep the spelling
    /// `parse` gave them.
    pub fn to_gtk(&self) -> String {
        let mut accel: String = self.modifiers.iter().map(|m| m.gtk_name()).collect();

        let mut chars = self.key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => accel.push(c.to_ascii_lowercase()),
            _ => accel.push_str(&self.key),
        }

        accel
    }
}

impl fmt::Display for Accelerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for modifier in &self.modifiers {
            write!(f, "{}+", modifier)?;
        }
        if self.key.len() == 1 {
            write!(f, "{}", self.key.to_ascii_uppercase())
        } else {
            write!(f, "{}", self.key)
        }
    }
}

impl FromStr for Accelerator {
    type Err = GuiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Accelerator::parse(s)
    }
}

/// GDK key name for a named key typed in any case
///
/// GTK silently drops accelerators whose key name it does not know,
/// and key names are case-sensitive there (`Return`, not `return`).
/// Unrecognised names are returned unchanged.
fn canonical_key_name(key: &str) -> String {
    let lower = key.to_ascii_lowercase();

    if let Some(number) = lower.strip_prefix('f') {
        if let Ok(n @ 1..=24) = number.parse::<u8>() {
            return format!("F{}", n);
        }
    }

    let named = match lower.as_str() {
        "return" | "enter" => "Return",
        "esc" | "escape" => "Escape",
        "tab" => "Tab",
        "space" => "space",
        "del" | "delete" => "Delete",
        "backspace" => "BackSpace",
        "ins" | "insert" => "Insert",
        "home" => "Home",
        "end" => "End",
        "pageup" | "page_up" | "pgup" => "Page_Up",
        "pagedown" | "page_down" | "pgdn" => "Page_Down",
        "up" => "Up",
        "down" => "Down",
        "left" => "Left",
        "right" => "Right",
        _ => key,
    };
    named.to_string()
}

/// `+` (with optional surrounding spaces) or a run of spaces
fn separator(input: &str) -> IResult<&str, ()> {
    alt((value((), (space0, char('+'), space0)), value((), space1))).parse(input)
}

/// A modifier or key name
fn token(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !c.is_whitespace() && c != '+').parse(input)
}

/// Split accelerator text into its tokens
pub fn accelerator_tokens(input: &str) -> IResult<&str, Vec<&str>> {
    separated_list1(separator, token).parse(input)
}

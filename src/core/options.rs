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

//! src/core/options.rs
//!
//! Configuration records for the widget helpers
//!
//! Every helper in `ui` takes one of these records. Each record lists
//! all the options the helper understands, with the defaults the short
//! constructors fill in:
//! - `FrameOptions`: window size, close behaviour, resizability
//! - `GridPlacement`: cell, anchor, fill, internal padding and insets
//! - `MenuItemOptions`: label, action and keyboard accelerator
//! - `TextFieldOptions`: columns, font, editability, alignment
//! - `TextAreaOptions`: font, scrollbar policies, editability

use gtk4::pango::FontDescription;

/// What happens when the user closes a window
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum CloseBehavior {
    /// Quit the owning application
    #[default]
    Quit,
    /// Hide the window, keeping it around for reuse
    Hide,
    /// Let GTK destroy the window
    Destroy,
    /// Refuse the close request
    Ignore,
}

/// Window setup
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FrameOptions {
    pub width: i32,
    pub height: i32,
    pub close: CloseBehavior,
    pub resizable: bool,
}

impl FrameOptions {
    /// Sized window that quits on close and can be resized
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            close: CloseBehavior::Quit,
            resizable: true,
        }
    }

    pub fn with_close(mut self, close: CloseBehavior) -> Self {
        self.close = close;
        self
    }

    pub fn with_resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }
}

/// Where a widget sits inside its cell
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Anchor {
    #[default]
    Center,
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

/// How a widget grows to fill its cell
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Fill {
    /// Keep the natural size
    #[default]
    None,
    Horizontal,
    Vertical,
    Both,
}

/// External padding around a widget, in pixels
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Insets {
    pub top: i32,
    pub left: i32,
    pub bottom: i32,
    pub right: i32,
}

impl Insets {
    pub const ZERO: Insets = Insets {
        top: 0,
        left: 0,
        bottom: 0,
        right: 0,
    };

    pub fn new(top: i32, left: i32, bottom: i32, right: i32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Same padding on every side
    pub fn uniform(pixels: i32) -> Self {
        Self::new(pixels, pixels, pixels, pixels)
    }
}

/// Placement of a widget in a grid
///
/// `ipad_x`/`ipad_y` are added to the widget's minimum size;
/// `insets` become margins. A widget covers one cell unless
/// given a span.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GridPlacement {
    pub anchor: Anchor,
    pub fill: Fill,
    pub column: i32,
    pub row: i32,
    pub column_span: i32,
    pub row_span: i32,
    pub ipad_x: i32,
    pub ipad_y: i32,
    pub insets: Insets,
}

impl Default for GridPlacement {
    fn default() -> Self {
        Self::at(0, 0, 0, 0)
    }
}

impl GridPlacement {
    /// Fully specified placement
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        anchor: Anchor,
        fill: Fill,
        column: i32,
        row: i32,
        ipad_x: i32,
        ipad_y: i32,
        insets: Insets,
    ) -> Self {
        Self {
            anchor,
            fill,
            column,
            row,
            column_span: 1,
            row_span: 1,
            ipad_x,
            ipad_y,
            insets,
        }
    }

    /// Centred, not resized, no insets
    pub fn at(column: i32, row: i32, ipad_x: i32, ipad_y: i32) -> Self {
        Self::new(Anchor::Center, Fill::None, column, row, ipad_x, ipad_y, Insets::ZERO)
    }

    pub fn with_insets(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self
    }

    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn with_fill(mut self, fill: Fill) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_span(mut self, columns: i32, rows: i32) -> Self {
        self.column_span = columns;
        self.row_span = rows;
        self
    }

    /// Size request for a widget measured at `min_width` x `min_height`
    ///
    /// `None` without internal padding, so the widget keeps tracking
    /// its natural size.
    pub fn padded_size(&self, min_width: i32, min_height: i32) -> Option<(i32, i32)> {
        if self.ipad_x == 0 && self.ipad_y == 0 {
            return None;
        }
        Some((min_width + self.ipad_x, min_height + self.ipad_y))
    }
}

/// Menu entry bound to an application action
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MenuItemOptions {
    /// Text shown in the menu
    pub label: String,

    /// Action name without the `app.` prefix (e.g. "save")
    pub action: String,

    /// Keyboard shortcut in loose form (e.g. "Ctrl+S")
    pub accelerator: Option<String>,
}

impl MenuItemOptions {
    pub fn new(label: &str, action: &str) -> Self {
        Self {
            label: label.to_string(),
            action: action.to_string(),
            accelerator: None,
        }
    }

    pub fn with_accelerator(mut self, accelerator: &str) -> Self {
        self.accelerator = Some(accelerator.to_string());
        self
    }

    /// Fully qualified action name used by menus and accelerators
    pub fn detailed_action(&self) -> String {
        format!("app.{}", self.action)
    }
}

/// Horizontal alignment of text inside a field
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum TextAlignment {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlignment {
    /// Fraction used for GTK's x-align
    pub fn xalign(self) -> f32 {
        match self {
            TextAlignment::Left => 0.0,
            TextAlignment::Center => 0.5,
            TextAlignment::Right => 1.0,
        }
    }
}

/// Single-line text field
#[derive(Clone, Debug, PartialEq)]
pub struct TextFieldOptions {
    /// Width in characters
    pub columns: i32,
    pub font: Option<FontDescription>,
    pub editable: bool,
    pub alignment: TextAlignment,
}

impl TextFieldOptions {
    /// Editable, left-aligned field
    pub fn new(columns: i32, font: Option<FontDescription>) -> Self {
        Self {
            columns,
            font,
            editable: true,
            alignment: TextAlignment::Left,
        }
    }

    pub fn with_editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    pub fn with_alignment(mut self, alignment: TextAlignment) -> Self {
        self.alignment = alignment;
        self
    }
}

/// When a scrollbar is shown
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ScrollPolicy {
    #[default]
    AsNeeded,
    Never,
    Always,
}

/// Multi-line text area inside a scroller
#[derive(Clone, Debug, PartialEq)]
pub struct TextAreaOptions {
    pub font: Option<FontDescription>,
    pub vertical: ScrollPolicy,
    pub horizontal: ScrollPolicy,
    pub editable: bool,
}

impl TextAreaOptions {
    /// Vertical scrollbar as needed, never a horizontal one, editable
    pub fn new(font: Option<FontDescription>) -> Self {
        Self {
            font,
            vertical: ScrollPolicy::AsNeeded,
            horizontal: ScrollPolicy::Never,
            editable: true,
        }
    }

    pub fn with_editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    pub fn with_policies(mut self, vertical: ScrollPolicy, horizontal: ScrollPolicy) -> Self {
        self.vertical = vertical;
        self.horizontal = horizontal;
        self
    }
}

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

//! Text field and text area helpers

use gtk4::prelude::*;
use gtk4::{pango, Entry, PolicyType, ScrolledWindow, TextTag, TextView, WrapMode};

use crate::core::options::{ScrollPolicy, TextAreaOptions, TextFieldOptions};

/// GTK scrollbar policy for a `ScrollPolicy`
pub fn policy_type(policy: ScrollPolicy) -> PolicyType {
    match policy {
        ScrollPolicy::AsNeeded => PolicyType::Automatic,
        ScrollPolicy::Never => PolicyType::Never,
        ScrollPolicy::Always => PolicyType::Always,
    }
}

/// Build a single-line text field
pub fn make_text_field(options: &TextFieldOptions) -> Entry {
    let field = Entry::new();
    field.set_width_chars(options.columns);
    field.set_editable(options.editable);
    field.set_alignment(options.alignment.xalign());

    if let Some(font) = &options.font {
        let attrs = pango::AttrList::new();
        attrs.insert(pango::AttrFontDesc::new(font));
        field.set_attributes(&attrs);
    }

    field
}

/// Editable, left-aligned text field
pub fn text_field(columns: i32, font: Option<pango::FontDescription>) -> Entry {
    make_text_field(&TextFieldOptions::new(columns, font))
}

/// Configure `view` for word-wrapped text and wrap it in a scroller
///
/// The view is modified in place; the returned scroller is what goes
/// into the layout.
pub fn make_text_area(view: &TextView, options: &TextAreaOptions) -> ScrolledWindow {
    view.set_wrap_mode(WrapMode::Word);
    view.set_editable(options.editable);

    if let Some(font) = &options.font {
        apply_font(view, font);
    }

    ScrolledWindow::builder()
        .vscrollbar_policy(policy_type(options.vertical))
        .hscrollbar_policy(policy_type(options.horizontal))
        .child(view)
        .build()
}

/// Editable text area, vertical scrollbar as needed, no horizontal one
pub fn text_area(view: &TextView, font: Option<pango::FontDescription>) -> ScrolledWindow {
    make_text_area(view, &TextAreaOptions::new(font))
}

/// Same as [`text_area`] with explicit editability
pub fn text_area_editable(
    view: &TextView,
    font: Option<pango::FontDescription>,
    editable: bool,
) -> ScrolledWindow {
    make_text_area(view, &TextAreaOptions::new(font).with_editable(editable))
}

/// Keep the whole buffer in `font`, including text inserted later
fn apply_font(view: &TextView, font: &pango::FontDescription) {
    let buffer = view.buffer();
    let tag = TextTag::builder().font_desc(font).build();

    if !buffer.tag_table().add(&tag) {
        log::warn!("Could not register font tag on text buffer");
        return;
    }

    buffer.apply_tag(&tag, &buffer.start_iter(), &buffer.end_iter());
    buffer.connect_changed(move |buffer| {
        buffer.apply_tag(&tag, &buffer.start_iter(), &buffer.end_iter());
    });
}

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

//! Grid placement helper
//!
//! GTK has no separate constraints object: anchor and fill become the
//! widget's alignment and expansion, insets become margins, and
//! internal padding becomes a size request.

use gtk4::prelude::*;
use gtk4::{Align, Grid, Orientation, Widget};

use crate::core::options::{Anchor, Fill, GridPlacement};

/// Horizontal and vertical alignment for an anchor
pub fn anchor_alignment(anchor: Anchor) -> (Align, Align) {
    match anchor {
        Anchor::Center => (Align::Center, Align::Center),
        Anchor::North => (Align::Center, Align::Start),
        Anchor::NorthEast => (Align::End, Align::Start),
        Anchor::East => (Align::End, Align::Center),
        Anchor::SouthEast => (Align::End, Align::End),
        Anchor::South => (Align::Center, Align::End),
        Anchor::SouthWest => (Align::Start, Align::End),
        Anchor::West => (Align::Start, Align::Center),
        Anchor::NorthWest => (Align::Start, Align::Start),
    }
}

/// Alignment after fill is applied: a filled axis ignores the anchor
pub fn placement_alignment(anchor: Anchor, fill: Fill) -> (Align, Align) {
    let (halign, valign) = anchor_alignment(anchor);

    match fill {
        Fill::None => (halign, valign),
        Fill::Horizontal => (Align::Fill, valign),
        Fill::Vertical => (halign, Align::Fill),
        Fill::Both => (Align::Fill, Align::Fill),
    }
}

/// Attach `widget` to `grid` at the placement's cell
///
/// Internal padding is added to the minimum size measured once, right
/// after the widget is attached and before margins are set. The result
/// is stored as a size request, so it does not follow later content,
/// font or theme changes; call this again to re-measure.
pub fn place_in_grid<W: IsA<Widget>>(grid: &Grid, widget: &W, placement: &GridPlacement) {
    let widget = widget.upcast_ref::<Widget>();

    grid.attach(
        widget,
        placement.column,
        placement.row,
        placement.column_span,
        placement.row_span,
    );

    let (halign, valign) = placement_alignment(placement.anchor, placement.fill);
    widget.set_halign(halign);
    widget.set_valign(valign);
    widget.set_hexpand(matches!(placement.fill, Fill::Horizontal | Fill::Both));
    widget.set_vexpand(matches!(placement.fill, Fill::Vertical | Fill::Both));

    if placement.ipad_x != 0 || placement.ipad_y != 0 {
        // Measured inside the grid so its CSS context applies
        widget.set_size_request(-1, -1);
        let (min_width, _, _, _) = widget.measure(Orientation::Horizontal, -1);
        let (min_height, _, _, _) = widget.measure(Orientation::Vertical, -1);
        if let Some((width, height)) = placement.padded_size(min_width, min_height) {
            widget.set_size_request(width, height);
            log::debug!("Padded size request {}x{}", width, height);
        }
    }

    let insets = placement.insets;
    widget.set_margin_top(insets.top);
    widget.set_margin_start(insets.left);
    widget.set_margin_bottom(insets.bottom);
    widget.set_margin_end(insets.right);
}

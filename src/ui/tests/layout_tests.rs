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

//! Layout tests
//!
//! Tests for anchor/fill to GTK alignment mapping.

use gtk4::Align;

use crate::core::options::{Anchor, Fill};
use crate::ui::layout::{anchor_alignment, placement_alignment};

#[test]
fn test_center_anchor() {
    assert_eq!(anchor_alignment(Anchor::Center), (Align::Center, Align::Center));
}

#[test]
fn test_corner_anchors() {
    assert_eq!(anchor_alignment(Anchor::NorthWest), (Align::Start, Align::Start));
    assert_eq!(anchor_alignment(Anchor::NorthEast), (Align::End, Align::Start));
    assert_eq!(anchor_alignment(Anchor::SouthWest), (Align::Start, Align::End));
    assert_eq!(anchor_alignment(Anchor::SouthEast), (Align::End, Align::End));
}

#[test]
fn test_edge_anchors() {
    assert_eq!(anchor_alignment(Anchor::North), (Align::Center, Align::Start));
    assert_eq!(anchor_alignment(Anchor::South), (Align::Center, Align::End));
    assert_eq!(anchor_alignment(Anchor::West), (Align::Start, Align::Center));
    assert_eq!(anchor_alignment(Anchor::East), (Align::End, Align::Center));
}

#[test]
fn test_no_fill_keeps_anchor() {
    assert_eq!(
        placement_alignment(Anchor::SouthEast, Fill::None),
        (Align::End, Align::End)
    );
}

#[test]
fn test_horizontal_fill_overrides_halign_only() {
    assert_eq!(
        placement_alignment(Anchor::North, Fill::Horizontal),
        (Align::Fill, Align::Start)
    );
}

#[test]
fn test_vertical_fill_overrides_valign_only() {
    assert_eq!(
        placement_alignment(Anchor::West, Fill::Vertical),
        (Align::Start, Align::Fill)
    );
}

#[test]
fn test_both_fill() {
    assert_eq!(
        placement_alignment(Anchor::Center, Fill::Both),
        (Align::Fill, Align::Fill)
    );
}

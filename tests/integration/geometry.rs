// autoscroll_list — A ratatui list that follows new items and respects scroll-back
// Copyright (C) 2025  Simon Peter Rothgang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use crate::helpers::{Harness, items};
use autoscroll_list::list::{AutoScrollConfig, TriangleDirection};
use pretty_assertions::assert_eq;

/// Render a paused list with `config` and return the indicator glyph cell, if found.
fn indicator_glyph(config: AutoScrollConfig) -> Option<(u16, u16, String)> {
    let mut h = Harness::new(config);
    let data = items(30);
    h.settle(&data);
    h.state.scroll_by(-10.0);
    h.render(&data);
    for y in 0..h.area.height {
        for x in 0..h.area.width {
            let symbol = h.symbol(x, y);
            if ["▲", "▼", "◀", "▶"].contains(&symbol) {
                return Some((x, y, symbol.to_owned()));
            }
        }
    }
    None
}

// Default indicator: 5x3 box, 2 cells from the side, 1 row from the edge.
// Its glyph sits in the middle of the box.

#[test]
fn vertical_points_down_bottom_right() {
    let found = indicator_glyph(AutoScrollConfig::default());
    assert_eq!(found, Some((15, 7, "▼".to_owned())));
}

#[test]
fn vertical_inverted_points_up_top_right() {
    let config = AutoScrollConfig { inverted: true, ..AutoScrollConfig::default() };
    assert_eq!(indicator_glyph(config), Some((15, 2, "▲".to_owned())));
}

#[test]
fn horizontal_points_right_bottom_right() {
    let config = AutoScrollConfig { horizontal: true, ..AutoScrollConfig::default() };
    assert_eq!(indicator_glyph(config), Some((15, 7, "▶".to_owned())));
}

#[test]
fn horizontal_inverted_points_left_bottom_left() {
    let config =
        AutoScrollConfig { horizontal: true, inverted: true, ..AutoScrollConfig::default() };
    assert_eq!(indicator_glyph(config), Some((4, 7, "◀".to_owned())));
}

#[test]
fn explicit_direction_overrides_glyph_only() {
    let config = AutoScrollConfig {
        triangle_direction: Some(TriangleDirection::Left),
        ..AutoScrollConfig::default()
    };
    assert_eq!(indicator_glyph(config), Some((15, 7, "◀".to_owned())));
}

#[test]
fn inverted_indicator_steps_below_new_item_banner() {
    let config = AutoScrollConfig { inverted: true, ..AutoScrollConfig::default() };
    let mut h = Harness::new(config);
    h.settle(&items(30));
    h.state.scroll_by(-5.0);
    h.settle(&items(33));
    assert!(h.row(2).contains("3 new items ▴"), "row 2: {:?}", h.row(2));
    assert_ne!(h.symbol(15, 2), "▲");
    assert_eq!(h.symbol(15, 5), "▲");
}

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

//! Where the end of the list is on screen.

use ratatui::layout::Rect;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriangleDirection {
    Up,
    Down,
    Left,
    Right,
}

impl TriangleDirection {
    /// Glyph used by the scroll-to-end indicator.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Up => "▲",
            Self::Down => "▼",
            Self::Left => "◀",
            Self::Right => "▶",
        }
    }

    /// Smaller glyph used inside the new-item banner.
    #[must_use]
    pub fn small_glyph(self) -> &'static str {
        match self {
            Self::Up => "▴",
            Self::Down => "▾",
            Self::Left => "◂",
            Self::Right => "▸",
        }
    }
}

/// Screen edge that shows the end of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndEdge {
    Top,
    Bottom,
    Left,
    Right,
}

impl EndEdge {
    #[must_use]
    pub fn resolve(horizontal: bool, inverted: bool) -> Self {
        match (horizontal, inverted) {
            (false, false) => Self::Bottom,
            (false, true) => Self::Top,
            (true, false) => Self::Right,
            (true, true) => Self::Left,
        }
    }

    #[must_use]
    pub fn triangle(self) -> TriangleDirection {
        match self {
            Self::Top => TriangleDirection::Up,
            Self::Bottom => TriangleDirection::Down,
            Self::Left => TriangleDirection::Left,
            Self::Right => TriangleDirection::Right,
        }
    }

    /// Place a `width` x `height` box against this edge of `area`, inset by
    /// `margin_x`/`margin_y`. Vertical lists use the right-hand corner; horizontal
    /// lists use the bottom corner on the end side. The result is clipped to `area`.
    #[must_use]
    pub fn corner(self, area: Rect, width: u16, height: u16, margin_x: u16, margin_y: u16) -> Rect {
        let width = width.min(area.width);
        let height = height.min(area.height);
        let right_x = area.right().saturating_sub(margin_x).saturating_sub(width).max(area.x);
        let left_x = area.x.saturating_add(margin_x);
        let bottom_y = area.bottom().saturating_sub(margin_y).saturating_sub(height).max(area.y);
        let top_y = area.y.saturating_add(margin_y);
        let (x, y) = match self {
            Self::Bottom | Self::Right => (right_x, bottom_y),
            Self::Top => (right_x, top_y),
            Self::Left => (left_x, bottom_y),
        };
        Rect::new(x, y, width, height).intersection(area)
    }
}

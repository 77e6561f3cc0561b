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

use ratatui::layout::Rect;

/// The direction the list scrolls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    #[default]
    Vertical,
    Horizontal,
}

impl Axis {
    #[must_use]
    pub fn from_horizontal(horizontal: bool) -> Self {
        if horizontal { Self::Horizontal } else { Self::Vertical }
    }

    /// Size of `area` along this axis, in cells.
    #[must_use]
    pub fn extent(self, area: Rect) -> u16 {
        match self {
            Self::Vertical => area.height,
            Self::Horizontal => area.width,
        }
    }
}

/// Latest viewport, content, and scroll measurements along the active axis.
///
/// Each host event has exactly one update function; nothing else writes these fields.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Measurements {
    pub viewport_extent: f32,
    pub content_extent: f32,
    pub scroll_position: f32,
}

impl Measurements {
    /// Record a layout event. Returns whether the viewport extent changed.
    pub fn apply_layout(&mut self, viewport_extent: f32) -> bool {
        let changed = (self.viewport_extent - viewport_extent).abs() > f32::EPSILON;
        self.viewport_extent = viewport_extent;
        changed
    }

    /// Record a content-size event. Returns whether the content extent changed.
    pub fn apply_content_size(&mut self, content_extent: f32) -> bool {
        let changed = (self.content_extent - content_extent).abs() > f32::EPSILON;
        self.content_extent = content_extent;
        changed
    }

    /// Record a scroll event and return the previous position.
    pub fn apply_scroll(&mut self, scroll_position: f32) -> f32 {
        std::mem::replace(&mut self.scroll_position, scroll_position)
    }

    /// Offset at which the last viewport-full of content is visible.
    #[must_use]
    pub fn end_offset(&self) -> f32 {
        self.content_extent - self.viewport_extent
    }

    /// Signed distance past the end, with `threshold` counted as already there.
    /// Non-negative means the viewport is at (or beyond) the end.
    ///
    /// The end offset is floored so fractional drift in reported sizes cannot
    /// keep a fully scrolled list one sub-cell short of its end.
    #[must_use]
    pub fn distance_to_end(&self, threshold: f32) -> f32 {
        self.scroll_position + threshold - self.end_offset().floor()
    }

    #[must_use]
    pub fn is_at_end(&self, threshold: f32) -> bool {
        self.distance_to_end(threshold) >= 0.0
    }
}

/// Size of every item along the scroll axis, measured once per item.
///
/// Entries stay valid while the axis and the measuring width are unchanged, so
/// a growing list only measures the items it has not seen. Items are assumed
/// not to change in place; call [`clear`](Self::clear) when they do.
#[derive(Debug, Clone, Default)]
pub struct ItemExtents {
    key: Option<(Axis, u16)>,
    extents: Vec<usize>,
}

impl ItemExtents {
    /// Bring the cache in line with `items` measured at `width`, calling
    /// `measure` only for indices without an entry.
    pub fn sync<'s, T>(
        &mut self,
        axis: Axis,
        width: u16,
        items: &'s [T],
        mut measure: impl FnMut(usize, &'s T) -> usize,
    ) -> &[usize] {
        if self.key != Some((axis, width)) {
            if self.key.is_some() {
                tracing::trace!(?axis, width, "item extents invalidated");
            }
            self.key = Some((axis, width));
            self.extents.clear();
        }
        self.extents.truncate(items.len());
        let known = self.extents.len();
        for (index, item) in items.iter().enumerate().skip(known) {
            self.extents.push(measure(index, item));
        }
        &self.extents
    }

    pub fn clear(&mut self) {
        self.key = None;
        self.extents.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.extents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.extents.is_empty()
    }
}

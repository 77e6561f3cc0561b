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

//! The list view the auto-scroll layer wraps: scroll offset, item layout, and
//! the scroll operations that move it.

use super::measure::Axis;
use std::time::{Duration, Instant};

/// Fraction of the remaining distance covered per frame by animated scrolls.
const SMOOTH_FACTOR: f32 = 0.5;
const SNAP_EPSILON: f32 = 0.01;
pub const SCROLLBAR_FLASH_DURATION: Duration = Duration::from_millis(500);

/// Per-item start offsets and extents along the scroll axis, plus the total.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemLayout {
    pub starts: Vec<usize>,
    pub extents: Vec<usize>,
    pub content_extent: usize,
}

/// Parameters of [`AutoScrollState::scroll_to_index`](super::AutoScrollState::scroll_to_index).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollToIndex {
    pub index: usize,
    /// Extra cells subtracted from the computed offset.
    pub view_offset: f32,
    /// 0 puts the item at the start of the viewport, 1 at the end, 0.5 centers it.
    pub view_position: f32,
    pub animated: bool,
}

impl ScrollToIndex {
    #[must_use]
    pub fn new(index: usize) -> Self {
        Self { index, view_offset: 0.0, view_position: 0.0, animated: true }
    }

    #[must_use]
    pub fn view_offset(mut self, view_offset: f32) -> Self {
        self.view_offset = view_offset;
        self
    }

    #[must_use]
    pub fn view_position(mut self, view_position: f32) -> Self {
        self.view_position = view_position;
        self
    }

    #[must_use]
    pub fn animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }
}

/// Snapshot returned by [`ListView::metrics`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListMetrics {
    pub content_length: usize,
    pub visible_length: usize,
    pub offset: f32,
    pub measured_items: usize,
    pub last_interaction: Option<Instant>,
}

#[derive(Debug, Clone)]
pub struct ListView {
    axis: Axis,
    viewport_extent: usize,
    layout: ItemLayout,
    /// Smooth scroll position (fractional).
    scroll_pos: f32,
    /// Where an animated scroll is heading.
    scroll_target: f32,
    flash_until: Option<Instant>,
    last_interaction: Option<Instant>,
}

impl ListView {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            viewport_extent: 0,
            layout: ItemLayout::default(),
            scroll_pos: 0.0,
            scroll_target: 0.0,
            flash_until: None,
            last_interaction: None,
        }
    }

    #[must_use]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    #[must_use]
    pub fn viewport_extent(&self) -> usize {
        self.viewport_extent
    }

    #[must_use]
    pub fn content_extent(&self) -> usize {
        self.layout.content_extent
    }

    #[must_use]
    pub fn layout(&self) -> &ItemLayout {
        &self.layout
    }

    #[must_use]
    pub fn offset(&self) -> f32 {
        self.scroll_pos
    }

    /// Offset used for drawing: the smooth position rounded to whole cells.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn rendered_offset(&self) -> usize {
        self.scroll_pos.max(0.0).round() as usize
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn max_offset(&self) -> f32 {
        self.layout.content_extent.saturating_sub(self.viewport_extent) as f32
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        (self.scroll_target - self.scroll_pos).abs() > f32::EPSILON
    }

    /// Returns whether the extent changed.
    pub fn set_viewport_extent(&mut self, extent: usize) -> bool {
        let changed = self.viewport_extent != extent;
        self.viewport_extent = extent;
        changed
    }

    /// Replace the item layout. Returns whether the content extent changed.
    pub fn set_layout(&mut self, layout: ItemLayout) -> bool {
        let changed = self.layout.content_extent != layout.content_extent;
        self.layout = layout;
        changed
    }

    /// Content extent reported by a host that does not lay out items itself.
    pub fn set_content_extent(&mut self, content_extent: usize) -> bool {
        let changed = self.layout.content_extent != content_extent;
        self.layout.content_extent = content_extent;
        changed
    }

    /// Pull the position back inside `[0, max_offset]` after a resize.
    /// Returns the new position if it moved.
    pub fn clamp_to_bounds(&mut self) -> Option<f32> {
        let max = self.max_offset();
        self.scroll_target = self.scroll_target.clamp(0.0, max);
        let clamped = self.scroll_pos.clamp(0.0, max);
        if (clamped - self.scroll_pos).abs() > f32::EPSILON {
            self.scroll_pos = clamped;
            return Some(clamped);
        }
        None
    }

    /// Move toward `offset` (clamped to the scrollable range). Without animation the
    /// position jumps immediately; returns the new position if it changed.
    pub fn scroll_to_offset(&mut self, offset: f32, animated: bool) -> Option<f32> {
        self.scroll_target = offset.clamp(0.0, self.max_offset());
        if animated {
            return None;
        }
        self.jump_to_target()
    }

    /// User-driven scroll: cancels any animation and moves by `delta` at once.
    pub fn scroll_by(&mut self, delta: f32) -> Option<f32> {
        self.scroll_target = (self.scroll_pos + delta).clamp(0.0, self.max_offset());
        self.jump_to_target()
    }

    /// Offset that shows item `params.index`, or `None` if no such item was laid out.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn offset_for_index(&self, params: ScrollToIndex) -> Option<f32> {
        let start = *self.layout.starts.get(params.index)? as f32;
        let extent = self.layout.extents.get(params.index).copied().unwrap_or(0) as f32;
        let visible = self.viewport_extent as f32;
        Some((start - params.view_position * (visible - extent)).max(0.0) - params.view_offset)
    }

    /// Advance an animated scroll by one frame. Returns the new position if it moved.
    pub fn step(&mut self) -> Option<f32> {
        let delta = self.scroll_target - self.scroll_pos;
        if delta.abs() <= f32::EPSILON {
            return None;
        }
        if delta.abs() < SNAP_EPSILON {
            self.scroll_pos = self.scroll_target;
        } else {
            self.scroll_pos += delta * SMOOTH_FACTOR;
        }
        Some(self.scroll_pos)
    }

    pub fn flash_scroll_indicators(&mut self, now: Instant) {
        self.flash_until = Some(now + SCROLLBAR_FLASH_DURATION);
    }

    #[must_use]
    pub fn scrollbar_visible(&self, now: Instant) -> bool {
        self.flash_until.is_some_and(|until| now < until)
    }

    pub fn record_interaction(&mut self, now: Instant) {
        self.last_interaction = Some(now);
    }

    #[must_use]
    pub fn metrics(&self) -> ListMetrics {
        ListMetrics {
            content_length: self.layout.content_extent,
            visible_length: self.viewport_extent,
            offset: self.scroll_pos,
            measured_items: self.layout.starts.len(),
            last_interaction: self.last_interaction,
        }
    }

    fn jump_to_target(&mut self) -> Option<f32> {
        if (self.scroll_target - self.scroll_pos).abs() <= f32::EPSILON {
            return None;
        }
        self.scroll_pos = self.scroll_target;
        Some(self.scroll_pos)
    }
}

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

//! Auto-scroll decision policy.
//!
//! The controller follows the end of the list while the user either stays at the
//! end or keeps moving toward it. Any backward scroll that does not land on the
//! end pauses following; reaching the end (within `threshold`) resumes it.

use super::measure::Measurements;

#[derive(Debug, Clone)]
pub struct AutoScrollController {
    measurements: Measurements,
    following: bool,
    threshold: f32,
    disabled: bool,
}

impl AutoScrollController {
    pub fn new(threshold: f32, disabled: bool) -> Self {
        Self { measurements: Measurements::default(), following: !disabled, threshold, disabled }
    }

    #[must_use]
    pub fn is_following(&self) -> bool {
        self.following
    }

    #[must_use]
    pub fn measurements(&self) -> Measurements {
        self.measurements
    }

    #[must_use]
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn set_threshold(&mut self, threshold: f32) {
        self.threshold = threshold;
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Toggle the hard override. Turning it off re-engages following only if the
    /// viewport already sits at the end.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        let following = !disabled && self.measurements.is_at_end(self.threshold);
        self.set_following(following);
    }

    /// Layout event. Returns `true` when the caller should scroll to the end.
    pub fn on_layout(&mut self, viewport_extent: f32) -> bool {
        self.measurements.apply_layout(viewport_extent);
        tracing::trace!(viewport_extent, following = self.following, "list layout");
        self.following
    }

    /// Content-size event. Returns `true` when the caller should scroll to the end.
    pub fn on_content_size_change(&mut self, content_extent: f32) -> bool {
        self.measurements.apply_content_size(content_extent);
        tracing::trace!(content_extent, following = self.following, "list content size");
        self.following
    }

    /// Scroll event. Returns the updated flag.
    pub fn on_scroll(&mut self, position: f32) -> bool {
        let previous = self.measurements.apply_scroll(position);
        let forward = previous <= position;
        let at_end = self.measurements.is_at_end(self.threshold);
        let following = !self.disabled && ((self.following && forward) || at_end);
        tracing::trace!(previous, position, forward, at_end, "list scroll");
        self.set_following(following);
        self.following
    }

    /// A programmatic scroll-to-end was issued.
    pub fn engage(&mut self) {
        self.set_following(!self.disabled);
    }

    /// The host view was replaced: forget its measurements and start following.
    pub fn reset(&mut self) {
        self.measurements = Measurements::default();
        self.engage();
    }

    fn set_following(&mut self, following: bool) {
        if following != self.following {
            tracing::debug!(
                following,
                position = self.measurements.scroll_position,
                end = self.measurements.end_offset(),
                "auto-scroll {}",
                if following { "engaged" } else { "paused" }
            );
        }
        self.following = following;
    }
}

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

use super::animation::AlertAnimation;
use std::time::Instant;

/// Counts items that arrived while the list was not following its end.
#[derive(Debug, Clone, Default)]
pub struct NewItemNotifier {
    count: usize,
    /// Counted length seen on the previous update; `None` until the first one.
    previous_len: Option<usize>,
    alert: AlertAnimation,
}

impl NewItemNotifier {
    /// Observe the counted item length for this update.
    ///
    /// The first observation only records a baseline.
    pub fn observe(&mut self, len: usize, following: bool, now: Instant) {
        let Some(previous) = self.previous_len.replace(len) else {
            return;
        };
        if !following && len > previous {
            let was_zero = self.count == 0;
            self.count += len - previous;
            tracing::debug!(added = len - previous, unseen = self.count, "new items while paused");
            if was_zero {
                self.alert.start(now);
            }
        } else if following && self.count > 0 {
            self.reset();
        }
    }

    pub fn reset(&mut self) {
        if self.count > 0 {
            tracing::debug!(cleared = self.count, "new item count cleared");
        }
        self.count = 0;
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn alert(&self) -> &AlertAnimation {
        &self.alert
    }

    pub fn tick(&mut self, now: Instant) -> f32 {
        self.alert.tick(now)
    }

    pub fn stop(&mut self) {
        self.alert.stop();
    }
}

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

use std::time::{Duration, Instant};

/// Off-screen start of the new-item banner slide-in.
pub const ALERT_START: f32 = -30.0;
/// Resting offset of the new-item banner.
pub const ALERT_REST: f32 = 10.0;
pub const ALERT_SLIDE_DURATION: Duration = Duration::from_millis(250);
/// Alert position units per terminal row.
pub const ALERT_UNITS_PER_ROW: f32 = 10.0;

/// Timed transition of the banner's vertical offset.
///
/// Frame-driven: the value only moves when [`tick`](Self::tick) is called.
#[derive(Debug, Clone)]
pub struct AlertAnimation {
    value: f32,
    started_at: Option<Instant>,
}

impl Default for AlertAnimation {
    fn default() -> Self {
        Self { value: 0.0, started_at: None }
    }
}

impl AlertAnimation {
    /// Jump to [`ALERT_START`] and begin sliding toward [`ALERT_REST`].
    pub fn start(&mut self, now: Instant) {
        self.value = ALERT_START;
        self.started_at = Some(now);
    }

    /// Advance to `now` and return the current value.
    pub fn tick(&mut self, now: Instant) -> f32 {
        if let Some(started_at) = self.started_at {
            let elapsed = now.saturating_duration_since(started_at);
            let t = (elapsed.as_secs_f32() / ALERT_SLIDE_DURATION.as_secs_f32()).clamp(0.0, 1.0);
            self.value = ALERT_START + (ALERT_REST - ALERT_START) * ease_in_out(t);
            if t >= 1.0 {
                self.started_at = None;
            }
        }
        self.value
    }

    /// Freeze at the current value.
    pub fn stop(&mut self) {
        self.started_at = None;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    #[must_use]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Current value in whole terminal rows.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn row_offset(&self) -> i32 {
        (self.value / ALERT_UNITS_PER_ROW).round() as i32
    }
}

fn ease_in_out(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

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

use autoscroll_list::list::{AutoScrollConfig, AutoScrollState};
use autoscroll_list::ui::AutoScrollList;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Text;
use ratatui::widgets::{Padding, StatefulWidget};
use std::time::{Duration, Instant};

pub const WIDTH: u16 = 20;
pub const HEIGHT: u16 = 10;
pub const FRAME: Duration = Duration::from_millis(16);
/// Enough frames for a full-length smooth scroll and the banner slide to finish.
const SETTLE_FRAMES: usize = 40;

pub fn items(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("item {i}")).collect()
}

/// A list over plain strings with no padding, so rows map one-to-one to items.
pub fn plain(data: &[String]) -> AutoScrollList<'_, String> {
    AutoScrollList::new(data, |item, _| Text::raw(item.as_str())).content_padding(Padding::ZERO)
}

/// Drives an [`AutoScrollState`] through rendered frames on a fake clock.
pub struct Harness {
    pub state: AutoScrollState,
    pub area: Rect,
    pub buf: Buffer,
    pub clock: Instant,
}

impl Harness {
    pub fn new(config: AutoScrollConfig) -> Self {
        let area = Rect::new(0, 0, WIDTH, HEIGHT);
        Self {
            state: AutoScrollState::new(config),
            area,
            buf: Buffer::empty(area),
            clock: Instant::now(),
        }
    }

    pub fn render_with<T>(&mut self, list: AutoScrollList<'_, T>) {
        self.clock += FRAME;
        self.buf = Buffer::empty(self.area);
        list.now(self.clock).render(self.area, &mut self.buf, &mut self.state);
    }

    pub fn render(&mut self, data: &[String]) {
        self.render_with(plain(data));
    }

    pub fn settle(&mut self, data: &[String]) {
        for _ in 0..SETTLE_FRAMES {
            self.render(data);
        }
    }

    pub fn offset(&self) -> f32 {
        self.state.metrics().map_or(f32::NAN, |m| m.offset)
    }

    pub fn row(&self, y: u16) -> String {
        (0..self.area.width).map(|x| self.buf[(x, y)].symbol()).collect()
    }

    pub fn symbol(&self, x: u16, y: u16) -> &str {
        self.buf[(x, y)].symbol()
    }

    pub fn screen_contains(&self, needle: &str) -> bool {
        (0..self.area.height).any(|y| self.row(y).contains(needle))
    }
}

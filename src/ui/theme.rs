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

use ratatui::style::{Color, Style};

// Accent
pub const RUST_ORANGE: Color = Color::Rgb(244, 118, 0);

// UI chrome
pub const DIM: Color = Color::DarkGray;
pub const SEPARATOR_CHAR: &str = "─";

// Overlays: dark text on a light card, like a toast
pub const OVERLAY_FG: Color = Color::Black;
pub const OVERLAY_BG: Color = Color::White;
pub const ALERT_STYLE: Style = Style::new().fg(OVERLAY_FG).bg(OVERLAY_BG);
pub const INDICATOR_STYLE: Style = Style::new().fg(OVERLAY_FG).bg(OVERLAY_BG);

// Follow status in the demo footer
pub const STATUS_FOLLOWING: Color = Color::Green;
pub const STATUS_PAUSED: Color = Color::Yellow;

/// Message colors used by the demo feed.
pub const MESSAGE_PALETTE: [Color; 5] = [
    Color::Rgb(224, 72, 54),
    Color::Rgb(243, 157, 65),
    Color::Rgb(141, 89, 36),
    Color::Rgb(86, 150, 188),
    Color::Rgb(47, 81, 104),
];

/// Pick a palette color from an arbitrary seed.
pub fn message_color(seed: usize) -> Color {
    MESSAGE_PALETTE[seed % MESSAGE_PALETTE.len()]
}

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

//! New-item banner and scroll-to-end indicator drawn over the list.

use super::list::{AlertRenderer, clip_span};
use super::theme;
use crate::list::AutoScrollState;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, Clear, Padding, Paragraph, Widget};

pub const DEFAULT_INDICATOR_WIDTH: u16 = 5;
pub const DEFAULT_INDICATOR_HEIGHT: u16 = 3;
pub const DEFAULT_INDICATOR_MARGIN_X: u16 = 2;
pub const DEFAULT_INDICATOR_MARGIN_Y: u16 = 1;

/// Banner height: one text row inside a border.
const ALERT_HEIGHT: u16 = 3;
/// Border plus one cell of padding on each side.
const ALERT_CHROME_WIDTH: usize = 4;

/// Box the default indicator glyph is drawn in, and where it sits in the corner.
#[derive(Debug, Clone)]
pub struct IndicatorContainer<'a> {
    pub width: u16,
    pub height: u16,
    pub margin_x: u16,
    pub margin_y: u16,
    pub block: Block<'a>,
}

impl Default for IndicatorContainer<'_> {
    fn default() -> Self {
        Self {
            width: DEFAULT_INDICATOR_WIDTH,
            height: DEFAULT_INDICATOR_HEIGHT,
            margin_x: DEFAULT_INDICATOR_MARGIN_X,
            margin_y: DEFAULT_INDICATOR_MARGIN_Y,
            block: Block::bordered().border_type(BorderType::Rounded).style(theme::INDICATOR_STYLE),
        }
    }
}

#[derive(Default)]
pub(super) struct Overlays<'a> {
    pub(super) indicator_container: IndicatorContainer<'a>,
    pub(super) indicator_component: Option<Text<'a>>,
    pub(super) alert_message: Option<Box<dyn Fn(usize) -> String + 'a>>,
    pub(super) alert_container_style: Style,
    pub(super) alert_text_style: Style,
    pub(super) alert_renderer: Option<AlertRenderer<'a>>,
}

#[must_use]
pub fn default_alert_message(count: usize) -> String {
    if count == 1 { "1 new item".to_owned() } else { format!("{count} new items") }
}

/// Draw whichever overlays the state calls for and record where they landed,
/// so clicks can be routed back.
pub(super) fn render(overlays: &Overlays<'_>, area: Rect, buf: &mut Buffer, state: &mut AutoScrollState) {
    if state.shows_new_item_alert() {
        state.rendered_alert_area = render_alert(overlays, area, buf, state);
    }
    if state.shows_indicator() {
        let banner = state.rendered_alert_area;
        state.rendered_indicator_area = render_indicator(overlays, area, banner, buf, state);
    }
}

fn render_alert(
    overlays: &Overlays<'_>,
    area: Rect,
    buf: &mut Buffer,
    state: &AutoScrollState,
) -> Option<Rect> {
    let count = state.new_item_count();
    if let Some(renderer) = &overlays.alert_renderer {
        let drawn = renderer(count, state.alert_position(), area, buf).intersection(area);
        return (!drawn.is_empty()).then_some(drawn);
    }

    let message = overlays
        .alert_message
        .as_ref()
        .map_or_else(|| default_alert_message(count), |message| message(count));
    let glyph = state.config().triangle().small_glyph();
    let line = Line::from(vec![
        Span::styled(message, overlays.alert_text_style),
        Span::raw(" "),
        Span::styled(glyph, overlays.alert_text_style),
    ]);
    let width = u16::try_from(line.width() + ALERT_CHROME_WIDTH).unwrap_or(u16::MAX).min(area.width);
    if width == 0 {
        return None;
    }

    // Render off-screen, then copy the rows that are inside the list. The banner
    // slides in from above the top edge.
    let mut scratch = Buffer::empty(Rect::new(0, 0, width, ALERT_HEIGHT));
    Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .padding(Padding::horizontal(1))
                .style(theme::ALERT_STYLE.patch(overlays.alert_container_style)),
        )
        .render(scratch.area, &mut scratch);

    let top = i64::from(area.y) + i64::from(state.alert_row_offset());
    let (y, visible, skip) = clip_span(top, i64::from(ALERT_HEIGHT), area.y, area.bottom())?;
    let x = area.x + (area.width - width) / 2;
    for dy in 0..visible {
        for dx in 0..width {
            if let (Some(src), Some(dst)) =
                (scratch.cell((dx, skip + dy)), buf.cell_mut((x + dx, y + dy)))
            {
                *dst = src.clone();
            }
        }
    }
    Some(Rect::new(x, y, width, visible))
}

/// The indicator sits in its end corner, pushed below `banner` when the two
/// would overlap (inverted vertical lists put both at the top).
fn render_indicator(
    overlays: &Overlays<'_>,
    area: Rect,
    banner: Option<Rect>,
    buf: &mut Buffer,
    state: &AutoScrollState,
) -> Option<Rect> {
    let container = &overlays.indicator_container;
    let mut rect = state.config().end_edge().corner(
        area,
        container.width,
        container.height,
        container.margin_x,
        container.margin_y,
    );
    if let Some(banner) = banner
        && rect.intersects(banner)
    {
        rect = below(rect, banner).intersection(area);
    }
    if rect.is_empty() {
        return None;
    }
    Clear.render(rect, buf);
    match &overlays.indicator_component {
        Some(component) => Paragraph::new(component.clone()).render(rect, buf),
        None => Paragraph::new(state.config().triangle().glyph())
            .alignment(Alignment::Center)
            .block(container.block.clone())
            .render(rect, buf),
    }
    Some(rect)
}

fn below(rect: Rect, banner: Rect) -> Rect {
    Rect { y: banner.bottom(), ..rect }
}

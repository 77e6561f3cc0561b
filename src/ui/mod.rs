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

mod header;
mod layout;
mod list;
mod overlay;
pub mod theme;

pub use list::{AlertRenderer, AutoScrollList};
pub use overlay::{
    DEFAULT_INDICATOR_HEIGHT, DEFAULT_INDICATOR_MARGIN_X, DEFAULT_INDICATOR_MARGIN_Y,
    DEFAULT_INDICATOR_WIDTH, IndicatorContainer, default_alert_message,
};

use crate::app::{App, Message};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, app: &mut App) {
    let areas = layout::compute(frame.area());

    if areas.header.height > 0 {
        header::render(frame, areas.header, app);
        render_separator(frame, areas.header_sep);
    }

    // Own messages never count as "new".
    let list = AutoScrollList::new(&app.messages, |message, _| message_text(message))
        .new_item_filter(|message: &Message| !message.own);
    frame.render_stateful_widget(list, areas.body, &mut app.list);

    render_separator(frame, areas.footer_sep);
    if let Some(footer_area) = areas.footer {
        render_footer(frame, footer_area, app);
    }
}

fn message_text(message: &Message) -> Text<'_> {
    let mut spans = Vec::with_capacity(2);
    if message.own {
        spans.push(Span::styled("you: ", Style::default().fg(theme::DIM)));
    }
    spans.push(Span::styled(message.content.as_str(), Style::default().fg(message.color)));
    Text::from(Line::from(spans))
}

fn render_separator(frame: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }
    let sep_str = theme::SEPARATOR_CHAR.repeat(usize::from(area.width));
    let line = Line::from(Span::styled(sep_str, Style::default().fg(theme::DIM)));
    frame.render_widget(Paragraph::new(line), area);
}

const FOOTER_PAD: u16 = 2;
const FOOTER_COLUMN_GAP: u16 = 1;

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let padded = Rect {
        x: area.x + FOOTER_PAD,
        y: area.y,
        width: area.width.saturating_sub(FOOTER_PAD * 2),
        height: area.height,
    };

    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::White));
    let desc = |d: &'static str| Span::styled(d, Style::default().fg(theme::DIM));
    let hints = Line::from(vec![
        key("End"),
        desc(" latest  "),
        key("s"),
        desc(" send  "),
        key("p"),
        desc(" pause feed  "),
        key("d"),
        desc(" disable follow  "),
        key("f"),
        desc(" flash  "),
        key("q"),
        desc(" quit"),
    ]);

    let (status, color) = footer_status(app);
    let (left_area, right_area) = split_footer_columns(padded);
    frame.render_widget(Paragraph::new(hints), left_area);
    render_footer_right_info(frame, right_area, &status, color);
}

fn footer_status(app: &App) -> (String, Color) {
    if app.list.is_auto_scrolling() {
        return ("following".to_owned(), theme::STATUS_FOLLOWING);
    }
    let mut text =
        if app.list.config().auto_scroll_disabled { "follow off" } else { "paused" }.to_owned();
    let count = app.list.new_item_count();
    if count > 0 {
        text.push_str(&format!("  {count} new"));
    }
    (text, theme::STATUS_PAUSED)
}

fn split_footer_columns(area: Rect) -> (Rect, Rect) {
    if area.width == 0 {
        return (area, Rect { width: 0, ..area });
    }

    let gap = if area.width > 2 { FOOTER_COLUMN_GAP } else { 0 };
    let usable_width = area.width.saturating_sub(gap);
    let left_width = usable_width.saturating_add(1) / 2;
    let right_width = usable_width.saturating_sub(left_width);

    let left = Rect { width: left_width, ..area };
    let right = Rect {
        x: area.x.saturating_add(left_width).saturating_add(gap),
        width: right_width,
        ..area
    };
    (left, right)
}

fn render_footer_right_info(frame: &mut Frame, area: Rect, text: &str, color: Color) {
    if area.width == 0 {
        return;
    }
    // Drop the status rather than wrap it when the terminal is too narrow.
    if UnicodeWidthStr::width(text) > usize::from(area.width) {
        return;
    }
    let line = Line::from(Span::styled(text.to_owned(), Style::default().fg(color)));
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Right), area);
}

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

use crate::helpers::{Harness, items, plain};
use autoscroll_list::list::animation::{ALERT_REST, ALERT_START};
use autoscroll_list::list::{AutoScrollConfig, input};
use crossterm::event::{Event, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use pretty_assertions::assert_eq;
use ratatui::layout::Rect;
use ratatui::style::Style;

/// Settled at the end of 30 items, then scrolled back five rows.
fn paused(config: AutoScrollConfig) -> Harness {
    let mut h = Harness::new(config);
    h.settle(&items(30));
    h.state.scroll_by(-5.0);
    assert!(!h.state.is_auto_scrolling());
    h
}

fn click(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

// --- Counting ---

#[test]
fn items_arriving_while_following_are_not_counted() {
    let mut h = Harness::new(AutoScrollConfig::default());
    h.settle(&items(30));
    h.settle(&items(40));
    assert_eq!(h.state.new_item_count(), 0);
    assert!(!h.screen_contains("new item"));
}

#[test]
fn items_arriving_while_paused_are_counted() {
    let mut h = paused(AutoScrollConfig::default());
    h.render(&items(33));
    assert_eq!(h.state.new_item_count(), 3);
    h.render(&items(33));
    assert_eq!(h.state.new_item_count(), 3);
    h.render(&items(38));
    assert_eq!(h.state.new_item_count(), 8);
}

#[test]
fn filtered_items_do_not_count() {
    let mut h = paused(AutoScrollConfig::default());
    let mut data = items(30);
    data.push("me: hi".to_owned());
    data.push("me: again".to_owned());
    data.push("item 30".to_owned());
    for _ in 0..3 {
        h.render_with(plain(&data).new_item_filter(|item: &String| !item.starts_with("me:")));
    }
    assert_eq!(h.state.new_item_count(), 1);
}

#[test]
fn reaching_end_clears_count() {
    let mut h = paused(AutoScrollConfig::default());
    let data = items(33);
    h.settle(&data);
    assert_eq!(h.state.new_item_count(), 3);
    h.state.scroll_by(100.0);
    assert!(h.state.is_auto_scrolling());
    assert_eq!(h.state.new_item_count(), 0);
    h.render(&data);
    assert!(!h.screen_contains("new item"));

    // A second pause counts from zero and slides the banner in again.
    h.state.scroll_by(-5.0);
    h.render(&items(35));
    assert_eq!(h.state.new_item_count(), 2);
    assert!(h.state.is_alert_animating());
}

// --- Banner ---

#[test]
fn banner_slides_in_and_rests() {
    let mut h = paused(AutoScrollConfig::default());
    let data = items(33);
    h.render(&data);
    assert!(h.state.is_alert_animating());
    assert_eq!(h.state.alert_position(), ALERT_START);
    // Still above the top edge on the first frame.
    assert!(!h.screen_contains("new items"));

    for _ in 0..8 {
        h.render(&data);
    }
    let mid = h.state.alert_position();
    assert!(mid > ALERT_START && mid < ALERT_REST, "mid-slide position {mid}");

    h.settle(&data);
    assert!(!h.state.is_alert_animating());
    assert_eq!(h.state.alert_position(), ALERT_REST);
    assert!(h.row(2).contains("3 new items ▾"), "row 2: {:?}", h.row(2));
}

#[test]
fn more_items_while_banner_visible_do_not_restart_it() {
    let mut h = paused(AutoScrollConfig::default());
    h.settle(&items(33));
    h.render(&items(35));
    assert!(!h.state.is_alert_animating());
    assert_eq!(h.state.alert_position(), ALERT_REST);
    assert!(h.row(2).contains("5 new items"));
}

#[test]
fn banner_disabled_by_config() {
    let config = AutoScrollConfig { show_new_item_alert: false, ..AutoScrollConfig::default() };
    let mut h = paused(config);
    h.settle(&items(33));
    assert_eq!(h.state.new_item_count(), 3);
    assert!(!h.screen_contains("new item"));
}

#[test]
fn custom_banner_message() {
    let mut h = paused(AutoScrollConfig::default());
    let data = items(33);
    for _ in 0..40 {
        h.render_with(plain(&data).new_item_alert_message(|n| format!("{n} unread")));
    }
    assert!(h.row(2).contains("3 unread"));
}

#[test]
fn custom_banner_renderer_receives_count_and_takes_clicks() {
    let mut h = paused(AutoScrollConfig::default());
    let data = items(33);
    for _ in 0..40 {
        h.render_with(plain(&data).new_item_alert_renderer(|count, _position, area, buf| {
            buf.set_string(area.x, area.y, format!("NEW {count}"), Style::default());
            Rect::new(area.x, area.y, 5, 1)
        }));
    }
    assert!(h.row(0).starts_with("NEW 3"));

    assert!(input::handle_terminal_event(&mut h.state, &click(2, 0)));
    assert!(h.state.is_auto_scrolling());
    assert_eq!(h.state.new_item_count(), 0);
}

#[test]
fn banner_click_scrolls_to_end() {
    let mut h = paused(AutoScrollConfig::default());
    let data = items(33);
    h.settle(&data);
    assert!(input::handle_terminal_event(&mut h.state, &click(10, 2)));
    h.settle(&data);
    assert!(h.state.is_auto_scrolling());
    assert_eq!(h.offset(), 23.0);
    assert!(!h.screen_contains("new item"));
}

// --- Indicator ---

#[test]
fn indicator_only_while_not_following() {
    let mut h = Harness::new(AutoScrollConfig::default());
    let data = items(30);
    h.settle(&data);
    assert_ne!(h.symbol(15, 7), "▼");

    h.state.scroll_by(-5.0);
    h.render(&data);
    assert_eq!(h.symbol(15, 7), "▼");

    h.state.scroll_to_end(false);
    h.render(&data);
    assert_ne!(h.symbol(15, 7), "▼");
}

#[test]
fn indicator_disabled_by_config() {
    let config =
        AutoScrollConfig { show_scroll_to_end_indicator: false, ..AutoScrollConfig::default() };
    let mut h = paused(config);
    h.render(&items(30));
    assert_ne!(h.symbol(15, 7), "▼");
}

#[test]
fn indicator_click_scrolls_to_end() {
    let mut h = paused(AutoScrollConfig::default());
    let data = items(30);
    h.render(&data);
    assert!(!input::handle_terminal_event(&mut h.state, &click(1, 8)));
    assert!(input::handle_terminal_event(&mut h.state, &click(15, 7)));
    assert!(h.state.is_auto_scrolling());
}

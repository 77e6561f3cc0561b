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

use crate::helpers::{Harness, items};
use autoscroll_list::list::{AutoScrollConfig, ListEvent};
use autoscroll_list::ui::AutoScrollList;
use pretty_assertions::assert_eq;
use ratatui::text::Text;
use ratatui::widgets::Padding;
use std::cell::Cell;

#[test]
fn first_render_mounts_and_publishes_layout_then_content() {
    let mut h = Harness::new(AutoScrollConfig::default());
    let mut rx = h.state.subscribe();
    assert!(!h.state.is_mounted());
    h.render(&items(30));
    assert!(h.state.is_mounted());

    assert_eq!(
        rx.try_recv().ok(),
        Some(ListEvent::Layout { viewport_extent: 10.0, auto_scrolling: true })
    );
    assert_eq!(
        rx.try_recv().ok(),
        Some(ListEvent::ContentSizeChange { content_extent: 30.0, auto_scrolling: true })
    );
    // The animated scroll to the end takes its first step.
    assert_eq!(
        rx.try_recv().ok(),
        Some(ListEvent::Scroll { position: 10.0, auto_scrolling: true })
    );
}

#[test]
fn scroll_events_report_post_update_flag() {
    let mut h = Harness::new(AutoScrollConfig::default());
    h.settle(&items(30));
    let mut rx = h.state.subscribe();
    h.state.scroll_by(-4.0);
    assert_eq!(
        rx.try_recv().ok(),
        Some(ListEvent::Scroll { position: 16.0, auto_scrolling: false })
    );
}

#[test]
fn metrics_describe_the_view() {
    let mut h = Harness::new(AutoScrollConfig::default());
    h.settle(&items(30));
    let metrics = h.state.metrics().unwrap();
    assert_eq!(metrics.content_length, 30);
    assert_eq!(metrics.visible_length, 10);
    assert_eq!(metrics.offset, 20.0);
    assert_eq!(metrics.measured_items, 30);
    assert_eq!(metrics.last_interaction, None);
}

#[test]
fn flash_shows_scrollbar_briefly() {
    let mut h = Harness::new(AutoScrollConfig::default());
    let data = items(30);
    h.settle(&data);
    let plain_edge = h.symbol(19, 0).to_owned();
    h.state.flash_scroll_indicators();
    h.render(&data);
    assert_ne!(h.symbol(19, 0), plain_edge);

    // 40 frames of 16 ms outlast the 500 ms flash.
    h.settle(&data);
    assert_eq!(h.symbol(19, 0), plain_edge);
}

#[test]
fn column_change_remounts_and_follows() {
    let mut h = Harness::new(AutoScrollConfig::default());
    let data = items(30);
    h.settle(&data);
    h.state.scroll_by(-10.0);
    h.state.set_config(AutoScrollConfig { num_columns: 2, ..AutoScrollConfig::default() });
    h.settle(&data);
    assert!(h.state.is_auto_scrolling());
    assert_eq!(h.offset(), 5.0);
}

#[test]
fn unmount_freezes_state() {
    let mut h = Harness::new(AutoScrollConfig::default());
    h.settle(&items(30));
    h.state.scroll_by(-5.0);
    h.render(&items(32));
    assert_eq!(h.state.new_item_count(), 2);
    assert!(h.state.is_alert_animating());

    h.state.unmount();
    assert!(h.state.is_unmounted());
    assert!(!h.state.is_alert_animating());

    h.settle(&items(40));
    h.state.scroll_to_end(false);
    h.state.handle_scroll(0.0);
    assert!(!h.state.is_mounted());
    assert!(h.state.metrics().is_none());
    assert_eq!(h.state.new_item_count(), 2);
    assert!(!h.state.is_auto_scrolling());
    assert!(!h.screen_contains("item"));
}

#[test]
fn frames_render_visible_and_new_items_only() {
    let mut h = Harness::new(AutoScrollConfig::default());
    let calls = Cell::new(0_usize);
    let frame = |h: &mut Harness, data: &[String]| {
        calls.set(0);
        h.render_with(
            AutoScrollList::new(data, |item, _| {
                calls.set(calls.get() + 1);
                Text::raw(item.as_str())
            })
            .content_padding(Padding::ZERO),
        );
        calls.get()
    };

    // The first frame measures every item, then draws one viewport of them.
    assert_eq!(frame(&mut h, &items(30)), 30 + 10);
    h.settle(&items(30));
    assert_eq!(frame(&mut h, &items(30)), 10);
    // Two new items are measured; drawing stays bounded by the viewport.
    let grown = frame(&mut h, &items(32));
    assert!((2 + 10..=2 + 11).contains(&grown), "calls: {grown}");

    h.state.invalidate_item_extents();
    assert!(frame(&mut h, &items(32)) >= 32);
}

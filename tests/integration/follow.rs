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
use autoscroll_list::list::{AutoScrollConfig, ScrollToIndex, ScrollToItem, input};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;

// --- Following the end ---

#[test]
fn follows_growing_list() {
    let mut h = Harness::new(AutoScrollConfig::default());
    let data = items(30);
    h.settle(&data);
    assert!(h.state.is_auto_scrolling());
    assert_eq!(h.offset(), 20.0);
    assert_eq!(h.row(9).trim_end(), "item 29");

    let data = items(35);
    h.settle(&data);
    assert!(h.state.is_auto_scrolling());
    assert_eq!(h.offset(), 25.0);
    assert_eq!(h.row(9).trim_end(), "item 34");
    assert_eq!(h.state.new_item_count(), 0);
}

#[test]
fn short_list_stays_at_top() {
    let mut h = Harness::new(AutoScrollConfig::default());
    let data = items(3);
    h.settle(&data);
    assert!(h.state.is_auto_scrolling());
    assert_eq!(h.offset(), 0.0);
    assert_eq!(h.row(0).trim_end(), "item 0");
}

#[test]
fn scrolling_back_pauses() {
    let mut h = Harness::new(AutoScrollConfig::default());
    let data = items(30);
    h.settle(&data);

    h.state.scroll_by(-5.0);
    assert!(!h.state.is_auto_scrolling());

    let data = items(33);
    h.settle(&data);
    assert_eq!(h.offset(), 15.0);
    assert_eq!(h.row(0).trim_end(), "item 15");
    assert!(!h.state.is_auto_scrolling());
}

#[test]
fn scrolling_forward_to_end_resumes() {
    let mut h = Harness::new(AutoScrollConfig::default());
    let data = items(30);
    h.settle(&data);
    h.state.scroll_by(-5.0);
    h.state.scroll_by(5.0);
    assert!(h.state.is_auto_scrolling());
}

#[test]
fn threshold_counts_near_end_as_end() {
    let config = AutoScrollConfig { threshold: 3.0, ..AutoScrollConfig::default() };
    let mut h = Harness::new(config);
    let data = items(30);
    h.settle(&data);
    h.state.scroll_by(-10.0);
    assert!(!h.state.is_auto_scrolling());
    // 3 cells short of the end is close enough.
    h.state.scroll_by(7.0);
    assert!(h.state.is_auto_scrolling());
}

#[test]
fn scroll_to_end_resumes_following() {
    let mut h = Harness::new(AutoScrollConfig::default());
    h.settle(&items(30));
    h.state.scroll_by(-8.0);
    let data = items(34);
    h.settle(&data);
    assert_eq!(h.state.new_item_count(), 4);

    h.state.scroll_to_end(true);
    assert!(h.state.is_auto_scrolling());
    assert_eq!(h.state.new_item_count(), 0);
    h.settle(&data);
    assert_eq!(h.offset(), 24.0);
    assert_eq!(h.row(9).trim_end(), "item 33");
}

#[test]
fn disabled_override_never_follows() {
    let config = AutoScrollConfig { auto_scroll_disabled: true, ..AutoScrollConfig::default() };
    let mut h = Harness::new(config);
    h.settle(&items(30));
    assert!(!h.state.is_auto_scrolling());
    assert_eq!(h.offset(), 0.0);

    h.state.scroll_to_end(false);
    assert_eq!(h.offset(), 20.0);
    assert!(!h.state.is_auto_scrolling());
    h.settle(&items(32));
    assert_eq!(h.offset(), 20.0);
}

#[test]
fn lifting_override_at_end_reengages() {
    let config = AutoScrollConfig { auto_scroll_disabled: true, ..AutoScrollConfig::default() };
    let mut h = Harness::new(config);
    h.settle(&items(30));
    h.state.scroll_to_end(false);
    h.state.set_auto_scroll_disabled(false);
    assert!(h.state.is_auto_scrolling());
}

// --- Imperative scrolls ---

#[test]
fn scroll_to_index_shows_item_at_top() {
    let mut h = Harness::new(AutoScrollConfig::default());
    let data = items(30);
    h.settle(&data);
    h.state.scroll_to_index(ScrollToIndex::new(3).animated(false));
    h.render(&data);
    assert_eq!(h.offset(), 3.0);
    assert_eq!(h.row(0).trim_end(), "item 3");
    assert!(!h.state.is_auto_scrolling());
}

#[test]
fn scroll_to_item_centers() {
    let mut h = Harness::new(AutoScrollConfig::default());
    let data = items(30);
    h.settle(&data);
    let target = "item 12".to_owned();
    h.state.scroll_to_item(
        &data,
        &target,
        ScrollToItem { view_position: 0.5, animated: false },
    );
    // 12 - 0.5 * (10 - 1)
    assert_eq!(h.offset(), 7.5);
}

#[test]
fn out_of_range_index_is_ignored() {
    let mut h = Harness::new(AutoScrollConfig::default());
    let data = items(30);
    h.settle(&data);
    h.state.scroll_to_index(ScrollToIndex::new(99).animated(false));
    assert_eq!(h.offset(), 20.0);
    assert!(h.state.is_auto_scrolling());
}

#[test]
fn keyboard_scroll_through_input_mapping() {
    let mut h = Harness::new(AutoScrollConfig::default());
    let data = items(30);
    h.settle(&data);
    let page_up = Event::Key(KeyEvent::new(KeyCode::PageUp, KeyModifiers::NONE));
    assert!(input::handle_terminal_event(&mut h.state, &page_up));
    h.render(&data);
    assert_eq!(h.offset(), 10.0);
    assert_eq!(h.row(0).trim_end(), "item 10");
    assert!(h.state.metrics().unwrap().last_interaction.is_some());
}

// --- Layout variants ---

#[test]
fn inverted_list_shows_newest_on_top() {
    let config = AutoScrollConfig { inverted: true, ..AutoScrollConfig::default() };
    let mut h = Harness::new(config);
    h.settle(&items(30));
    assert!(h.state.is_auto_scrolling());
    assert_eq!(h.row(0).trim_end(), "item 29");
    assert_eq!(h.row(9).trim_end(), "item 20");
}

#[test]
fn columns_share_rows() {
    let config = AutoScrollConfig { num_columns: 2, ..AutoScrollConfig::default() };
    let mut h = Harness::new(config);
    h.settle(&items(30));
    assert_eq!(h.offset(), 5.0);
    assert_eq!(h.row(9), "item 28   item 29   ");
}

#[test]
fn horizontal_list_follows_right_edge() {
    let config = AutoScrollConfig { horizontal: true, ..AutoScrollConfig::default() };
    let mut h = Harness::new(config);
    // Ten items of width 6, one gap cell apart: 69 cells of content.
    h.settle(&items(10));
    assert!(h.state.is_auto_scrolling());
    assert_eq!(h.offset(), 49.0);
    assert!(h.row(0).ends_with("item 8 item 9"));
}

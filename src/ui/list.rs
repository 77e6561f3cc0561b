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

//! The [`AutoScrollList`] widget: lays items out, feeds the measurements into
//! [`AutoScrollState`], and draws the visible slice plus the overlays.

use super::overlay::{self, IndicatorContainer, Overlays};
use crate::list::{AutoScrollState, Axis, ItemLayout, ListView};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Text;
use ratatui::widgets::{
    Block, Padding, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget,
    Widget, Wrap,
};
use std::time::Instant;

/// Blank cells between items of a horizontal list.
const HORIZONTAL_ITEM_GAP: usize = 1;

type ItemRenderer<'a, T> = Box<dyn Fn(&'a T, usize) -> Text<'a> + 'a>;
type ItemFilter<'a, T> = Box<dyn Fn(&T) -> bool + 'a>;

/// Custom banner drawer: `(count, position, area, buf)` to the rect it covered.
pub type AlertRenderer<'a> = Box<dyn Fn(usize, f32, Rect, &mut Buffer) -> Rect + 'a>;

/// A list over `data` that keeps the newest item in view while the user is at
/// the end, and shows a "new items" banner plus a scroll-to-end button when
/// they are not.
///
/// ```no_run
/// use autoscroll_list::list::AutoScrollState;
/// use autoscroll_list::ui::AutoScrollList;
/// use ratatui::text::Text;
///
/// # fn draw(frame: &mut ratatui::Frame, lines: &[String], state: &mut AutoScrollState) {
/// let list = AutoScrollList::new(lines, |line, _| Text::raw(line.as_str()));
/// frame.render_stateful_widget(list, frame.area(), state);
/// # }
/// ```
pub struct AutoScrollList<'a, T> {
    data: &'a [T],
    render_item: ItemRenderer<'a, T>,
    new_item_filter: Option<ItemFilter<'a, T>>,
    block: Option<Block<'a>>,
    style: Style,
    content_padding: Padding,
    overlays: Overlays<'a>,
    now: Option<Instant>,
}

impl<'a, T> AutoScrollList<'a, T> {
    pub fn new<F>(data: &'a [T], render_item: F) -> Self
    where
        F: Fn(&'a T, usize) -> Text<'a> + 'a,
    {
        Self {
            data,
            render_item: Box::new(render_item),
            new_item_filter: None,
            block: None,
            style: Style::default(),
            content_padding: Padding::horizontal(1),
            overlays: Overlays::default(),
            now: None,
        }
    }

    /// Only items passing `filter` count toward the new-item banner.
    #[must_use]
    pub fn new_item_filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&T) -> bool + 'a,
    {
        self.new_item_filter = Some(Box::new(filter));
        self
    }

    #[must_use]
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn content_padding(mut self, padding: Padding) -> Self {
        self.content_padding = padding;
        self
    }

    #[must_use]
    pub fn indicator_container(mut self, container: IndicatorContainer<'a>) -> Self {
        self.overlays.indicator_container = container;
        self
    }

    /// Replace the default indicator content entirely.
    #[must_use]
    pub fn indicator_component(mut self, component: Text<'a>) -> Self {
        self.overlays.indicator_component = Some(component);
        self
    }

    #[must_use]
    pub fn new_item_alert_message<F>(mut self, message: F) -> Self
    where
        F: Fn(usize) -> String + 'a,
    {
        self.overlays.alert_message = Some(Box::new(message));
        self
    }

    #[must_use]
    pub fn new_item_alert_container_style(mut self, style: Style) -> Self {
        self.overlays.alert_container_style = style;
        self
    }

    #[must_use]
    pub fn new_item_alert_text_style(mut self, style: Style) -> Self {
        self.overlays.alert_text_style = style;
        self
    }

    /// Draw the banner yourself. The closure gets the count, the animated
    /// position, and the list area; it returns the rect it drew into.
    #[must_use]
    pub fn new_item_alert_renderer<F>(mut self, renderer: F) -> Self
    where
        F: Fn(usize, f32, Rect, &mut Buffer) -> Rect + 'a,
    {
        self.overlays.alert_renderer = Some(Box::new(renderer));
        self
    }

    /// Pin the frame clock. Tests use this to step animations deterministically.
    #[must_use]
    pub fn now(mut self, now: Instant) -> Self {
        self.now = Some(now);
        self
    }

    fn counted_len(&self) -> usize {
        match &self.new_item_filter {
            Some(keep) => self.data.iter().filter(|&item| keep(item)).count(),
            None => self.data.len(),
        }
    }
}

impl<T> StatefulWidget for AutoScrollList<'_, T> {
    type State = AutoScrollState;

    fn render(mut self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let now = self.now.unwrap_or_else(Instant::now);
        buf.set_style(area, self.style);
        let inner = match self.block.take() {
            Some(block) => {
                let inner = block.inner(area);
                block.render(area, buf);
                inner
            }
            None => area,
        };
        state.rendered_list_area = inner;
        state.rendered_alert_area = None;
        state.rendered_indicator_area = None;
        if state.is_unmounted() {
            return;
        }

        let axis = state.config().axis();
        let columns = state.config().effective_columns();
        let inverted = state.config().inverted;
        state.sync_columns(columns);
        state.mount();
        state.observe_data_len(self.counted_len(), now);

        let content = padded(inner, self.content_padding);
        let col_width = column_width(content.width, columns);
        let render_item = &self.render_item;
        let layout = match axis {
            Axis::Vertical => {
                let heights = state.item_extents.sync(axis, col_width, self.data, |index, item| {
                    item_height(&render_item(item, index), col_width)
                });
                vertical_layout(heights, columns, self.content_padding)
            }
            Axis::Horizontal => {
                let widths = state
                    .item_extents
                    .sync(axis, 0, self.data, |index, item| render_item(item, index).width());
                horizontal_layout(widths, self.content_padding)
            }
        };
        state.sync_viewport(usize::from(axis.extent(inner)));
        state.apply_item_layout(layout);
        state.advance(now);

        if let Some(view) = state.view() {
            let frame = ItemFrame { inner, content, columns, inverted };
            let items = Items { data: self.data, render: render_item };
            match axis {
                Axis::Vertical => draw_vertical(&items, view, &frame, buf),
                Axis::Horizontal => draw_horizontal(&items, view, &frame, buf),
            }
            if view.scrollbar_visible(now) {
                draw_scrollbar(view, inner, inverted, buf);
            }
        }

        overlay::render(&self.overlays, inner, buf, state);
    }
}

/// Data plus its renderer; items are turned into text only when drawn.
struct Items<'r, 'a, T> {
    data: &'a [T],
    render: &'r ItemRenderer<'a, T>,
}

/// Geometry shared by the item drawing passes.
struct ItemFrame {
    /// Viewport: clip bounds along the scroll axis.
    inner: Rect,
    /// Viewport minus padding: bounds across the scroll axis.
    content: Rect,
    columns: usize,
    inverted: bool,
}

fn padded(area: Rect, padding: Padding) -> Rect {
    let x = area.x.saturating_add(padding.left).min(area.right());
    let width = area.width.saturating_sub(padding.left.saturating_add(padding.right));
    Rect::new(x, area.y, width, area.height)
}

#[allow(clippy::cast_possible_truncation)]
fn column_width(width: u16, columns: usize) -> u16 {
    (usize::from(width) / columns.max(1)) as u16
}

/// Rows `text` takes up when wrapped to `width`.
pub(super) fn item_height(text: &Text<'_>, width: u16) -> usize {
    Paragraph::new(text.clone()).wrap(Wrap { trim: false }).line_count(width)
}

/// Stack items top to bottom, `columns` per row. A row is as tall as its
/// tallest wrapped item.
pub(super) fn vertical_layout(heights: &[usize], columns: usize, padding: Padding) -> ItemLayout {
    let mut layout = ItemLayout {
        starts: Vec::with_capacity(heights.len()),
        extents: Vec::with_capacity(heights.len()),
        content_extent: 0,
    };
    let mut cursor = usize::from(padding.top);
    for row in heights.chunks(columns.max(1)) {
        let row_height = row.iter().copied().max().unwrap_or(0);
        for _ in row {
            layout.starts.push(cursor);
            layout.extents.push(row_height);
        }
        cursor += row_height;
    }
    layout.content_extent = cursor + usize::from(padding.bottom);
    layout
}

/// Lay items out left to right, one gap cell apart, each as wide as its widest line.
pub(super) fn horizontal_layout(widths: &[usize], padding: Padding) -> ItemLayout {
    let mut layout = ItemLayout {
        starts: Vec::with_capacity(widths.len()),
        extents: Vec::with_capacity(widths.len()),
        content_extent: 0,
    };
    let mut cursor = usize::from(padding.left);
    for (index, &width) in widths.iter().enumerate() {
        if index > 0 {
            cursor += HORIZONTAL_ITEM_GAP;
        }
        layout.starts.push(cursor);
        layout.extents.push(width);
        cursor += width;
    }
    layout.content_extent = cursor + usize::from(padding.right);
    layout
}

/// Intersect the span `[start, start + len)` with `[lo, hi)`.
/// Returns `(visible_start, visible_len, skipped)`.
pub(super) fn clip_span(start: i64, len: i64, lo: u16, hi: u16) -> Option<(u16, u16, u16)> {
    let visible_start = start.max(i64::from(lo));
    let visible_end = (start + len).min(i64::from(hi));
    if visible_end <= visible_start {
        return None;
    }
    Some((
        to_u16(visible_start),
        to_u16(visible_end - visible_start),
        to_u16(visible_start - start),
    ))
}

fn to_u16(value: i64) -> u16 {
    u16::try_from(value.max(0)).unwrap_or(u16::MAX)
}

fn to_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Screen coordinate of the leading edge of an item. Inverted lists grow from
/// the far edge toward the near one.
fn leading_edge(near: u16, far: u16, start: usize, extent: usize, offset: usize, inverted: bool) -> i64 {
    let (start, extent, offset) = (to_i64(start), to_i64(extent), to_i64(offset));
    if inverted {
        i64::from(far) - (start + extent - offset)
    } else {
        i64::from(near) + start - offset
    }
}

fn draw_vertical<T>(items: &Items<'_, '_, T>, view: &ListView, frame: &ItemFrame, buf: &mut Buffer) {
    let layout = view.layout();
    let offset = view.rendered_offset();
    let col_width = column_width(frame.content.width, frame.columns);
    for (index, item) in items.data.iter().enumerate() {
        let (Some(&start), Some(&extent)) = (layout.starts.get(index), layout.extents.get(index))
        else {
            break;
        };
        let top = leading_edge(frame.inner.y, frame.inner.bottom(), start, extent, offset, frame.inverted);
        let Some((y, height, skip)) = clip_span(top, to_i64(extent), frame.inner.y, frame.inner.bottom())
        else {
            continue;
        };
        let column = u16::try_from(index % frame.columns.max(1)).unwrap_or(0);
        let x = frame.content.x.saturating_add(column.saturating_mul(col_width));
        let area = Rect::new(x, y, col_width, height).intersection(frame.content);
        Paragraph::new((items.render)(item, index))
            .wrap(Wrap { trim: false })
            .scroll((skip, 0))
            .render(area, buf);
    }
}

fn draw_horizontal<T>(items: &Items<'_, '_, T>, view: &ListView, frame: &ItemFrame, buf: &mut Buffer) {
    let layout = view.layout();
    let offset = view.rendered_offset();
    for (index, item) in items.data.iter().enumerate() {
        let (Some(&start), Some(&extent)) = (layout.starts.get(index), layout.extents.get(index))
        else {
            break;
        };
        let left = leading_edge(frame.inner.x, frame.inner.right(), start, extent, offset, frame.inverted);
        let Some((x, width, skip)) = clip_span(left, to_i64(extent), frame.inner.x, frame.inner.right())
        else {
            continue;
        };
        let area = Rect::new(x, frame.content.y, width, frame.content.height);
        Paragraph::new((items.render)(item, index)).scroll((0, skip)).render(area, buf);
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn draw_scrollbar(view: &ListView, area: Rect, inverted: bool, buf: &mut Buffer) {
    let max = view.max_offset().max(0.0) as usize;
    if max == 0 {
        return;
    }
    let offset = view.rendered_offset().min(max);
    let position = if inverted { max - offset } else { offset };
    let orientation = match view.axis() {
        Axis::Vertical => ScrollbarOrientation::VerticalRight,
        Axis::Horizontal => ScrollbarOrientation::HorizontalBottom,
    };
    let mut scrollbar_state =
        ScrollbarState::new(max).position(position).viewport_content_length(view.viewport_extent());
    Scrollbar::new(orientation).render(area, buf, &mut scrollbar_state);
}

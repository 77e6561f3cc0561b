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

use super::config::AutoScrollConfig;
use super::controller::AutoScrollController;
use super::measure::{ItemExtents, Measurements};
use super::notifier::NewItemNotifier;
use super::view::{ItemLayout, ListMetrics, ListView, ScrollToIndex};
use ratatui::layout::{Position, Rect};
use std::time::Instant;
use tokio::sync::mpsc;

/// Published to subscribers after the state has been updated for the event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ListEvent {
    Layout { viewport_extent: f32, auto_scrolling: bool },
    ContentSizeChange { content_extent: f32, auto_scrolling: bool },
    Scroll { position: f32, auto_scrolling: bool },
}

/// Parameters of [`AutoScrollState::scroll_to_item`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollToItem {
    pub view_position: f32,
    pub animated: bool,
}

impl Default for ScrollToItem {
    fn default() -> Self {
        Self { view_position: 0.0, animated: true }
    }
}

/// State holder of an auto-scrolling list, and the handle callers keep to drive it.
///
/// Rendering goes through [`AutoScrollList`](crate::ui::AutoScrollList); hosts that lay
/// out items themselves can feed the `handle_*` methods directly instead.
///
/// All scroll operations are no-ops until the first render mounts the list view, and
/// again after [`unmount`](Self::unmount).
pub struct AutoScrollState {
    config: AutoScrollConfig,
    controller: AutoScrollController,
    notifier: NewItemNotifier,
    view: Option<ListView>,
    /// Column count the current view was laid out with.
    mounted_columns: usize,
    unmounted: bool,
    /// Clock of the latest frame; interaction stamps and the scrollbar flash use it.
    frame_clock: Option<Instant>,
    /// Measured size of each item along the axis, reused across frames.
    pub(crate) item_extents: ItemExtents,
    events_tx: Option<mpsc::UnboundedSender<ListEvent>>,
    /// Where the new-item banner was last drawn (for click hit-testing).
    pub(crate) rendered_alert_area: Option<Rect>,
    /// Where the scroll-to-end indicator was last drawn.
    pub(crate) rendered_indicator_area: Option<Rect>,
    /// Inner area the list itself was last drawn into.
    pub(crate) rendered_list_area: Rect,
}

impl Default for AutoScrollState {
    fn default() -> Self {
        Self::new(AutoScrollConfig::default())
    }
}

impl AutoScrollState {
    pub fn new(config: AutoScrollConfig) -> Self {
        let controller = AutoScrollController::new(config.threshold, config.auto_scroll_disabled);
        let mounted_columns = config.effective_columns();
        Self {
            config,
            controller,
            notifier: NewItemNotifier::default(),
            view: None,
            mounted_columns,
            unmounted: false,
            frame_clock: None,
            item_extents: ItemExtents::default(),
            events_tx: None,
            rendered_alert_area: None,
            rendered_indicator_area: None,
            rendered_list_area: Rect::default(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &AutoScrollConfig {
        &self.config
    }

    /// Replace the configuration. A change of axis or column count remounts the view.
    pub fn set_config(&mut self, config: AutoScrollConfig) {
        let remount = config.horizontal != self.config.horizontal
            || config.effective_columns() != self.mounted_columns;
        let was_following = self.controller.is_following();
        self.controller.set_threshold(config.threshold);
        if config.auto_scroll_disabled != self.controller.is_disabled() {
            self.controller.set_disabled(config.auto_scroll_disabled);
        }
        self.config = config;
        self.mounted_columns = self.config.effective_columns();
        if remount && self.view.is_some() {
            self.remount();
        }
        self.clear_count_on_engage(was_following);
    }

    pub fn set_auto_scroll_disabled(&mut self, disabled: bool) {
        let was_following = self.controller.is_following();
        self.config.auto_scroll_disabled = disabled;
        self.controller.set_disabled(disabled);
        self.clear_count_on_engage(was_following);
    }

    pub fn set_threshold(&mut self, threshold: f32) {
        self.config.threshold = threshold;
        self.controller.set_threshold(threshold);
    }

    /// Receive every layout, content-size, and scroll event after it is applied.
    /// A new subscription replaces the previous one.
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<ListEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.events_tx = Some(tx);
        rx
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.view.is_some()
    }

    #[must_use]
    pub fn is_unmounted(&self) -> bool {
        self.unmounted
    }

    #[must_use]
    pub fn is_auto_scrolling(&self) -> bool {
        self.controller.is_following()
    }

    #[must_use]
    pub fn new_item_count(&self) -> usize {
        self.notifier.count()
    }

    /// Current value of the banner's animated vertical offset.
    #[must_use]
    pub fn alert_position(&self) -> f32 {
        self.notifier.alert().value()
    }

    #[must_use]
    pub fn alert_row_offset(&self) -> i32 {
        self.notifier.alert().row_offset()
    }

    #[must_use]
    pub fn is_alert_animating(&self) -> bool {
        self.notifier.alert().is_running()
    }

    #[must_use]
    pub fn measurements(&self) -> Measurements {
        self.controller.measurements()
    }

    #[must_use]
    pub fn shows_new_item_alert(&self) -> bool {
        self.config.show_new_item_alert && !self.is_auto_scrolling() && self.new_item_count() > 0
    }

    #[must_use]
    pub fn shows_indicator(&self) -> bool {
        self.config.show_scroll_to_end_indicator && !self.is_auto_scrolling()
    }

    #[must_use]
    pub fn view(&self) -> Option<&ListView> {
        self.view.as_ref()
    }

    // -----------------------------------------------------------------------
    // Lifecycle
    // -----------------------------------------------------------------------

    /// Create the list view. Called by the first render; a no-op once mounted or
    /// after unmount.
    pub fn mount(&mut self) {
        if self.unmounted || self.view.is_some() {
            return;
        }
        tracing::debug!(axis = ?self.config.axis(), columns = self.mounted_columns, "list mounted");
        self.view = Some(ListView::new(self.config.axis()));
    }

    /// Tear down: drop the view, stop the banner animation, and discard the
    /// subscriber. Later events and operations are ignored.
    pub fn unmount(&mut self) {
        if self.unmounted {
            return;
        }
        tracing::debug!("list unmounted");
        self.unmounted = true;
        self.view = None;
        self.notifier.stop();
        self.events_tx = None;
        self.rendered_alert_area = None;
        self.rendered_indicator_area = None;
    }

    /// Swap in a fresh view when the column count changes so no stale offsets or
    /// item starts survive.
    pub(crate) fn sync_columns(&mut self, columns: usize) {
        if columns != self.mounted_columns {
            self.mounted_columns = columns;
            if self.view.is_some() {
                self.remount();
            }
        }
    }

    /// The fresh view starts at offset 0, so following resumes and the next
    /// layout pass carries it to the end.
    fn remount(&mut self) {
        tracing::debug!(columns = self.mounted_columns, "list view remounted");
        let was_following = self.controller.is_following();
        self.view = Some(ListView::new(self.config.axis()));
        self.item_extents.clear();
        self.controller.reset();
        self.clear_count_on_engage(was_following);
    }

    /// Nothing is unseen once the list follows its end again.
    fn clear_count_on_engage(&mut self, was_following: bool) {
        if !was_following && self.controller.is_following() {
            self.notifier.reset();
        }
    }

    // -----------------------------------------------------------------------
    // Host events
    // -----------------------------------------------------------------------

    /// Layout event: the viewport is now `viewport_extent` cells long.
    #[allow(clippy::cast_precision_loss)]
    pub fn handle_layout(&mut self, viewport_extent: usize) {
        if self.unmounted {
            return;
        }
        if let Some(view) = self.view.as_mut() {
            view.set_viewport_extent(viewport_extent);
        }
        let follow = self.controller.on_layout(viewport_extent as f32);
        if follow && self.view.is_some() {
            self.scroll_to_end(true);
        }
        self.publish(ListEvent::Layout {
            viewport_extent: viewport_extent as f32,
            auto_scrolling: self.is_auto_scrolling(),
        });
        self.clamp_view();
    }

    /// Content-size event: the scrollable content is now `content_extent` cells long.
    #[allow(clippy::cast_precision_loss)]
    pub fn handle_content_size_change(&mut self, content_extent: usize) {
        if self.unmounted {
            return;
        }
        if let Some(view) = self.view.as_mut() {
            view.set_content_extent(content_extent);
        }
        self.content_size_changed(content_extent);
    }

    /// Scroll event reported by the host at `position`.
    pub fn handle_scroll(&mut self, position: f32) {
        if self.unmounted {
            return;
        }
        let was_following = self.controller.is_following();
        let auto_scrolling = self.controller.on_scroll(position);
        self.clear_count_on_engage(was_following);
        self.publish(ListEvent::Scroll { position, auto_scrolling });
    }

    /// Observe the number of items that count toward "new" for this update.
    pub fn observe_data_len(&mut self, len: usize, now: Instant) {
        if self.unmounted {
            return;
        }
        self.frame_clock = Some(now);
        self.notifier.observe(len, self.controller.is_following(), now);
    }

    /// Layout pass from the widget: emits a layout event only when the viewport changed.
    pub(crate) fn sync_viewport(&mut self, viewport_extent: usize) {
        let changed = self.view.as_ref().is_some_and(|v| v.viewport_extent() != viewport_extent);
        if changed {
            self.handle_layout(viewport_extent);
        }
    }

    /// Item layout from the widget: emits a content-size event only when the total changed.
    pub(crate) fn apply_item_layout(&mut self, layout: ItemLayout) {
        if self.unmounted {
            return;
        }
        let content_extent = layout.content_extent;
        let changed = self.view.as_mut().is_some_and(|v| v.set_layout(layout));
        if changed {
            self.content_size_changed(content_extent);
        }
    }

    /// Frame tick: step any animated scroll and the banner animation.
    pub fn advance(&mut self, now: Instant) {
        if self.unmounted {
            return;
        }
        self.frame_clock = Some(now);
        if let Some(position) = self.view.as_mut().and_then(ListView::step) {
            self.handle_scroll(position);
        }
        self.notifier.tick(now);
    }

    #[allow(clippy::cast_precision_loss)]
    fn content_size_changed(&mut self, content_extent: usize) {
        if self.controller.on_content_size_change(content_extent as f32) {
            self.scroll_to_end(true);
        }
        self.publish(ListEvent::ContentSizeChange {
            content_extent: content_extent as f32,
            auto_scrolling: self.is_auto_scrolling(),
        });
        self.clamp_view();
    }

    fn clamp_view(&mut self) {
        if let Some(position) = self.view.as_mut().and_then(ListView::clamp_to_bounds) {
            self.handle_scroll(position);
        }
    }

    fn publish(&mut self, event: ListEvent) {
        let closed = self.events_tx.as_ref().is_some_and(|tx| tx.send(event).is_err());
        if closed {
            self.events_tx = None;
        }
    }

    // -----------------------------------------------------------------------
    // Scroll operations
    // -----------------------------------------------------------------------

    /// Scroll to `content - viewport`, clear the new-item count, and resume following.
    pub fn scroll_to_end(&mut self, animated: bool) {
        if self.unmounted {
            return;
        }
        self.notifier.reset();
        self.controller.engage();
        let end = self.controller.measurements().end_offset();
        self.scroll_to_offset(end, animated);
    }

    pub fn scroll_to_offset(&mut self, offset: f32, animated: bool) {
        let Some(view) = self.view.as_mut() else {
            tracing::debug!(offset, "scroll_to_offset ignored: list not mounted");
            return;
        };
        if let Some(position) = view.scroll_to_offset(offset, animated) {
            self.handle_scroll(position);
        }
    }

    pub fn scroll_to_index(&mut self, params: ScrollToIndex) {
        let Some(view) = self.view.as_ref() else {
            tracing::debug!(index = params.index, "scroll_to_index ignored: list not mounted");
            return;
        };
        let Some(offset) = view.offset_for_index(params) else {
            tracing::warn!(
                index = params.index,
                measured = view.layout().starts.len(),
                "scroll_to_index out of range"
            );
            return;
        };
        self.scroll_to_offset(offset, params.animated);
    }

    /// Scroll to the first element of `data` equal to `item`.
    pub fn scroll_to_item<T: PartialEq>(&mut self, data: &[T], item: &T, params: ScrollToItem) {
        let Some(index) = data.iter().position(|candidate| candidate == item) else {
            tracing::warn!("scroll_to_item: item not found in data");
            return;
        };
        self.scroll_to_index(ScrollToIndex {
            index,
            view_offset: 0.0,
            view_position: params.view_position,
            animated: params.animated,
        });
    }

    /// User-initiated scroll by `delta` cells, applied immediately.
    pub fn scroll_by(&mut self, delta: f32) {
        let Some(view) = self.view.as_mut() else {
            return;
        };
        if let Some(position) = view.scroll_by(delta) {
            self.handle_scroll(position);
        }
    }

    pub fn record_interaction(&mut self) {
        let now = self.clock();
        if let Some(view) = self.view.as_mut() {
            view.record_interaction(now);
        }
    }

    /// Show the scrollbar for [`SCROLLBAR_FLASH_DURATION`](crate::list::SCROLLBAR_FLASH_DURATION)
    /// from the latest frame.
    pub fn flash_scroll_indicators(&mut self) {
        let now = self.clock();
        if let Some(view) = self.view.as_mut() {
            view.flash_scroll_indicators(now);
        }
    }

    fn clock(&self) -> Instant {
        self.frame_clock.unwrap_or_else(Instant::now)
    }

    /// Forget measured item sizes. Call after editing items in place; appended
    /// items are measured on their own.
    pub fn invalidate_item_extents(&mut self) {
        self.item_extents.clear();
    }

    #[must_use]
    pub fn metrics(&self) -> Option<ListMetrics> {
        self.view.as_ref().map(ListView::metrics)
    }

    /// Scroll to the end if `position` hits the banner or the indicator.
    pub fn handle_click(&mut self, position: Position) -> bool {
        let hit = [self.rendered_alert_area, self.rendered_indicator_area]
            .into_iter()
            .flatten()
            .any(|area| area.contains(position));
        if hit {
            self.scroll_to_end(true);
        }
        hit
    }
}

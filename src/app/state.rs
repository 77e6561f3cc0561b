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

use crate::list::{AutoScrollConfig, AutoScrollState, ListEvent};
use crate::ui::theme;
use ratatui::style::Color;
use std::time::Duration;
use tokio::sync::mpsc;
use uuid::Uuid;

/// Characters of the UUID kept as message content.
const CONTENT_LEN: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: Uuid,
    pub content: String,
    pub color: Color,
    /// Typed by the user rather than arriving from the feed.
    pub own: bool,
}

impl Message {
    /// A feed message: the tail of a fresh UUID in a palette color.
    #[must_use]
    pub fn random() -> Self {
        let id = Uuid::new_v4();
        let simple = id.simple().to_string();
        let content = simple[simple.len() - CONTENT_LEN..].to_owned();
        let color = theme::message_color(usize::from(id.as_bytes()[0]));
        Self { id, content, color, own: false }
    }

    #[must_use]
    pub fn authored(content: impl Into<String>) -> Self {
        Self { id: Uuid::new_v4(), content: content.into(), color: Color::White, own: true }
    }
}

pub struct App {
    pub messages: Vec<Message>,
    pub list: AutoScrollState,
    pub list_events: mpsc::UnboundedReceiver<ListEvent>,
    /// Most recent event from the list, kept for diagnostics.
    pub last_list_event: Option<ListEvent>,
    pub feed_interval: Duration,
    pub feed_paused: bool,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(config: AutoScrollConfig, feed_interval: Duration) -> Self {
        let mut list = AutoScrollState::new(config);
        let list_events = list.subscribe();
        Self {
            messages: Vec::new(),
            list,
            list_events,
            last_list_event: None,
            feed_interval,
            feed_paused: false,
            should_quit: false,
        }
    }

    pub fn push_generated(&mut self) {
        self.messages.push(Message::random());
    }

    /// Append a message from the user and jump to it, like sending in a chat.
    pub fn push_authored(&mut self) {
        let content = format!("message #{}", self.messages.len() + 1);
        self.messages.push(Message::authored(content));
        self.list.scroll_to_end(true);
    }

    pub fn toggle_follow_override(&mut self) {
        let disabled = !self.list.config().auto_scroll_disabled;
        tracing::debug!(disabled, "auto-scroll override toggled");
        self.list.set_auto_scroll_disabled(disabled);
    }
}

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

use super::App;
use crate::list::{ListEvent, input};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_terminal_event(app: &mut App, event: &Event) {
    if let Event::Key(key) = event
        && key.kind == KeyEventKind::Press
        && handle_app_key(app, *key)
    {
        return;
    }
    // Everything else (scroll keys, wheel, clicks) belongs to the list.
    // Resize is handled automatically by ratatui.
    input::handle_terminal_event(&mut app.list, event);
}

/// Demo-level shortcuts. Returns whether the key was consumed.
fn handle_app_key(app: &mut App, key: KeyEvent) -> bool {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Char('q'), KeyModifiers::NONE) => {
            app.should_quit = true;
        }
        (KeyCode::Char('s'), KeyModifiers::NONE) => app.push_authored(),
        (KeyCode::Char('p'), KeyModifiers::NONE) => {
            app.feed_paused = !app.feed_paused;
            tracing::debug!(paused = app.feed_paused, "feed toggled");
        }
        (KeyCode::Char('d'), KeyModifiers::NONE) => app.toggle_follow_override(),
        (KeyCode::Char('f'), KeyModifiers::NONE) => app.list.flash_scroll_indicators(),
        _ => return false,
    }
    true
}

pub fn handle_list_event(app: &mut App, event: ListEvent) {
    tracing::trace!(?event, "list event");
    app.last_list_event = Some(event);
}

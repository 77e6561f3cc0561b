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

//! Terminal input → list operations.

use super::measure::Axis;
use super::state::AutoScrollState;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;

pub const MOUSE_SCROLL_CELLS: f32 = 3.0;

/// Apply a terminal event to the list. Returns whether the event was consumed.
pub fn handle_terminal_event(state: &mut AutoScrollState, event: &Event) -> bool {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(state, *key),
        Event::Mouse(mouse) => handle_mouse(state, *mouse),
        _ => false,
    }
}

/// `+1` when the visual "forward" key moves toward the end, `-1` when inverted.
fn visual_sign(state: &AutoScrollState) -> f32 {
    if state.config().inverted { -1.0 } else { 1.0 }
}

#[allow(clippy::cast_precision_loss)]
fn page(state: &AutoScrollState) -> f32 {
    state.view().map_or(1, |v| v.viewport_extent().max(1)) as f32
}

fn handle_key(state: &mut AutoScrollState, key: KeyEvent) -> bool {
    if key.modifiers.intersects(KeyModifiers::ALT) {
        return false;
    }
    let sign = visual_sign(state);
    let (back, forward) = match state.config().axis() {
        Axis::Vertical => (KeyCode::Up, KeyCode::Down),
        Axis::Horizontal => (KeyCode::Left, KeyCode::Right),
    };
    let delta = match key.code {
        code if code == back => -sign,
        code if code == forward => sign,
        KeyCode::PageUp => -sign * page(state),
        KeyCode::PageDown => sign * page(state),
        KeyCode::Home => {
            state.record_interaction();
            state.scroll_to_offset(0.0, false);
            return true;
        }
        KeyCode::End => {
            state.record_interaction();
            state.scroll_to_end(true);
            return true;
        }
        _ => return false,
    };
    state.record_interaction();
    state.scroll_by(delta);
    true
}

fn handle_mouse(state: &mut AutoScrollState, mouse: MouseEvent) -> bool {
    let position = Position::new(mouse.column, mouse.row);
    if !state.rendered_list_area.contains(position) {
        return false;
    }
    let sign = visual_sign(state);
    let horizontal = state.config().horizontal;
    let delta = match mouse.kind {
        MouseEventKind::ScrollUp if !horizontal => -sign * MOUSE_SCROLL_CELLS,
        MouseEventKind::ScrollDown if !horizontal => sign * MOUSE_SCROLL_CELLS,
        // Wheels without a horizontal axis still scroll horizontal lists.
        MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft if horizontal => {
            -sign * MOUSE_SCROLL_CELLS
        }
        MouseEventKind::ScrollDown | MouseEventKind::ScrollRight if horizontal => {
            sign * MOUSE_SCROLL_CELLS
        }
        MouseEventKind::Down(MouseButton::Left) => return state.handle_click(position),
        _ => return false,
    };
    state.record_interaction();
    state.scroll_by(delta);
    true
}

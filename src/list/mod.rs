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

pub mod animation;
mod config;
mod controller;
pub mod geometry;
pub mod input;
mod measure;
mod notifier;
mod state;
mod view;

// Re-export the public surface so `crate::list::AutoScrollState` etc. work.
pub use config::{AutoScrollConfig, DEFAULT_NUM_COLUMNS, DEFAULT_THRESHOLD};
pub use controller::AutoScrollController;
pub use geometry::{EndEdge, TriangleDirection};
pub use measure::{Axis, ItemExtents, Measurements};
pub use notifier::NewItemNotifier;
pub use state::{AutoScrollState, ListEvent, ScrollToItem};
pub use view::{ItemLayout, ListMetrics, ListView, SCROLLBAR_FLASH_DURATION, ScrollToIndex};

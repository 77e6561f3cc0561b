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

use super::geometry::{EndEdge, TriangleDirection};
use super::measure::Axis;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_THRESHOLD: f32 = 0.0;
pub const DEFAULT_NUM_COLUMNS: usize = 1;

/// Behavioral options of an auto-scrolling list.
///
/// Every field is optional in JSON; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoScrollConfig {
    /// Distance from the end (in cells) still treated as "at the end".
    pub threshold: f32,
    pub show_scroll_to_end_indicator: bool,
    pub show_new_item_alert: bool,
    /// Hard override: never follow the end while set.
    pub auto_scroll_disabled: bool,
    pub horizontal: bool,
    pub inverted: bool,
    /// Items per row for vertical lists. Ignored when horizontal.
    pub num_columns: usize,
    /// Overrides the glyph direction derived from `horizontal`/`inverted`.
    pub triangle_direction: Option<TriangleDirection>,
}

impl Default for AutoScrollConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            show_scroll_to_end_indicator: true,
            show_new_item_alert: true,
            auto_scroll_disabled: false,
            horizontal: false,
            inverted: false,
            num_columns: DEFAULT_NUM_COLUMNS,
            triangle_direction: None,
        }
    }
}

impl AutoScrollConfig {
    /// Read, parse, and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        let config: Self = serde_json::from_str(&raw)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;
        config.validate()?;
        tracing::debug!(path = %path.display(), ?config, "loaded list config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(ConfigError::InvalidThreshold(self.threshold));
        }
        if self.num_columns == 0 {
            return Err(ConfigError::ZeroColumns);
        }
        Ok(())
    }

    #[must_use]
    pub fn axis(&self) -> Axis {
        Axis::from_horizontal(self.horizontal)
    }

    #[must_use]
    pub fn end_edge(&self) -> EndEdge {
        EndEdge::resolve(self.horizontal, self.inverted)
    }

    #[must_use]
    pub fn triangle(&self) -> TriangleDirection {
        self.triangle_direction.unwrap_or_else(|| self.end_edge().triangle())
    }

    /// Columns actually laid out: horizontal lists are always a single run.
    #[must_use]
    pub fn effective_columns(&self) -> usize {
        if self.horizontal { 1 } else { self.num_columns.max(1) }
    }
}

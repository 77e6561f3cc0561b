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

use std::path::PathBuf;

/// Failures while loading or validating an [`AutoScrollConfig`](crate::list::AutoScrollConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("threshold must be a finite, non-negative number (got {0})")]
    InvalidThreshold(f32),
    #[error("column count must be at least 1")]
    ZeroColumns,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error("Invalid configuration")]
    InvalidConfig,
    #[error("Terminal unavailable")]
    TerminalUnavailable,
}

impl AppError {
    pub const INVALID_CONFIG_EXIT_CODE: i32 = 20;
    pub const TERMINAL_UNAVAILABLE_EXIT_CODE: i32 = 21;

    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidConfig => Self::INVALID_CONFIG_EXIT_CODE,
            Self::TerminalUnavailable => Self::TERMINAL_UNAVAILABLE_EXIT_CODE,
        }
    }

    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidConfig => {
                "The list configuration is invalid. Check --config and the command-line flags."
            }
            Self::TerminalUnavailable => {
                "Could not take over the terminal. Run the demo from an interactive terminal."
            }
        }
    }
}

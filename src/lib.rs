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

pub mod app;
pub mod error;
pub mod list;
pub mod ui;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "autoscroll-demo", about = "Live feed demo for the auto-scrolling list")]
pub struct Cli {
    /// JSON file with list settings; flags below override it
    #[arg(long)]
    pub config: Option<std::path::PathBuf>,

    /// Cells from the end that still count as "at the end"
    #[arg(long)]
    pub threshold: Option<f32>,

    /// Lay the list out left to right
    #[arg(long)]
    pub horizontal: bool,

    /// Newest items at the top (or left)
    #[arg(long)]
    pub inverted: bool,

    /// Items per row (vertical lists only)
    #[arg(long)]
    pub columns: Option<usize>,

    /// Hide the scroll-to-end button
    #[arg(long)]
    pub no_indicator: bool,

    /// Hide the new-items banner
    #[arg(long)]
    pub no_alert: bool,

    /// Milliseconds between generated messages
    #[arg(long, default_value_t = 500)]
    pub interval_ms: u64,

    /// Write tracing output to this file (tracing is off without it)
    #[arg(long)]
    pub log_file: Option<std::path::PathBuf>,

    /// Tracing filter directives, e.g. `autoscroll_list=debug` (defaults to RUST_LOG, then info)
    #[arg(long)]
    pub log_filter: Option<String>,

    /// Append to the log file instead of truncating it
    #[arg(long)]
    pub log_append: bool,
}

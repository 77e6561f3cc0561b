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

mod events;
mod state;

// Re-export all public types so `crate::app::App` etc. work.
pub use events::{handle_list_event, handle_terminal_event};
pub use state::{App, Message};

use crate::Cli;
use crate::error::AppError;
use crate::list::AutoScrollConfig;
use crossterm::event::EventStream;
use futures::{FutureExt as _, StreamExt};
use std::time::{Duration, Instant};
use tokio::time::MissedTickBehavior;

/// Shortest feed interval accepted from the command line.
const MIN_FEED_INTERVAL: Duration = Duration::from_millis(10);

/// Build the list configuration: the `--config` file (if any), then flags on top.
pub fn resolve_config(cli: &Cli) -> anyhow::Result<AutoScrollConfig> {
    let mut config = match cli.config.as_deref() {
        Some(path) => AutoScrollConfig::load(path).map_err(invalid_config)?,
        None => AutoScrollConfig::default(),
    };
    if let Some(threshold) = cli.threshold {
        config.threshold = threshold;
    }
    if let Some(columns) = cli.columns {
        config.num_columns = columns;
    }
    config.horizontal |= cli.horizontal;
    config.inverted |= cli.inverted;
    if cli.no_indicator {
        config.show_scroll_to_end_indicator = false;
    }
    if cli.no_alert {
        config.show_new_item_alert = false;
    }
    config.validate().map_err(invalid_config)?;
    Ok(config)
}

fn invalid_config(err: crate::error::ConfigError) -> anyhow::Error {
    tracing::error!(%err, "rejected list configuration");
    anyhow::Error::new(AppError::InvalidConfig).context(err.to_string())
}

pub fn create_app(cli: &Cli) -> anyhow::Result<App> {
    let config = resolve_config(cli)?;
    let interval = Duration::from_millis(cli.interval_ms).max(MIN_FEED_INTERVAL);
    tracing::info!(?config, ?interval, "starting demo");
    Ok(App::new(config, interval))
}

// ---------------------------------------------------------------------------
// TUI event loop
// ---------------------------------------------------------------------------

pub async fn run_tui(app: &mut App) -> anyhow::Result<()> {
    let mut terminal = ratatui::try_init().map_err(|e| {
        anyhow::Error::new(AppError::TerminalUnavailable).context(format!("terminal setup: {e}"))
    })?;

    // Mouse capture for wheel and clicks (ignore error on unsupported terminals)
    let _ = crossterm::execute!(std::io::stdout(), crossterm::event::EnableMouseCapture);

    let mut events = EventStream::new();
    let mut feed = tokio::time::interval(app.feed_interval);
    feed.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let tick_duration = Duration::from_millis(16);
    let mut last_render = Instant::now();

    let result = loop {
        // Phase 1: wait for at least one event, a feed tick, or the next frame tick
        let time_to_next = tick_duration.saturating_sub(last_render.elapsed());
        tokio::select! {
            Some(Ok(event)) = events.next() => {
                events::handle_terminal_event(app, &event);
            }
            _ = feed.tick() => {
                if !app.feed_paused {
                    app.push_generated();
                }
            }
            Some(event) = app.list_events.recv() => {
                events::handle_list_event(app, event);
            }
            () = tokio::time::sleep(time_to_next) => {}
        }

        // Phase 2: drain all remaining queued events (non-blocking)
        loop {
            // Terminal events first (keeps scrolling responsive)
            if let Some(Some(Ok(event))) = events.next().now_or_never() {
                events::handle_terminal_event(app, &event);
                continue;
            }
            match app.list_events.try_recv() {
                Ok(event) => events::handle_list_event(app, event),
                Err(_) => break,
            }
        }

        if app.should_quit {
            break Ok(());
        }

        // Phase 3: render once
        if let Err(e) = terminal.draw(|f| crate::ui::render(f, app)) {
            break Err(anyhow::Error::new(e));
        }
        last_render = Instant::now();
    };

    // --- Graceful shutdown ---
    app.list.unmount();

    // Restore terminal
    let _ = crossterm::execute!(std::io::stdout(), crossterm::event::DisableMouseCapture);
    ratatui::restore();

    result
}

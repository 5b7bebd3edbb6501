//! name-list - a terminal form for collecting names
//!
//! One screen: a text input, an add button and the list of names entered so
//! far. Names live in memory for the lifetime of the process.
//! It uses the Component Architecture pattern from ratatui.

mod action;
mod app;
mod component;
mod components;
mod config;
mod model;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::tui::Tui;
use anyhow::{Context, Result};
use crossterm::event::Event;
use std::fs::{self, File};
use std::sync::Mutex;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Log to a file; the terminal belongs to the UI.
///
/// `RUST_LOG` wins over the configured level. Without a writable log file the
/// app runs without a subscriber.
fn init_tracing(config: &Config) {
    let Some(path) = Config::log_path() else {
        return;
    };
    let file = path
        .parent()
        .map_or(Ok(()), fs::create_dir_all)
        .and_then(|_| File::options().create(true).append(true).open(&path))
        .with_context(|| format!("Failed to open log file {}", path.display()));
    let file = match file {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Logging disabled: {:#}", e);
            return;
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
}

fn main() -> Result<()> {
    let config = Config::load()?;
    init_tracing(&config);
    info!(submit_behavior = ?config.submit_behavior, "starting");

    let mut tui = Tui::new()?.with_tick_rate(Duration::from_millis(config.tick_rate_ms));
    tui.enter()?;

    let mut app = App::new(&config);
    app.init()?;

    let result = run_app(&mut tui, &mut app);
    let restored = tui.exit();

    if let Err(err) = finish(result, restored) {
        error!("fatal: {:#}", err);
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    info!("exited cleanly");
    Ok(())
}

/// Combine the loop result with the terminal restore result.
///
/// A loop error wins; a restore error alongside it is logged so it is not lost.
fn finish(result: Result<()>, restored: Result<()>) -> Result<()> {
    match (result, restored) {
        (Err(err), Err(restore_err)) => {
            error!("failed to restore terminal: {:#}", restore_err);
            Err(err)
        }
        (Err(err), Ok(())) => Err(err),
        (Ok(()), restored) => restored.context("Failed to restore terminal"),
    }
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        tui.draw(|frame| {
            if let Err(e) = app.draw(frame, frame.area()) {
                error!("draw error: {:#}", e);
            }
        })?;

        // The frame is on screen: run deferred work such as refocusing the input
        app.after_paint();

        if let Some(event) = tui.next_event()? {
            let action = match event {
                Event::Key(key) => app.handle_key_event(key)?,
                Event::Mouse(mouse) => app.handle_mouse_event(mouse)?,
                Event::Resize(w, h) => Some(Action::Resize(w, h)),
                _ => None,
            };

            if let Some(action) = action {
                app.dispatch(action)?;
            }
        } else {
            app.update(Action::Tick)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_finish_ok() {
        assert!(finish(Ok(()), Ok(())).is_ok());
    }

    #[test]
    fn test_loop_error_is_kept_when_restore_also_fails() {
        let err = finish(Err(anyhow!("event read failed")), Err(anyhow!("raw mode stuck")))
            .unwrap_err();
        assert_eq!(err.to_string(), "event read failed");
    }

    #[test]
    fn test_loop_error_is_reported() {
        let err = finish(Err(anyhow!("event read failed")), Ok(())).unwrap_err();
        assert_eq!(err.to_string(), "event read failed");
    }

    #[test]
    fn test_restore_error_is_reported_after_clean_loop() {
        let err = finish(Ok(()), Err(anyhow!("raw mode stuck"))).unwrap_err();
        assert_eq!(err.to_string(), "Failed to restore terminal");
        assert_eq!(err.root_cause().to_string(), "raw mode stuck");
    }
}

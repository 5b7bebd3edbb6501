//! Terminal User Interface management
//!
//! Handles terminal setup, teardown, and event polling.
//! Wraps ratatui's Terminal for a cleaner interface.

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io::{self, Stdout},
    time::Duration,
};
use tracing::debug;

/// Tracks whether raw mode is on and needs undoing.
///
/// Raw mode counts as active as soon as it is enabled, even if the rest of
/// the setup fails, so a failed `enter` is still restored.
#[derive(Debug, Default)]
struct RawModeGuard {
    active: bool,
}

impl RawModeGuard {
    fn enter(
        &mut self,
        enable: impl FnOnce() -> io::Result<()>,
        setup: impl FnOnce() -> Result<()>,
    ) -> Result<()> {
        enable()?;
        self.active = true;
        setup()
    }

    /// Run `restore` if raw mode is on. A failed restore stays active so a
    /// later call (e.g. from Drop) can retry.
    fn exit(&mut self, restore: impl FnOnce() -> Result<()>) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        restore()?;
        self.active = false;
        Ok(())
    }
}

/// Terminal wrapper for managing the TUI lifecycle
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Polling timeout for events
    pub tick_rate: Duration,
    raw_mode: RawModeGuard,
}

impl Tui {
    pub fn new() -> Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;
        Ok(Self {
            terminal,
            tick_rate: Duration::from_millis(100),
            raw_mode: RawModeGuard::default(),
        })
    }

    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    /// Enter the alternate screen with raw mode and mouse capture
    pub fn enter(&mut self) -> Result<()> {
        let screen = &mut self.terminal;
        self.raw_mode.enter(terminal::enable_raw_mode, || {
            crossterm::execute!(
                io::stdout(),
                EnterAlternateScreen,
                EnableMouseCapture,
                cursor::Hide
            )?;
            screen.clear()?;
            Ok(())
        })?;
        debug!("terminal entered");
        Ok(())
    }

    /// Restore the terminal. Also called on Drop.
    pub fn exit(&mut self) -> Result<()> {
        self.raw_mode.exit(|| {
            terminal::disable_raw_mode()?;
            crossterm::execute!(
                io::stdout(),
                LeaveAlternateScreen,
                DisableMouseCapture,
                cursor::Show
            )?;
            debug!("terminal restored");
            Ok(())
        })
    }

    /// Poll for the next event
    ///
    /// Returns `None` when the tick rate elapses without an event.
    pub fn next_event(&self) -> Result<Option<Event>> {
        if event::poll(self.tick_rate)? {
            let event = event::read()?;

            // Filter out key release events (Windows compatibility)
            if let Event::Key(key) = &event {
                if key.kind != KeyEventKind::Press {
                    return Ok(None);
                }
            }

            Ok(Some(event))
        } else {
            Ok(None)
        }
    }

    /// Draw a frame. The cursor is shown only if the closure places it.
    pub fn draw<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::cell::Cell;

    #[test]
    fn test_exit_before_enter_restores_nothing() {
        let mut guard = RawModeGuard::default();
        let restored = Cell::new(false);
        guard
            .exit(|| {
                restored.set(true);
                Ok(())
            })
            .unwrap();
        assert!(!restored.get());
    }

    #[test]
    fn test_enter_then_exit_restores_once() {
        let mut guard = RawModeGuard::default();
        guard.enter(|| Ok(()), || Ok(())).unwrap();
        assert!(guard.active);

        let restores = Cell::new(0);
        guard
            .exit(|| {
                restores.set(restores.get() + 1);
                Ok(())
            })
            .unwrap();
        guard
            .exit(|| {
                restores.set(restores.get() + 1);
                Ok(())
            })
            .unwrap();
        assert_eq!(restores.get(), 1);
        assert!(!guard.active);
    }

    #[test]
    fn test_failed_setup_still_restores_raw_mode() {
        let mut guard = RawModeGuard::default();
        let result = guard.enter(|| Ok(()), || Err(anyhow!("alternate screen unavailable")));
        assert!(result.is_err());
        assert!(guard.active);

        let restored = Cell::new(false);
        guard
            .exit(|| {
                restored.set(true);
                Ok(())
            })
            .unwrap();
        assert!(restored.get());
    }

    #[test]
    fn test_failed_enable_leaves_nothing_to_restore() {
        let mut guard = RawModeGuard::default();
        let setup_ran = Cell::new(false);
        let result = guard.enter(
            || Err(io::Error::new(io::ErrorKind::Other, "not a tty")),
            || {
                setup_ran.set(true);
                Ok(())
            },
        );
        assert!(result.is_err());
        assert!(!setup_ran.get());
        assert!(!guard.active);
    }

    #[test]
    fn test_failed_restore_can_be_retried() {
        let mut guard = RawModeGuard::default();
        guard.enter(|| Ok(()), || Ok(())).unwrap();

        assert!(guard.exit(|| Err(anyhow!("write failed"))).is_err());
        assert!(guard.active);

        guard.exit(|| Ok(())).unwrap();
        assert!(!guard.active);
    }
}

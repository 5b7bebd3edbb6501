//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that routes events to the name list screen or the top modal and draws
//! modals over the screen.

use crate::action::Action;
use crate::component::Component;
use crate::components::{HelpDialog, NameListScreen, QuitDialog};
use crate::config::Config;
use crate::model::{Modal, ModalStack};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{layout::Rect, Frame};
use tracing::{info, trace};

/// Main application state - coordinates between components
pub struct App {
    pub screen: NameListScreen,

    /// Modal overlay stack
    pub modals: ModalStack,

    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,

    /// Flag to indicate the app should quit
    pub should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl App {
    pub fn new(config: &Config) -> App {
        App {
            screen: NameListScreen::new(config),
            modals: ModalStack::new(),
            quit_dialog: QuitDialog::default(),
            help_dialog: HelpDialog::default(),
            should_quit: false,
        }
    }

    /// Apply an action and every follow-up action it produces
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        let mut current = Some(action);
        while let Some(a) = current {
            trace!(action = %a, "dispatch");
            current = self.update(a)?;
        }
        Ok(())
    }

    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::Help => self.help_dialog.handle_key_event(key),
        }
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal) -> Result<()> {
        match modal {
            Modal::QuitConfirm => {
                self.quit_dialog.set_entry_count(self.screen.names().len());
                self.quit_dialog.draw(frame, area)
            }
            Modal::Help => self.help_dialog.draw(frame, area),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn init(&mut self) -> Result<()> {
        self.screen.init()
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::ForceQuit));
        }

        if let Some(modal) = self.modals.top().cloned() {
            self.handle_modal_key_event(&modal, key)
        } else {
            self.screen.handle_key_event(key)
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        // Modals swallow the mouse
        if !self.modals.is_empty() {
            return Ok(None);
        }
        self.screen.handle_mouse_event(mouse)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::Tick | Action::Resize(_, _) => Ok(None),
            Action::ForceQuit => {
                info!(entries = self.screen.names().len(), "quit requested");
                self.should_quit = true;
                Ok(None)
            }
            Action::OpenQuitDialog => {
                self.modals.push(Modal::QuitConfirm);
                Ok(None)
            }
            Action::OpenHelp => {
                self.modals.push(Modal::Help);
                self.help_dialog.update(Action::OpenHelp)
            }
            Action::CloseModal => {
                self.modals.pop();
                Ok(None)
            }
            other => self.screen.update(other),
        }
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        self.screen.draw(frame, area)?;

        let modals: Vec<Modal> = self.modals.iter().cloned().collect();
        for modal in &modals {
            self.draw_modal(frame, area, modal)?;
        }
        Ok(())
    }

    fn after_paint(&mut self) {
        self.screen.after_paint();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SubmitBehavior;
    use crate::model::Focus;
    use crossterm::event::{KeyEventKind, KeyEventState, MouseButton, MouseEventKind};
    use ratatui::{backend::TestBackend, Terminal};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn press(app: &mut App, event: KeyEvent) {
        if let Some(action) = app.handle_key_event(event).unwrap() {
            app.dispatch(action).unwrap();
        }
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, key(KeyCode::Char(c)));
        }
    }

    /// One pass of the main loop's paint step
    fn paint(app: &mut App, terminal: &mut Terminal<TestBackend>) {
        terminal
            .draw(|frame| {
                app.draw(frame, frame.area()).unwrap();
            })
            .unwrap();
        app.after_paint();
    }

    fn values(app: &App) -> Vec<String> {
        app.screen
            .names()
            .entries()
            .iter()
            .map(|e| e.value.clone())
            .collect()
    }

    #[test]
    fn test_session_scenario() {
        let mut app = App::default();
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();

        type_text(&mut app, "Alice");
        press(&mut app, key(KeyCode::Enter));
        paint(&mut app, &mut terminal);
        assert_eq!(values(&app), vec!["Alice"]);

        press(&mut app, key(KeyCode::Enter));
        paint(&mut app, &mut terminal);
        assert_eq!(values(&app), vec!["Alice"]);

        type_text(&mut app, "  Bob ");
        press(&mut app, key(KeyCode::Enter));
        paint(&mut app, &mut terminal);
        assert_eq!(values(&app), vec!["Alice", "Bob"]);
        assert_eq!(app.screen.names().draft(), "");
    }

    #[test]
    fn test_refocus_happens_after_paint() {
        let config = Config {
            submit_behavior: SubmitBehavior::Blur,
            ..Config::default()
        };
        let mut app = App::new(&config);
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();

        type_text(&mut app, "Carol");
        press(&mut app, key(KeyCode::Enter));
        assert_eq!(app.screen.focus, Focus::None);

        paint(&mut app, &mut terminal);
        assert_eq!(app.screen.focus, Focus::Input);
    }

    #[test]
    fn test_quit_dialog_flow() {
        let mut app = App::default();
        press(&mut app, key(KeyCode::Esc));
        press(&mut app, key(KeyCode::Char('q')));
        assert_eq!(app.modals.top(), Some(&Modal::QuitConfirm));

        press(&mut app, key(KeyCode::Char('n')));
        assert!(app.modals.is_empty());
        assert!(!app.should_quit);

        press(&mut app, key(KeyCode::Char('q')));
        press(&mut app, key(KeyCode::Char('y')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_from_input() {
        let mut app = App::default();
        let event = KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        };
        press(&mut app, event);
        assert!(app.should_quit);
        assert_eq!(app.screen.names().draft(), "");
    }

    #[test]
    fn test_help_modal_takes_keys() {
        let mut app = App::default();
        press(&mut app, key(KeyCode::Tab));
        press(&mut app, key(KeyCode::Char('?')));
        assert_eq!(app.modals.top(), Some(&Modal::Help));

        // 'i' does not reach the screen while help is open
        press(&mut app, key(KeyCode::Char('i')));
        assert_eq!(app.screen.focus, Focus::AddButton);

        press(&mut app, key(KeyCode::Esc));
        assert!(app.modals.is_empty());
    }

    #[test]
    fn test_mouse_ignored_under_modal() {
        let mut app = App::default();
        app.modals.push(Modal::Help);
        let mouse = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 1,
            row: 4,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(app.handle_mouse_event(mouse).unwrap(), None);
    }

    #[test]
    fn test_draw_with_quit_dialog_shows_count() {
        let mut app = App::default();
        type_text(&mut app, "Ann");
        press(&mut app, key(KeyCode::Enter));
        app.dispatch(Action::OpenQuitDialog).unwrap();

        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        paint(&mut app, &mut terminal);

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content.iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("1 name will be discarded."));
    }
}

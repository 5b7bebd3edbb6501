//! Name list screen - the title, the text input with its add button, and the
//! list of entered names.
//!
//! Owns the `NameList` state, input focus, the input cursor and the list
//! selection. The selection is kept as an `EntryId` so it follows the same
//! entry from one frame to the next.

use crate::action::Action;
use crate::component::Component;
use crate::components::calculate_screen_layout;
use crate::components::layout::{hit, ScreenLayout};
use crate::config::{Config, SubmitBehavior};
use crate::model::{EntryId, Focus, FrameQueue, FrameTask, NameList, SubmitOutcome};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Margin, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, List, ListItem, ListState, Paragraph, Scrollbar, ScrollbarOrientation,
        ScrollbarState,
    },
    Frame,
};
use tracing::trace;
use unicode_width::UnicodeWidthStr;

const ACCENT: Color = Color::Rgb(202, 1, 1);

pub struct NameListScreen {
    names: NameList,
    pub focus: Focus,
    /// Cursor position in the draft, in chars
    cursor: usize,
    /// Selected entry in the list
    selected: Option<EntryId>,
    list_state: ListState,
    frame_queue: FrameQueue,
    /// Areas from the last draw, used for mouse hit testing
    layout: ScreenLayout,

    title: String,
    placeholder: String,
    submit_behavior: SubmitBehavior,
    show_timestamps: bool,
}

impl Default for NameListScreen {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl NameListScreen {
    pub fn new(config: &Config) -> Self {
        Self {
            names: NameList::new(),
            focus: Focus::Input,
            cursor: 0,
            selected: None,
            list_state: ListState::default(),
            frame_queue: FrameQueue::new(),
            layout: ScreenLayout::default(),
            title: config.title.clone(),
            placeholder: config.placeholder.clone(),
            submit_behavior: config.submit_behavior,
            show_timestamps: config.show_timestamps,
        }
    }

    pub fn names(&self) -> &NameList {
        &self.names
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected(&self) -> Option<EntryId> {
        self.selected
    }

    pub fn pending_tasks(&self) -> usize {
        self.frame_queue.len()
    }

    /// Run the tasks that were waiting for a frame to be painted
    pub fn after_paint(&mut self) {
        for task in self.frame_queue.drain() {
            match task {
                FrameTask::FocusInput => self.set_focus(Focus::Input),
            }
        }
    }

    fn set_focus(&mut self, focus: Focus) {
        if self.focus != focus {
            trace!(from = ?self.focus, to = ?focus, "focus changed");
            self.focus = focus;
        }
        if focus == Focus::List && self.selected.is_none() {
            self.selected = self.names.entries().first().map(|e| e.id);
        }
    }

    fn add(&mut self) {
        match self.names.submit() {
            SubmitOutcome::Added(_) => {
                self.cursor = 0;
                self.frame_queue.schedule(FrameTask::FocusInput);
            }
            SubmitOutcome::Rejected => {}
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Draft editing
    // ─────────────────────────────────────────────────────────────────────────

    fn byte_index(text: &str, char_index: usize) -> usize {
        text.char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(text.len())
    }

    fn insert_char(&mut self, c: char) -> Action {
        let mut text = self.names.draft().to_string();
        text.insert(Self::byte_index(&text, self.cursor), c);
        self.cursor += 1;
        Action::ChangeDraft(text)
    }

    fn delete_before_cursor(&mut self) -> Option<Action> {
        if self.cursor == 0 {
            return None;
        }
        let mut text = self.names.draft().to_string();
        text.remove(Self::byte_index(&text, self.cursor - 1));
        self.cursor -= 1;
        Some(Action::ChangeDraft(text))
    }

    fn delete_at_cursor(&mut self) -> Option<Action> {
        let mut text = self.names.draft().to_string();
        if self.cursor >= text.chars().count() {
            return None;
        }
        text.remove(Self::byte_index(&text, self.cursor));
        Some(Action::ChangeDraft(text))
    }

    fn delete_to_start(&mut self) -> Option<Action> {
        if self.cursor == 0 {
            return None;
        }
        let text = self.names.draft();
        let rest = text[Self::byte_index(text, self.cursor)..].to_string();
        self.cursor = 0;
        Some(Action::ChangeDraft(rest))
    }

    fn handle_input_key(&mut self, key: KeyEvent) -> Option<Action> {
        let draft_len = self.names.draft().chars().count();
        match key.code {
            KeyCode::Enter => Some(Action::SubmitDraft),
            KeyCode::Esc => Some(Action::BlurInput),
            KeyCode::Tab => Some(Action::FocusNext),
            KeyCode::BackTab => Some(Action::FocusPrev),
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.delete_to_start()
            }
            KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.cursor = 0;
                None
            }
            KeyCode::Char('e') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.cursor = draft_len;
                None
            }
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => None,
            KeyCode::Char(c) => Some(self.insert_char(c)),
            KeyCode::Backspace => self.delete_before_cursor(),
            KeyCode::Delete => self.delete_at_cursor(),
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(draft_len);
                None
            }
            KeyCode::Home => {
                self.cursor = 0;
                None
            }
            KeyCode::End => {
                self.cursor = draft_len;
                None
            }
            _ => None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // List selection
    // ─────────────────────────────────────────────────────────────────────────

    fn selected_index(&self) -> Option<usize> {
        self.selected.and_then(|id| self.names.position_of(id))
    }

    fn select_index(&mut self, index: usize) {
        if let Some(entry) = self.names.entries().get(index) {
            self.selected = Some(entry.id);
        }
    }

    fn select_next(&mut self) {
        let next = match self.selected_index() {
            Some(i) => (i + 1).min(self.names.len().saturating_sub(1)),
            None => 0,
        };
        self.select_index(next);
    }

    fn select_prev(&mut self) {
        let prev = self.selected_index().map(|i| i.saturating_sub(1)).unwrap_or(0);
        self.select_index(prev);
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for NameListScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.focus.is_input() {
            return Ok(self.handle_input_key(key));
        }

        let action = match key.code {
            KeyCode::Tab => Some(Action::FocusNext),
            KeyCode::BackTab => Some(Action::FocusPrev),
            KeyCode::Char('i') | KeyCode::Char('/') => Some(Action::FocusInput),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::OpenQuitDialog),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            _ => match self.focus {
                Focus::AddButton => match key.code {
                    KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PressAdd),
                    _ => None,
                },
                Focus::List => match key.code {
                    KeyCode::Char('j') | KeyCode::Down => Some(Action::NextItem),
                    KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevItem),
                    KeyCode::Char('g') | KeyCode::Home => Some(Action::FirstItem),
                    KeyCode::Char('G') | KeyCode::End => Some(Action::LastItem),
                    _ => None,
                },
                Focus::None => match key.code {
                    KeyCode::Enter => Some(Action::FocusInput),
                    _ => None,
                },
                Focus::Input => None,
            },
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let (column, row) = (mouse.column, mouse.row);
        let action = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if hit(self.layout.button, column, row) {
                    self.set_focus(Focus::AddButton);
                    Some(Action::PressAdd)
                } else if hit(self.layout.input, column, row) {
                    Some(Action::FocusInput)
                } else if hit(self.layout.list, column, row) {
                    self.set_focus(Focus::List);
                    // Border clicks only focus the list
                    let rows = self.layout.list.inner(Margin {
                        vertical: 1,
                        horizontal: 1,
                    });
                    if hit(rows, column, row) {
                        let offset = (row - rows.y) as usize;
                        self.select_index(self.list_state.offset() + offset);
                    }
                    None
                } else {
                    None
                }
            }
            MouseEventKind::ScrollDown if hit(self.layout.list, column, row) => {
                Some(Action::NextItem)
            }
            MouseEventKind::ScrollUp if hit(self.layout.list, column, row) => {
                Some(Action::PrevItem)
            }
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::ChangeDraft(text) => {
                self.names.change_text(text);
                self.cursor = self.cursor.min(self.names.draft().chars().count());
            }
            Action::SubmitDraft => {
                if self.submit_behavior == SubmitBehavior::Blur && self.focus.is_input() {
                    self.set_focus(Focus::None);
                }
                self.add();
            }
            Action::PressAdd => self.add(),
            Action::FocusInput => self.set_focus(Focus::Input),
            Action::BlurInput => {
                if self.focus.is_input() {
                    self.set_focus(Focus::None);
                }
            }
            Action::FocusNext => self.set_focus(self.focus.next()),
            Action::FocusPrev => self.set_focus(self.focus.prev()),
            Action::NextItem => self.select_next(),
            Action::PrevItem => self.select_prev(),
            Action::FirstItem => self.select_index(0),
            Action::LastItem => self.select_index(self.names.len().saturating_sub(1)),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        self.layout = calculate_screen_layout(area);
        let layout = self.layout;

        self.draw_title(frame, layout.title);
        self.draw_input(frame, layout.input);
        self.draw_button(frame, layout.button);
        self.draw_list(frame, layout.list);
        self.draw_help(frame, layout.help);
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering
// ═══════════════════════════════════════════════════════════════════════════════

impl NameListScreen {
    fn border_style(&self, focus: Focus) -> Style {
        if self.focus == focus {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }

    fn draw_title(&self, frame: &mut Frame, area: Rect) {
        let title = Paragraph::new(Line::from(Span::styled(
            self.title.as_str(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(title, area);
    }

    fn draw_input(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.border_style(Focus::Input));
        let inner = block.inner(area);

        let draft = self.names.draft();
        let before_cursor: String = draft.chars().take(self.cursor).collect();
        let cursor_width = before_cursor.width() as u16;
        // Scroll horizontally so the cursor stays visible
        let scroll = cursor_width.saturating_sub(inner.width.saturating_sub(1));

        let content = if draft.is_empty() {
            Line::from(Span::styled(
                self.placeholder.as_str(),
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            Line::from(Span::styled(draft, Style::default().fg(Color::White)))
        };

        frame.render_widget(Paragraph::new(content).block(block).scroll((0, scroll)), area);

        if self.focus.is_input() && inner.width > 0 {
            frame.set_cursor_position(Position::new(
                inner.x + cursor_width - scroll,
                inner.y,
            ));
        }
    }

    fn draw_button(&self, frame: &mut Frame, area: Rect) {
        let label_style = if self.focus == Focus::AddButton {
            Style::default()
                .fg(Color::White)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default()
                .fg(Color::White)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD)
        };

        let button = Paragraph::new(Line::from(Span::styled(" + ", label_style)))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.border_style(Focus::AddButton)),
            );
        frame.render_widget(button, area);
    }

    fn draw_list(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.border_style(Focus::List))
            .title(format!(" {} ({}) ", self.title, self.names.len()));

        if self.names.is_empty() {
            let hint = Paragraph::new(Line::from(Span::styled(
                "No names yet",
                Style::default().fg(Color::DarkGray),
            )))
            .alignment(Alignment::Center)
            .block(block);
            frame.render_widget(hint, area);
            return;
        }

        let items: Vec<ListItem> = self
            .names
            .entries()
            .iter()
            .map(|entry| {
                let mut spans = vec![
                    Span::styled("▌ ", Style::default().fg(ACCENT)),
                    Span::styled(entry.value.as_str(), Style::default().fg(Color::White)),
                ];
                if self.show_timestamps {
                    spans.push(Span::styled(
                        format!("  {}", entry.formatted_time()),
                        Style::default().fg(Color::DarkGray),
                    ));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let total = items.len();
        let highlight = if self.focus == Focus::List {
            self.selected_index()
        } else {
            None
        };
        self.list_state.select(highlight);

        let list = List::new(items)
            .block(block)
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_stateful_widget(list, area, &mut self.list_state);

        let visible = area.height.saturating_sub(2) as usize;
        if total > visible {
            let mut scrollbar_state = ScrollbarState::new(total.saturating_sub(visible))
                .position(self.list_state.offset());
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                area.inner(Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }
    }

    fn draw_help(&self, frame: &mut Frame, area: Rect) {
        let help_text = match self.focus {
            Focus::Input => " Enter  Add   Tab  Next   Esc  Leave input",
            Focus::AddButton => " Enter/Space  Add   Tab  Next   i  Input   ?  Help   q  Quit",
            Focus::List => " j/k  Move   g/G  First/Last   Tab  Next   i  Input   ?  Help   q  Quit",
            Focus::None => " Enter/i  Input   Tab  Next   ?  Help   q  Quit",
        };
        let help = Paragraph::new(Line::from(Span::styled(
            help_text,
            Style::default().fg(Color::DarkGray),
        )))
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, area);
    }
}

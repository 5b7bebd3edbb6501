//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

/// Width of the add button, borders included
const BUTTON_WIDTH: u16 = 7;

/// Areas of the name list screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenLayout {
    pub title: Rect,
    pub input: Rect,
    pub button: Rect,
    pub list: Rect,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Calculate the screen layout: title, input row, list, help bar
pub fn calculate_screen_layout(area: Rect) -> ScreenLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    // Input takes the row, button sits at its right edge
    let input_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(BUTTON_WIDTH)])
        .split(rows[1]);

    ScreenLayout {
        title: rows[0],
        input: input_row[0],
        button: input_row[1],
        list: rows[2],
        help: rows[3],
    }
}

/// Whether a terminal cell lies inside an area
pub fn hit(area: Rect, column: u16, row: u16) -> bool {
    area.contains(Position::new(column, row))
}

//! Layout calculations for the TUI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// The main screen areas
pub struct AppLayout {
    pub header_area: Rect,
    pub title_area: Rect,
    pub number_area: Rect,
    pub input_area: Rect,
    pub scoreboard_area: Rect,
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout based on terminal size
    pub fn calculate(area: Rect) -> Self {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header: "Again!" and range
                Constraint::Length(3), // Title
                Constraint::Length(3), // Number box
                Constraint::Length(1), // Spacer
                Constraint::Min(5),    // Body
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        // Body: guess input on the left, message and scores on the right
        let body_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(main_chunks[4]);

        Self {
            header_area: main_chunks[0],
            title_area: main_chunks[1],
            number_area: main_chunks[2],
            input_area: body_chunks[0],
            scoreboard_area: body_chunks[1],
            status_bar: main_chunks[5],
        }
    }
}

/// Calculate fixed-size centered area
pub fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

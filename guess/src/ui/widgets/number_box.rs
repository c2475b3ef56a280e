//! The box that hides the secret number

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Block, Paragraph, Widget},
};

use crate::ui::layout::centered_rect_fixed;
use crate::ui::theme::GameTheme;

/// Shows "?" until the secret is revealed, then the number itself.
pub struct NumberBoxWidget<'a> {
    secret: Option<u8>,
    won: bool,
    theme: &'a GameTheme,
}

impl<'a> NumberBoxWidget<'a> {
    pub fn new(theme: &'a GameTheme) -> Self {
        Self {
            secret: None,
            won: false,
            theme,
        }
    }

    pub fn secret(mut self, secret: Option<u8>) -> Self {
        self.secret = secret;
        self
    }

    pub fn won(mut self, won: bool) -> Self {
        self.won = won;
        self
    }
}

impl Widget for NumberBoxWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = self.theme.number_box_width(self.won);
        let box_area = centered_rect_fixed(width, area.height, area);

        let text = match self.secret {
            Some(n) => n.to_string(),
            None => "?".to_string(),
        };

        // Vertically center the single line inside the box
        let padding = box_area.height.saturating_sub(1) / 2;
        let mut lines = vec![Line::from(""); padding as usize];
        lines.push(Line::from(text));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().style(self.theme.number_style()))
            .render(box_area, buf);
    }
}

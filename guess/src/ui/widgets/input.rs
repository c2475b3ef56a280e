//! Guess input field widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::ui::theme::GameTheme;

/// Guess input field widget
pub struct InputWidget<'a> {
    content: &'a str,
    cursor_position: usize,
    theme: &'a GameTheme,
    placeholder: &'a str,
    is_active: bool,
}

impl<'a> InputWidget<'a> {
    pub fn new(content: &'a str, theme: &'a GameTheme) -> Self {
        Self {
            content,
            cursor_position: content.chars().count(),
            theme,
            placeholder: "Your guess...",
            is_active: true,
        }
    }

    pub fn cursor_position(mut self, pos: usize) -> Self {
        self.cursor_position = pos;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }
}

impl Widget for InputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Guess ")
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.is_active));

        let inner = block.inner(area);
        block.render(area, buf);

        let line = if self.content.is_empty() {
            Line::from(vec![
                Span::styled(" ", Style::default().add_modifier(Modifier::UNDERLINED)),
                Span::styled(self.placeholder, self.theme.hint_style()),
            ])
        } else {
            // Character-based slicing keeps the cursor right on multi-byte input
            let before_cursor: String = self.content.chars().take(self.cursor_position).collect();
            let at_cursor = self
                .content
                .chars()
                .nth(self.cursor_position)
                .map(|c| c.to_string())
                .unwrap_or_else(|| " ".to_string());
            let after_cursor: String = self.content.chars().skip(self.cursor_position + 1).collect();

            let cursor_style = if self.is_active {
                Style::default().add_modifier(Modifier::UNDERLINED | Modifier::BOLD)
            } else {
                Style::default()
            };

            Line::from(vec![
                Span::styled(before_cursor, self.theme.title_style()),
                Span::styled(at_cursor, self.theme.title_style().patch(cursor_style)),
                Span::styled(after_cursor, self.theme.title_style()),
            ])
        };

        Paragraph::new(line).render(inner, buf);
    }
}

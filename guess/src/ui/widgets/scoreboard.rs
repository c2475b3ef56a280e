//! Message, score and highscore panel

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::ui::theme::GameTheme;

/// The right-hand panel: current message and both scores.
pub struct ScoreboardWidget<'a> {
    message: &'a str,
    score: u8,
    highscore: u8,
    theme: &'a GameTheme,
}

impl<'a> ScoreboardWidget<'a> {
    pub fn new(message: &'a str, score: u8, highscore: u8, theme: &'a GameTheme) -> Self {
        Self {
            message,
            score,
            highscore,
            theme,
        }
    }
}

impl Widget for ScoreboardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(Span::styled(self.message, self.theme.message_style())),
            Line::from(""),
            Line::from(vec![
                Span::styled("💯 Score: ", self.theme.label_style()),
                Span::styled(self.score.to_string(), self.theme.title_style()),
            ]),
            Line::from(vec![
                Span::styled("🥇 Highscore: ", self.theme.label_style()),
                Span::styled(self.highscore.to_string(), self.theme.title_style()),
            ]),
        ];

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

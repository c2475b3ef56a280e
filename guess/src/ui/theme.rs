//! Color theme and styling for the TUI

use ratatui::style::{Color, Modifier, Style};

/// Width of the number box while the secret is hidden.
pub const NUMBER_BOX_WIDTH: u16 = 15;

/// Width of the number box after a win.
pub const NUMBER_BOX_WIDTH_WON: u16 = 30;

/// Game UI color theme
#[derive(Debug, Clone)]
pub struct GameTheme {
    // Backgrounds
    pub neutral_background: Color,
    pub win_background: Color,

    // Text
    pub foreground: Color,
    pub dim_text: Color,

    // Number box
    pub number_foreground: Color,
    pub number_background: Color,

    // Borders
    pub border: Color,
    pub border_focused: Color,

    pub error_text: Color,
}

impl Default for GameTheme {
    fn default() -> Self {
        Self {
            neutral_background: Color::Rgb(0x22, 0x22, 0x22),
            win_background: Color::Rgb(0x60, 0xb3, 0x47),

            foreground: Color::Rgb(0xee, 0xee, 0xee),
            dim_text: Color::Gray,

            number_foreground: Color::Rgb(0x33, 0x33, 0x33),
            number_background: Color::Rgb(0xee, 0xee, 0xee),

            border: Color::Gray,
            border_focused: Color::White,

            error_text: Color::LightRed,
        }
    }
}

impl GameTheme {
    /// Background for the whole screen
    pub fn background(&self, won: bool) -> Color {
        if won {
            self.win_background
        } else {
            self.neutral_background
        }
    }

    /// Base style painted under everything
    pub fn base_style(&self, won: bool) -> Style {
        Style::default()
            .fg(self.foreground)
            .bg(self.background(won))
    }

    /// Number box width for the current styling
    pub fn number_box_width(&self, won: bool) -> u16 {
        if won {
            NUMBER_BOX_WIDTH_WON
        } else {
            NUMBER_BOX_WIDTH
        }
    }

    pub fn number_style(&self) -> Style {
        Style::default()
            .fg(self.number_foreground)
            .bg(self.number_background)
            .add_modifier(Modifier::BOLD)
    }

    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.foreground)
            .add_modifier(Modifier::BOLD)
    }

    pub fn message_style(&self) -> Style {
        Style::default().fg(self.foreground)
    }

    pub fn label_style(&self) -> Style {
        Style::default().fg(self.foreground)
    }

    pub fn hint_style(&self) -> Style {
        Style::default()
            .fg(self.dim_text)
            .add_modifier(Modifier::DIM)
    }

    pub fn error_style(&self) -> Style {
        Style::default()
            .fg(self.error_text)
            .add_modifier(Modifier::BOLD)
    }

    /// Get border style
    pub fn border_style(&self, focused: bool) -> Style {
        Style::default().fg(if focused {
            self.border_focused
        } else {
            self.border
        })
    }
}

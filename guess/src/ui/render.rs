//! Render orchestration for the TUI

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use guess_core::{Phase, MAX_SECRET, MIN_SECRET};

use crate::app::App;
use crate::ui::layout::{centered_rect_fixed, AppLayout};
use crate::ui::widgets::{InputWidget, NumberBoxWidget, ScoreboardWidget};

/// Overlay types
#[derive(Debug, Clone)]
pub enum Overlay {
    Help,
}

/// Main render function
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let screen = &app.screen;
    let theme = &app.theme;

    // Paint the background first; win styling turns the whole screen green
    frame.render_widget(Block::default().style(theme.base_style(screen.won)), area);

    let layout = AppLayout::calculate(area);

    render_header(frame, app, layout.header_area);
    render_title(frame, app, layout.title_area);

    let number_widget = NumberBoxWidget::new(theme)
        .secret(screen.secret)
        .won(screen.won);
    frame.render_widget(number_widget, layout.number_area);

    render_input(frame, app, layout.input_area);

    let scoreboard = ScoreboardWidget::new(&screen.message, screen.score, screen.highscore, theme);
    frame.render_widget(scoreboard, padded(layout.scoreboard_area));

    render_status_bar(frame, app, layout.status_bar);

    if let Some(overlay) = app.overlay() {
        render_overlay(frame, app, overlay, area);
    }
}

/// Leave a column of air on the left of a panel
fn padded(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(2),
        width: area.width.saturating_sub(2),
        ..area
    }
}

/// Render the header: "Again!" on the left, the range on the right
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let left = Line::from(Span::styled(" Again! [Ctrl+R]", theme.title_style()));
    let right = Line::from(Span::styled(
        format!("(Between {MIN_SECRET} and {MAX_SECRET}) "),
        theme.label_style(),
    ));

    frame.render_widget(Paragraph::new(left), area);
    frame.render_widget(Paragraph::new(right).alignment(Alignment::Right), area);
}

/// Render the title
fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Guess My Number!",
            app.theme.title_style().add_modifier(Modifier::UNDERLINED),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Render the guess field and its "Check!" hint
fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1), Constraint::Min(0)])
        .split(padded(area));

    let field_area = Rect {
        width: chunks[0].width.min(24),
        ..chunks[0]
    };

    let input = &app.screen.input;
    let input_widget = InputWidget::new(input.text(), &app.theme)
        .cursor_position(input.cursor_position())
        .active(!app.has_overlay());
    frame.render_widget(input_widget, field_area);

    let hint = Line::from(Span::styled(" Check! [Enter]", app.theme.title_style()));
    frame.render_widget(Paragraph::new(hint), chunks[1]);
}

/// Render the status bar
fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let round_over = app.game().state().phase() == Phase::RoundOver;
    let line = match app.status_message() {
        Some(message) => Line::from(Span::styled(format!(" {message}"), app.theme.error_style())),
        None if round_over => Line::from(Span::styled(
            " Round over! Ctrl+R/F5: again  ?: help  Esc: quit",
            app.theme.title_style(),
        )),
        None => Line::from(Span::styled(
            " Enter: check  Ctrl+R/F5: again  ↑/↓: step  ?: help  Esc: quit",
            app.theme.hint_style(),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// Render overlay
fn render_overlay(frame: &mut Frame, app: &App, overlay: &Overlay, area: Rect) {
    match overlay {
        Overlay::Help => render_help_overlay(frame, app, area),
    }
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let popup_area = centered_rect_fixed(48, 16, area);

    // Clear the background
    frame.render_widget(Clear, popup_area);

    let heading = app.theme.title_style().add_modifier(Modifier::UNDERLINED);
    let help_text = vec![
        Line::from(Span::styled(
            format!("Guess the secret between {MIN_SECRET} and {MAX_SECRET}."),
            app.theme.title_style(),
        )),
        Line::from("Every wrong guess costs a point."),
        Line::from(""),
        Line::from(Span::styled("Keys:", heading)),
        Line::from("  0-9 - . e    Type a guess"),
        Line::from("  ↑/↓          Step the guess by one"),
        Line::from("  Enter        Check!"),
        Line::from("  Ctrl+R, F5   Again! (new secret)"),
        Line::from("  ?, F1        Toggle this help"),
        Line::from("  Esc, Ctrl+C  Quit"),
        Line::from(""),
        Line::from(Span::styled("Press Esc or ? to close", app.theme.hint_style())),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(app.theme.border_style(true))
        .style(app.theme.base_style(false));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use guess_core::{FixedSecret, GameConfig, GameController};
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &App) -> (String, ratatui::buffer::Buffer) {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let text = buffer.content().iter().map(|c| c.symbol()).collect();
        (text, buffer)
    }

    fn app(secret: u8) -> App {
        App::with_controller(GameController::with_source(
            FixedSecret::new(secret),
            &GameConfig::default(),
        ))
    }

    #[test]
    fn test_initial_screen() {
        let app = app(12);
        let (text, buffer) = draw(&app);

        assert!(text.contains("Guess My Number!"));
        assert!(text.contains("Between 1 and 20"));
        assert!(text.contains("Start guessing..."));
        assert!(text.contains("?"));
        assert!(!text.contains("12"));
        assert_eq!(buffer[(0, 0)].bg, app.theme.neutral_background);
    }

    #[test]
    fn test_win_screen_reveals_secret() {
        let mut app = app(12);
        app.screen.input.set("12");
        app.check();

        let (text, buffer) = draw(&app);

        assert!(text.contains("12"));
        assert!(text.contains("Correct Number!"));
        assert!(text.contains("Round over!"));
        assert_eq!(buffer[(0, 0)].bg, app.theme.win_background);
    }

    #[test]
    fn test_help_overlay_drawn() {
        let mut app = app(3);
        app.toggle_help();
        let (text, _) = draw(&app);
        assert!(text.contains("Toggle this help"));
    }
}

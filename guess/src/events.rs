//! Event handling for the TUI

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::App;

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Continue,
    Quit,
    NeedsRedraw,
}

/// Handle a terminal event
pub fn handle_event(app: &mut App, event: Event) -> EventResult {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key_event(app, key),
        Event::Resize(_, _) => EventResult::NeedsRedraw,
        _ => EventResult::Continue,
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> EventResult {
    // Global shortcuts (always work)
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => return EventResult::Quit,
            KeyCode::Char('r') => {
                app.close_overlay();
                app.again();
                return EventResult::NeedsRedraw;
            }
            _ => return EventResult::Continue,
        }
    }

    if app.has_overlay() {
        return handle_overlay_key(app, key);
    }

    match key.code {
        // "Check!"
        KeyCode::Enter => {
            app.check();
            EventResult::NeedsRedraw
        }
        // "Again!"
        KeyCode::F(5) => {
            app.again();
            EventResult::NeedsRedraw
        }

        KeyCode::Char('?') | KeyCode::F(1) => {
            app.toggle_help();
            EventResult::NeedsRedraw
        }
        KeyCode::Esc | KeyCode::Char('q') => EventResult::Quit,

        // Input editing
        KeyCode::Left => {
            app.screen.input.cursor_left();
            EventResult::NeedsRedraw
        }
        KeyCode::Right => {
            app.screen.input.cursor_right();
            EventResult::NeedsRedraw
        }
        KeyCode::Home => {
            app.screen.input.cursor_home();
            EventResult::NeedsRedraw
        }
        KeyCode::End => {
            app.screen.input.cursor_end();
            EventResult::NeedsRedraw
        }
        KeyCode::Backspace => {
            app.screen.input.backspace();
            EventResult::NeedsRedraw
        }
        KeyCode::Delete => {
            app.screen.input.delete();
            EventResult::NeedsRedraw
        }
        KeyCode::Up => {
            app.screen.input.step(1);
            EventResult::NeedsRedraw
        }
        KeyCode::Down => {
            app.screen.input.step(-1);
            EventResult::NeedsRedraw
        }

        KeyCode::Char(c) => {
            if app.screen.input.type_char(c) {
                EventResult::NeedsRedraw
            } else {
                EventResult::Continue
            }
        }

        _ => EventResult::Continue,
    }
}

/// Handle keys while the help overlay is open
fn handle_overlay_key(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::F(1) => {
            app.close_overlay();
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use guess_core::{FixedSecret, GameConfig, GameController};

    fn app(secret: u8) -> App {
        App::with_controller(GameController::with_source(
            FixedSecret::new(secret),
            &GameConfig::default(),
        ))
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            handle_event(app, key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_enter_checks_guess() {
        let mut app = app(7);
        type_str(&mut app, "10");
        assert_eq!(handle_event(&mut app, key(KeyCode::Enter)), EventResult::NeedsRedraw);
        assert_eq!(app.screen.score, 19);
    }

    #[test]
    fn test_ctrl_r_and_f5_start_again() {
        let mut app = app(7);
        type_str(&mut app, "7");
        handle_event(&mut app, key(KeyCode::Enter));
        assert!(app.screen.won);

        handle_event(&mut app, ctrl('r'));
        assert!(!app.screen.won);
        assert_eq!(app.screen.input.text(), "");

        type_str(&mut app, "7");
        handle_event(&mut app, key(KeyCode::Enter));
        handle_event(&mut app, key(KeyCode::F(5)));
        assert!(!app.screen.won);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app(7);
        assert_eq!(handle_event(&mut app, ctrl('c')), EventResult::Quit);
        assert_eq!(handle_event(&mut app, key(KeyCode::Esc)), EventResult::Quit);
        assert_eq!(handle_event(&mut app, key(KeyCode::Char('q'))), EventResult::Quit);
    }

    #[test]
    fn test_help_overlay_swallows_keys() {
        let mut app = app(7);
        handle_event(&mut app, key(KeyCode::Char('?')));
        assert!(app.has_overlay());

        handle_event(&mut app, key(KeyCode::Char('5')));
        assert_eq!(app.screen.input.text(), "");

        assert_eq!(handle_event(&mut app, key(KeyCode::Esc)), EventResult::NeedsRedraw);
        assert!(!app.has_overlay());
    }

    #[test]
    fn test_arrows_step_value() {
        let mut app = app(7);
        handle_event(&mut app, key(KeyCode::Up));
        handle_event(&mut app, key(KeyCode::Up));
        handle_event(&mut app, key(KeyCode::Down));
        assert_eq!(app.screen.input.text(), "1");
    }

    #[test]
    fn test_release_events_ignored() {
        let mut app = app(7);
        let mut release = KeyEvent::new(KeyCode::Char('4'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(handle_event(&mut app, Event::Key(release)), EventResult::Continue);
        assert_eq!(app.screen.input.text(), "");
    }
}

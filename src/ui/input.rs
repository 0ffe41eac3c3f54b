use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::quiz::QuizPhase;
use crate::ui::app::{App, Screen};
use crate::ui::welcome::{GridMove, WelcomeIntent};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match app.screen() {
        Screen::Splash => {
            if key.code == KeyCode::Esc {
                app.request_quit();
            }
        }
        Screen::Welcome => handle_welcome_key(app, key),
        Screen::Quiz => handle_quiz_key(app, key),
        Screen::Score => match key.code {
            KeyCode::Esc => app.request_quit(),
            KeyCode::Char('r') | KeyCode::Enter => app.restart(),
            _ => {}
        },
    }
}

fn handle_welcome_key(app: &mut App, key: KeyEvent) {
    if app.welcome().alert_visible {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.dispatch_welcome(WelcomeIntent::DismissAlert);
        }
        return;
    }

    match key.code {
        KeyCode::Esc => app.request_quit(),
        KeyCode::Enter => app.press_play(),
        KeyCode::Tab => app.dispatch_welcome(WelcomeIntent::ToggleAvatar),
        KeyCode::Left => app.dispatch_welcome(WelcomeIntent::MoveHighlight(GridMove::Left)),
        KeyCode::Right => app.dispatch_welcome(WelcomeIntent::MoveHighlight(GridMove::Right)),
        KeyCode::Up => app.dispatch_welcome(WelcomeIntent::MoveHighlight(GridMove::Up)),
        KeyCode::Down => app.dispatch_welcome(WelcomeIntent::MoveHighlight(GridMove::Down)),
        KeyCode::Backspace => app.dispatch_welcome(WelcomeIntent::Backspace),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch_welcome(WelcomeIntent::TypeChar(c));
        }
        _ => {}
    }
}

fn handle_quiz_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.request_quit(),
        KeyCode::Char('r') if matches!(app.quiz_phase(), QuizPhase::Errored { .. }) => {
            app.retry_fetch();
        }
        KeyCode::Char(c) => {
            if let Some(digit) = c.to_digit(10) {
                if digit >= 1 {
                    app.select_option(digit as usize - 1);
                }
            }
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(c)
}

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::avatar::{AVATAR_COUNT, GRID_COLUMNS};
use crate::quiz::QuizPhase;
use crate::ui::app::{App, Screen};
use crate::ui::layout::centered_rect;
use crate::ui::theme::{BEIGE, BLUE, DARK_GREY, GREEN, ORANGE, RED, TEAL};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    match app.screen() {
        Screen::Splash => draw_splash(frame, area),
        Screen::Welcome => draw_welcome(frame, app, area),
        Screen::Quiz => draw_quiz(frame, app, area),
        Screen::Score => draw_score(frame, app, area),
    }
}

fn draw_splash(frame: &mut Frame<'_>, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Pro-Trivia",
            Style::default().fg(BLUE).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Pro-Solutions Technology, Co.",
            Style::default().fg(DARK_GREY),
        )),
    ];
    let panel = centered_rect(60, 40, area);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(BLUE))),
        panel,
    );
}

fn draw_welcome(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let welcome = app.welcome();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(2 + (AVATAR_COUNT / GRID_COLUMNS) as u16),
            Constraint::Min(1),
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Welcome to Pro-Trivia",
            Style::default().fg(ORANGE).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM).border_style(Style::default().fg(DARK_GREY))),
        rows[0],
    );

    let chosen = match welcome.selected_avatar {
        Some(slot) => Line::from(Span::styled(
            format!("Avatar: prosol{slot}"),
            Style::default().fg(TEAL),
        )),
        None => Line::from(Span::styled("PICK YOUR AVATAR", Style::default().fg(RED))),
    };
    frame.render_widget(Paragraph::new(chosen).alignment(Alignment::Center), rows[1]);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(welcome.nickname.clone(), Style::default().fg(BEIGE)),
            Span::styled("_", Style::default().fg(DARK_GREY)),
        ]))
        .block(Block::default().borders(Borders::ALL).title("Nickname")),
        rows[2],
    );

    frame.render_widget(
        avatar_grid(welcome.highlighted, welcome.selected_avatar),
        rows[3],
    );

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Enter play · Tab pick avatar · arrows move · Esc quit",
            Style::default().fg(DARK_GREY),
        )))
        .alignment(Alignment::Center),
        rows[4],
    );

    if welcome.alert_visible {
        draw_alert(frame, area);
    }
}

fn avatar_grid(highlighted: usize, selected: Option<usize>) -> Paragraph<'static> {
    let mut lines = Vec::with_capacity(AVATAR_COUNT / GRID_COLUMNS);
    for row in 0..AVATAR_COUNT / GRID_COLUMNS {
        let mut spans = Vec::with_capacity(GRID_COLUMNS);
        for col in 0..GRID_COLUMNS {
            let slot = row * GRID_COLUMNS + col;
            let style = if selected == Some(slot) {
                Style::default().fg(TEAL).add_modifier(Modifier::BOLD)
            } else if slot == highlighted {
                Style::default().fg(BEIGE).add_modifier(Modifier::REVERSED)
            } else {
                Style::default().fg(DARK_GREY)
            };
            spans.push(Span::styled(format!("  ◉ {slot:>2}  "), style));
        }
        lines.push(Line::from(spans));
    }
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Avatars"))
}

fn draw_alert(frame: &mut Frame<'_>, area: Rect) {
    let popup = centered_rect(44, 28, area);
    frame.render_widget(Clear, popup);
    let lines = vec![
        Line::from(Span::styled(
            "Oops!",
            Style::default().fg(RED).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Pick your avatar and nickname.",
            Style::default().fg(BEIGE),
        )),
        Line::from(""),
        Line::from(Span::styled("[ OK ]", Style::default().fg(BLUE))),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(RED))),
        popup,
    );
}

fn draw_quiz(frame: &mut Frame<'_>, app: &App, area: Rect) {
    match app.quiz_phase() {
        QuizPhase::Loading => {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    "Loading questions...",
                    Style::default().fg(BLUE),
                )))
                .alignment(Alignment::Center),
                centered_rect(50, 20, area),
            );
        }
        QuizPhase::Errored { message } => {
            let lines = vec![
                Line::from(Span::styled(
                    "Something went wrong",
                    Style::default().fg(RED).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(message.clone(), Style::default().fg(BEIGE))),
                Line::from(""),
                Line::from(Span::styled(
                    "Press r to retry · Esc to quit",
                    Style::default().fg(DARK_GREY),
                )),
            ];
            frame.render_widget(
                Paragraph::new(lines)
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true }),
                centered_rect(60, 40, area),
            );
        }
        QuizPhase::Presenting {
            options,
            remaining,
            selected,
        } => draw_question(frame, app, area, options, *remaining, *selected),
        // The app flips to the score screen on the same pass.
        QuizPhase::Finished => {}
    }
}

fn draw_question(
    frame: &mut Frame<'_>,
    app: &App,
    area: Rect,
    options: &[String],
    remaining: u32,
    selected: Option<usize>,
) {
    let state = app.store().state();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Min(options.len() as u16),
        ])
        .split(area);

    let header = Line::from(vec![
        Span::styled(
            format!(" {} ", state.nickname),
            Style::default().fg(TEAL).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "· Question {}/{} ",
                state.current_question + 1,
                state.questions.len()
            ),
            Style::default().fg(DARK_GREY),
        ),
    ]);
    frame.render_widget(Paragraph::new(header), rows[0]);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("{remaining:>3}"),
            Style::default()
                .fg(timer_color(remaining, app.config().game.countdown_seconds))
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Right),
        rows[1],
    );

    let question_text = state
        .current()
        .map(|q| q.question.text.clone())
        .unwrap_or_default();
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            question_text,
            Style::default().fg(BLUE),
        )))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true }),
        rows[2],
    );

    let mut option_lines = Vec::with_capacity(options.len());
    for (index, option) in options.iter().enumerate() {
        let style = match selected {
            Some(chosen) if chosen == index => {
                let color = if app.option_is_correct(index) { GREEN } else { RED };
                Style::default().fg(color).add_modifier(Modifier::BOLD)
            }
            _ => Style::default().fg(BEIGE),
        };
        option_lines.push(Line::from(Span::styled(
            format!("{}. {}", index + 1, option),
            style,
        )));
    }
    frame.render_widget(
        Paragraph::new(option_lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        rows[3],
    );
}

fn timer_color(remaining: u32, total: u32) -> ratatui::style::Color {
    if remaining <= total / 4 {
        RED
    } else if remaining <= total / 2 {
        ORANGE
    } else {
        BLUE
    }
}

fn draw_score(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let state = app.store().state();
    let lines = vec![
        Line::from(Span::styled(
            format!("◉ {}", state.avatar_url),
            Style::default().fg(DARK_GREY),
        )),
        Line::from(Span::styled(
            state.nickname.clone(),
            Style::default().fg(TEAL).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "You scored {} out of {}!",
                state.score,
                app.config().game.questions_per_game
            ),
            Style::default().fg(BEIGE),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "r restart · Esc quit",
            Style::default().fg(DARK_GREY),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(BLUE))),
        centered_rect(60, 50, area),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_color_shifts_as_time_runs_out() {
        assert_eq!(timer_color(30, 30), BLUE);
        assert_eq!(timer_color(16, 30), BLUE);
        assert_eq!(timer_color(15, 30), ORANGE);
        assert_eq!(timer_color(8, 30), ORANGE);
        assert_eq!(timer_color(7, 30), RED);
        assert_eq!(timer_color(1, 30), RED);
    }
}

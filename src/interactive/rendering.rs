//! TUI rendering with ratatui
//!
//! Gallows, masked word and guess history for the hangman interface.

use super::app::{App, MessageStyle, Screen};
use crate::game::GameSession;
use crate::output::formatters::{attempts_label, format_history};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(18),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    match (app.screen, app.session.as_ref()) {
        (Screen::Playing, Some(session)) => render_round(f, app, session, chunks[1]),
        _ => render_banner_screen(f, app, chunks[1]),
    }

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("HANGMAN")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_banner_screen(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = app
        .banner
        .iter()
        .map(|line| Line::styled(line.clone(), Style::default().fg(Color::Red)))
        .collect();

    if let Some(session) = app.session.as_ref() {
        let (text, color) = match app.screen {
            Screen::Won => (
                format!("Congratulations! You guessed the word: {}", session.word()),
                Color::Yellow,
            ),
            _ => (format!("The word was: {}", session.word()), Color::Red),
        };
        lines.push(Line::from(""));
        lines.push(Line::styled(
            text,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_round(f: &mut Frame, app: &App, session: &GameSession, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40), // Gallows
            Constraint::Percentage(60), // Word and history
        ])
        .split(area);

    render_gallows(f, app, session, columns[0]);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Word
            Constraint::Length(3), // Attempts gauge
            Constraint::Length(4), // Guessed letters
            Constraint::Min(4),    // Messages
        ])
        .split(columns[1]);

    render_word(f, session, rows[0]);
    render_attempts(f, app, session, rows[1]);
    render_letters(f, session, rows[2]);
    render_messages(f, app, rows[3]);
}

fn render_gallows(f: &mut Frame, app: &App, session: &GameSession, area: Rect) {
    let lines: Vec<Line> = app
        .gallows
        .as_ref()
        .map(|sheet| sheet.frame(session.wrong_count() as usize))
        .unwrap_or_default()
        .iter()
        .map(|line| Line::styled(line.clone(), Style::default().fg(Color::Blue)))
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Gallows ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_word(f: &mut Frame, session: &GameSession, area: Rect) {
    let spaced: String = session
        .mask()
        .to_string()
        .chars()
        .map(|c| format!("{c} "))
        .collect();

    let paragraph = Paragraph::new(spaced.trim_end().to_string())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().title(" Word ").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_attempts(f: &mut Frame, app: &App, session: &GameSession, area: Rect) {
    let total = app.config.attempts.max(1);
    let left = session.attempts_left().min(total);
    let percent = u16::try_from(left * 100 / total).unwrap_or(100);
    let color = if left * 3 <= total {
        Color::Red
    } else {
        Color::Green
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(attempts_label(left));
    f.render_widget(gauge, area);
}

fn render_letters(f: &mut Frame, session: &GameSession, area: Rect) {
    let content = vec![
        Line::from(vec![
            Span::raw("Right: "),
            Span::styled(
                format_history(session.correct_guesses()),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(vec![
            Span::raw("Wrong: "),
            Span::styled(
                format_history(session.incorrect_guesses()),
                Style::default().fg(Color::Red),
            ),
        ]),
    ];

    let paragraph =
        Paragraph::new(content).block(Block::default().title(" Letters ").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let rounds = Paragraph::new(format!("Rounds: {}", app.stats.rounds_played))
        .alignment(Alignment::Center);
    f.render_widget(rounds, chunks[0]);

    let won = Paragraph::new(format!("Won: {}", app.stats.rounds_won)).alignment(Alignment::Center);
    f.render_widget(won, chunks[1]);

    let help_text = match app.screen {
        Screen::Menu => "Enter: New Round | q/Esc: Quit",
        Screen::Playing => "A-Z: Guess | Esc: Menu | Ctrl-C: Quit",
        Screen::Won | Screen::Lost => "Enter: New Round | Esc: Menu | q: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

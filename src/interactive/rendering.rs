//! TUI rendering with ratatui
//!
//! Board of past guesses, the guess being composed, and game status.

use super::app::{App, MessageStyle};
use crate::core::{Code, Palette};
use crate::game::GameStatus;
use crate::output::formatters::{feedback_pegs, palette_legend, swatch_rgb};
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color as TermColor, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<R: Rng>(f: &mut Frame, app: &App<R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(4), // Guess composer
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board
            Constraint::Percentage(40), // Info panel
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_composer(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 MASTERMIND - Break the Code")
        .style(
            Style::default()
                .fg(TermColor::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(TermColor::Cyan)),
        );
    f.render_widget(header, area);
}

fn peg_spans(palette: &Palette, code: &Code) -> Vec<Span<'static>> {
    code.iter()
        .map(|&color| {
            let (r, g, b) = swatch_rgb(palette, color);
            Span::styled(" ● ", Style::default().fg(TermColor::Rgb(r, g, b)))
        })
        .collect()
}

fn render_board<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let lines = board_lines(app, area.height.saturating_sub(2));
    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

/// Rows of the board; empty placeholder rows stop at `height`
fn board_lines<R: Rng>(app: &App<R>, height: u16) -> Vec<Line<'static>> {
    let config = app.session.config();
    let palette = config.palette();
    let n = config.code_length();
    let turns = app.session.turns();

    let mut lines: Vec<Line> = turns
        .iter()
        .enumerate()
        .map(|(i, turn)| {
            let mut spans = vec![Span::styled(
                format!("{:>2} ", i + 1),
                Style::default().fg(TermColor::DarkGray),
            )];
            spans.extend(peg_spans(palette, &turn.guess));
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                feedback_pegs(turn.score, n),
                Style::default().fg(TermColor::White),
            ));
            Line::from(spans)
        })
        .collect();

    let empty_row = format!("{}  {}", " · ".repeat(n), "·".repeat(n));
    let rows = (config.starting_attempts() as usize).min(turns.len().max(usize::from(height)));
    for i in turns.len()..rows {
        lines.push(Line::from(vec![
            Span::styled(format!("{:>2} ", i + 1), Style::default().fg(TermColor::DarkGray)),
            Span::styled(empty_row.clone(), Style::default().fg(TermColor::DarkGray)),
        ]));
    }

    if let Some(secret) = app.session.revealed_secret() {
        let label = match app.session.status() {
            GameStatus::Won => "Secret ✓ ",
            _ => "Secret:  ",
        };
        let mut spans = vec![Span::styled(
            label,
            Style::default().add_modifier(Modifier::BOLD),
        )];
        spans.extend(peg_spans(palette, secret));
        lines.push(Line::from(""));
        lines.push(Line::from(spans));
    }

    lines
}

fn render_info_panel<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Attempts gauge
            Constraint::Length(6), // Statistics
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_attempts(f, app, chunks[0]);
    render_statistics(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_attempts<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let total = app.session.config().starting_attempts();
    let left = app.session.attempts_left();
    let ratio = f64::from(left) / f64::from(total.max(1));

    let color = if ratio > 0.5 {
        TermColor::Green
    } else if ratio > 0.2 {
        TermColor::Yellow
    } else {
        TermColor::Red
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts Left ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("{left}/{total}"));

    f.render_widget(gauge, area);
}

fn render_statistics<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let stats = &app.stats;
    let mut content = vec![
        Line::from(format!("Games played: {}", stats.games_played)),
        Line::from(format!(
            "Won: {} ({:.0}%)",
            stats.games_won,
            stats.win_rate()
        )),
    ];
    if let Some(avg) = stats.average_attempts() {
        content.push(Line::from(format!("Avg attempts per win: {avg:.1}")));
    }

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .style(Style::default().fg(TermColor::Green)),
    );
    f.render_widget(paragraph, area);
}

fn render_messages<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(TermColor::White),
                MessageStyle::Success => Style::default().fg(TermColor::Green),
                MessageStyle::Error => Style::default().fg(TermColor::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_composer<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let palette = app.session.config().palette();

    let (title, color) = if app.game_over() {
        (" Game over | Press 'n' or Enter for a new game ", TermColor::Green)
    } else {
        (
            " Your Guess | ←/→ slot  ↑/↓ color  letter picks color  Enter submits ",
            TermColor::Yellow,
        )
    };

    let mut spans = Vec::new();
    for (i, &c) in app.selection.iter().enumerate() {
        let (r, g, b) = swatch_rgb(palette, c);
        let name = palette.name(c).unwrap_or("?");
        let mut style = Style::default().fg(TermColor::Rgb(r, g, b));
        if i == app.cursor && !app.game_over() {
            style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
        }
        spans.push(Span::styled(format!(" ● {name} "), style));
        spans.push(Span::raw(" "));
    }

    let content = vec![
        Line::from(spans),
        Line::from(Span::styled(
            palette_legend(palette),
            Style::default().fg(TermColor::DarkGray),
        )),
    ];

    let composer = Paragraph::new(content).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(color)),
    );
    f.render_widget(composer, area);
}

fn render_status<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let status_style = match app.session.status() {
        GameStatus::InProgress => Style::default(),
        GameStatus::Won => Style::default().fg(TermColor::Green),
        GameStatus::Lost => Style::default().fg(TermColor::Red),
    };
    let status = Paragraph::new(format!("Status: {}", app.session.status()))
        .alignment(Alignment::Center)
        .style(status_style);
    f.render_widget(status, chunks[0]);

    let config = app.session.config();
    let rules = Paragraph::new(format!(
        "{} slots | {} colors",
        config.code_length(),
        config.palette().len()
    ))
    .alignment(Alignment::Center);
    f.render_widget(rules, chunks[1]);

    let help = Paragraph::new("q: Quit | n: New Game | Enter: Submit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(TermColor::DarkGray));
    f.render_widget(help, chunks[2]);
}

//! TUI rendering with ratatui
//!
//! Draws the clue color, the guess grid, the on-screen keyboard and the
//! session panels. Nothing here mutates game state.

use super::app::{App, MessageStyle};
use crate::core::{Feedback, HexDigit};
use crate::engine::{COLS, Cell, Key, Outcome, ROWS};
use crate::output::formatters::create_progress_bar;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph},
};
use std::rc::Rc;

const KEY_WIDTH: u16 = 5;
const KEY_HEIGHT: u16 = 3;
const KEYS_PER_ROW: u16 = 8;

fn main_layout(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),               // Header with clue color
            Constraint::Length(ROWS as u16 + 2), // Grid
            Constraint::Length(KEY_HEIGHT * 3),  // Keyboard
            Constraint::Min(7),                  // Messages + stats
            Constraint::Length(1),               // Help line
        ])
        .split(area)
}

/// Screen areas of the on-screen keyboard buttons
///
/// Shared by the renderer and the mouse handler so clicks land on what is drawn.
#[must_use]
pub fn keyboard_buttons(screen: Rect) -> Vec<(Rect, Key)> {
    let area = main_layout(screen)[2];
    let mut buttons = Vec::with_capacity(HexDigit::ALL.len() + 2);

    let row_width = KEY_WIDTH * KEYS_PER_ROW;
    let left = area.x + area.width.saturating_sub(row_width) / 2;

    for (i, digit) in HexDigit::ALL.iter().enumerate() {
        let i = i as u16;
        let rect = Rect::new(
            left + (i % KEYS_PER_ROW) * KEY_WIDTH,
            area.y + (i / KEYS_PER_ROW) * KEY_HEIGHT,
            KEY_WIDTH,
            KEY_HEIGHT,
        );
        buttons.push((rect, Key::Char(digit.to_char())));
    }

    let bottom = area.y + 2 * KEY_HEIGHT;
    let back_width = 7;
    let enter_width = 9;
    let start = area.x + area.width.saturating_sub(back_width + enter_width + 1) / 2;
    buttons.push((
        Rect::new(start, bottom, back_width, KEY_HEIGHT),
        Key::Backspace,
    ));
    buttons.push((
        Rect::new(start + back_width + 1, bottom, enter_width, KEY_HEIGHT),
        Key::Enter,
    ));

    buttons
        .into_iter()
        .map(|(rect, key)| (rect.intersection(screen), key))
        .filter(|(rect, _)| !rect.is_empty())
        .collect()
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = main_layout(f.area());

    render_header(f, app, chunks[0]);
    render_grid(f, app, chunks[1]);
    render_keyboard(f, app);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[3]);
    render_messages(f, app, bottom[0]);
    render_stats(f, app, bottom[1]);

    render_help(f, app, chunks[4]);

    if app.engine.outcome().is_terminal() {
        render_game_over(f, app);
    }
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let color = rgb(app.engine.target_rgb());
    let contrast = rgb(app.engine.target_contrast_rgb());

    let content = vec![
        Line::from(Span::styled(
            "H E X L E",
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Guess the color of this title to win.",
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            "        #        ",
            Style::default()
                .bg(color)
                .fg(contrast)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let header = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(header, area);
}

fn feedback_style(feedback: Feedback) -> Style {
    match feedback {
        Feedback::TooLow => Style::default().bg(Color::Blue).fg(Color::White),
        Feedback::Exact => Style::default().bg(Color::Green).fg(Color::Black),
        Feedback::TooHigh => Style::default().bg(Color::Red).fg(Color::White),
    }
}

fn cell_span(cell: &Cell, active: bool) -> Span<'static> {
    let symbol = cell.symbol.map_or('·', HexDigit::to_char);
    let mut style = cell
        .feedback
        .map_or_else(|| Style::default().fg(Color::White), feedback_style);

    if active {
        style = style
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    }

    Span::styled(format!(" {symbol} "), style.add_modifier(Modifier::BOLD))
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let snapshot = app.snapshot();
    let in_progress = snapshot.outcome == Outcome::InProgress;

    let lines: Vec<Line> = snapshot
        .grid
        .rows()
        .enumerate()
        .map(|(r, row)| {
            let mut spans = Vec::with_capacity(COLS * 2 + 1);
            for (c, cell) in row.iter().enumerate() {
                let active = in_progress && snapshot.cursor.row == r && snapshot.cursor.column == c;
                spans.push(cell_span(cell, active));
                spans.push(Span::raw(" "));
            }

            let arrows: String = row
                .iter()
                .map(|cell| cell.feedback.map_or(' ', Feedback::arrow))
                .collect();
            spans.push(Span::styled(
                format!("  {arrows}"),
                Style::default().fg(Color::Gray),
            ));
            Line::from(spans)
        })
        .collect();

    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Guesses ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn render_keyboard(f: &mut Frame, app: &App) {
    let highlighted = app.highlight.map(|h| h.symbol);

    for (rect, key) in keyboard_buttons(f.area()) {
        let (label, lit) = match key {
            Key::Char(c) => (c.to_string(), highlighted == Some(c)),
            Key::Backspace => ("←".to_string(), false),
            Key::Enter => ("Enter".to_string(), false),
            Key::Left | Key::Right => continue,
        };

        let style = if lit {
            Style::default().bg(Color::Gray).fg(Color::Black)
        } else {
            Style::default().fg(Color::White)
        };

        let button = Paragraph::new(label)
            .alignment(Alignment::Center)
            .style(style.add_modifier(Modifier::BOLD))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded),
            );
        f.render_widget(button, rect);
    }
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

fn render_stats(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let mut lines = vec![Line::from(format!(
        "Games: {} | Win Rate: {:.0}%",
        stats.total_games,
        stats.win_rate()
    ))];

    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0).max(1);
    for (rows, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
        let bar = create_progress_bar(count as f64, most as f64, 12);
        lines.push(Line::from(vec![
            Span::raw(format!("{rows}: ")),
            Span::styled(bar, Style::default().fg(Color::Green)),
            Span::raw(format!(" {count}")),
        ]));
    }

    let panel = Paragraph::new(lines).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(panel, area);
}

fn render_help(f: &mut Frame, app: &App, area: Rect) {
    let help_text = if app.engine.outcome().is_terminal() {
        "n/Enter: New Game | q: Quit"
    } else {
        "0-f: Type | ←/→: Move | Backspace: Delete | Enter: Submit | ?: Hint | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn render_game_over(f: &mut Frame, app: &App) {
    let Some(secret) = app.engine.revealed_secret() else {
        return;
    };
    let won = app.engine.outcome() == Outcome::Won;

    let (title, verdict, color) = if won {
        (" 🎉 CONGRATULATIONS! 🎉 ", "You win!", Color::Green)
    } else {
        (" GAME OVER ", "You lose!", Color::Red)
    };

    let content = vec![
        Line::from(Span::styled(
            verdict,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("The hex was #{secret}.")),
        Line::from(Span::styled(
            format!("   #{secret}   "),
            Style::default()
                .bg(rgb(secret.rgb()))
                .fg(rgb(secret.contrast_rgb()))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press 'n' for new game or 'q' to quit",
            Style::default().fg(Color::Gray),
        )),
    ];

    let area = centered(f.area(), 44, 9);
    let popup = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(color)),
    );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

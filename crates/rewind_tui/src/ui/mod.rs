//! Stateless UI rendering.
//!
//! `draw` is a pure function of the application state; the only output
//! besides widgets is the frame's [`HitMap`], rebuilt on every render.

mod board;
mod moves;

use crate::app::{Action, App};
use crate::hits::HitMap;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

/// Renders the whole frame and records its clickable regions.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let mut hits = HitMap::new();
    let area = frame.area();

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(33), Constraint::Min(28)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(2), // Key help
        ])
        .split(columns[0]);

    let title = Paragraph::new("Rewind Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, left[0]);

    board::render_board(frame, left[1], app.game(), app.cursor(), &mut hits);

    let help = Paragraph::new("1-9 or arrows+Enter to place\n[/] step, o order, r restart, q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, left[2]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Status + Reverse toggle
            Constraint::Min(5),    // Move list
        ])
        .split(columns[1]);

    let header = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(16), Constraint::Length(11)])
        .split(right[0]);

    let status = Paragraph::new(app.game().status().to_string())
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, header[0]);

    let reverse_style = if app.game().reverse() {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let reverse = Paragraph::new("Reverse")
        .style(reverse_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(reverse, header[1]);
    hits.register(header[1], Action::ToggleOrder);

    moves::render_moves(frame, right[1], app.game(), &mut hits);

    app.set_hits(hits);
}

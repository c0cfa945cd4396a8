//! Board rendering: a 3x3 grid of clickable cells.

use crate::app::Action;
use crate::hits::HitMap;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};
use rewind_tictactoe::{Game, Player, Position, Square};

/// Renders the current snapshot with the winning line highlighted and the
/// keyboard cursor inverted. Cells register their own click regions; all
/// move validation stays in the game.
pub fn render_board(
    frame: &mut Frame,
    area: Rect,
    game: &Game,
    cursor: Position,
    hits: &mut HitMap,
) {
    let winning_line = game.winning_line();
    let board_area = center_rect(area, 29, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (i, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        render_row(frame, row_area, game, cursor, winning_line, i * 3, hits);
    }
    render_separator(frame, rows[1]);
    render_separator(frame, rows[3]);
}

fn render_row(
    frame: &mut Frame,
    area: Rect,
    game: &Game,
    cursor: Position,
    winning_line: Option<[Position; 3]>,
    start: usize,
    hits: &mut HitMap,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(9),
            Constraint::Length(1),
            Constraint::Length(9),
            Constraint::Length(1),
            Constraint::Length(9),
        ])
        .split(area);

    for (i, cell_area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
        let pos = Position::ALL[start + i];
        let highlighted = winning_line.is_some_and(|line| line.contains(&pos));
        render_cell(frame, cell_area, game, pos, highlighted, pos == cursor, hits);
    }
    render_vertical_sep(frame, cols[1]);
    render_vertical_sep(frame, cols[3]);
}

fn render_cell(
    frame: &mut Frame,
    area: Rect,
    game: &Game,
    pos: Position,
    highlighted: bool,
    is_cursor: bool,
    hits: &mut HitMap,
) {
    let (text, base_style) = match game.current().get(pos) {
        Square::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let mut style = if highlighted {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        base_style
    };
    if is_cursor {
        style = style.bg(Color::White).fg(Color::Black);
    }

    // Text on the middle line of the 3-high cell.
    let line_area = Rect {
        y: area.y + area.height / 2,
        height: 1,
        ..area
    };
    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    frame.render_widget(paragraph, line_area);

    hits.register(area, Action::Play(pos));
}

fn render_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn render_vertical_sep(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(vertical[1])[1]
}

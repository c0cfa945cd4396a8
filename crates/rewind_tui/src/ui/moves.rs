//! Move-list rendering.

use crate::app::Action;
use crate::hits::HitMap;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use rewind_tictactoe::Game;

/// Renders the move list in its display order.
///
/// Each entry jumps to its semantic step regardless of where reversal
/// placed it on screen; the selected entry is underlined.
pub fn render_moves(frame: &mut Frame, area: Rect, game: &Game, hits: &mut HitMap) {
    let entries = game.moves();

    let block = Block::default().borders(Borders::ALL).title("Moves");
    let inner = block.inner(area);

    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            let style = if entry.selected() {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::UNDERLINED)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(entry.label(), style)))
        })
        .collect();
    frame.render_widget(List::new(items).block(block), area);

    for (i, entry) in entries.iter().enumerate() {
        if (i as u16) < inner.height {
            let row = Rect {
                x: inner.x,
                y: inner.y + i as u16,
                width: inner.width,
                height: 1,
            };
            hits.register(row, Action::JumpTo(entry.step()));
        }
    }
}

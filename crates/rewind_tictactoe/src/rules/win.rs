//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Player, Square};
use tracing::instrument;

/// The 8 winning lines, evaluated in a fixed order: rows top to bottom,
/// columns left to right, then the two diagonals. Both queries below scan
/// this table so they always agree on which line is reported.
const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument]
pub fn winner(board: &Board) -> Option<Player> {
    let [a, _, _] = winning_line(board)?;
    match board.get(a) {
        Square::Occupied(player) => Some(player),
        Square::Empty => None,
    }
}

/// Returns the first completed line on the board, if any.
#[instrument]
pub fn winning_line(board: &Board) -> Option<[Position; 3]> {
    for line in LINES {
        let [a, b, c] = line;
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return Some(line);
        }
    }
    None
}

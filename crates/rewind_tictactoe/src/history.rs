//! Snapshot comparison helpers for the move history.

use crate::position::Position;
use crate::types::Board;
use serde::{Deserialize, Serialize};

/// 1-based (column, row) coordinate of a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Column, 1-3 left to right.
    pub col: u8,
    /// Row, 1-3 top to bottom.
    pub row: u8,
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.col, self.row)
    }
}

/// Returns the coordinate of the first cell where `current` differs from
/// `previous`, scanning in reading order (row 1 to 3, within each row
/// column 1 to 3).
///
/// Consecutive history snapshots always differ in exactly one cell, so the
/// first difference is the move that produced `current`. Returns `None`
/// when the boards are identical; that case is unreachable through the
/// game's own history but is defined here rather than left to panic.
pub fn changed_cell(current: &Board, previous: &Board) -> Option<Coord> {
    for pos in Position::ALL {
        if current.get(pos) != previous.get(pos) {
            return Some(Coord {
                col: pos.column(),
                row: pos.row(),
            });
        }
    }
    None
}

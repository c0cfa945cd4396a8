//! Game state machine with move-history time travel.

use crate::history::{Coord, changed_cell};
use crate::position::Position;
use crate::rules;
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Error that can occur when validating a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("{_0} is already occupied")]
    SquareOccupied(Position),

    /// The current snapshot already has a winner.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

/// Current status of the game, derived from the current snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing; the player to move next.
    InProgress(Player),
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress(player) => write!(f, "Next player: {player}"),
            GameStatus::Won(player) => write!(f, "Winner: {player}"),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

/// One row of the move list.
///
/// `step` is the semantic jump target and never changes with display
/// order; only the position of the entry in the returned list does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveEntry {
    step: usize,
    coord: Option<Coord>,
    selected: bool,
}

impl MoveEntry {
    /// History index this entry jumps to.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Coordinate of the move that produced this snapshot (absent for the
    /// game start).
    pub fn coord(&self) -> Option<Coord> {
        self.coord
    }

    /// Whether this entry is the currently displayed snapshot.
    pub fn selected(&self) -> bool {
        self.selected
    }

    /// Display label for the move list.
    pub fn label(&self) -> String {
        if self.step == 0 {
            "Go to game start".to_string()
        } else {
            match self.coord {
                Some(coord) => format!("Go to move #{} {}", self.step, coord),
                None => format!("Go to move #{}", self.step),
            }
        }
    }
}

/// Tic-tac-toe game with full move history.
///
/// Every move appends a fresh board snapshot; `step` points at the
/// snapshot currently displayed. Invariants: `history[0]` is empty,
/// consecutive snapshots differ in exactly one cell, and `x_is_next`
/// equals `step % 2 == 0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    history: Vec<Board>,
    step: usize,
    x_is_next: bool,
    reverse: bool,
}

impl Game {
    /// Creates a new game with an empty starting snapshot.
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            step: 0,
            x_is_next: true,
            reverse: false,
        }
    }

    /// The snapshot at the current step.
    pub fn current(&self) -> &Board {
        &self.history[self.step]
    }

    /// Current step pointer.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Number of snapshots in the history (moves played + 1).
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// True when X moves next.
    pub fn x_is_next(&self) -> bool {
        self.x_is_next
    }

    /// True when the move list renders in descending order.
    pub fn reverse(&self) -> bool {
        self.reverse
    }

    /// The player whose turn it is.
    pub fn next_player(&self) -> Player {
        if self.x_is_next { Player::X } else { Player::O }
    }

    /// Validates and applies a move at `pos`.
    ///
    /// On success: history is truncated to the current step, the new
    /// snapshot is appended, the step pointer advances, and the turn
    /// flips. On error the state is unchanged.
    #[instrument(skip(self), fields(step = self.step))]
    pub fn try_play(&mut self, pos: Position) -> Result<(), MoveError> {
        if rules::winner(self.current()).is_some() {
            return Err(MoveError::GameOver);
        }
        if !self.current().is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        // Branching from an earlier step discards the old future.
        self.history.truncate(self.step + 1);

        let mut board = self.current().clone();
        board.set(pos, Square::Occupied(self.next_player()));
        self.history.push(board);
        self.step = self.history.len() - 1;
        self.x_is_next = !self.x_is_next;
        Ok(())
    }

    /// Click entry point: applies the move if legal, otherwise ignores it.
    pub fn play(&mut self, pos: Position) {
        if let Err(error) = self.try_play(pos) {
            debug!(%error, position = %pos, "move ignored");
        }
    }

    /// Moves the step pointer to `step` and recomputes the turn flag.
    ///
    /// Targets past the end of history are clamped to the last snapshot.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) {
        self.step = step.min(self.history.len() - 1);
        self.x_is_next = self.step % 2 == 0;
    }

    /// Flips the move-list display order. History, step pointer, and turn
    /// flag are untouched.
    pub fn toggle_order(&mut self) {
        self.reverse = !self.reverse;
    }

    /// Status of the current snapshot.
    ///
    /// A 3x3 board with 9 marks and no winner is necessarily full, so the
    /// draw check is `step >= 9`. Revisit before generalizing to other
    /// board sizes.
    pub fn status(&self) -> GameStatus {
        if let Some(player) = rules::winner(self.current()) {
            GameStatus::Won(player)
        } else if self.step >= 9 {
            GameStatus::Draw
        } else {
            GameStatus::InProgress(self.next_player())
        }
    }

    /// The completed line on the current snapshot, if any.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        rules::winning_line(self.current())
    }

    /// Move-list entries in display order.
    ///
    /// Ascending by default, descending when the order flag is set.
    /// Reversal changes only the ordering of the returned vector; each
    /// entry keeps its semantic step.
    pub fn moves(&self) -> Vec<MoveEntry> {
        let mut entries: Vec<MoveEntry> = (0..self.history.len())
            .map(|k| MoveEntry {
                step: k,
                coord: if k == 0 {
                    None
                } else {
                    changed_cell(&self.history[k], &self.history[k - 1])
                },
                selected: k == self.step,
            })
            .collect();
        if self.reverse {
            entries.reverse();
        }
        entries
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play_all(game: &mut Game, indices: &[usize]) {
        for &i in indices {
            game.play(Position::from_index(i).unwrap());
        }
    }

    #[test]
    fn new_game_starts_at_empty_snapshot() {
        let game = Game::new();
        assert_eq!(game.history_len(), 1);
        assert_eq!(game.step(), 0);
        assert!(game.x_is_next());
        assert_eq!(game.status(), GameStatus::InProgress(Player::X));
    }

    #[test]
    fn moves_alternate_and_append_snapshots() {
        let mut game = Game::new();
        game.play(Position::Center);
        assert_eq!(game.current().get(Position::Center), Square::Occupied(Player::X));
        assert!(!game.x_is_next());

        game.play(Position::TopLeft);
        assert_eq!(game.current().get(Position::TopLeft), Square::Occupied(Player::O));
        assert_eq!(game.history_len(), 3);
        assert_eq!(game.step(), 2);
    }

    #[test]
    fn occupied_square_is_rejected_and_state_unchanged() {
        let mut game = Game::new();
        game.play(Position::Center);
        let before = game.clone();

        assert_eq!(
            game.try_play(Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn no_moves_after_win() {
        let mut game = Game::new();
        // X: 0, 1, 2 wins the top row; O: 3, 4.
        play_all(&mut game, &[0, 3, 1, 4, 2]);
        assert_eq!(game.status(), GameStatus::Won(Player::X));
        let before = game.clone();

        assert_eq!(game.try_play(Position::BottomRight), Err(MoveError::GameOver));
        assert_eq!(game, before);

        // The click path ignores it silently too.
        game.play(Position::BottomRight);
        assert_eq!(game, before);
    }

    #[test]
    fn successful_move_changes_exactly_one_cell() {
        let mut game = Game::new();
        play_all(&mut game, &[4, 0]);
        let previous = game.current().clone();
        game.play(Position::TopRight);

        let differing = Position::ALL
            .iter()
            .filter(|&&pos| game.current().get(pos) != previous.get(pos))
            .count();
        assert_eq!(differing, 1);
        assert_eq!(game.history_len(), 4);
    }

    #[test]
    fn jump_then_move_truncates_future() {
        let mut game = Game::new();
        play_all(&mut game, &[0, 1, 2, 3]);
        assert_eq!(game.history_len(), 5);

        game.jump_to(1);
        assert!(!game.x_is_next());
        game.play(Position::BottomRight);

        assert_eq!(game.history_len(), 3);
        assert_eq!(game.step(), 2);
        assert_eq!(
            game.current().get(Position::BottomRight),
            Square::Occupied(Player::O)
        );
        // The discarded future is gone.
        assert!(game.current().is_empty(Position::TopRight));
    }

    #[test]
    fn turn_flag_follows_step_parity_after_jump() {
        let mut game = Game::new();
        play_all(&mut game, &[0, 1, 2]);
        for step in 0..game.history_len() {
            game.jump_to(step);
            assert_eq!(game.x_is_next(), step % 2 == 0);
        }
    }

    #[test]
    fn jump_past_end_is_clamped() {
        let mut game = Game::new();
        play_all(&mut game, &[0, 1]);
        game.jump_to(42);
        assert_eq!(game.step(), 2);
        assert!(game.x_is_next());
    }

    #[test]
    fn toggle_order_is_presentation_only_and_involutive() {
        let mut game = Game::new();
        play_all(&mut game, &[0, 4]);
        let ascending: Vec<usize> = game.moves().iter().map(MoveEntry::step).collect();
        assert_eq!(ascending, vec![0, 1, 2]);

        game.toggle_order();
        let descending: Vec<usize> = game.moves().iter().map(MoveEntry::step).collect();
        assert_eq!(descending, vec![2, 1, 0]);
        assert_eq!(game.step(), 2);
        assert!(game.x_is_next());

        game.toggle_order();
        let restored: Vec<usize> = game.moves().iter().map(MoveEntry::step).collect();
        assert_eq!(restored, ascending);
    }

    #[test]
    fn move_labels_carry_coordinates() {
        let mut game = Game::new();
        play_all(&mut game, &[0, 3, 1, 4, 2]);
        let moves = game.moves();

        assert_eq!(moves[0].label(), "Go to game start");
        assert_eq!(moves[1].label(), "Go to move #1 (1,1)");
        assert_eq!(moves[5].label(), "Go to move #5 (3,1)");
        assert!(moves[5].selected());
        assert!(!moves[0].selected());
    }

    #[test]
    fn worked_example_x_wins_top_row() {
        let mut game = Game::new();
        play_all(&mut game, &[0, 3, 1, 4, 2]);

        assert_eq!(game.status(), GameStatus::Won(Player::X));
        assert_eq!(game.status().to_string(), "Winner: X");
        assert_eq!(
            game.winning_line(),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
    }

    #[test]
    fn draw_reported_only_at_step_nine_without_winner() {
        let mut game = Game::new();
        // X O X / X O O / O X X in move order without a winner.
        play_all(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(game.step(), 9);
        assert_eq!(game.status(), GameStatus::Draw);
        assert_eq!(game.status().to_string(), "Draw");

        // Stepping back from the full board leaves the draw behind.
        game.jump_to(8);
        assert_eq!(game.status(), GameStatus::InProgress(Player::X));
    }

    #[test]
    fn state_survives_serialization() {
        let mut game = Game::new();
        play_all(&mut game, &[4, 0, 5]);
        game.jump_to(2);

        let json = serde_json::to_string(&game).unwrap();
        let mut restored: Game = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, game);

        // Time travel still works on the restored state.
        restored.play(Position::BottomLeft);
        assert_eq!(restored.history_len(), 4);
    }
}

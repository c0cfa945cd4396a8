//! Application state and action dispatch.

use crate::hits::HitMap;
use crate::input;
use crossterm::event::KeyCode;
use rewind_tictactoe::{Game, Position};
use tracing::debug;

/// Everything a click or key press can do to the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Place a mark at the given cell.
    Play(Position),
    /// Place a mark at the keyboard cursor.
    PlayAtCursor,
    /// Move the keyboard cursor with an arrow key.
    Cursor(KeyCode),
    /// Jump to a history step.
    JumpTo(usize),
    /// Jump one step back in history.
    StepBack,
    /// Jump one step forward in history.
    StepForward,
    /// Jump to the empty starting snapshot.
    JumpToStart,
    /// Flip the move-list display order.
    ToggleOrder,
    /// Start a fresh game.
    Restart,
    /// Leave the application.
    Quit,
}

/// Main application state.
pub struct App {
    game: Game,
    cursor: Position,
    hits: HitMap,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
            hits: HitMap::new(),
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Current keyboard cursor cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Replaces the clickable regions recorded by the last render.
    pub fn set_hits(&mut self, hits: HitMap) {
        self.hits = hits;
    }

    /// Resolves a mouse click against the last rendered frame.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<Action> {
        self.hits.hit_test(x, y)
    }

    /// Applies an action to the game state.
    ///
    /// Every transition is synchronous; invalid moves are ignored inside
    /// [`Game::play`].
    pub fn apply(&mut self, action: Action) {
        debug!(?action, "applying action");
        match action {
            Action::Play(pos) => self.game.play(pos),
            Action::PlayAtCursor => self.game.play(self.cursor),
            Action::Cursor(key) => self.cursor = input::move_cursor(self.cursor, key),
            Action::JumpTo(step) => self.game.jump_to(step),
            Action::StepBack => self.game.jump_to(self.game.step().saturating_sub(1)),
            Action::StepForward => self.game.jump_to(self.game.step() + 1),
            Action::JumpToStart => self.game.jump_to(0),
            Action::ToggleOrder => self.game.toggle_order(),
            Action::Restart => self.game = Game::new(),
            Action::Quit => {}
        }
        debug!(
            status = %self.game.status(),
            step = self.game.step(),
            board = %self.game.current().display(),
            "state after action"
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

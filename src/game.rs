//! Board controller: owns the grid and drives the rules and navigator.
//!
//! The controller is the only place the grid is mutated. After every
//! placement it runs win detection; on every arrow key it asks the
//! navigator where focus goes next.

use crate::focus::{Direction, FocusHandles, first_focusable, next_focusable};
use crate::rules::{WinningLine, detect_winning_line, is_board_full, resolve_mark};
use crate::scores::Scores;
use crate::types::{Grid, Mark, Square};
use crate::Position;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Current status of the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// A line was completed.
    Won {
        /// Mark that completed the line.
        mark: Mark,
        /// Cells of the completed line.
        line: WinningLine,
    },
    /// Board filled with no line.
    Draw,
}

impl GameStatus {
    /// Checks if the game has ended.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winning line, if any.
    pub fn winning_line(&self) -> Option<&WinningLine> {
        match self {
            GameStatus::Won { line, .. } => Some(line),
            _ => None,
        }
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameStatus::Won { mark, .. } => Some(*mark),
            _ => None,
        }
    }
}

/// Error that can occur when placing a mark.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The position is not on the board.
    #[display("Position {} is off the board", _0)]
    OutOfBounds(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

/// Single-session tic-tac-toe game.
///
/// Generic over the focus handle type `H` so any presentation layer can
/// register whatever it uses to move input focus.
#[derive(Debug, Clone)]
pub struct Game<H> {
    grid: Grid,
    first_mark: Mark,
    to_move: Mark,
    status: GameStatus,
    handles: FocusHandles<H>,
    cursor: Option<Position>,
    scores: Scores,
}

impl<H> Game<H> {
    /// Creates a new game where `first_mark` moves first.
    #[instrument]
    pub fn new(first_mark: Mark) -> Self {
        Self {
            grid: Grid::new(),
            first_mark,
            to_move: first_mark,
            status: GameStatus::InProgress,
            handles: FocusHandles::new(),
            cursor: None,
            scores: Scores::new(),
        }
    }

    /// Returns the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the mark that plays next.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns the session scores.
    pub fn scores(&self) -> &Scores {
        &self.scores
    }

    /// Returns the focused cell, if any.
    pub fn cursor(&self) -> Option<Position> {
        self.cursor
    }

    /// Returns the registered focus handles.
    pub fn handles(&self) -> &FocusHandles<H> {
        &self.handles
    }

    /// Places the current mark at `pos`.
    ///
    /// A filled cell cannot hold focus, so the cursor is cleared when it
    /// points at `pos`. The cursor is also cleared when the game ends.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] after a win or draw,
    /// [`MoveError::OutOfBounds`] off the board, and
    /// [`MoveError::SquareOccupied`] on a filled square.
    #[instrument(skip(self), fields(mark = %self.to_move))]
    pub fn place(&mut self, pos: Position) -> Result<GameStatus, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        if !pos.is_on_board() {
            return Err(MoveError::OutOfBounds(pos));
        }
        if !self.grid.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let mark = self.to_move;
        self.grid.set(pos, Square::Occupied(mark));
        self.to_move = mark.opponent();
        if self.cursor == Some(pos) {
            self.cursor = None;
        }
        debug!(grid = %self.grid, "Mark placed");

        self.update_status();
        Ok(self.status.clone())
    }

    /// Updates game status after a move.
    fn update_status(&mut self) {
        if let Some(line) = detect_winning_line(&self.grid) {
            if let Some(mark) = resolve_mark(&self.grid, &line) {
                info!(%mark, kind = %line.kind(), "Game won");
                self.scores.record_win(mark);
                self.status = GameStatus::Won { mark, line };
            }
        } else if is_board_full(&self.grid) {
            info!("Game drawn");
            self.status = GameStatus::Draw;
        }

        if self.status.is_over() {
            self.cursor = None;
        }
    }

    /// Registers the focus handle for a cell as it is rendered.
    pub fn register_handle(&mut self, pos: Position, handle: H) -> bool {
        self.handles.register(pos, handle)
    }

    /// Moves the cursor to `pos`.
    ///
    /// Ignored once the game is over, and unless `pos` is empty and has a
    /// registered handle.
    #[instrument(skip(self))]
    pub fn focus(&mut self, pos: Position) -> bool {
        if self.status.is_over() {
            debug!("Focus ignored, game is over");
            return false;
        }
        if !self.grid.is_empty(pos) {
            debug!("Focus ignored, cell is filled");
            return false;
        }
        if !self.handles.is_registered(pos) {
            debug!("Focus ignored, cell not registered");
            return false;
        }
        self.cursor = Some(pos);
        true
    }

    /// Clears the cursor.
    pub fn blur(&mut self) {
        self.cursor = None;
    }

    /// Handle the caller should focus for an arrow key.
    ///
    /// With nothing focused this is the first empty cell. Returns `None`
    /// once the game is over.
    #[instrument(skip(self), fields(cursor = ?self.cursor))]
    pub fn navigate(&self, direction: Direction) -> Option<&H> {
        if self.status.is_over() {
            return None;
        }
        match self.cursor {
            None => first_focusable(&self.grid, &self.handles),
            Some(from) => next_focusable(&self.grid, &self.handles, from, direction),
        }
    }

    /// Starts a new game, keeping registered handles and scores.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("Starting new game");
        self.grid = Grid::new();
        self.to_move = self.first_mark;
        self.status = GameStatus::InProgress;
        self.cursor = None;
    }

    /// Zeroes the session scores.
    pub fn reset_scores(&mut self) {
        self.scores.reset();
    }
}

impl<H> Default for Game<H> {
    fn default() -> Self {
        Self::new(Mark::X)
    }
}

//! Application state and logic.

use super::input::{InputAction, action_for};
use crate::{Game, GameConfig, GameStatus, Position};
use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use tracing::{debug, info, instrument};

/// Focus handle for a rendered cell: where it is and where it was drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellHandle {
    /// Board cell this handle belongs to.
    pub position: Position,
    /// Screen area of the cell in the last frame.
    pub area: Rect,
}

impl CellHandle {
    /// Checks if a terminal coordinate falls inside the cell.
    pub fn hit(&self, column: u16, row: u16) -> bool {
        column >= self.area.x
            && column < self.area.x.saturating_add(self.area.width)
            && row >= self.area.y
            && row < self.area.y.saturating_add(self.area.height)
    }
}

/// Main application state.
pub struct App {
    game: Game<CellHandle>,
    status_message: String,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(config: &GameConfig) -> Self {
        let game = Game::new(*config.first_mark());
        let status_message = format!("{} to move", game.to_move());
        Self {
            game,
            status_message,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game<CellHandle> {
        &self.game
    }

    /// Gets the game for handle registration during rendering.
    pub fn game_mut(&mut self) -> &mut Game<CellHandle> {
        &mut self.game
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Checks if the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        let Some(action) = action_for(key) else {
            return;
        };
        debug!(?action, "Handling key");

        match action {
            InputAction::Navigate(direction) => {
                let target = self.game.navigate(direction).map(|handle| handle.position);
                if let Some(position) = target {
                    self.game.focus(position);
                }
            }
            InputAction::Mark => {
                if let Some(position) = self.game.cursor() {
                    self.place(position);
                }
            }
            InputAction::NewGame => self.restart(),
            InputAction::ResetScores => {
                self.game.reset_scores();
                self.status_message = "Scores reset".to_string();
            }
            InputAction::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    /// Handles a left click at a terminal coordinate.
    #[instrument(skip(self))]
    pub fn handle_click(&mut self, column: u16, row: u16) {
        let target = self
            .game
            .handles()
            .iter()
            .find(|(_, handle)| handle.hit(column, row))
            .map(|(position, _)| position);

        let Some(position) = target else {
            return;
        };
        if self.game.grid().is_empty(position) {
            self.game.focus(position);
        }
        self.place(position);
    }

    /// Places the current mark; filled cells and finished games are no-ops.
    fn place(&mut self, position: Position) {
        match self.game.place(position) {
            Ok(status) => self.status_message = describe(&status, &self.game),
            Err(e) => debug!(error = %e, "Move ignored"),
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game.restart();
        self.status_message = format!("New game. {} to move", self.game.to_move());
    }
}

fn describe(status: &GameStatus, game: &Game<CellHandle>) -> String {
    match status {
        GameStatus::InProgress => format!("{} to move", game.to_move()),
        GameStatus::Won { mark, .. } => format!("{} has won! Press 'n' for a new game.", mark),
        GameStatus::Draw => "Tie! Press 'n' for a new game.".to_string(),
    }
}

//! Registry of focusable cell handles.

use crate::types::{COLS, ROWS};
use crate::Position;
use tracing::{instrument, trace, warn};

/// Focusable handles by cell, filled in as cells register themselves.
///
/// Handles are opaque to the core; they are only returned to the caller so
/// it can move input focus. Registration is never undone during a session,
/// re-registering a cell replaces its handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusHandles<H> {
    slots: [[Option<H>; COLS]; ROWS],
}

impl<H> FocusHandles<H> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| std::array::from_fn(|_| None)),
        }
    }

    /// Registers the handle for a cell.
    ///
    /// Returns `false` and drops the handle when `pos` is off the board.
    #[instrument(skip(self, handle))]
    pub fn register(&mut self, pos: Position, handle: H) -> bool {
        match self.slots.get_mut(pos.row).and_then(|row| row.get_mut(pos.col)) {
            Some(slot) => {
                trace!("Handle registered");
                *slot = Some(handle);
                true
            }
            None => {
                warn!("Ignoring handle for off-board cell");
                false
            }
        }
    }

    /// Returns the handle registered for `pos`.
    pub fn get(&self, pos: Position) -> Option<&H> {
        self.slots.get(pos.row)?.get(pos.col)?.as_ref()
    }

    /// Checks if `pos` has a registered handle.
    pub fn is_registered(&self, pos: Position) -> bool {
        self.get(pos).is_some()
    }

    /// Iterates registered handles, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &H)> + '_ {
        Position::ALL
            .into_iter()
            .filter_map(|pos| self.get(pos).map(|handle| (pos, handle)))
    }

    /// Number of registered cells.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Checks if no cell has registered yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<H> Default for FocusHandles<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> FromIterator<(Position, H)> for FocusHandles<H> {
    fn from_iter<I: IntoIterator<Item = (Position, H)>>(iter: I) -> Self {
        let mut handles = Self::new();
        for (pos, handle) in iter {
            handles.register(pos, handle);
        }
        handles
    }
}

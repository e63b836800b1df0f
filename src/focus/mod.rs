//! Keyboard focus navigation over the board.
//!
//! Cells register an opaque handle as they are rendered. Navigation walks
//! the grid from the focused cell and returns the handle of the next empty
//! cell in the requested direction.

mod handles;
mod navigator;

pub use handles::FocusHandles;
pub use navigator::{
    Direction, first_focusable, next_down, next_focusable, next_left, next_right, next_up,
};

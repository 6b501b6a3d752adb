//! Game rules for ultimate tic-tac-toe.
//!
//! This module contains pure functions for evaluating board state.
//! The win test operates on a bare mark vector so that one function
//! serves both the sub-board and the meta-board levels.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::check_winner;

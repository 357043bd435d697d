//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Rules are kept apart from
//! board storage so the opponent and the controller share one definition
//! of a line, a win and a full board.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, Line, check_winner};

//! Move errors.

use super::Position;

/// Why a move could not be applied.
///
/// The controller swallows these; they never reach the player.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index does not address a board square.
    #[display("Invalid move: index {} is outside the board", _0)]
    OutOfBounds(usize),

    /// Filled squares are never overwritten.
    #[display("Invalid move: {} is already taken", _0)]
    SquareOccupied(Position),

    /// The game has been won or drawn.
    #[display("Invalid move: game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

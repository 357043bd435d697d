//! Lines and win detection.

use super::super::{Board, Mark, Position, Square};
use tracing::instrument;

/// Three positions whose uniform occupation ends the game.
pub type Line = [Position; 3];

/// The eight lines in scan order: rows, then columns, then diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Mark holding a complete line, if any.
///
/// Returns the mark on the first uniform line in [`LINES`] order, so a
/// board with several completed lines still gives one deterministic answer.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Mark> {
    LINES.iter().find_map(|&[a, b, c]| {
        let sq = board.get(a);
        match sq {
            Square::Occupied(mark) if sq == board.get(b) && sq == board.get(c) => Some(mark),
            _ => None,
        }
    })
}

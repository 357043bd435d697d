//! Board cells addressed by name.

use super::types::Board;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// One of the nine cells, numbered 0-8 in row-major order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, strum::Display,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Position {
    /// Index 0.
    TopLeft,
    /// Index 1.
    TopCenter,
    /// Index 2.
    TopRight,
    /// Index 3.
    MiddleLeft,
    /// Index 4; the opponent's preferred cell.
    Center,
    /// Index 5.
    MiddleRight,
    /// Index 6.
    BottomLeft,
    /// Index 7.
    BottomCenter,
    /// Index 8.
    BottomRight,
}

impl Position {
    /// Cells in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Board index, 0-8.
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Cell at a board index, if it is on the board.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row (0 at the top) and column (0 at the left).
    pub fn row_col(self) -> (usize, usize) {
        (self.to_index() / 3, self.to_index() % 3)
    }

    /// Cell at a row and column, if both are below 3.
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Self::from_index(row * 3 + col)
        } else {
            None
        }
    }

    /// Parses the 1-based number a player types ("1".."9").
    pub fn from_cell_number(s: &str) -> Option<Self> {
        s.trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(Self::from_index)
    }

    /// Empty cells of `board`, in index order.
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::iter().filter(|&pos| board.is_empty(pos)).collect()
    }
}

//! Board, marks and game state.

use super::action::MoveError;
use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Mark placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Mark {
    /// The human player (moves first).
    X,
    /// The computer opponent.
    O,
}

impl Mark {
    /// Mark used by the human player.
    pub const PLAYER: Mark = Mark::X;

    /// Mark used by the computer opponent.
    pub const OPPONENT: Mark = Mark::O;

    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// Contents of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Nothing placed yet.
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

/// The 3x3 grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Row-major, indexed like [`Position`].
    squares: [Square; 9],
}

impl Board {
    /// Empty grid.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from nine squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// True if nothing occupies `pos`.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Places a mark at a board index (0-8).
    ///
    /// A filled square is never overwritten: placing on an occupied square
    /// or outside the board fails and leaves the board untouched.
    #[instrument(skip(self))]
    pub fn place(&mut self, index: usize, mark: Mark) -> Result<Position, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        if !self.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }
        self.squares[index] = Square::Occupied(mark);
        Ok(pos)
    }

    /// All nine cells in index order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Returns the empty positions in board order.
    pub fn empty_cells(&self) -> Vec<Position> {
        Position::valid_moves(self)
    }

    /// Checks for a winner on the board.
    pub fn winner(&self) -> Option<Mark> {
        super::rules::check_winner(self)
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        super::rules::is_full(self)
    }

    /// Renders the board as text, numbering empty cells 1-9.
    pub fn display(&self) -> String {
        let cells: Vec<String> = self
            .squares
            .iter()
            .enumerate()
            .map(|(index, square)| match square {
                Square::Empty => (index + 1).to_string(),
                Square::Occupied(mark) => mark.to_string(),
            })
            .collect();
        cells
            .chunks(3)
            .map(|row| row.join("|"))
            .collect::<Vec<_>>()
            .join("\n-+-+-\n")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// No line completed and the board has room.
    InProgress,
    /// A mark completed a line.
    Won(Mark),
    /// Full board, no line.
    Draw,
}

impl GameStatus {
    /// Returns true once the game has been won or drawn.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Board plus whose turn it is and how the game stands.
///
/// Only the [`Controller`](crate::Controller) mutates it; everything else
/// reads it through the accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    active_mark: Mark,
    status: GameStatus,
}

impl GameState {
    /// Creates a fresh game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            active_mark: Mark::PLAYER,
            status: GameStatus::InProgress,
        }
    }

    /// The grid.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark whose turn it is.
    pub fn active_mark(&self) -> Mark {
        self.active_mark
    }

    /// Current status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Places the active mark, then settles the status: a win takes
    /// precedence over a full board. The turn only passes while the game
    /// is still in progress.
    #[instrument(skip(self), fields(mark = %self.active_mark))]
    pub(crate) fn play(&mut self, index: usize) -> Result<GameStatus, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }
        self.board.place(index, self.active_mark)?;

        if let Some(winner) = self.board.winner() {
            self.status = GameStatus::Won(winner);
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
        } else {
            self.active_mark = self.active_mark.opponent();
        }
        Ok(self.status)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

//! Rule-based computer opponent.
//!
//! The opponent looks exactly one ply ahead and applies four rules in a
//! fixed order, taking the first that applies:
//!
//! 1. **Win now**: complete a line holding two of its own marks.
//! 2. **Block**: complete a line holding two of the player's marks.
//! 3. **Center**: take the center square.
//! 4. **Fallback**: pick uniformly among the remaining empty squares.
//!
//! It does not look for forks and is easy to beat.

use super::random::RandomSource;
use super::rules::{LINES, Line};
use super::{Board, Mark, Position, Square};
use tracing::{debug, instrument};

/// Rule that produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Rule {
    /// Completes one of the opponent's own lines.
    #[display("win now")]
    WinNow,
    /// Stops the player completing a line.
    #[display("block")]
    Block,
    /// Takes the center square.
    #[display("center")]
    Center,
    /// Uniform random choice among empty squares.
    #[display("random")]
    Random,
}

/// A chosen square and the rule that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    /// Square to play.
    pub position: Position,
    /// Rule that fired.
    pub rule: Rule,
}

/// Computer opponent playing one mark against the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opponent {
    mark: Mark,
}

impl Opponent {
    /// Creates an opponent playing `mark`.
    pub fn new(mark: Mark) -> Self {
        Self { mark }
    }

    /// Returns the mark this opponent plays.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Picks the next square, or `None` when the board is full.
    pub fn select_move(&self, board: &Board, rng: &mut impl RandomSource) -> Option<Position> {
        self.decide(board, rng).map(|d| d.position)
    }

    /// Picks the next square and reports which rule fired.
    #[instrument(skip(self, board, rng), fields(mark = %self.mark))]
    pub fn decide(&self, board: &Board, rng: &mut impl RandomSource) -> Option<Decision> {
        let decision = if let Some(position) = completing_square(board, self.mark) {
            Decision { position, rule: Rule::WinNow }
        } else if let Some(position) = completing_square(board, self.mark.opponent()) {
            Decision { position, rule: Rule::Block }
        } else if board.is_empty(Position::Center) {
            Decision {
                position: Position::Center,
                rule: Rule::Center,
            }
        } else {
            let free = board.empty_cells();
            if free.is_empty() {
                debug!("Board is full, no move");
                return None;
            }
            // Reduce again so a source that ignores its bound cannot panic.
            Decision {
                position: free[rng.below(free.len()) % free.len()],
                rule: Rule::Random,
            }
        };
        debug!(position = %decision.position, rule = %decision.rule, "Opponent decided");
        Some(decision)
    }
}

impl Default for Opponent {
    fn default() -> Self {
        Self::new(Mark::OPPONENT)
    }
}

/// First empty square (in line-scan order) that completes a line already
/// holding two `mark`s.
fn completing_square(board: &Board, mark: Mark) -> Option<Position> {
    LINES.iter().find_map(|line| completes(board, line, mark))
}

fn completes(board: &Board, line: &Line, mark: Mark) -> Option<Position> {
    let owned = line
        .iter()
        .filter(|&&p| board.get(p) == Square::Occupied(mark))
        .count();
    if owned != 2 {
        return None;
    }
    line.iter().copied().find(|&p| board.is_empty(p))
}

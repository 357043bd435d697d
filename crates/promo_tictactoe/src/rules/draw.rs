//! Full-board detection.

use super::super::{Board, Square};

/// True when no cell is empty.
///
/// A full board only means a draw if nobody won: the last move can fill
/// the board and complete a line at once, so check for a winner first.
pub fn is_full(board: &Board) -> bool {
    !board.squares().contains(&Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::super::Mark;
    use super::super::win::check_winner;
    use super::*;

    fn fill(marks: [Mark; 9]) -> Board {
        let mut board = Board::new();
        for (index, mark) in marks.into_iter().enumerate() {
            board.place(index, mark).unwrap();
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_board_with_one_gap_not_full() {
        let mut board = Board::new();
        for index in 0..8 {
            board.place(index, Mark::O).unwrap();
        }
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_without_line() {
        use Mark::{O, X};
        // X O X / O X X / O X O
        let board = fill([X, O, X, O, X, X, O, X, O]);
        assert!(is_full(&board));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_full_with_line() {
        use Mark::{O, X};
        // X X X / O O X / X O O
        let board = fill([X, X, X, O, O, X, X, O, O]);
        assert!(is_full(&board));
        assert_eq!(check_winner(&board), Some(X));
    }
}

//! Keyboard mapping.

use crossterm::event::KeyCode;
use promo_tictactoe::Position;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the cursor one cell.
    Cursor(KeyCode),
    /// Play the cell under the cursor.
    PlayCursor,
    /// Play a specific cell.
    Play(Position),
    /// Start a new game.
    Reset,
    /// Copy the promo code.
    CopyCode,
    /// Leave the game.
    Quit,
}

/// Maps a key to a command, if it has one.
pub fn command_for(key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => Some(Command::Cursor(key)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::PlayCursor),
        KeyCode::Char(c @ '1'..='9') => {
            Position::from_cell_number(&c.to_string()).map(Command::Play)
        }
        KeyCode::Char('r') => Some(Command::Reset),
        KeyCode::Char('c') => Some(Command::CopyCode),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

/// Moves the cursor with the arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = cursor.row_col();
    let (row, col) = match key {
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, col + 1),
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => (row + 1, col),
        _ => (row, col),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

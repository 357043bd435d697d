//! 3x3 grid with cursor highlight.

use promo_tictactoe::{Board, Mark, Position, Square};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

const CELL_WIDTH: u16 = 9;

pub fn draw_board(frame: &mut Frame, area: Rect, board: &Board, cursor: Position, interactive: bool) {
    let board_area = center_rect(area, CELL_WIDTH * 3 + 2, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, cells) in Position::ALL.chunks(3).enumerate() {
        draw_row(frame, rows[row * 2], board, cursor, interactive, cells);
        if row < 2 {
            let sep = Paragraph::new("─".repeat((CELL_WIDTH * 3 + 2) as usize))
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Position,
    interactive: bool,
    cells: &[Position],
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
        ])
        .split(area);

    for (col, &pos) in cells.iter().enumerate() {
        draw_cell(frame, cols[col * 2], board.get(pos), pos == cursor && interactive);
        if col < 2 {
            let sep = Paragraph::new(vec![Line::from("│"); 3]).style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, square: Square, highlighted: bool) {
    let (symbol, base_style) = match square {
        Square::Empty => ("·", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Mark::X) => ("X", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
        Square::Occupied(Mark::O) => ("O", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
    };

    let style = if highlighted {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Middle line of a three-line cell.
    let text = vec![Line::from(""), Line::from(Span::styled(symbol, style)), Line::from("")];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

/// Rect of the given size centered in `area`.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

//! Stateless rendering.

mod board;

use crate::app::App;
use promo_tictactoe::{Notifier, RandomSource, TurnPhase};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const HELP: &str = "←↑→↓ move · Enter/Space or 1-9 play · r new game · c copy code · q quit";

/// Draws the whole screen.
pub fn draw<N: Notifier, R: RandomSource>(frame: &mut Frame, app: &App<N, R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(4), // Promo card
            Constraint::Length(1), // Toast
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Promo Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let interactive = app.phase() == TurnPhase::PlayerTurn;
    board::draw_board(frame, chunks[1], app.state().board(), app.cursor(), interactive);

    let status = Paragraph::new(app.status_text())
        .style(status_style(app.phase()))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    if let Some(code) = app.reward() {
        draw_promo_card(frame, chunks[3], code.as_str());
    }

    if let Some(toast) = app.toast() {
        let toast = Paragraph::new(toast.text())
            .style(Style::default().fg(Color::Black).bg(Color::Yellow))
            .alignment(Alignment::Center);
        frame.render_widget(toast, chunks[4]);
    }

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[5]);
}

fn status_style(phase: TurnPhase) -> Style {
    match phase {
        TurnPhase::PlayerTurn => Style::default().fg(Color::Yellow),
        TurnPhase::OpponentTurn => Style::default().fg(Color::DarkGray),
        TurnPhase::Terminal(_) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    }
}

fn draw_promo_card(frame: &mut Frame, area: Rect, code: &str) {
    let text = vec![
        Line::from("Your promo code"),
        Line::from(Span::styled(
            code.to_string(),
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        )),
    ];
    let card = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Reward"));
    frame.render_widget(card, board::center_rect(area, 30, area.height));
}

#[cfg(test)]
mod tests {
    use super::*;
    use promo_tictactoe::{Controller, NullNotifier, PlayerIdentity, ScriptedRandom};
    use ratatui::{Terminal, backend::TestBackend};
    use std::time::{Duration, Instant};

    fn screen<N: Notifier, R: RandomSource>(app: &App<N, R>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 30)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_status_and_marks() {
        let controller = Controller::new(None, NullNotifier, ScriptedRandom::default());
        let mut app = App::new(controller, Duration::ZERO);
        let now = Instant::now();
        app.handle_key(crossterm::event::KeyCode::Char('1'), now);
        app.tick(now);

        let text = screen(&app);
        assert!(text.contains("Promo Tic-Tac-Toe"));
        assert!(text.contains("Your move: X"));
        assert!(text.contains('X'));
        assert!(text.contains('O'));
        assert!(!text.contains("Your promo code"));
    }

    #[test]
    fn test_renders_promo_card_after_win() {
        let controller =
            Controller::new(PlayerIdentity::new(3), NullNotifier, ScriptedRandom::new([4, 0]));
        let mut app = App::new(controller, Duration::ZERO);
        let now = Instant::now();
        for key in ['1', '9', '3', '6'] {
            app.handle_key(crossterm::event::KeyCode::Char(key), now);
            app.tick(now);
        }

        let text = screen(&app);
        assert!(text.contains("You win!"));
        assert!(text.contains("Your promo code"));
        assert!(text.contains("10000"));
    }
}

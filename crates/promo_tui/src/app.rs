//! Application state: the controller plus what only the terminal needs.

use crate::clipboard::{Clipboard, TerminalClipboard};
use crate::input::{Command, move_cursor};
use crossterm::event::KeyCode;
use promo_tictactoe::{
    Controller, GameState, Mark, NOTICE_DURATION, Notice, Notifier, Outcome, Position,
    PromoCode, RandomSource, Transition, TurnPhase,
};
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

/// Short-lived message at the bottom of the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    text: String,
    expires_at: Instant,
}

impl Toast {
    /// Toast text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Main application state.
pub struct App<N, R> {
    controller: Controller<N, R>,
    cursor: Position,
    toast: Option<Toast>,
    opponent_due: Option<Instant>,
    opponent_delay: Duration,
    clipboard: Box<dyn Clipboard>,
    should_quit: bool,
}

impl<N: Notifier, R: RandomSource> App<N, R> {
    /// Creates the app around a fresh controller.
    pub fn new(controller: Controller<N, R>, opponent_delay: Duration) -> Self {
        Self {
            controller,
            cursor: Position::Center,
            toast: None,
            opponent_due: None,
            opponent_delay,
            clipboard: Box::new(TerminalClipboard),
            should_quit: false,
        }
    }

    /// Replaces the clipboard the promo code is copied to.
    pub fn with_clipboard(mut self, clipboard: impl Clipboard + 'static) -> Self {
        self.clipboard = Box::new(clipboard);
        self
    }

    /// Current game state.
    pub fn state(&self) -> &GameState {
        self.controller.state()
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> TurnPhase {
        self.controller.phase()
    }

    /// Promo code won in this game.
    pub fn reward(&self) -> Option<&PromoCode> {
        self.controller.reward()
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Toast currently shown.
    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    /// True once the player asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Status line for the current phase.
    pub fn status_text(&self) -> String {
        match self.phase() {
            TurnPhase::PlayerTurn => format!("Your move: {}", self.state().active_mark()),
            TurnPhase::OpponentTurn => "Opponent is thinking…".to_string(),
            TurnPhase::Terminal(Outcome::Won(Mark::PLAYER)) => "You win!".to_string(),
            TurnPhase::Terminal(Outcome::Won(_)) => "The computer won this time".to_string(),
            TurnPhase::Terminal(Outcome::Draw) => "Draw — play again?".to_string(),
        }
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode, now: Instant) {
        let Some(command) = crate::input::command_for(key) else {
            return;
        };
        match command {
            Command::Cursor(direction) => self.cursor = move_cursor(self.cursor, direction),
            Command::PlayCursor => self.play(self.cursor, now),
            Command::Play(position) => {
                self.cursor = position;
                self.play(position, now);
            }
            Command::Reset => {
                self.controller.reset();
                self.opponent_due = None;
                self.toast = None;
                self.cursor = Position::Center;
            }
            Command::CopyCode => self.copy_code(now),
            Command::Quit => {
                info!("Player quit");
                self.should_quit = true;
            }
        }
    }

    /// Advances timers: runs a due opponent move and expires the toast.
    pub fn tick(&mut self, now: Instant) {
        if self.opponent_due.is_some_and(|due| due <= now) {
            self.opponent_due = None;
            self.controller.run_opponent_turn();
            self.absorb_notice(now);
        }
        if self.toast.as_ref().is_some_and(|t| t.expires_at <= now) {
            self.toast = None;
        }
    }

    /// Shows a notice raised outside the controller, such as a failed relay.
    pub fn show_notice(&mut self, notice: Notice, now: Instant) {
        self.show_toast(notice.to_string(), now);
    }

    fn copy_code(&mut self, now: Instant) {
        let Some(code) = self.controller.reward().cloned() else {
            self.show_toast("No promo code yet".to_string(), now);
            return;
        };
        let text = match self.clipboard.copy(code.as_str()) {
            Ok(()) => format!("Promo code {code} copied"),
            Err(e) => {
                warn!(error = %e, "Clipboard write failed");
                format!("Copy the code manually: {code}")
            }
        };
        self.show_toast(text, now);
    }

    fn play(&mut self, position: Position, now: Instant) {
        match self.controller.submit_player_move(position.to_index()) {
            Transition::OpponentToMove => {
                debug!(delay_ms = self.opponent_delay.as_millis() as u64, "Opponent scheduled");
                self.opponent_due = Some(now + self.opponent_delay);
            }
            Transition::Ignored => debug!(%position, "Move ignored"),
            transition => debug!(?transition, "Player move applied"),
        }
        self.absorb_notice(now);
    }

    fn absorb_notice(&mut self, now: Instant) {
        if let Some(notice) = self.controller.take_notice() {
            self.show_notice(notice, now);
        }
    }

    fn show_toast(&mut self, text: String, now: Instant) {
        self.toast = Some(Toast {
            text,
            expires_at: now + NOTICE_DURATION,
        });
    }
}

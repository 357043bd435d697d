//! Game controller: the single owner of game state.
//!
//! The lifecycle is a small state machine derived from the [`GameState`]:
//!
//! ```text
//! PlayerTurn --submit_player_move--> OpponentTurn --run_opponent_turn--> PlayerTurn
//!      |                                  |
//!      +----------> Terminal <------------+
//!                      |
//!                    reset --> PlayerTurn
//! ```
//!
//! Invalid input never produces an error here. A move on an occupied
//! square, or a command in the wrong phase, is ignored and reported as
//! [`Transition::Ignored`].

use super::identity::PlayerIdentity;
use super::notify::{Notice, Notification, Notifier};
use super::opponent::Opponent;
use super::random::RandomSource;
use super::reward::PromoCode;
use super::{GameState, GameStatus, Mark};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Pause between the player's move and the opponent's reply.
pub const OPPONENT_DELAY: Duration = Duration::from_millis(320);

/// How long a transient notice stays on screen.
pub const NOTICE_DURATION: Duration = Duration::from_millis(2600);

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// A mark completed a line.
    Won(Mark),
    /// The board filled with no line completed.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Won(mark) => Some(*mark),
            Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Won(mark) => write!(f, "{mark} wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Lifecycle phase of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnPhase {
    /// Waiting for the player's input.
    PlayerTurn,
    /// Waiting for the paced opponent trigger.
    OpponentTurn,
    /// Game over; only `reset` leaves this phase.
    Terminal(Outcome),
}

/// What a controller command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Command not valid right now; nothing changed.
    Ignored,
    /// The player moved; schedule [`Controller::run_opponent_turn`].
    OpponentToMove,
    /// The opponent moved, or the game was reset.
    PlayerToMove,
    /// The move ended the game.
    Finished(Outcome),
}

/// Drives a single game session.
///
/// Owns the [`GameState`], the pending reward and the transient notice.
/// Randomness and notification delivery are injected so the whole
/// lifecycle runs deterministically under test.
#[derive(Debug)]
pub struct Controller<N, R> {
    state: GameState,
    reward: Option<PromoCode>,
    notice: Option<Notice>,
    identity: Option<PlayerIdentity>,
    opponent: Opponent,
    notifier: N,
    rng: R,
}

impl<N: Notifier, R: RandomSource> Controller<N, R> {
    /// Starts a session on an empty board with the player to move.
    #[instrument(skip(notifier, rng))]
    pub fn new(identity: Option<PlayerIdentity>, notifier: N, rng: R) -> Self {
        info!(has_identity = identity.is_some(), "Starting game session");
        Self {
            state: GameState::new(),
            reward: None,
            notice: None,
            identity,
            opponent: Opponent::default(),
            notifier,
            rng,
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the lifecycle phase.
    pub fn phase(&self) -> TurnPhase {
        match self.state.status() {
            GameStatus::Won(mark) => TurnPhase::Terminal(Outcome::Won(mark)),
            GameStatus::Draw => TurnPhase::Terminal(Outcome::Draw),
            GameStatus::InProgress if self.state.active_mark() == Mark::PLAYER => {
                TurnPhase::PlayerTurn
            }
            GameStatus::InProgress => TurnPhase::OpponentTurn,
        }
    }

    /// Promo code earned by the current game, if the player won it.
    pub fn reward(&self) -> Option<&PromoCode> {
        self.reward.as_ref()
    }

    /// Identity notifications are addressed to.
    pub fn identity(&self) -> Option<PlayerIdentity> {
        self.identity
    }

    /// Takes the pending notice, if any.
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    /// Returns the notifier.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Applies the player's move at a board index (0-8).
    ///
    /// Ignored unless it is the player's turn and the square is free.
    #[instrument(skip(self))]
    pub fn submit_player_move(&mut self, index: usize) -> Transition {
        if self.phase() != TurnPhase::PlayerTurn {
            debug!(phase = ?self.phase(), "Player move outside player turn ignored");
            return Transition::Ignored;
        }
        self.apply(index)
    }

    /// Plays the opponent's reply.
    ///
    /// Ignored unless the controller is waiting for the opponent.
    #[instrument(skip(self))]
    pub fn run_opponent_turn(&mut self) -> Transition {
        if self.phase() != TurnPhase::OpponentTurn {
            debug!(phase = ?self.phase(), "Opponent trigger outside opponent turn ignored");
            return Transition::Ignored;
        }
        match self.opponent.select_move(self.state.board(), &mut self.rng) {
            Some(position) => self.apply(position.to_index()),
            None => {
                warn!("Opponent triggered on a full board");
                Transition::Ignored
            }
        }
    }

    /// Discards the current game and starts a fresh one.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Transition {
        info!(previous = ?self.state.status(), "Resetting game");
        self.state = GameState::new();
        self.reward = None;
        self.notice = None;
        Transition::PlayerToMove
    }

    fn apply(&mut self, index: usize) -> Transition {
        let mover = self.state.active_mark();
        let status = match self.state.play(index) {
            Ok(status) => status,
            Err(e) => {
                debug!(error = %e, "Move ignored");
                return Transition::Ignored;
            }
        };
        debug!(%mover, index, board = %self.state.board().display(), "Move applied");

        match status {
            GameStatus::InProgress if mover == Mark::PLAYER => Transition::OpponentToMove,
            GameStatus::InProgress => Transition::PlayerToMove,
            GameStatus::Won(mark) => self.finish(Outcome::Won(mark)),
            GameStatus::Draw => self.finish(Outcome::Draw),
        }
    }

    fn finish(&mut self, outcome: Outcome) -> Transition {
        info!(%outcome, "Game finished");
        match outcome.winner() {
            Some(mark) if mark == self.opponent.mark() => self.dispatch(Notification::Defeat),
            Some(_) => {
                let code = PromoCode::generate(&mut self.rng);
                info!(%code, "Promo code issued");
                self.reward = Some(code.clone());
                self.dispatch(Notification::Victory { code });
            }
            None => {}
        }
        Transition::Finished(outcome)
    }

    fn dispatch(&mut self, notification: Notification) {
        match self.identity {
            Some(identity) => self.notifier.notify(identity, &notification),
            None => {
                warn!(text = %notification.text(), "Player identity unknown, notification skipped");
                self.notice = Some(Notice::IdentityUnknown);
            }
        }
    }
}

//! Promo tic-tac-toe engine.
//!
//! A single-player game against a rule-based computer opponent. Winning
//! earns a cosmetic promo code; wins and losses are announced to the
//! player's chat through a [`Notifier`].
//!
//! # Architecture
//!
//! - **Board model**: [`Board`], [`Position`] and the [`rules`] module
//! - **Opponent**: [`Opponent`], a fixed-priority one-ply heuristic
//! - **Controller**: [`Controller`], the state machine that owns the game
//! - **Ports**: [`Notifier`] for outbound messages, [`RandomSource`] for
//!   dice rolls, [`HostEnvironment`] for the embedding client
//!
//! # Example
//!
//! ```
//! use promo_tictactoe::{Controller, NullNotifier, ThreadRandom, Transition};
//!
//! let mut game = Controller::new(None, NullNotifier, ThreadRandom::new());
//! assert_eq!(game.submit_player_move(4), Transition::OpponentToMove);
//! game.run_opponent_turn();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod controller;
mod identity;
mod notify;
mod opponent;
mod position;
mod random;
mod reward;
pub mod rules;
mod types;

pub use action::MoveError;
pub use controller::{Controller, NOTICE_DURATION, OPPONENT_DELAY, Outcome, Transition, TurnPhase};
pub use identity::{HostEnvironment, HostSession, IdentityError, PlayerIdentity};
pub use notify::{Notice, Notification, Notifier, NullNotifier, RelayRequest};
pub use opponent::{Decision, Opponent, Rule};
pub use position::Position;
pub use random::{RandomSource, ScriptedRandom, ThreadRandom};
pub use reward::PromoCode;
pub use types::{Board, GameState, GameStatus, Mark, Square};

//! Lifecycle tests for the game controller.

use promo_tictactoe::{
    Board, Controller, GameStatus, Mark, Notice, Notification, Notifier, Outcome, PlayerIdentity,
    Position, PromoCode, ScriptedRandom, Square, Transition, TurnPhase,
};

/// Notifier stub that records every request.
#[derive(Debug, Default)]
struct RecordingNotifier {
    sent: Vec<(PlayerIdentity, Notification)>,
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, identity: PlayerIdentity, notification: &Notification) {
        self.sent.push((identity, notification.clone()));
    }
}

type Session = Controller<RecordingNotifier, ScriptedRandom>;

fn identity() -> PlayerIdentity {
    PlayerIdentity::new(5_550_123).unwrap()
}

fn session(script: impl IntoIterator<Item = usize>) -> Session {
    Controller::new(
        Some(identity()),
        RecordingNotifier::default(),
        ScriptedRandom::new(script),
    )
}

fn mark_at(c: &Session, pos: Position) -> Square {
    c.state().board().get(pos)
}

/// Plays a game X wins on its fourth move down the right column.
///
/// The first scripted draw sends O's fallback move to square 6; the rest
/// of the script feeds the promo code.
fn play_right_column_win(c: &mut Session) -> Transition {
    assert_eq!(c.submit_player_move(0), Transition::OpponentToMove);
    assert_eq!(c.run_opponent_turn(), Transition::PlayerToMove);
    assert_eq!(mark_at(c, Position::Center), Square::Occupied(Mark::O));

    assert_eq!(c.submit_player_move(8), Transition::OpponentToMove);
    assert_eq!(c.run_opponent_turn(), Transition::PlayerToMove);
    assert_eq!(mark_at(c, Position::BottomLeft), Square::Occupied(Mark::O));

    // X threatens the top row; O has no win and blocks at 1.
    assert_eq!(c.submit_player_move(2), Transition::OpponentToMove);
    assert_eq!(c.run_opponent_turn(), Transition::PlayerToMove);
    assert_eq!(mark_at(c, Position::TopCenter), Square::Occupied(Mark::O));

    c.submit_player_move(5)
}

#[test]
fn test_center_opening() {
    let mut c = session([]);
    assert_eq!(c.submit_player_move(4), Transition::OpponentToMove);

    let state = c.state();
    assert_eq!(state.board().get(Position::Center), Square::Occupied(Mark::X));
    assert_eq!(state.status(), GameStatus::InProgress);
    assert_eq!(state.active_mark(), Mark::O);
    assert_eq!(c.phase(), TurnPhase::OpponentTurn);
}

#[test]
fn test_occupied_square_is_ignored() {
    let mut c = session([]);
    c.submit_player_move(0);
    c.run_opponent_turn();
    let before = c.state().clone();

    assert_eq!(c.submit_player_move(4), Transition::Ignored);
    assert_eq!(c.state(), &before);
    assert_eq!(c.phase(), TurnPhase::PlayerTurn);
}

#[test]
fn test_x_win_generates_promo_and_success_notification() {
    let mut c = session([4, 12_345]);
    let t = play_right_column_win(&mut c);
    assert_eq!(t, Transition::Finished(Outcome::Won(Mark::X)));
    assert_eq!(c.state().status(), GameStatus::Won(Mark::X));

    let code = c.reward().cloned().expect("winner gets a code");
    assert_eq!(code.as_str(), "22345");
    let value: u32 = code.as_str().parse().unwrap();
    assert!((PromoCode::MIN..=PromoCode::MAX).contains(&value));

    assert_eq!(
        c.notifier().sent,
        vec![(identity(), Notification::Victory { code: code.clone() })]
    );
    assert!(c.notifier().sent[0].1.text().contains(code.as_str()));
}

#[test]
fn test_opponent_win_sends_defeat_without_reward() {
    // O's fallback draw 0 puts it in the top-left corner.
    let mut c = session([0]);
    c.submit_player_move(4);
    c.run_opponent_turn();
    assert_eq!(mark_at(&c, Position::TopLeft), Square::Occupied(Mark::O));

    // X threatens the anti-diagonal; O blocks at 6.
    c.submit_player_move(2);
    c.run_opponent_turn();
    assert_eq!(mark_at(&c, Position::BottomLeft), Square::Occupied(Mark::O));

    // X threatens column 1, but O completes column 0 first.
    c.submit_player_move(1);
    assert_eq!(c.run_opponent_turn(), Transition::Finished(Outcome::Won(Mark::O)));
    assert_eq!(mark_at(&c, Position::MiddleLeft), Square::Occupied(Mark::O));

    assert_eq!(c.notifier().sent, vec![(identity(), Notification::Defeat)]);
    assert!(c.reward().is_none());
}

#[test]
fn test_full_board_without_line_is_silent_draw() {
    let mut c = session([0]);
    c.submit_player_move(0);
    c.run_opponent_turn(); // O 4
    c.submit_player_move(8);
    c.run_opponent_turn(); // O fallback -> 1
    c.submit_player_move(7);
    c.run_opponent_turn(); // O blocks 6
    c.submit_player_move(2);
    c.run_opponent_turn(); // O blocks 5
    assert_eq!(mark_at(&c, Position::MiddleRight), Square::Occupied(Mark::O));

    // X: 0 2 3 7 8, O: 1 4 5 6.
    assert_eq!(c.submit_player_move(3), Transition::Finished(Outcome::Draw));
    assert_eq!(c.state().status(), GameStatus::Draw);
    assert!(c.state().board().is_full());
    assert!(c.notifier().sent.is_empty());
    assert!(c.reward().is_none());
    assert_eq!(c.take_notice(), None);
}

#[test]
fn test_terminal_ignores_commands_until_reset() {
    let mut c = session([4]);
    play_right_column_win(&mut c);
    assert!(matches!(c.phase(), TurnPhase::Terminal(_)));

    let frozen = c.state().clone();
    assert_eq!(c.submit_player_move(3), Transition::Ignored);
    assert_eq!(c.run_opponent_turn(), Transition::Ignored);
    assert_eq!(c.state(), &frozen);

    assert_eq!(c.reset(), Transition::PlayerToMove);
    assert_eq!(c.state().board(), &Board::new());
    assert_eq!(c.state().active_mark(), Mark::X);
    assert_eq!(c.state().status(), GameStatus::InProgress);
    assert_eq!(c.phase(), TurnPhase::PlayerTurn);
    assert!(c.reward().is_none());
}

#[test]
fn test_reset_after_loss_and_draw() {
    let mut lost = session([0]);
    for player in [4, 2, 1] {
        lost.submit_player_move(player);
        lost.run_opponent_turn();
    }
    assert_eq!(lost.phase(), TurnPhase::Terminal(Outcome::Won(Mark::O)));
    lost.reset();
    assert_eq!(lost.state(), &promo_tictactoe::GameState::new());

    let mut drawn = session([0]);
    for player in [0, 8, 7, 2] {
        drawn.submit_player_move(player);
        drawn.run_opponent_turn();
    }
    drawn.submit_player_move(3);
    assert_eq!(drawn.phase(), TurnPhase::Terminal(Outcome::Draw));
    drawn.reset();
    assert_eq!(drawn.state(), &promo_tictactoe::GameState::new());
}

#[test]
fn test_reset_mid_game() {
    let mut c = session([]);
    c.submit_player_move(3);
    assert_eq!(c.reset(), Transition::PlayerToMove);
    assert_eq!(c.state().board(), &Board::new());
    // The stale opponent trigger finds the player's turn and does nothing.
    assert_eq!(c.run_opponent_turn(), Transition::Ignored);
}

#[test]
fn test_missing_identity_skips_notifier() {
    let mut c = Controller::new(None, RecordingNotifier::default(), ScriptedRandom::new([4]));
    play_right_column_win(&mut c);

    assert_eq!(c.phase(), TurnPhase::Terminal(Outcome::Won(Mark::X)));
    assert_eq!(c.reward().map(PromoCode::as_str), Some("10000"));
    assert!(c.notifier().sent.is_empty());
    assert_eq!(c.take_notice(), Some(Notice::IdentityUnknown));
}

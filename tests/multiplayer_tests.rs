//! Multi-player turn rotation and winner selection.
//!
//! These tests verify frame-synchronized rotation and the tie-break
//! policy for games with 2+ players.

use bowling_score::core::{BowlingError, PlayerId};
use bowling_score::engine::{GameStatus, ScoreEngine};
use bowling_score::pins::ScriptedPins;

fn start(players: usize, rolls: Vec<u8>) -> ScoreEngine<ScriptedPins> {
    let mut engine = ScoreEngine::new(ScriptedPins::new(rolls));
    for _ in 0..players {
        engine.add_player().unwrap();
    }
    engine.start().unwrap();
    engine
}

/// Interleave per-frame roll lists for each player in turn order.
fn interleave(per_player: &[Vec<Vec<u8>>]) -> Vec<u8> {
    let frames = per_player[0].len();
    let mut rolls = Vec::new();
    for frame in 0..frames {
        for player in per_player {
            rolls.extend(&player[frame]);
        }
    }
    rolls
}

fn open_nines() -> Vec<Vec<u8>> {
    vec![vec![9, 0]; 10]
}

fn all_strikes() -> Vec<Vec<u8>> {
    let mut frames = vec![vec![10]; 9];
    frames.push(vec![10, 10, 10]);
    frames
}

fn all_fives() -> Vec<Vec<u8>> {
    let mut frames = vec![vec![5, 5]; 9];
    frames.push(vec![5, 5, 5]);
    frames
}

// =============================================================================
// Rotation
// =============================================================================

/// Players alternate frame by frame; nobody starts frame i+1 early.
#[test]
fn test_turns_alternate_per_frame() {
    let mut engine = start(2, interleave(&[open_nines(), all_strikes()]));
    engine.play_to_end().unwrap();

    let turns: Vec<_> = engine
        .history()
        .iter()
        .map(|r| (r.frame, r.player.index()))
        .collect();

    let mut expected = Vec::new();
    for frame in 0..9 {
        expected.extend([(frame, 0), (frame, 0), (frame, 1)]);
    }
    expected.extend([(9, 0), (9, 0), (9, 1), (9, 1), (9, 1)]);
    assert_eq!(turns, expected);
}

/// After the first player resolves frame 10, the second still finishes.
#[test]
fn test_game_waits_for_last_player_in_final_frame() {
    let mut engine = start(2, interleave(&[open_nines(), all_strikes()]));

    // 9 frames of (2 + 1) balls, then player 0's two balls in frame 10.
    for _ in 0..(9 * 3 + 2) {
        engine.roll().unwrap();
    }
    assert_eq!(
        engine.status(),
        GameStatus::InProgress { frame: 9, active: PlayerId::new(1) }
    );
    assert!(engine.player(PlayerId::new(0)).unwrap().is_finished());

    engine.roll().unwrap();
    engine.roll().unwrap();
    assert!(engine.status().is_in_progress());

    let last = engine.roll().unwrap();
    assert_eq!(last.status, GameStatus::Ended { winner: PlayerId::new(1) });
    assert_eq!(last.total, 300);
}

/// Every frame keeps every player in turn order, for four players.
#[test]
fn test_four_player_rotation() {
    let players = vec![open_nines(), all_fives(), all_strikes(), open_nines()];
    let mut engine = start(4, interleave(&players));
    engine.play_to_end().unwrap();

    let mut last = (0, 0);
    for record in engine.history() {
        let turn = (record.frame, record.player.index());
        assert!(turn >= last, "turn went backwards: {last:?} -> {turn:?}");
        last = turn;
    }
    assert_eq!(last, (9, 3));

    let totals: Vec<_> = engine.snapshot().players.iter().map(|p| p.total).collect();
    assert_eq!(totals, vec![90, 150, 300, 90]);
}

// =============================================================================
// Winner Selection
// =============================================================================

/// Higher total wins regardless of turn order.
#[test]
fn test_higher_total_wins() {
    let mut engine = start(2, interleave(&[open_nines(), all_fives()]));
    assert_eq!(engine.play_to_end(), Ok(PlayerId::new(1)));
    assert_eq!(engine.winner_index(), Ok(PlayerId::new(1)));
}

/// A tie goes to the earliest player in turn order.
#[test]
fn test_tie_goes_to_first_player() {
    let mut engine = start(2, interleave(&[all_fives(), all_fives()]));
    assert_eq!(engine.play_to_end(), Ok(PlayerId::new(0)));
}

/// Tie between later players resolves to the earlier of them.
#[test]
fn test_tie_between_later_players() {
    let mut engine = start(3, interleave(&[open_nines(), all_fives(), all_fives()]));
    assert_eq!(engine.play_to_end(), Ok(PlayerId::new(1)));
}

// =============================================================================
// After The Game
// =============================================================================

/// Rolling after the end fails and changes nothing.
#[test]
fn test_roll_after_end_does_not_mutate() {
    let mut rolls = interleave(&[all_fives(), open_nines()]);
    rolls.extend([4, 4, 4]);
    let mut engine = start(2, rolls);
    engine.play_to_end().unwrap();

    let before = engine.snapshot();
    let history = engine.history().len();

    assert_eq!(engine.roll(), Err(BowlingError::GameAlreadyEnded));
    assert_eq!(engine.snapshot(), before);
    assert_eq!(engine.history().len(), history);
    assert_eq!(engine.source().remaining(), 3);

    assert_eq!(engine.start(), Err(BowlingError::GameAlreadyEnded));
    assert_eq!(engine.add_player(), Err(BowlingError::GameAlreadyStarted));
}

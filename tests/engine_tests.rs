//! Engine state machine and snapshot integration tests.

use std::thread;

use bowling_score::core::{BowlingError, LaneConfig, PlayerId};
use bowling_score::engine::{GameSnapshot, GameStatus, ScoreEngine, SharedGame};
use bowling_score::pins::{PinSource, RandomPins, ScriptedPins};
use bowling_score::scoring::RollSymbol;

// =============================================================================
// Lifecycle
// =============================================================================

/// NotStarted -> InProgress -> Ended, with the documented errors at each step.
#[test]
fn test_full_lifecycle() {
    let mut engine = ScoreEngine::new(ScriptedPins::new([10; 12]));
    assert_eq!(engine.status(), GameStatus::NotStarted);
    assert_eq!(engine.roll(), Err(BowlingError::GameNotStarted));
    assert_eq!(engine.start(), Err(BowlingError::NoPlayers));

    let player = engine.add_player().unwrap();
    engine.start().unwrap();
    assert_eq!(
        engine.status(),
        GameStatus::InProgress { frame: 0, active: player }
    );
    assert_eq!(engine.winner_index(), Err(BowlingError::GameNotEnded));

    for frame in 0..9 {
        let outcome = engine.roll().unwrap();
        assert_eq!(outcome.frame, frame);
        assert_eq!(outcome.symbol, RollSymbol::Strike);
        assert!(outcome.frame_complete);
    }
    engine.roll().unwrap();
    engine.roll().unwrap();
    let last = engine.roll().unwrap();
    assert_eq!(last.status, GameStatus::Ended { winner: player });
    assert_eq!(engine.winner_index(), Ok(player));
    assert_eq!(engine.roll(), Err(BowlingError::GameAlreadyEnded));
}

/// Boxed sources can stand in for concrete ones.
#[test]
fn test_boxed_pin_source() {
    let source: Box<dyn PinSource + Send> = Box::new(ScriptedPins::new([9, 1, 10]));
    let mut engine = ScoreEngine::new(source);
    engine.add_player().unwrap();
    engine.start().unwrap();

    engine.roll().unwrap();
    let spare = engine.roll().unwrap();
    assert_eq!(spare.symbol, RollSymbol::Spare);
    assert_eq!(spare.frame_score, None);

    let strike = engine.roll().unwrap();
    assert_eq!(strike.cumulative[0], Some(20));
}

// =============================================================================
// Snapshots
// =============================================================================

/// A fresh game renders empty slots for every player.
#[test]
fn test_initial_snapshot() {
    let mut engine = ScoreEngine::seeded(9);
    engine.add_player().unwrap();
    engine.add_player().unwrap();

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.status, GameStatus::NotStarted);
    assert_eq!(snapshot.current_turn(), None);
    assert_eq!(snapshot.players.len(), 2);

    for player in &snapshot.players {
        assert_eq!(player.frames.len(), 10);
        assert_eq!(player.frames[0].rolls, vec![None, None]);
        assert_eq!(player.frames[9].rolls, vec![None, None, None]);
        assert_eq!(player.total, 0);
        assert!(player.cumulative.iter().all(Option::is_none));
    }
}

/// A pending strike shows its symbol but no score.
#[test]
fn test_snapshot_mid_game() {
    let mut engine = ScoreEngine::new(ScriptedPins::new([10, 3]));
    engine.add_player().unwrap();
    engine.start().unwrap();
    engine.roll().unwrap();
    engine.roll().unwrap();

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.current_turn(), Some((1, PlayerId::new(0))));

    let frames = &snapshot.players[0].frames;
    assert_eq!(frames[0].rolls, vec![Some(10), None]);
    assert_eq!(frames[0].symbols, vec![Some(RollSymbol::Strike), None]);
    assert_eq!(frames[0].score, None);
    assert!(frames[0].complete);
    assert_eq!(frames[1].rolls, vec![Some(3), None]);
    assert!(!frames[1].complete);
}

/// Snapshots survive a JSON round trip.
#[test]
fn test_snapshot_serde() {
    let mut engine = ScoreEngine::seeded(21);
    engine.add_player().unwrap();
    engine.start().unwrap();
    engine.play_to_end().unwrap();

    let snapshot = engine.snapshot();
    let json = serde_json::to_string(&snapshot).unwrap();
    let restored: GameSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, snapshot);
    assert_eq!(restored.winner(), Some(PlayerId::new(0)));
}

/// Custom lanes show up in the snapshot.
#[test]
fn test_snapshot_reports_config() {
    let config = LaneConfig::default().with_frames(4);
    let mut engine = ScoreEngine::with_config(config, RandomPins::seeded(2)).unwrap();
    engine.add_player().unwrap();

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.config, config);
    assert_eq!(snapshot.players[0].frames.len(), 4);
    assert_eq!(snapshot.players[0].frames[3].rolls.len(), 3);
}

// =============================================================================
// Shared Sessions
// =============================================================================

/// Concurrent callers still produce one valid, serialized game.
#[test]
fn test_shared_game_serializes_rolls() {
    let game = SharedGame::new(ScoreEngine::seeded(1234));
    for _ in 0..3 {
        game.add_player().unwrap();
    }
    game.start().unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let game = game.clone();
            thread::spawn(move || {
                let mut rolled = 0usize;
                loop {
                    match game.roll() {
                        Ok(_) => rolled += 1,
                        Err(BowlingError::GameAlreadyEnded) => return rolled,
                        Err(other) => panic!("unexpected error: {other}"),
                    }
                }
            })
        })
        .collect();

    let rolled: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();

    let winner = game.winner_index().unwrap();
    let snapshot = game.snapshot();
    assert_eq!(snapshot.winner(), Some(winner));
    assert_eq!(game.with_engine(|e| e.history().len()), rolled);

    // Same seed played on one thread gives the same game.
    let mut serial = ScoreEngine::seeded(1234);
    for _ in 0..3 {
        serial.add_player().unwrap();
    }
    serial.start().unwrap();
    serial.play_to_end().unwrap();
    assert_eq!(serial.snapshot(), snapshot);
}

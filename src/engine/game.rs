//! Turn and frame state machine.
//!
//! ## Turn rotation
//!
//! Frames are a synchronization point: every player finishes frame `i`,
//! in registration order, before anyone starts frame `i + 1`. A player
//! keeps rolling until their frame is complete, then hands off.
//!
//! ## States
//!
//! `NotStarted` → `start()` → `InProgress` → last player finishes the last
//! frame → `Ended`. The frame and active player only ever move forward.

use im::Vector;
use tracing::{debug, info, instrument, trace};

use super::outcome::{GameStatus, RollOutcome, RollRecord};
use super::snapshot::{GameSnapshot, PlayerSnapshot};
use crate::core::{BowlingError, LaneConfig, PlayerId, PlayerMap, Result};
use crate::pins::{PinSource, RandomPins};
use crate::scoring::Player;

/// Drives one or more players through a game.
///
/// ## Example
///
/// ```
/// use bowling_score::engine::{GameStatus, ScoreEngine};
/// use bowling_score::pins::ScriptedPins;
///
/// let mut engine = ScoreEngine::new(ScriptedPins::new([10; 12]));
/// engine.add_player().unwrap();
/// engine.start().unwrap();
///
/// let winner = engine.play_to_end().unwrap();
/// assert_eq!(engine.player(winner).unwrap().total_score(), 300);
/// assert!(engine.status().is_ended());
/// ```
#[derive(Clone, Debug)]
pub struct ScoreEngine<S = RandomPins> {
    config: LaneConfig,
    players: PlayerMap<Player>,
    status: GameStatus,
    source: S,
    history: Vector<RollRecord>,
}

impl ScoreEngine<RandomPins> {
    /// Standard game with random knockdowns from `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(RandomPins::seeded(seed))
    }
}

impl<S: PinSource> ScoreEngine<S> {
    /// Standard ten-pin game drawing knockdowns from `source`.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            config: LaneConfig::default(),
            players: PlayerMap::new(),
            status: GameStatus::NotStarted,
            source,
            history: Vector::new(),
        }
    }

    /// Game under custom lane rules.
    pub fn with_config(config: LaneConfig, source: S) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new(source)
        })
    }

    /// Lane rules in force.
    #[must_use]
    pub fn config(&self) -> &LaneConfig {
        &self.config
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// All players in turn order.
    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    /// Number of registered players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// Get a player's scoresheet.
    pub fn player(&self, id: PlayerId) -> Result<&Player> {
        self.players
            .get(id)
            .ok_or(BowlingError::UnknownPlayer { player: id })
    }

    /// Every ball rolled so far, in play order.
    #[must_use]
    pub fn history(&self) -> &Vector<RollRecord> {
        &self.history
    }

    /// The pin source.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Register a player. Turn order is registration order.
    pub fn add_player(&mut self) -> Result<PlayerId> {
        if self.status != GameStatus::NotStarted {
            return Err(BowlingError::GameAlreadyStarted);
        }
        let id = self.players.push(Player::new(&self.config)?)?;
        debug!(player = %id, "player registered");
        Ok(id)
    }

    /// Begin play with the first player in the first frame.
    pub fn start(&mut self) -> Result<()> {
        match self.status {
            GameStatus::NotStarted => {}
            GameStatus::InProgress { .. } => return Err(BowlingError::GameAlreadyStarted),
            GameStatus::Ended { .. } => return Err(BowlingError::GameAlreadyEnded),
        }
        if self.players.is_empty() {
            return Err(BowlingError::NoPlayers);
        }
        self.status = GameStatus::InProgress {
            frame: 0,
            active: PlayerId::new(0),
        };
        info!(players = self.players.player_count(), frames = self.config.frames, "game started");
        Ok(())
    }

    /// Roll one ball for the active player and advance the turn.
    ///
    /// A rejected roll leaves every frame and the turn untouched.
    #[instrument(level = "trace", skip(self))]
    pub fn roll(&mut self) -> Result<RollOutcome> {
        let (frame, active) = match self.status {
            GameStatus::NotStarted => return Err(BowlingError::GameNotStarted),
            GameStatus::Ended { .. } => return Err(BowlingError::GameAlreadyEnded),
            GameStatus::InProgress { frame, active } => (frame, active),
        };

        let player = self
            .players
            .get_mut(active)
            .ok_or(BowlingError::UnknownPlayer { player: active })?;
        let standing = player.frame(frame)?.pins_standing_for_next_roll();
        let pins = self.source.next(standing);
        let symbol = player.record_roll(frame, pins)?;

        let roll = player.frame(frame)?.rolls_taken().saturating_sub(1);
        let frame_complete = player.is_frame_finished(frame)?;
        let frame_score = player.frame_score(frame).ok();
        let cumulative = player.cumulative_scores();
        let total = player.total_score();
        debug!(player = %active, frame, roll, pins, %symbol, total, "roll");

        let record = RollRecord {
            player: active,
            frame,
            roll,
            pins,
        };
        self.history.push_back(record);

        if frame_complete {
            self.status = self.next_turn(frame, active);
        }

        Ok(RollOutcome {
            player: active,
            frame,
            roll,
            pins,
            symbol,
            frame_complete,
            frame_score,
            cumulative,
            total,
            status: self.status,
        })
    }

    /// Roll until the game ends and return the winner.
    pub fn play_to_end(&mut self) -> Result<PlayerId> {
        loop {
            if let GameStatus::Ended { winner } = self.roll()?.status {
                return Ok(winner);
            }
        }
    }

    /// Read-only view of the whole game.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            config: self.config,
            status: self.status,
            players: self
                .players
                .iter()
                .map(|(id, p)| PlayerSnapshot::capture(id, p))
                .collect(),
        }
    }

    /// The winner of an ended game.
    pub fn winner_index(&self) -> Result<PlayerId> {
        match self.status {
            GameStatus::Ended { winner } => Ok(winner),
            _ => Err(BowlingError::GameNotEnded),
        }
    }

    /// Status after `active` completes `frame`.
    fn next_turn(&self, frame: usize, active: PlayerId) -> GameStatus {
        let last_player = self.players.last_id() == Some(active);
        trace!(player = %active, frame, "frame complete");

        if last_player && frame >= self.config.last_frame() {
            let winner = self.leader();
            let score = self.players.get(winner).map_or(0, Player::total_score);
            info!(winner = %winner, score, "game ended");
            GameStatus::Ended { winner }
        } else if last_player {
            trace!(frame = frame + 1, "next frame");
            GameStatus::InProgress {
                frame: frame + 1,
                active: PlayerId::new(0),
            }
        } else {
            GameStatus::InProgress {
                frame,
                active: PlayerId::new(active.0 + 1),
            }
        }
    }

    /// Strictly highest total; the earliest player wins a tie.
    fn leader(&self) -> PlayerId {
        let mut best: Option<(PlayerId, u16)> = None;
        for (id, player) in self.players.iter() {
            let score = player.total_score();
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((id, score));
            }
        }
        best.map_or(PlayerId::new(0), |(id, _)| id)
    }
}

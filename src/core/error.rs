//! Error types for the score engine.
//!
//! Every error is a usage error by the caller: nothing here is retried
//! automatically, and no operation partially applies before failing.

use derive_more::{Display, Error};

use super::player::PlayerId;

/// Why a roll was rejected by a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum RollRejection {
    /// More pins than are standing in the current rack.
    #[display("only {standing} pins standing")]
    TooManyPins {
        /// Pins standing before the roll.
        standing: u8,
    },
    /// The frame has no rolls left.
    #[display("frame is already complete")]
    FrameComplete,
}

/// All errors the engine can return.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum BowlingError {
    /// The pin count violates the physical or frame constraints.
    #[display("invalid roll of {pins} pins in frame {frame}: {reason}")]
    InvalidRoll {
        /// Frame index (0-based).
        frame: usize,
        /// Pins the roll claimed to knock down.
        pins: u8,
        /// Why it was rejected.
        reason: RollRejection,
    },

    /// A frame score was requested before its bonus rolls were recorded.
    #[display("score of frame {frame} is not resolvable yet")]
    IncompleteLookahead {
        /// Frame index (0-based).
        frame: usize,
    },

    /// Frame index past the end of the game.
    #[display("frame {frame} out of range (game has {frames} frames)")]
    FrameOutOfRange {
        /// Requested frame index.
        frame: usize,
        /// Frames per game.
        frames: usize,
    },

    /// No player with this id is registered.
    #[display("{player} is not registered")]
    UnknownPlayer {
        /// Requested player.
        player: PlayerId,
    },

    /// `roll()` before `start()`.
    #[display("game has not started")]
    GameNotStarted,

    /// Registration or `start()` after play began.
    #[display("game has already started")]
    GameAlreadyStarted,

    /// Any mutation after the last frame resolved.
    #[display("game has already ended")]
    GameAlreadyEnded,

    /// `start()` with nobody registered.
    #[display("cannot start a game without players")]
    NoPlayers,

    /// Winner requested while the game is still open.
    #[display("game has not ended")]
    GameNotEnded,

    /// Player ids are `u8`.
    #[display("at most {max} players supported")]
    TooManyPlayers {
        /// Upper bound on registered players.
        max: usize,
    },

    /// Rejected lane configuration.
    #[display("invalid lane configuration: {reason}")]
    InvalidConfig {
        /// What was wrong.
        reason: &'static str,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BowlingError>;

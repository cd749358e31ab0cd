//! Game status and what a roll reports back to the caller.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::scoring::RollSymbol;

/// Where the game stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Players may still register.
    NotStarted,
    /// `active` is rolling in `frame`.
    InProgress {
        /// Frame every player is working through (0-based).
        frame: usize,
        /// Whose turn it is.
        active: PlayerId,
    },
    /// Every frame of every player is resolved.
    Ended {
        /// Highest total; earliest in turn order on a tie.
        winner: PlayerId,
    },
}

impl GameStatus {
    /// Check if rolls are accepted.
    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        matches!(self, GameStatus::InProgress { .. })
    }

    /// Check if the game is over.
    #[must_use]
    pub fn is_ended(&self) -> bool {
        matches!(self, GameStatus::Ended { .. })
    }
}

/// A single ball in the roll history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RollRecord {
    /// Who rolled.
    pub player: PlayerId,
    /// Frame index.
    pub frame: usize,
    /// Ball index within the frame.
    pub roll: usize,
    /// Pins knocked down.
    pub pins: u8,
}

/// Everything a display needs after one `roll()`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    /// Who rolled.
    pub player: PlayerId,
    /// Frame index.
    pub frame: usize,
    /// Ball index within the frame.
    pub roll: usize,
    /// Pins knocked down.
    pub pins: u8,
    /// Scoresheet notation for this ball.
    pub symbol: RollSymbol,
    /// The frame takes no more rolls.
    pub frame_complete: bool,
    /// Score of this frame, once its bonus balls are in.
    pub frame_score: Option<u16>,
    /// The player's running totals. Earlier frames may resolve on this roll.
    pub cumulative: Vec<Option<u16>>,
    /// The player's total of all resolved frames.
    pub total: u16,
    /// Status after the roll.
    pub status: GameStatus,
}

impl RollOutcome {
    /// The history entry for this roll.
    #[must_use]
    pub fn record(&self) -> RollRecord {
        RollRecord {
            player: self.player,
            frame: self.frame,
            roll: self.roll,
            pins: self.pins,
        }
    }
}

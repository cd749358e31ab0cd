//! Read-only views of a game for rendering or recovery.

use serde::{Deserialize, Serialize};

use super::outcome::GameStatus;
use crate::core::{LaneConfig, PlayerId};
use crate::scoring::{Frame, Player, RollSymbol};

/// One frame as drawn on a scoresheet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    /// Roll slots (2, or 3 in the last frame); `None` until rolled.
    pub rolls: Vec<Option<u8>>,
    /// Notation for each slot.
    pub symbols: Vec<Option<RollSymbol>>,
    /// Frame score, once resolvable.
    pub score: Option<u16>,
    /// The frame takes no more rolls.
    pub complete: bool,
}

impl FrameSnapshot {
    fn capture(frame: &Frame, score: Option<u16>) -> Self {
        Self {
            rolls: frame.slots(),
            symbols: frame.symbols(),
            score,
            complete: frame.is_complete(),
        }
    }
}

/// One player's scoresheet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    /// Turn-order id.
    pub id: PlayerId,
    /// Every frame of the game.
    pub frames: Vec<FrameSnapshot>,
    /// Running total after each frame.
    pub cumulative: Vec<Option<u16>>,
    /// Total of resolved frames.
    pub total: u16,
}

impl PlayerSnapshot {
    pub(crate) fn capture(id: PlayerId, player: &Player) -> Self {
        let frames = player
            .frames()
            .iter()
            .map(|f| FrameSnapshot::capture(f, player.frame_score(f.index()).ok()))
            .collect();
        Self {
            id,
            frames,
            cumulative: player.cumulative_scores(),
            total: player.total_score(),
        }
    }
}

/// The whole game at one point in time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Lane rules in force.
    pub config: LaneConfig,
    /// Game status.
    pub status: GameStatus,
    /// Players in turn order.
    pub players: Vec<PlayerSnapshot>,
}

impl GameSnapshot {
    /// Frame and player whose turn it is, while in progress.
    #[must_use]
    pub fn current_turn(&self) -> Option<(usize, PlayerId)> {
        match self.status {
            GameStatus::InProgress { frame, active } => Some((frame, active)),
            _ => None,
        }
    }

    /// The winner, once ended.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self.status {
            GameStatus::Ended { winner } => Some(winner),
            _ => None,
        }
    }
}

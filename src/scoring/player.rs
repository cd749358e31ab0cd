//! A player's scoresheet: one frame per turn plus score resolution.
//!
//! ## Bonus look-ahead
//!
//! A strike scores the next two balls and a spare the next one, read as a
//! flat sequence across the following frames. The last frame never looks
//! ahead; its bonus balls are its own extra rolls.

use serde::{Deserialize, Serialize};

use super::frame::Frame;
use super::symbol::RollSymbol;
use crate::core::{BowlingError, LaneConfig, Result};

/// One player's frames.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    frames: Vec<Frame>,
}

impl Player {
    /// Create a player with an empty frame for every frame of the game.
    pub fn new(config: &LaneConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            frames: (0..config.frames).map(|i| Frame::new(i, config)).collect(),
        })
    }

    /// All frames in order.
    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Get a frame by index.
    pub fn frame(&self, frame_index: usize) -> Result<&Frame> {
        self.frames
            .get(frame_index)
            .ok_or(BowlingError::FrameOutOfRange {
                frame: frame_index,
                frames: self.frames.len(),
            })
    }

    /// Record a ball in the given frame and return its scoresheet symbol.
    pub fn record_roll(&mut self, frame_index: usize, pins: u8) -> Result<RollSymbol> {
        let frames = self.frames.len();
        self.frames
            .get_mut(frame_index)
            .ok_or(BowlingError::FrameOutOfRange {
                frame: frame_index,
                frames,
            })?
            .record_roll(pins)
    }

    /// Check if the given frame takes no more rolls.
    pub fn is_frame_finished(&self, frame_index: usize) -> Result<bool> {
        Ok(self.frame(frame_index)?.is_complete())
    }

    /// First frame that still takes rolls, or `None` once all are done.
    #[must_use]
    pub fn current_frame(&self) -> Option<usize> {
        self.frames.iter().position(|f| !f.is_complete())
    }

    /// Score of a single frame including its bonus.
    ///
    /// Fails with `IncompleteLookahead` until the frame and every ball its
    /// bonus reads have been rolled.
    pub fn frame_score(&self, frame_index: usize) -> Result<u16> {
        let frame = self.frame(frame_index)?;
        let pending = || BowlingError::IncompleteLookahead { frame: frame_index };

        if !frame.is_complete() {
            return Err(pending());
        }

        let bonus_balls = if frame.is_last() {
            0
        } else if frame.is_strike() {
            2
        } else if frame.is_spare() {
            1
        } else {
            0
        };

        let mut taken = 0;
        let mut bonus = 0u16;
        for pins in self.rolls_after(frame_index).take(bonus_balls) {
            bonus = bonus.saturating_add(u16::from(pins));
            taken += 1;
        }
        if taken < bonus_balls {
            return Err(pending());
        }

        Ok(frame.pins_knocked_down().saturating_add(bonus))
    }

    /// Running total after each frame.
    ///
    /// `None` from the first frame whose score is not yet resolvable.
    #[must_use]
    pub fn cumulative_scores(&self) -> Vec<Option<u16>> {
        let mut running = Some(0u16);
        (0..self.frames.len())
            .map(|i| {
                running = running
                    .and_then(|total| Some(total.saturating_add(self.frame_score(i).ok()?)));
                running
            })
            .collect()
    }

    /// Sum of every frame score resolvable so far.
    #[must_use]
    pub fn total_score(&self) -> u16 {
        (0..self.frames.len())
            .filter_map(|i| self.frame_score(i).ok())
            .fold(0, u16::saturating_add)
    }

    /// Check if every frame is complete.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.frames.iter().all(Frame::is_complete)
    }

    /// Balls rolled after the given frame, as one flat sequence.
    ///
    /// Stops after the first frame still open, so a gap in the sheet never
    /// lets a bonus read past an unplayed frame.
    fn rolls_after(&self, frame_index: usize) -> impl Iterator<Item = u8> + '_ {
        let later = &self.frames[frame_index + 1..];
        let end = later
            .iter()
            .position(|f| !f.is_complete())
            .map_or(later.len(), |open| open + 1);
        later[..end].iter().flat_map(|f| f.rolls().iter().copied())
    }
}

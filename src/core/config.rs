//! Lane configuration.
//!
//! Standard ten-pin rules are the default. Pin and frame counts are
//! parameters so rules can be exercised on shorter games in tests.

use serde::{Deserialize, Serialize};

use super::error::{BowlingError, Result};

/// Rack size and game length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneConfig {
    /// Pins in a full rack (default: 10).
    pub pins: u8,

    /// Frames per game (default: 10).
    /// The last frame gets the bonus-roll rules.
    pub frames: usize,
}

impl Default for LaneConfig {
    fn default() -> Self {
        Self {
            pins: 10,
            frames: 10,
        }
    }
}

impl LaneConfig {
    /// Set the rack size.
    #[must_use]
    pub fn with_pins(mut self, pins: u8) -> Self {
        self.pins = pins;
        self
    }

    /// Set the number of frames.
    #[must_use]
    pub fn with_frames(mut self, frames: usize) -> Self {
        self.frames = frames;
        self
    }

    /// Index of the final frame.
    #[must_use]
    pub fn last_frame(&self) -> usize {
        self.frames.saturating_sub(1)
    }

    /// Highest score reachable under this configuration.
    #[must_use]
    pub fn perfect_score(&self) -> u64 {
        3 * u64::from(self.pins) * self.frames as u64
    }

    /// Reject configurations the rules can't be applied to.
    pub fn validate(&self) -> Result<()> {
        if self.pins == 0 {
            return Err(BowlingError::InvalidConfig {
                reason: "rack must have at least one pin",
            });
        }
        if self.frames == 0 {
            return Err(BowlingError::InvalidConfig {
                reason: "game must have at least one frame",
            });
        }
        if self.perfect_score() > u64::from(u16::MAX) {
            return Err(BowlingError::InvalidConfig {
                reason: "perfect score must fit in 16 bits",
            });
        }
        Ok(())
    }
}

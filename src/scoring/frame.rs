//! A single frame: up to two rolls, or three in the last frame.
//!
//! ## Racks
//!
//! A frame is played against one or more racks. Frames before the last
//! only ever see one rack. In the last frame a strike or spare resets
//! the deck to a full rack, so each "leg" is capped independently.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::symbol::RollSymbol;
use crate::core::{BowlingError, LaneConfig, Result, RollRejection};

/// Deck state before a given ball.
#[derive(Clone, Copy, Debug)]
struct Rack {
    standing: u8,
    /// Next ball is the first at a full rack.
    fresh: bool,
}

/// One scoring unit for one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    index: usize,
    pins: u8,
    last: bool,
    rolls: SmallVec<[u8; 3]>,
}

impl Frame {
    /// Create an empty frame at `index` of a game played under `config`.
    #[must_use]
    pub fn new(index: usize, config: &LaneConfig) -> Self {
        Self {
            index,
            pins: config.pins,
            last: index == config.last_frame(),
            rolls: SmallVec::new(),
        }
    }

    /// Frame index (0-based).
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if this is the final frame of the game.
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.last
    }

    /// Rolls taken so far, in order.
    #[must_use]
    pub fn rolls(&self) -> &[u8] {
        &self.rolls
    }

    /// Number of rolls taken.
    #[must_use]
    pub fn rolls_taken(&self) -> usize {
        self.rolls.len()
    }

    /// Roll slots on the scoresheet: 3 for the last frame, 2 otherwise.
    #[must_use]
    pub fn max_rolls(&self) -> usize {
        if self.last {
            3
        } else {
            2
        }
    }

    /// Roll slots with `None` for rolls not yet taken.
    #[must_use]
    pub fn slots(&self) -> Vec<Option<u8>> {
        (0..self.max_rolls())
            .map(|i| self.rolls.get(i).copied())
            .collect()
    }

    /// Sum of all pins knocked down in this frame.
    #[must_use]
    pub fn pins_knocked_down(&self) -> u16 {
        self.rolls.iter().map(|&r| u16::from(r)).sum()
    }

    /// First ball took the whole rack.
    #[must_use]
    pub fn is_strike(&self) -> bool {
        self.rolls.first() == Some(&self.pins)
    }

    /// First two balls took the whole rack, the first alone did not.
    #[must_use]
    pub fn is_spare(&self) -> bool {
        match self.rolls.as_slice() {
            [first, second, ..] => {
                *first < self.pins && u16::from(*first) + u16::from(*second) == u16::from(self.pins)
            }
            _ => false,
        }
    }

    /// Check if no more rolls are allowed in this frame.
    ///
    /// Before the last frame: after two balls, or after a strike.
    /// Last frame: after three balls, or after two that left pins standing.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        let taken = self.rolls.len();
        if self.last {
            taken >= 3 || (taken == 2 && !self.is_strike() && !self.is_spare())
        } else {
            taken >= 2 || self.is_strike()
        }
    }

    /// Pins on the deck for the next ball; 0 once the frame is complete.
    #[must_use]
    pub fn pins_standing_for_next_roll(&self) -> u8 {
        if self.is_complete() {
            return 0;
        }
        self.rack_before(self.rolls.len()).standing
    }

    /// Record the next ball and return its scoresheet symbol.
    ///
    /// Either the roll is appended or the frame is left untouched.
    pub fn record_roll(&mut self, pins: u8) -> Result<RollSymbol> {
        if self.is_complete() {
            return Err(BowlingError::InvalidRoll {
                frame: self.index,
                pins,
                reason: RollRejection::FrameComplete,
            });
        }
        let rack = self.rack_before(self.rolls.len());
        if pins > rack.standing {
            return Err(BowlingError::InvalidRoll {
                frame: self.index,
                pins,
                reason: RollRejection::TooManyPins {
                    standing: rack.standing,
                },
            });
        }
        self.rolls.push(pins);
        Ok(self.classify(rack, pins))
    }

    /// Scoresheet symbol for the roll at `roll_index`, if taken.
    ///
    /// The first ball at a full rack is a strike when it takes every pin;
    /// a later ball that clears what was left is a spare, even after a
    /// gutter ball, so `0` then `10` reads `-` `/`.
    #[must_use]
    pub fn render_symbol(&self, roll_index: usize) -> Option<RollSymbol> {
        let pins = *self.rolls.get(roll_index)?;
        Some(self.classify(self.rack_before(roll_index), pins))
    }

    /// Symbols for every roll slot.
    #[must_use]
    pub fn symbols(&self) -> Vec<Option<RollSymbol>> {
        (0..self.max_rolls()).map(|i| self.render_symbol(i)).collect()
    }

    fn classify(&self, rack: Rack, pins: u8) -> RollSymbol {
        if rack.fresh && pins == self.pins {
            RollSymbol::Strike
        } else if !rack.fresh && pins == rack.standing {
            RollSymbol::Spare
        } else if pins == 0 {
            RollSymbol::Miss
        } else {
            RollSymbol::Pins(pins)
        }
    }

    /// Walk the first `upto` rolls and return the deck they leave behind.
    fn rack_before(&self, upto: usize) -> Rack {
        let full = Rack {
            standing: self.pins,
            fresh: true,
        };
        self.rolls[..upto.min(self.rolls.len())]
            .iter()
            .fold(full, |rack, &roll| {
                let standing = rack.standing.saturating_sub(roll);
                if standing == 0 {
                    full
                } else {
                    Rack {
                        standing,
                        fresh: false,
                    }
                }
            })
    }
}

//! `PinSource` trait and its implementations.

use std::collections::VecDeque;

use tracing::warn;

use crate::core::GameRng;

/// Supplies the number of pins knocked down by a roll.
///
/// ## Contract
///
/// `next(standing)` must return a value in `0..=standing`. The engine
/// still validates every value it records, so a source that breaks the
/// contract produces `BowlingError::InvalidRoll` instead of corrupt state.
pub trait PinSource {
    /// Pins knocked down with `standing` pins on the deck.
    fn next(&mut self, standing: u8) -> u8;
}

impl<T: PinSource + ?Sized> PinSource for Box<T> {
    fn next(&mut self, standing: u8) -> u8 {
        (**self).next(standing)
    }
}

/// Uniformly random knockdowns.
#[derive(Clone, Debug)]
pub struct RandomPins {
    rng: GameRng,
}

impl RandomPins {
    /// Random source seeded from entropy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: GameRng::from_entropy(),
        }
    }

    /// Reproducible source: the same seed plays the same game.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Seed of the underlying RNG.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl Default for RandomPins {
    fn default() -> Self {
        Self::new()
    }
}

impl PinSource for RandomPins {
    fn next(&mut self, standing: u8) -> u8 {
        self.rng.gen_pins(standing)
    }
}

/// Replays a fixed sequence of knockdowns, then gutter balls.
///
/// Values are returned as given, without clamping to `standing`.
///
/// ```
/// use bowling_score::pins::{PinSource, ScriptedPins};
///
/// let mut pins = ScriptedPins::new([10, 7, 3]);
/// assert_eq!(pins.next(10), 10);
/// assert_eq!(pins.next(10), 7);
/// assert_eq!(pins.next(3), 3);
/// assert_eq!(pins.next(10), 0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedPins {
    rolls: VecDeque<u8>,
}

impl ScriptedPins {
    /// Script the given knockdowns in order.
    pub fn new(rolls: impl IntoIterator<Item = u8>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
        }
    }

    /// Knockdowns not yet handed out.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl PinSource for ScriptedPins {
    fn next(&mut self, standing: u8) -> u8 {
        match self.rolls.pop_front() {
            Some(pins) => pins,
            None => {
                warn!(standing, "pin script exhausted, rolling gutter ball");
                0
            }
        }
    }
}

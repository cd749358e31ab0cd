//! Pin knockdown sources.
//!
//! The engine asks a `PinSource` how many pins fall on each roll. This is
//! the only non-deterministic input to a game, so tests swap the random
//! default for a scripted sequence.

mod source;

pub use source::{PinSource, RandomPins, ScriptedPins};

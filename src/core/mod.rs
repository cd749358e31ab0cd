//! Core engine types: players, RNG, configuration, errors.
//!
//! These are the building blocks shared by the scoring rules and the
//! game engine. Nothing here knows about frames or rolls.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::LaneConfig;
pub use error::{BowlingError, Result, RollRejection};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;

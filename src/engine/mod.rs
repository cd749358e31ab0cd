//! Game engine: turn rotation, game end, winner selection.
//!
//! `ScoreEngine::roll()` drives everything below it. Callers get back a
//! `RollOutcome` with enough to update a display, or take a
//! `GameSnapshot` for a full redraw.

mod game;
mod outcome;
mod session;
mod snapshot;

pub use game::ScoreEngine;
pub use outcome::{GameStatus, RollOutcome, RollRecord};
pub use session::SharedGame;
pub use snapshot::{FrameSnapshot, GameSnapshot, PlayerSnapshot};

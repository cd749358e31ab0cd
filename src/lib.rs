//! # bowling-score
//!
//! A ten-pin bowling score engine for one or more players.
//!
//! ## Design Principles
//!
//! 1. **Display-Agnostic**: The engine holds no reference to any rendering
//!    surface. Every roll returns the data a display needs.
//!
//! 2. **Injectable Randomness**: Pin knockdowns come from a `PinSource`
//!    passed at construction, so any game can be replayed exactly.
//!
//! 3. **Compositional Rules**: Strike/spare look-ahead and last-frame bonus
//!    balls fall out of per-frame state rather than index arithmetic.
//!
//! ## Modules
//!
//! - `core`: Player IDs, RNG, lane configuration, errors
//! - `pins`: Pin knockdown sources
//! - `scoring`: Frames, scoresheet symbols, per-player scores
//! - `engine`: Turn/frame state machine, snapshots, shared sessions
//!
//! ## Example
//!
//! ```
//! use bowling_score::{ScoreEngine, ScriptedPins};
//!
//! let mut engine = ScoreEngine::new(ScriptedPins::new([10, 7, 3, 9, 0]));
//! let ann = engine.add_player().unwrap();
//! engine.start().unwrap();
//!
//! for _ in 0..5 {
//!     engine.roll().unwrap();
//! }
//! assert_eq!(engine.player(ann).unwrap().total_score(), 20 + 19 + 9);
//! ```

pub mod core;
pub mod engine;
pub mod pins;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{BowlingError, GameRng, LaneConfig, PlayerId, PlayerMap, Result, RollRejection};

pub use crate::pins::{PinSource, RandomPins, ScriptedPins};

pub use crate::scoring::{Frame, Player, RollSymbol};

pub use crate::engine::{
    FrameSnapshot, GameSnapshot, GameStatus, PlayerSnapshot, RollOutcome, RollRecord,
    ScoreEngine, SharedGame,
};

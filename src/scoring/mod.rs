//! Scoring rules: frames, scoresheet symbols, and per-player totals.
//!
//! Nothing in this module knows about turns or other players. The
//! engine decides who rolls; these types decide what a roll means.

mod frame;
mod player;
mod symbol;

pub use frame::Frame;
pub use player::Player;
pub use symbol::RollSymbol;

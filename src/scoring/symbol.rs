//! Scoresheet notation for a single roll.

use serde::{Deserialize, Serialize};

/// How a roll is written on a traditional scoresheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RollSymbol {
    /// Full rack on the first ball (`X`).
    Strike,
    /// Rest of the rack on the second ball (`/`).
    Spare,
    /// No pins (`-`).
    Miss,
    /// Any other count.
    Pins(u8),
}

impl std::fmt::Display for RollSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RollSymbol::Strike => write!(f, "X"),
            RollSymbol::Spare => write!(f, "/"),
            RollSymbol::Miss => write!(f, "-"),
            RollSymbol::Pins(n) => write!(f, "{}", n),
        }
    }
}

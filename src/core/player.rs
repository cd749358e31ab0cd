//! Player identification and turn-ordered per-player storage.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. Ids are handed out in registration order,
//! which is also turn order.
//!
//! ## PlayerMap
//!
//! Per-player data backed by a `Vec` for O(1) access by `PlayerId`.
//! Grows only through `push`, so ids are never reused or invalidated.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::error::{BowlingError, Result};

/// Player identifier, 0-based in turn order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Upper bound on players in one game.
    pub const MAX_PLAYERS: usize = u8::MAX as usize;

    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage in turn order.
///
/// ## Example
///
/// ```
/// use bowling_score::core::{PlayerId, PlayerMap};
///
/// let mut names = PlayerMap::new();
/// let first = names.push("Ann").unwrap();
/// let second = names.push("Bo").unwrap();
///
/// assert_eq!(first, PlayerId::new(0));
/// assert_eq!(names[second], "Bo");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Append an entry for the next player and return its id.
    pub fn push(&mut self, value: T) -> Result<PlayerId> {
        if self.data.len() >= PlayerId::MAX_PLAYERS {
            return Err(BowlingError::TooManyPlayers {
                max: PlayerId::MAX_PLAYERS,
            });
        }
        let id = PlayerId(self.data.len() as u8);
        self.data.push(value);
        Ok(id)
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Check if no players are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get a player's data, if registered.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Get a player's data mutably, if registered.
    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over the values in turn order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Id of the last player in turn order.
    #[must_use]
    pub fn last_id(&self) -> Option<PlayerId> {
        self.data.len().checked_sub(1).map(|i| PlayerId(i as u8))
    }
}

impl<T> Default for PlayerMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

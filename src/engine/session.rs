//! Shared handle for driving one game from several threads.
//!
//! Every call holds the session lock for its whole state transition, so
//! rolls are applied one at a time no matter how many callers there are.

use std::sync::Arc;

use parking_lot::Mutex;

use super::game::ScoreEngine;
use super::outcome::{GameStatus, RollOutcome};
use super::snapshot::GameSnapshot;
use crate::core::{PlayerId, Result};
use crate::pins::{PinSource, RandomPins};

/// Cloneable, lock-protected `ScoreEngine`.
#[derive(Debug)]
pub struct SharedGame<S = RandomPins> {
    inner: Arc<Mutex<ScoreEngine<S>>>,
}

impl<S> Clone for SharedGame<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: PinSource> SharedGame<S> {
    /// Wrap an engine for shared use.
    #[must_use]
    pub fn new(engine: ScoreEngine<S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    /// See [`ScoreEngine::add_player`].
    pub fn add_player(&self) -> Result<PlayerId> {
        self.inner.lock().add_player()
    }

    /// See [`ScoreEngine::start`].
    pub fn start(&self) -> Result<()> {
        self.inner.lock().start()
    }

    /// See [`ScoreEngine::roll`].
    pub fn roll(&self) -> Result<RollOutcome> {
        self.inner.lock().roll()
    }

    /// See [`ScoreEngine::snapshot`].
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        self.with_engine(ScoreEngine::snapshot)
    }

    /// See [`ScoreEngine::status`].
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.with_engine(ScoreEngine::status)
    }

    /// See [`ScoreEngine::winner_index`].
    pub fn winner_index(&self) -> Result<PlayerId> {
        self.with_engine(ScoreEngine::winner_index)
    }

    /// Run `f` against the engine while holding the lock.
    pub fn with_engine<R>(&self, f: impl FnOnce(&ScoreEngine<S>) -> R) -> R {
        f(&*self.inner.lock())
    }
}

//! Engine behind a lock, for callers on more than one thread.
//!
//! Every operation holds the lock across both the mutation and the observer
//! call, so no caller ever sees a half-applied move. Observers must not call
//! back into the same `SharedEngine`; the lock is not reentrant.

use parking_lot::Mutex;

use super::engine::{MoveOutcome, PuzzleEngine, PuzzleObserver};
use super::puzzle::PuzzleState;

/// A [`PuzzleEngine`] serialized by a mutex.
#[derive(Debug)]
pub struct SharedEngine<O> {
    inner: Mutex<PuzzleEngine<O>>,
}

impl<O> SharedEngine<O> {
    pub const fn new(engine: PuzzleEngine<O>) -> Self {
        Self {
            inner: parking_lot::const_mutex(engine),
        }
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> PuzzleState {
        self.inner.lock().snapshot()
    }

    /// Run `f` with a read-only borrow of the state, holding the lock.
    pub fn read<R>(&self, f: impl FnOnce(&PuzzleState) -> R) -> R {
        f(self.inner.lock().state())
    }

    /// Run `f` with exclusive access to the engine.
    pub fn with_engine<R>(&self, f: impl FnOnce(&mut PuzzleEngine<O>) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

impl<O: PuzzleObserver> SharedEngine<O> {
    pub fn new_puzzle(&self, seed: u32) {
        self.inner.lock().new_puzzle(seed);
    }

    pub fn move_tile(&self, cell_index: usize) -> MoveOutcome {
        self.inner.lock().move_tile(cell_index)
    }
}

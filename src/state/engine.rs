//! Puzzle engine.
//!
//! Owns the one [`PuzzleState`] and is the only thing that mutates it.
//!
//! # Transitions
//!
//! ```text
//!              new_puzzle(seed)
//!        ┌──────────────────────────┐
//!        ▼                          │
//! ┌─────────────┐  move_tile(i)  ┌──┴──────────┐
//! │   state     │───────────────▶│   state'    │── notify observer
//! └─────────────┘   (adjacent)   └─────────────┘
//!        │
//!        │ move_tile(i), not adjacent / out of range
//!        ▼
//!     unchanged, no notification
//! ```
//!
//! Solved-ness is a predicate on the cells, not a mode: moves are accepted
//! after solving and simply clear the flag again.

use crate::config::EngineConfig;

use super::puzzle::PuzzleState;
use super::shuffle::{self, DEFAULT_SHUFFLE_MOVES};

/// Receives the state after every change.
///
/// The reference is only valid for the duration of the call.
pub trait PuzzleObserver {
    fn puzzle_updated(&mut self, state: &PuzzleState);
}

/// Observer that ignores every update.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PuzzleObserver for NoopObserver {
    fn puzzle_updated(&mut self, _state: &PuzzleState) {}
}

/// Result of a move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Tile slid from `from` into the empty cell at `to`
    Moved { from: usize, to: usize },

    /// Tile slid and the puzzle is now in the solved arrangement
    Solved { from: usize, to: usize },

    /// Not adjacent to the empty cell, or off the grid. Nothing changed.
    Rejected,
}

impl MoveOutcome {
    /// Check if the move changed the state.
    pub fn is_change(&self) -> bool {
        !matches!(self, Self::Rejected)
    }
}

/// Single-owner puzzle engine.
#[derive(Debug)]
pub struct PuzzleEngine<O> {
    state: PuzzleState,
    shuffle_moves: u32,
    observer: O,
}

impl<O> PuzzleEngine<O> {
    /// Create an engine holding the solved arrangement.
    pub const fn new(observer: O) -> Self {
        Self {
            state: PuzzleState::solved(),
            shuffle_moves: DEFAULT_SHUFFLE_MOVES,
            observer,
        }
    }

    /// Create an engine using the settings in `config`.
    ///
    /// A `shuffle_moves` of 0 is raised to 1 so a new puzzle is never left
    /// solved by construction.
    pub const fn with_config(config: &EngineConfig, observer: O) -> Self {
        let shuffle_moves = if config.shuffle_moves == 0 {
            1
        } else {
            config.shuffle_moves
        };
        Self {
            state: PuzzleState::solved(),
            shuffle_moves,
            observer,
        }
    }

    /// Create an engine starting from an existing arrangement.
    pub fn from_state(state: PuzzleState, observer: O) -> Self {
        Self {
            state,
            shuffle_moves: DEFAULT_SHUFFLE_MOVES,
            observer,
        }
    }

    /// Borrow the current state for reading.
    pub fn state(&self) -> &PuzzleState {
        &self.state
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> PuzzleState {
        self.state
    }

    pub fn shuffle_moves(&self) -> u32 {
        self.shuffle_moves
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }
}

impl<O: PuzzleObserver> PuzzleEngine<O> {
    /// Replace the puzzle with a fresh arrangement derived from `seed`.
    ///
    /// Always notifies the observer.
    pub fn new_puzzle(&mut self, seed: u32) {
        let generated = shuffle::shuffle(seed, self.shuffle_moves);
        // Overwrite in place; the host holds the record's address.
        self.state.set_cells(*generated.cells());

        log::info!(
            "generated puzzle from seed {seed:#010x} ({} slides)",
            self.shuffle_moves
        );
        log::trace!("new arrangement:\n{}", self.state);

        self.observer.puzzle_updated(&self.state);
    }

    /// Slide the tile at `cell_index` into the empty cell.
    ///
    /// Illegal requests are silently ignored: no state change, no log
    /// output, no notification.
    pub fn move_tile(&mut self, cell_index: usize) -> MoveOutcome {
        let Some(to) = shuffle::try_slide(&mut self.state, cell_index) else {
            return MoveOutcome::Rejected;
        };

        log::trace!(
            "moved tile {} from cell {cell_index} to cell {to}",
            self.state.cells()[to]
        );

        let outcome = if self.state.is_solved() {
            log::info!("puzzle solved");
            MoveOutcome::Solved {
                from: cell_index,
                to,
            }
        } else {
            MoveOutcome::Moved {
                from: cell_index,
                to,
            }
        };

        self.observer.puzzle_updated(&self.state);
        outcome
    }
}

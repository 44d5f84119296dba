//! Puzzle state and rules.
//!
//! This module provides the core state types and the engine:
//!
//! - `puzzle` - The fixed-layout state record and its predicates
//! - `shuffle` - Move legality and seeded puzzle generation
//! - `engine` - The single owner and mutator of the state
//! - `shared` - The engine behind a lock, for concurrent callers
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      PuzzleEngine<O>                         │
//! │                                                              │
//! │  new_puzzle(seed) ──▶ shuffle(seed, n) ──┐                   │
//! │                                          ▼                   │
//! │  move_tile(i) ────▶ try_slide(i) ──▶ ┌─────────────┐         │
//! │                        │             │ PuzzleState │         │
//! │                        │ illegal     │ cells[16]   │         │
//! │                        ▼             │ is_solved   │         │
//! │                    Rejected          └──────┬──────┘         │
//! │                                             │ &PuzzleState   │
//! │                                             ▼                │
//! │                                     O: PuzzleObserver        │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust
//! use fifteen_state::state::{MoveOutcome, NoopObserver, PuzzleEngine};
//!
//! let mut engine = PuzzleEngine::new(NoopObserver);
//! engine.new_puzzle(42);
//!
//! let empty = engine.state().empty_index().unwrap();
//! assert_eq!(engine.move_tile(empty), MoveOutcome::Rejected);
//! ```

pub mod engine;
pub mod puzzle;
pub mod shared;
pub mod shuffle;

// Re-export commonly used types
pub use engine::{MoveOutcome, NoopObserver, PuzzleEngine, PuzzleObserver};
pub use puzzle::{
    compute_is_solved, is_permutation, is_solvable, Cells, Position, PuzzleError, PuzzleState,
    CELLS_FIELD_OFFSET, CELL_COUNT, EMPTY, IS_SOLVED_FIELD_OFFSET, SIZE, SOLVED_CELLS, STATE_SIZE,
};
pub use shared::SharedEngine;
pub use shuffle::{legal_sources, shuffle, DEFAULT_SHUFFLE_MOVES};

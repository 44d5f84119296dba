//! 15-puzzle state engine.
//!
//! This crate owns the rules of the classic 4×4 sliding-tile puzzle and
//! exposes its state to an external renderer through a fixed memory layout.
//!
//! # Overview
//!
//! - **Puzzle State** - A 17-byte record: 16 cell values in row-major order
//!   (0 is the empty cell) followed by a solved flag. The host reads it
//!   directly out of linear memory.
//!
//! - **Puzzle Engine** - Generates a solvable arrangement from a 32-bit seed,
//!   applies tile slides, and keeps the solved flag in sync.
//!
//! - **Host Boundary** - `newPuzzle`/`moveTile` exports and the
//!   `updatePuzzleDisplay`/`writeToStderr` imports for a WebAssembly host.
//!
//! # Design Principles
//!
//! 1. **Silent rejection** - Moving a tile that is not next to the empty
//!    cell does nothing: no state change, no log line, no redraw.
//!
//! 2. **Reproducible** - The same seed always yields the same puzzle.
//!
//! 3. **Solvable by construction** - Puzzles are random walks of legal
//!    slides from the solved arrangement.
//!
//! 4. **Explicit notification** - Changes are reported to a
//!    [`PuzzleObserver`](state::PuzzleObserver) after they are complete.
//!
//! # Example
//!
//! ```rust
//! use fifteen_state::state::{MoveOutcome, PuzzleEngine, PuzzleObserver, PuzzleState};
//!
//! #[derive(Default)]
//! struct Redraws(usize);
//!
//! impl PuzzleObserver for Redraws {
//!     fn puzzle_updated(&mut self, _state: &PuzzleState) {
//!         self.0 += 1;
//!     }
//! }
//!
//! let mut engine = PuzzleEngine::new(Redraws::default());
//! engine.new_puzzle(0xC0FFEE);
//! assert_eq!(engine.observer().0, 1);
//!
//! // Slide the tile to the left of the empty cell, if there is one.
//! let empty = engine.state().empty_index().unwrap();
//! if empty % 4 > 0 {
//!     assert!(engine.move_tile(empty - 1).is_change());
//!     assert_eq!(engine.observer().0, 2);
//! }
//!
//! // Diagonal and out-of-range requests are ignored.
//! assert_eq!(engine.move_tile(16), MoveOutcome::Rejected);
//! ```

pub mod config;
pub mod host;
pub mod state;

// Re-export everything from state module at crate root
pub use config::{ConfigError, EngineConfig};
pub use state::*;

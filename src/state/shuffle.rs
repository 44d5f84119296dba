//! Move rules and seeded puzzle generation.
//!
//! A new puzzle is a random walk of legal slides starting from the solved
//! arrangement. Every slide is reversible, so every generated arrangement
//! is solvable without any parity bookkeeping.

use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;

use super::puzzle::{Position, PuzzleState};

/// Default number of random slides per generated puzzle.
pub const DEFAULT_SHUFFLE_MOVES: u32 = 1000;

/// Cells whose tile may slide into the empty cell at `empty`.
///
/// Yields nothing if `empty` is off the grid.
pub fn legal_sources(empty: usize) -> impl Iterator<Item = usize> {
    Position::from_index(empty)
        .into_iter()
        .flat_map(Position::neighbors)
        .map(|pos| pos.index())
}

/// Slide the tile at `source` into the empty cell.
///
/// Returns the index the tile moved to (the old empty cell), or `None`
/// without touching `state` if the slide is illegal.
pub(crate) fn try_slide(state: &mut PuzzleState, source: usize) -> Option<usize> {
    let to = state.empty_position()?;
    let from = Position::from_index(source)?;
    if !from.is_adjacent_to(&to) {
        return None;
    }

    let empty = to.index();
    state.swap_cells(source, empty);
    Some(empty)
}

/// Generate an arrangement from `seed` by applying `moves` random slides to
/// the solved puzzle.
///
/// Every slide flips the checkerboard color of the empty cell, so a fixed
/// walk length would only reach half the grid. Half of all seeds take one
/// extra slide, which never reverses the slide before it.
///
/// The same seed and move count always produce the same arrangement.
pub fn shuffle(seed: u32, moves: u32) -> PuzzleState {
    // ChaCha output is stable across platforms and crate versions.
    let mut rng = ChaCha12Rng::seed_from_u64(u64::from(seed));
    let extra = u32::from(moves > 0 && rng.random::<bool>());

    let mut state = PuzzleState::solved();
    let mut sources = Vec::with_capacity(4);
    let mut previous_empty = None;
    for step in 0..moves.saturating_add(extra) {
        let Some(empty) = state.empty_index() else {
            break;
        };
        sources.clear();
        sources.extend(legal_sources(empty));
        if step == moves {
            sources.retain(|&source| Some(source) != previous_empty);
        }
        if let Some(&source) = sources.choose(&mut rng) {
            try_slide(&mut state, source);
            previous_empty = Some(empty);
        }
    }

    state
}

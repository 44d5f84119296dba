//! Puzzle state record.
//!
//! The host reads this record straight out of linear memory, so the layout
//! is fixed: 16 cell bytes at offset 0 followed by the solved flag at
//! offset 16, no padding.
//!
//! # Layout
//!
//! ```text
//! offset  0                                              16   17
//!         ┌───┬───┬───┬───┬───┬───┬─────────────┬───┬───┬───┐
//!         │ 1 │ 2 │ 3 │ 4 │ 5 │ 6 │     ...     │15 │ 0 │ 1 │
//!         └───┴───┴───┴───┴───┴───┴─────────────┴───┴───┴───┘
//!           cells (row-major, 0 = empty)               is_solved
//! ```

use std::fmt;

/// Grid width and height.
pub const SIZE: usize = 4;

/// Number of cells in the grid.
pub const CELL_COUNT: usize = SIZE * SIZE;

/// Cell value marking the empty slot.
pub const EMPTY: u8 = 0;

/// Byte offset of the cells within [`PuzzleState`].
pub const CELLS_FIELD_OFFSET: usize = 0;

/// Byte offset of the solved flag within [`PuzzleState`].
pub const IS_SOLVED_FIELD_OFFSET: usize = CELL_COUNT;

/// Total size of [`PuzzleState`] in bytes.
pub const STATE_SIZE: usize = CELL_COUNT + 1;

/// Cell values in row-major order.
pub type Cells = [u8; CELL_COUNT];

/// The canonical solved arrangement.
pub const SOLVED_CELLS: Cells = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, EMPTY];

const _: () = {
    assert!(std::mem::size_of::<PuzzleState>() == STATE_SIZE);
    assert!(std::mem::align_of::<PuzzleState>() == 1);
    assert!(std::mem::offset_of!(PuzzleState, cells) == CELLS_FIELD_OFFSET);
    assert!(std::mem::offset_of!(PuzzleState, is_solved) == IS_SOLVED_FIELD_OFFSET);
};

/// Grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Position of a row-major cell index, if it is on the grid.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < CELL_COUNT).then(|| Self::new(index / SIZE, index % SIZE))
    }

    /// Row-major cell index.
    pub fn index(&self) -> usize {
        self.row * SIZE + self.col
    }

    /// Check if position is valid (within grid bounds).
    pub fn is_valid(&self) -> bool {
        self.row < SIZE && self.col < SIZE
    }

    /// Check if two positions share a grid edge.
    ///
    /// Diagonals do not count, and neither does a position with itself.
    pub fn is_adjacent_to(&self, other: &Position) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }

    /// Orthogonal neighbors that lie on the grid: up, down, left, right.
    pub fn neighbors(self) -> impl Iterator<Item = Position> {
        const OFFSETS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        OFFSETS.into_iter().filter_map(move |(dr, dc)| {
            let row = self.row.checked_add_signed(dr)?;
            let col = self.col.checked_add_signed(dc)?;
            let pos = Position::new(row, col);
            pos.is_valid().then_some(pos)
        })
    }
}

/// The one puzzle record shared with the host.
///
/// Fields are private: only the engine writes, everyone else reads through
/// [`PuzzleState::cells`], [`PuzzleState::is_solved`] or
/// [`PuzzleState::as_bytes`]. `is_solved` is always derived from `cells`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, bytemuck::NoUninit)]
pub struct PuzzleState {
    cells: Cells,
    is_solved: bool,
}

impl Default for PuzzleState {
    fn default() -> Self {
        Self::solved()
    }
}

impl PuzzleState {
    /// The solved arrangement.
    pub const fn solved() -> Self {
        Self {
            cells: SOLVED_CELLS,
            is_solved: true,
        }
    }

    /// Build a state from explicit cell values.
    ///
    /// The values must be a permutation of `0..=15` that is reachable from
    /// the solved arrangement.
    pub fn from_cells(cells: Cells) -> Result<Self, PuzzleError> {
        let mut seen = [false; CELL_COUNT];
        for &value in &cells {
            let slot = seen
                .get_mut(usize::from(value))
                .ok_or(PuzzleError::ValueOutOfRange(value))?;
            if *slot {
                return Err(PuzzleError::DuplicateValue(value));
            }
            *slot = true;
        }

        if !is_solvable(&cells) {
            return Err(PuzzleError::Unsolvable);
        }

        let mut state = Self::solved();
        state.set_cells(cells);
        Ok(state)
    }

    /// Cell values in row-major order.
    pub fn cells(&self) -> &Cells {
        &self.cells
    }

    pub fn is_solved(&self) -> bool {
        self.is_solved
    }

    /// Index of the empty cell.
    pub fn empty_index(&self) -> Option<usize> {
        self.cells.iter().position(|&value| value == EMPTY)
    }

    /// Position of the empty cell.
    pub fn empty_position(&self) -> Option<Position> {
        self.empty_index().and_then(Position::from_index)
    }

    /// The exact bytes the host reads: cells followed by the solved flag.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Overwrite all cells, recomputing the solved flag.
    pub(crate) fn set_cells(&mut self, cells: Cells) {
        self.cells = cells;
        self.is_solved = compute_is_solved(&self.cells);
    }

    /// Swap two cells, recomputing the solved flag.
    pub(crate) fn swap_cells(&mut self, a: usize, b: usize) {
        self.cells.swap(a, b);
        self.is_solved = compute_is_solved(&self.cells);
    }

    /// Convert to JSON snapshot.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "cells": self.cells.to_vec(),
            "is_solved": self.is_solved,
            "empty": self.empty_index()
        })
    }
}

impl fmt::Display for PuzzleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(SIZE) {
            for (col, &value) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                if value == EMPTY {
                    write!(f, "{:>2}", ".")?;
                } else {
                    write!(f, "{value:>2}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Whether `cells` is the solved arrangement.
pub fn compute_is_solved(cells: &Cells) -> bool {
    *cells == SOLVED_CELLS
}

/// Whether `cells` holds each of `0..=15` exactly once.
pub fn is_permutation(cells: &Cells) -> bool {
    let mut sorted = *cells;
    sorted.sort_unstable();
    sorted
        .iter()
        .enumerate()
        .all(|(i, &value)| usize::from(value) == i)
}

/// Whether `cells` can be reached from the solved arrangement.
///
/// An arrangement is reachable iff the number of inversions among the tiles
/// plus the empty cell's row distance from the bottom row is even.
pub fn is_solvable(cells: &Cells) -> bool {
    if !is_permutation(cells) {
        return false;
    }

    let tiles: Vec<u8> = cells.iter().copied().filter(|&v| v != EMPTY).collect();
    let inversions: usize = tiles
        .iter()
        .enumerate()
        .map(|(i, a)| tiles[i + 1..].iter().filter(|&&b| *a > b).count())
        .sum();

    let Some(empty) = cells.iter().position(|&v| v == EMPTY) else {
        return false;
    };
    let rows_from_bottom = SIZE - 1 - empty / SIZE;

    (inversions + rows_from_bottom) % 2 == 0
}

/// Puzzle construction errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PuzzleError {
    #[error("Cell value {0} is out of range")]
    ValueOutOfRange(u8),
    #[error("Cell value {0} appears more than once")]
    DuplicateValue(u8),
    #[error("Arrangement cannot be reached from the solved puzzle")]
    Unsolvable,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_solved_state() {
        let state = PuzzleState::solved();
        assert!(state.is_solved());
        assert_eq!(state.empty_index(), Some(15));
        assert_eq!(PuzzleState::default(), state);
    }

    #[test]
    fn test_layout_bytes() {
        let state = PuzzleState::solved();
        let bytes = state.as_bytes();

        assert_eq!(bytes.len(), STATE_SIZE);
        assert_eq!(&bytes[CELLS_FIELD_OFFSET..CELL_COUNT], &SOLVED_CELLS[..]);
        assert_eq!(bytes[IS_SOLVED_FIELD_OFFSET], 1);

        let mut cells = SOLVED_CELLS;
        cells.swap(14, 15);
        let state = PuzzleState::from_cells(cells).unwrap();
        assert_eq!(state.as_bytes()[IS_SOLVED_FIELD_OFFSET], 0);
        assert_eq!(&state.as_bytes()[..CELL_COUNT], &cells[..]);
    }

    #[test]
    fn test_position_adjacency() {
        let p = Position::new(2, 2);

        // Orthogonal neighbors
        assert!(p.is_adjacent_to(&Position::new(1, 2)));
        assert!(p.is_adjacent_to(&Position::new(3, 2)));
        assert!(p.is_adjacent_to(&Position::new(2, 1)));
        assert!(p.is_adjacent_to(&Position::new(2, 3)));

        // Diagonals, self, and distant cells
        assert!(!p.is_adjacent_to(&Position::new(1, 1)));
        assert!(!p.is_adjacent_to(&Position::new(3, 3)));
        assert!(!p.is_adjacent_to(&Position::new(2, 2)));
        assert!(!p.is_adjacent_to(&Position::new(0, 2)));
    }

    #[test]
    fn test_adjacency_does_not_wrap_rows() {
        // Index 3 ends row 0, index 4 starts row 1.
        let end = Position::from_index(3).unwrap();
        let start = Position::from_index(4).unwrap();
        assert!(!end.is_adjacent_to(&start));
    }

    #[test]
    fn test_neighbors() {
        let corner: Vec<usize> = Position::new(0, 0).neighbors().map(|p| p.index()).collect();
        assert_eq!(corner, vec![4, 1]);

        let edge: Vec<usize> = Position::new(3, 1).neighbors().map(|p| p.index()).collect();
        assert_eq!(edge, vec![9, 12, 14]);

        assert_eq!(Position::new(1, 2).neighbors().count(), 4);
    }

    #[test]
    fn test_from_index() {
        assert_eq!(Position::from_index(0), Some(Position::new(0, 0)));
        assert_eq!(Position::from_index(13), Some(Position::new(3, 1)));
        assert_eq!(Position::from_index(16), None);
        assert_eq!(Position::new(3, 1).index(), 13);
    }

    #[test]
    fn test_from_cells_rejects_invalid() {
        let mut duplicate = SOLVED_CELLS;
        duplicate[0] = 2;
        assert_eq!(
            PuzzleState::from_cells(duplicate),
            Err(PuzzleError::DuplicateValue(2))
        );

        let mut out_of_range = SOLVED_CELLS;
        out_of_range[0] = 16;
        assert_eq!(
            PuzzleState::from_cells(out_of_range),
            Err(PuzzleError::ValueOutOfRange(16))
        );

        // Swapping two tiles flips parity.
        let mut unsolvable = SOLVED_CELLS;
        unsolvable.swap(13, 14);
        assert_eq!(
            PuzzleState::from_cells(unsolvable),
            Err(PuzzleError::Unsolvable)
        );
    }

    #[test]
    fn test_solvability() {
        assert!(is_solvable(&SOLVED_CELLS));

        // One vertical slide from solved.
        let mut cells = SOLVED_CELLS;
        cells.swap(11, 15);
        assert!(is_solvable(&cells));

        // One horizontal slide from solved.
        let mut cells = SOLVED_CELLS;
        cells.swap(14, 15);
        assert!(is_solvable(&cells));

        let mut cells = SOLVED_CELLS;
        cells.swap(0, 1);
        assert!(!is_solvable(&cells));
    }

    #[test]
    fn test_permutation_check() {
        assert!(is_permutation(&SOLVED_CELLS));
        assert!(!is_permutation(&[0; CELL_COUNT]));
    }

    #[test]
    fn test_display() {
        let state = PuzzleState::solved();
        assert_eq!(
            state.to_string(),
            " 1  2  3  4\n 5  6  7  8\n 9 10 11 12\n13 14 15  .\n"
        );
    }

    #[test]
    fn test_empty_position() {
        assert_eq!(PuzzleState::solved().empty_position(), Some(Position::new(3, 3)));

        let state =
            PuzzleState::from_cells([1, 2, 3, 4, 5, 0, 6, 8, 9, 10, 7, 11, 13, 14, 15, 12])
                .unwrap();
        assert_eq!(state.empty_position(), Some(Position::new(1, 1)));
    }

    #[test]
    fn test_to_json() {
        let json = PuzzleState::solved().to_json();
        assert_eq!(json["is_solved"], serde_json::json!(true));
        assert_eq!(json["empty"], serde_json::json!(15));
        assert_eq!(json["cells"][0], serde_json::json!(1));
    }
}

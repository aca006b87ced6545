//! `TileGrid`: packed sliding-tile puzzle state.
//!
//! # Layout
//!
//! Cells are stored row-major, 4 bits per cell: cell `i` occupies bits
//! `[4 * i, 4 * i + 4)` of a `u64`. A 4x4 grid uses all 64 bits, so every
//! supported size (2x2 through 4x4) fits in one word.
//!
//! # Equality semantics
//!
//! Two grids are the same search state iff their side and packed cells are
//! identical. The cached blank index is a pure function of the cells, so the
//! derived `Eq`/`Hash` stay content-based.

use std::fmt;

use thiserror::Error;

/// Smallest supported grid side.
pub const MIN_SIDE: usize = 2;

/// Largest supported grid side (16 cells x 4 bits = 64 bits).
pub const MAX_SIDE: usize = 4;

/// The tile value that marks the blank cell.
pub const BLANK: u8 = 0;

const CELL_BITS: usize = 4;
const CELL_MASK: u64 = 0xF;

/// Typed failure for grid construction. Fail-closed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Cell count is not a square of a supported side (4, 9, or 16).
    #[error("expected 4, 9, or 16 cells, got {len}")]
    CellCount { len: usize },
    /// A tile value is not in `0..cell_count`.
    #[error("tile {value} is out of range for a grid of {len} cells")]
    TileOutOfRange { value: u8, len: usize },
    /// A tile value occurs more than once.
    #[error("tile {value} appears more than once")]
    DuplicateTile { value: u8 },
}

/// A square sliding-tile grid holding a permutation of `0..side*side`.
///
/// `Copy` and content-hashed: safe to use directly as a frontier/explored key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileGrid {
    side: u8,
    blank: u8,
    packed: u64,
}

impl TileGrid {
    /// Build a grid from row-major cell values.
    ///
    /// # Errors
    ///
    /// Returns [`GridError`] if the cell count is not 4, 9, or 16, or if the
    /// values are not a permutation of `0..cells.len()`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(cells: &[u8]) -> Result<Self, GridError> {
        let len = cells.len();
        let side = side_for(len).ok_or(GridError::CellCount { len })?;

        let mut seen: u16 = 0;
        let mut packed: u64 = 0;
        let mut blank: u8 = 0;
        for (index, &value) in cells.iter().enumerate() {
            if usize::from(value) >= len {
                return Err(GridError::TileOutOfRange { value, len });
            }
            let bit = 1u16 << value;
            if seen & bit != 0 {
                return Err(GridError::DuplicateTile { value });
            }
            seen |= bit;
            if value == BLANK {
                blank = index as u8;
            }
            packed |= u64::from(value) << (CELL_BITS * index);
        }

        Ok(Self {
            side: side as u8,
            blank,
            packed,
        })
    }

    /// The solved grid of the given side: `[0, 1, 2, ..., side*side - 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::CellCount`] if `side` is outside `2..=4`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn solved(side: usize) -> Result<Self, GridError> {
        let len = side.saturating_mul(side);
        if !(MIN_SIDE..=MAX_SIDE).contains(&side) {
            return Err(GridError::CellCount { len });
        }
        let cells: Vec<u8> = (0..len).map(|v| v as u8).collect();
        Self::new(&cells)
    }

    /// Side length (number of rows and columns).
    #[must_use]
    pub const fn side(&self) -> usize {
        self.side as usize
    }

    /// Total number of cells.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.side() * self.side()
    }

    /// Canonical fixed-width encoding of the cells.
    #[must_use]
    pub const fn packed(&self) -> u64 {
        self.packed
    }

    /// Value at a row-major cell index. Panics if out of bounds.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn get(&self, index: usize) -> u8 {
        assert!(index < self.cell_count(), "cell index {index} out of bounds");
        ((self.packed >> (CELL_BITS * index)) & CELL_MASK) as u8
    }

    /// Value at `(row, col)`. Panics if out of bounds.
    #[must_use]
    pub fn at(&self, row: usize, col: usize) -> u8 {
        self.get(row * self.side() + col)
    }

    /// All cells, row-major.
    #[must_use]
    pub fn cells(&self) -> Vec<u8> {
        (0..self.cell_count()).map(|i| self.get(i)).collect()
    }

    /// Cells split into rows.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<u8>> {
        self.cells()
            .chunks(self.side())
            .map(<[u8]>::to_vec)
            .collect()
    }

    /// `(row, col)` of the blank cell.
    #[must_use]
    pub const fn blank_position(&self) -> (usize, usize) {
        let index = self.blank as usize;
        (index / self.side(), index % self.side())
    }

    /// `(row, col)` of the given tile, or `None` if the value is not on the grid.
    #[must_use]
    pub fn position_of(&self, value: u8) -> Option<(usize, usize)> {
        (0..self.cell_count())
            .find(|&i| self.get(i) == value)
            .map(|i| (i / self.side(), i % self.side()))
    }

    /// Whether the grid is in solved order (`cells[i] == i`).
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn is_solved(&self) -> bool {
        (0..self.cell_count()).all(|i| usize::from(self.get(i)) == i)
    }

    /// Swap the blank with the cell at `target`, returning the new grid.
    ///
    /// Callers (the move operators) guarantee `target` is adjacent to the
    /// blank and in bounds.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn slide_blank_to(self, target: usize) -> Self {
        let from = self.blank as usize;
        let tile = u64::from(self.get(target));
        let from_shift = CELL_BITS * from;
        let target_shift = CELL_BITS * target;

        let mut packed = self.packed;
        packed &= !(CELL_MASK << from_shift);
        packed &= !(CELL_MASK << target_shift);
        packed |= tile << from_shift;
        // Blank is zero, so the target nibble stays cleared.

        Self {
            side: self.side,
            blank: target as u8,
            packed,
        }
    }
}

fn side_for(len: usize) -> Option<usize> {
    (MIN_SIDE..=MAX_SIDE).find(|side| side * side == len)
}

impl fmt::Display for TileGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = if self.cell_count() > 10 { 2 } else { 1 };
        let rule = "-".repeat(self.side() * (width + 3) + 1);
        writeln!(f, "{rule}")?;
        for row in self.rows() {
            write!(f, "|")?;
            for value in row {
                if value == BLANK {
                    write!(f, " {:>width$} |", "")?;
                } else {
                    write!(f, " {value:>width$} |")?;
                }
            }
            writeln!(f)?;
            write!(f, "{rule}")?;
            writeln!(f)?;
        }
        Ok(())
    }
}

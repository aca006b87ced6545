//! `apply()`: slide the blank one cell, producing a new grid.
//!
//! Moves are named for the direction the *blank* travels. A move is legal
//! iff the blank stays on the board; anything else is an
//! [`IllegalTransition`], never a panic.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::carrier::grid::TileGrid;

/// A blank-slide operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// All moves in canonical enumeration order.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Lowercase label (`"up"`, `"down"`, `"left"`, `"right"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// The move that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Destination of the blank, or `None` if it would leave the board.
    const fn target(self, row: usize, col: usize, side: usize) -> Option<(usize, usize)> {
        match self {
            Self::Up if row > 0 => Some((row - 1, col)),
            Self::Down if row + 1 < side => Some((row + 1, col)),
            Self::Left if col > 0 => Some((row, col - 1)),
            Self::Right if col + 1 < side => Some((row, col + 1)),
            _ => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A move label that is not one of `up`, `down`, `left`, `right`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown move {0:?}")]
pub struct ParseMoveError(pub String);

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err(ParseMoveError(s.to_string())),
        }
    }
}

/// A move was applied from a blank position where it is not legal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("illegal transition: blank at ({row}, {col}) cannot move {mv}")]
pub struct IllegalTransition {
    pub mv: Move,
    pub row: usize,
    pub col: usize,
}

/// Legal moves from `grid`, in `up, down, left, right` order.
#[must_use]
pub fn legal_moves(grid: &TileGrid) -> Vec<Move> {
    let (row, col) = grid.blank_position();
    Move::ALL
        .into_iter()
        .filter(|mv| mv.target(row, col, grid.side()).is_some())
        .collect()
}

/// Apply a single move.
///
/// # Errors
///
/// Returns [`IllegalTransition`] if the blank would leave the board.
pub fn apply(grid: &TileGrid, mv: Move) -> Result<TileGrid, IllegalTransition> {
    let (row, col) = grid.blank_position();
    let (to_row, to_col) = mv
        .target(row, col, grid.side())
        .ok_or(IllegalTransition { mv, row, col })?;
    Ok(grid.slide_blank_to(to_row * grid.side() + to_col))
}

/// Apply a sequence of moves, stopping at the first illegal one.
///
/// # Errors
///
/// Returns the first [`IllegalTransition`] encountered.
pub fn apply_all(grid: &TileGrid, moves: &[Move]) -> Result<TileGrid, IllegalTransition> {
    moves.iter().try_fold(*grid, |current, &mv| apply(&current, mv))
}

//! Heuristic estimators: the generic trait plus four sliding-tile estimators.
//!
//! Grid estimators compare a current grid against a goal grid of the same
//! side. They do not check shapes; passing mismatched grids is a caller bug.
//! All four return exactly zero when `current == goal`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use waypoint_kernel::carrier::grid::{TileGrid, BLANK, MAX_SIDE};

use crate::contract::Cost;

/// Estimates remaining cost from a state to the goal.
pub trait Heuristic<S> {
    /// Estimated cost to reach a goal from `state`. Must be non-negative.
    fn estimate(&self, state: &S) -> Cost;
}

impl<S, F> Heuristic<S> for F
where
    F: Fn(&S) -> Cost,
{
    fn estimate(&self, state: &S) -> Cost {
        self(state)
    }
}

/// The zero heuristic. Turns best-first search into uniform-cost ordering.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHeuristic;

impl<S> Heuristic<S> for NullHeuristic {
    fn estimate(&self, _state: &S) -> Cost {
        0.0
    }
}

/// Row-major index of each tile value in `grid`.
fn goal_index(grid: &TileGrid) -> [usize; MAX_SIDE * MAX_SIDE] {
    let mut index = [0usize; MAX_SIDE * MAX_SIDE];
    for (i, value) in grid.cells().into_iter().enumerate() {
        index[usize::from(value)] = i;
    }
    index
}

/// Iterate `(row, col, goal_row, goal_col)` for every non-blank tile.
fn displacements(
    current: &TileGrid,
    goal: &TileGrid,
) -> impl Iterator<Item = (usize, usize, usize, usize)> {
    let side = current.side();
    let target = goal_index(goal);
    current
        .cells()
        .into_iter()
        .enumerate()
        .filter(|&(_, value)| value != BLANK)
        .map(move |(i, value)| {
            let g = target[usize::from(value)];
            (i / side, i % side, g / side, g % side)
        })
}

/// h1: number of cells whose value differs from the goal, blank included.
#[must_use]
pub fn misplaced_tiles(current: &TileGrid, goal: &TileGrid) -> u32 {
    let count = (0..current.cell_count())
        .filter(|&i| current.get(i) != goal.get(i))
        .count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// h1 variant that ignores the blank cell.
#[must_use]
pub fn misplaced_tiles_excluding_blank(current: &TileGrid, goal: &TileGrid) -> u32 {
    let count = (0..current.cell_count())
        .filter(|&i| current.get(i) != BLANK && current.get(i) != goal.get(i))
        .count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// h2: sum of straight-line distances of each tile from its goal cell.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn euclidean_displacement(current: &TileGrid, goal: &TileGrid) -> f64 {
    displacements(current, goal)
        .map(|(r, c, gr, gc)| {
            let dr = r.abs_diff(gr) as f64;
            let dc = c.abs_diff(gc) as f64;
            dr.hypot(dc)
        })
        .sum()
}

/// h3: sum of `|Δrow| + |Δcol|` of each tile from its goal cell. Admissible
/// for unit-cost blank slides.
#[must_use]
pub fn manhattan_displacement(current: &TileGrid, goal: &TileGrid) -> u32 {
    let total: usize = displacements(current, goal)
        .map(|(r, c, gr, gc)| r.abs_diff(gr) + c.abs_diff(gc))
        .sum();
    u32::try_from(total).unwrap_or(u32::MAX)
}

/// h4: per tile, +1 if the goal's same row lacks it, +1 if the goal's same
/// column lacks it.
#[must_use]
pub fn row_column_mismatch(current: &TileGrid, goal: &TileGrid) -> u32 {
    let side = current.side();
    let mut count = 0u32;
    for row in 0..side {
        for col in 0..side {
            let tile = current.at(row, col);
            if tile == BLANK {
                continue;
            }
            if !(0..side).any(|c| goal.at(row, c) == tile) {
                count += 1;
            }
            if !(0..side).any(|r| goal.at(r, col) == tile) {
                count += 1;
            }
        }
    }
    count
}

/// The four grid estimators, selectable by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeuristicKind {
    /// h1
    MisplacedTiles,
    /// h2
    Euclidean,
    /// h3
    Manhattan,
    /// h4
    RowColumnMismatch,
}

impl HeuristicKind {
    /// All estimators in h1..h4 order.
    pub const ALL: [Self; 4] = [
        Self::MisplacedTiles,
        Self::Euclidean,
        Self::Manhattan,
        Self::RowColumnMismatch,
    ];

    /// Short label (`"h1"` .. `"h4"`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MisplacedTiles => "h1",
            Self::Euclidean => "h2",
            Self::Manhattan => "h3",
            Self::RowColumnMismatch => "h4",
        }
    }

    /// Evaluate this estimator for `current` against `goal`.
    #[must_use]
    pub fn evaluate(self, current: &TileGrid, goal: &TileGrid) -> Cost {
        match self {
            Self::MisplacedTiles => f64::from(misplaced_tiles(current, goal)),
            Self::Euclidean => euclidean_displacement(current, goal),
            Self::Manhattan => f64::from(manhattan_displacement(current, goal)),
            Self::RowColumnMismatch => f64::from(row_column_mismatch(current, goal)),
        }
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A heuristic name that matches none of the estimators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown heuristic {0:?} (expected h1, h2, h3, h4, or none)")]
pub struct ParseHeuristicError(pub String);

impl FromStr for HeuristicKind {
    type Err = ParseHeuristicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "h1" | "misplaced" | "misplaced_tiles" => Ok(Self::MisplacedTiles),
            "h2" | "euclidean" => Ok(Self::Euclidean),
            "h3" | "manhattan" => Ok(Self::Manhattan),
            "h4" | "row_column" | "row_column_mismatch" => Ok(Self::RowColumnMismatch),
            _ => Err(ParseHeuristicError(s.to_string())),
        }
    }
}

/// A grid estimator bound to a fixed goal grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridHeuristic {
    pub kind: HeuristicKind,
    pub goal: TileGrid,
}

impl GridHeuristic {
    #[must_use]
    pub const fn new(kind: HeuristicKind, goal: TileGrid) -> Self {
        Self { kind, goal }
    }
}

impl Heuristic<TileGrid> for GridHeuristic {
    fn estimate(&self, state: &TileGrid) -> Cost {
        self.kind.evaluate(state, &self.goal)
    }
}

//! Step through a solution path, recording each grid and its estimates.

use waypoint_kernel::carrier::grid::TileGrid;
use waypoint_kernel::operators::apply::{apply, Move};

use crate::error::HarnessError;
use crate::runner::estimates;
use crate::worlds::tile_puzzle::TilePuzzle;

/// One state along a replayed path.
#[derive(Debug, Clone, PartialEq)]
pub struct WalkStep {
    /// Moves applied so far (0 for the start grid).
    pub index: usize,
    /// The move that produced `grid`; `None` for the start grid.
    pub mv: Option<Move>,
    pub grid: TileGrid,
    /// h1..h4 at `grid`.
    pub estimates: [f64; 4],
}

/// Replay `path` from the puzzle's start grid.
///
/// The first step is the start grid itself, so the result has
/// `path.len() + 1` entries and the last grid is where the path ends.
///
/// # Errors
///
/// Returns [`HarnessError::Transition`] at the first illegal move.
pub fn walkthrough(puzzle: &TilePuzzle, path: &[Move]) -> Result<Vec<WalkStep>, HarnessError> {
    let goal = puzzle.goal();
    let mut grid = *puzzle.start_grid();
    let mut steps = Vec::with_capacity(path.len() + 1);
    steps.push(WalkStep {
        index: 0,
        mv: None,
        grid,
        estimates: estimates(&grid, goal),
    });

    for (i, &mv) in path.iter().enumerate() {
        grid = apply(&grid, mv)?;
        steps.push(WalkStep {
            index: i + 1,
            mv: Some(mv),
            grid,
            estimates: estimates(&grid, goal),
        });
    }
    Ok(steps)
}

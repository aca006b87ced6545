//! `TilePuzzle`: the sliding-tile world as a [`SearchProblem`].
//!
//! Actions are blank slides with unit step cost. Successors come out in
//! `up, down, left, right` order, filtered to legal moves.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::trace;

use waypoint_kernel::carrier::grid::TileGrid;
use waypoint_kernel::operators::apply::{apply, apply_all, legal_moves, Move};
use waypoint_search::contract::{Cost, SearchProblem, Successor};

use crate::error::HarnessError;

/// The six fixed 8-puzzle instances, row-major, `0` is the blank.
pub const EIGHT_PUZZLE_DATA: [[u8; 9]; 6] = [
    [1, 0, 2, 3, 4, 5, 6, 7, 8],
    [1, 7, 8, 2, 3, 4, 5, 6, 0],
    [4, 3, 2, 7, 0, 5, 1, 6, 8],
    [5, 1, 3, 4, 0, 2, 6, 7, 8],
    [1, 2, 5, 7, 6, 8, 0, 4, 3],
    [0, 3, 1, 6, 8, 2, 7, 5, 4],
];

/// A sliding-tile search problem: reach `goal` from `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilePuzzle {
    start: TileGrid,
    goal: TileGrid,
}

impl TilePuzzle {
    /// A puzzle whose goal is the solved grid of the same side.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Grid`] if the solved grid cannot be built for
    /// `start`'s side (never for a grid that already exists).
    pub fn new(start: TileGrid) -> Result<Self, HarnessError> {
        let goal = TileGrid::solved(start.side())?;
        Ok(Self { start, goal })
    }

    /// A puzzle with an explicit goal grid.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::ShapeMismatch`] if the sides differ.
    pub fn with_goal(start: TileGrid, goal: TileGrid) -> Result<Self, HarnessError> {
        if start.side() != goal.side() {
            return Err(HarnessError::ShapeMismatch {
                start: start.side(),
                goal: goal.side(),
            });
        }
        Ok(Self { start, goal })
    }

    #[must_use]
    pub const fn start_grid(&self) -> &TileGrid {
        &self.start
    }

    #[must_use]
    pub const fn goal(&self) -> &TileGrid {
        &self.goal
    }
}

impl SearchProblem for TilePuzzle {
    type State = TileGrid;
    type Action = Move;

    fn start(&self) -> TileGrid {
        self.start
    }

    fn is_goal(&self, state: &TileGrid) -> bool {
        *state == self.goal
    }

    fn successors(&self, state: &TileGrid) -> Vec<Successor<TileGrid, Move>> {
        legal_moves(state)
            .into_iter()
            .filter_map(|mv| {
                apply(state, mv).ok().map(|next| Successor {
                    state: next,
                    action: mv,
                    step_cost: 1.0,
                })
            })
            .collect()
    }

    #[allow(clippy::cast_precision_loss)]
    fn cost_of_actions(&self, actions: &[Move]) -> Option<Cost> {
        apply_all(&self.start, actions)
            .ok()
            .map(|_| actions.len() as Cost)
    }
}

/// Built-in puzzle `index` from [`EIGHT_PUZZLE_DATA`].
///
/// # Errors
///
/// Returns [`HarnessError::UnknownPuzzle`] if `index` is out of range.
pub fn builtin(index: usize) -> Result<TileGrid, HarnessError> {
    let cells = EIGHT_PUZZLE_DATA
        .get(index)
        .ok_or(HarnessError::UnknownPuzzle {
            index,
            available: EIGHT_PUZZLE_DATA.len(),
        })?;
    Ok(TileGrid::new(cells)?)
}

/// All built-in puzzles, in table order.
///
/// # Errors
///
/// Returns [`HarnessError::Grid`] if a table row is not a legal grid.
pub fn builtin_puzzles() -> Result<Vec<TileGrid>, HarnessError> {
    (0..EIGHT_PUZZLE_DATA.len()).map(builtin).collect()
}

/// Apply `moves` uniformly random legal moves to the solved grid of `side`.
///
/// Every scramble is solvable: it is a walk from the goal.
///
/// # Errors
///
/// Returns [`HarnessError::Grid`] if `side` is unsupported.
pub fn random_scramble<R: Rng + ?Sized>(
    side: usize,
    moves: usize,
    rng: &mut R,
) -> Result<TileGrid, HarnessError> {
    let mut grid = TileGrid::solved(side)?;
    for _ in 0..moves {
        let Some(&mv) = legal_moves(&grid).choose(rng) else {
            break;
        };
        grid = apply(&grid, mv)?;
    }
    trace!(side, moves, packed = grid.packed(), "scrambled");
    Ok(grid)
}

/// `count` scrambles drawn from one seeded generator. Same inputs, same grids.
///
/// # Errors
///
/// Returns [`HarnessError::Grid`] if `side` is unsupported.
pub fn seeded_scrambles(
    side: usize,
    moves: usize,
    count: usize,
    seed: u64,
) -> Result<Vec<TileGrid>, HarnessError> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| random_scramble(side, moves, &mut rng))
        .collect()
}

//! Shared helpers for waypoint benchmark suites.

use waypoint_harness::worlds::tile_puzzle::{builtin_puzzles, seeded_scrambles, TilePuzzle};

/// A named set of puzzles solved together in one benchmark iteration.
pub struct Regime {
    pub name: &'static str,
    pub puzzles: Vec<TilePuzzle>,
}

/// Seeded 8-puzzle scrambles of a fixed move count.
///
/// # Panics
///
/// Panics if scramble generation fails. Benchmark setup failures are fatal.
#[must_use]
pub fn scramble_regime(name: &'static str, moves: usize, count: usize, seed: u64) -> Regime {
    let puzzles = seeded_scrambles(3, moves, count, seed)
        .expect("scrambles")
        .into_iter()
        .map(|grid| TilePuzzle::new(grid).expect("puzzle"))
        .collect();
    Regime { name, puzzles }
}

/// The built-in table, minus the 24-move row that dominates uninformed runs.
///
/// # Panics
///
/// Panics if the built-in table fails to load.
#[must_use]
pub fn builtin_regime() -> Regime {
    let puzzles = builtin_puzzles()
        .expect("builtin table")
        .into_iter()
        .enumerate()
        .filter(|&(index, _)| index != 1)
        .map(|(_, grid)| TilePuzzle::new(grid).expect("puzzle"))
        .collect();
    Regime {
        name: "builtin",
        puzzles,
    }
}

/// Shallow, medium, and deep scramble regimes plus the built-in table.
#[must_use]
pub fn all_regimes() -> Vec<Regime> {
    vec![
        scramble_regime("scramble_8", 8, 10, 1),
        scramble_regime("scramble_16", 16, 10, 2),
        scramble_regime("scramble_24", 24, 5, 3),
        builtin_regime(),
    ]
}

//! Harness runner: picks an algorithm, runs it on a puzzle, and collects
//! batch outcomes.
//!
//! # Pipeline
//!
//! ```text
//! scenarios → TilePuzzle::new → [run_algorithm × algorithms] → BatchOutcome
//!   → stats::summarize / stats::heuristic_deviation → RunReport
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use waypoint_kernel::carrier::grid::TileGrid;
use waypoint_kernel::operators::apply::Move;
use waypoint_search::heuristic::{
    GridHeuristic, Heuristic, HeuristicKind, NullHeuristic, ParseHeuristicError,
};
use waypoint_search::policy::SearchPolicy;
use waypoint_search::result::SearchResult;
use waypoint_search::search::{
    astar_search, breadth_first_search, depth_first_search, uniform_cost_search,
};

use crate::config::HarnessConfig;
use crate::error::HarnessError;
use crate::worlds::tile_puzzle::TilePuzzle;

/// The four search algorithms the harness can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Astar,
    Bfs,
    Dfs,
    Ucs,
}

impl Algorithm {
    /// All algorithms in report order.
    pub const ALL: [Self; 4] = [Self::Astar, Self::Bfs, Self::Dfs, Self::Ucs];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Astar => "astar",
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::Ucs => "ucs",
        }
    }

    /// Human-readable name for text reports.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Astar => "A Star",
            Self::Bfs => "Breadth First Search",
            Self::Dfs => "Depth First Search",
            Self::Ucs => "Uniform Cost Search",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An algorithm name that matches none of the four.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm {0:?} (expected astar, bfs, dfs, or ucs)")]
pub struct ParseAlgorithmError(pub String);

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "astar" | "a*" => Ok(Self::Astar),
            "bfs" | "breadth_first" => Ok(Self::Bfs),
            "dfs" | "depth_first" => Ok(Self::Dfs),
            "ucs" | "uniform_cost" => Ok(Self::Ucs),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

/// Parse a heuristic selector where `"none"` means the zero heuristic.
///
/// # Errors
///
/// Returns [`ParseHeuristicError`] for anything else that is not a
/// heuristic name.
pub fn parse_heuristic_choice(s: &str) -> Result<Option<HeuristicKind>, ParseHeuristicError> {
    if s.trim().eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    s.parse().map(Some)
}

/// Run one algorithm on one puzzle.
///
/// `heuristic` applies to A* only; `None` runs A* with the zero heuristic.
///
/// # Errors
///
/// Returns [`HarnessError::Search`] if the policy is invalid or the search
/// rejects a replayed path.
pub fn run_algorithm(
    puzzle: &TilePuzzle,
    algorithm: Algorithm,
    heuristic: Option<HeuristicKind>,
    policy: &SearchPolicy,
) -> Result<SearchResult<Move>, HarnessError> {
    let result = match algorithm {
        Algorithm::Dfs => depth_first_search(puzzle, policy)?,
        Algorithm::Bfs => breadth_first_search(puzzle),
        Algorithm::Ucs => uniform_cost_search(puzzle),
        Algorithm::Astar => {
            let grid_heuristic;
            let estimator: &dyn Heuristic<TileGrid> = match heuristic {
                Some(kind) => {
                    grid_heuristic = GridHeuristic::new(kind, *puzzle.goal());
                    &grid_heuristic
                }
                None => &NullHeuristic,
            };
            astar_search(puzzle, estimator, policy)?
        }
    };
    Ok(result)
}

/// One algorithm's result on one scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct AlgorithmRun {
    pub algorithm: Algorithm,
    pub result: SearchResult<Move>,
}

/// Every configured algorithm's result on one start grid.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioOutcome {
    pub start: TileGrid,
    /// h1..h4 at the start grid, in [`HeuristicKind::ALL`] order.
    pub estimates: [f64; 4],
    pub runs: Vec<AlgorithmRun>,
}

impl ScenarioOutcome {
    /// The result for `algorithm`, if it was run.
    #[must_use]
    pub fn result(&self, algorithm: Algorithm) -> Option<&SearchResult<Move>> {
        self.runs
            .iter()
            .find(|run| run.algorithm == algorithm)
            .map(|run| &run.result)
    }
}

/// Outcomes for a whole batch, in scenario order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchOutcome {
    pub scenarios: Vec<ScenarioOutcome>,
}

impl BatchOutcome {
    /// Results for `algorithm` across all scenarios.
    pub fn results(&self, algorithm: Algorithm) -> impl Iterator<Item = &SearchResult<Move>> {
        self.scenarios
            .iter()
            .filter_map(move |scenario| scenario.result(algorithm))
    }
}

/// h1..h4 for `current` against `goal`.
#[must_use]
pub fn estimates(current: &TileGrid, goal: &TileGrid) -> [f64; 4] {
    HeuristicKind::ALL.map(|kind| kind.evaluate(current, goal))
}

/// Run every configured algorithm on every start grid.
///
/// # Errors
///
/// Returns the first [`HarnessError`] raised by any run. The policy is
/// validated before any search starts.
pub fn run_batch(
    starts: &[TileGrid],
    config: &HarnessConfig,
) -> Result<BatchOutcome, HarnessError> {
    config.validate()?;
    info!(
        scenarios = starts.len(),
        algorithms = config.algorithms.len(),
        "batch started"
    );

    let mut outcome = BatchOutcome::default();
    for (index, &start) in starts.iter().enumerate() {
        let puzzle = TilePuzzle::new(start)?;
        let mut runs = Vec::with_capacity(config.algorithms.len());
        for &algorithm in &config.algorithms {
            let result = run_algorithm(&puzzle, algorithm, config.heuristic, &config.policy)?;
            debug!(
                index,
                %algorithm,
                succeeded = result.succeeded,
                path_len = result.path_len(),
                explored = result.explored_count,
                "scenario run"
            );
            runs.push(AlgorithmRun { algorithm, result });
        }
        outcome.scenarios.push(ScenarioOutcome {
            start,
            estimates: estimates(&start, puzzle.goal()),
            runs,
        });
    }

    info!(scenarios = outcome.scenarios.len(), "batch finished");
    Ok(outcome)
}

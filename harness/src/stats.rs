//! Batch aggregation: per-algorithm averages and heuristic deviation.

use serde::Serialize;
use waypoint_search::heuristic::HeuristicKind;

use crate::runner::{Algorithm, BatchOutcome};

/// Averages for one algorithm over a batch.
///
/// Depth-first results are aggregated only when the search succeeded, since
/// a bounded failure's path is not a solution. Every other algorithm
/// aggregates all runs. Means are `None` when nothing was aggregated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlgorithmSummary {
    pub algorithm: Algorithm,
    pub runs: usize,
    pub succeeded: usize,
    pub aggregated: usize,
    pub mean_path_len: Option<f64>,
    pub mean_max_fringe_size: Option<f64>,
    pub mean_max_depth: Option<f64>,
    pub mean_explored_count: Option<f64>,
}

/// Mean of (h(start) - A* path length) for one estimator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeuristicDeviation {
    pub heuristic: HeuristicKind,
    /// Signed; negative when the estimator undershoots on average.
    pub mean_deviation: f64,
    /// `mean_deviation.abs()`.
    pub abs_mean_deviation: f64,
}

/// How far each estimator sits from the A* solution length, on average.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviationSummary {
    /// One entry per estimator, h1..h4.
    pub per_heuristic: Vec<HeuristicDeviation>,
    /// Mean h3 at the start grids.
    pub mean_h3: f64,
    /// Mean A* path length.
    pub mean_astar_path_len: f64,
}

#[allow(clippy::cast_precision_loss)]
fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

#[allow(clippy::cast_precision_loss)]
fn mean_of(values: impl Iterator<Item = usize>) -> Option<f64> {
    let values: Vec<f64> = values.map(|v| v as f64).collect();
    mean(&values)
}

/// Summarize `algorithm` over `batch`.
#[must_use]
pub fn summarize(batch: &BatchOutcome, algorithm: Algorithm) -> AlgorithmSummary {
    let all: Vec<_> = batch.results(algorithm).collect();
    let aggregated: Vec<_> = all
        .iter()
        .copied()
        .filter(|result| algorithm != Algorithm::Dfs || result.succeeded)
        .collect();

    AlgorithmSummary {
        algorithm,
        runs: all.len(),
        succeeded: all.iter().filter(|result| result.succeeded).count(),
        aggregated: aggregated.len(),
        mean_path_len: mean_of(aggregated.iter().map(|r| r.path_len())),
        mean_max_fringe_size: mean_of(aggregated.iter().map(|r| r.max_fringe_size)),
        mean_max_depth: mean_of(aggregated.iter().map(|r| r.max_depth)),
        mean_explored_count: mean_of(aggregated.iter().map(|r| r.explored_count)),
    }
}

/// Compare every estimator against the A* path length.
///
/// Returns `None` if no scenario in `batch` has an A* run.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn heuristic_deviation(batch: &BatchOutcome) -> Option<DeviationSummary> {
    let mut deviations: [Vec<f64>; 4] = Default::default();
    let mut h3 = Vec::new();
    let mut lengths = Vec::new();

    for scenario in &batch.scenarios {
        let Some(astar) = scenario.result(Algorithm::Astar) else {
            continue;
        };
        let length = astar.path_len() as f64;
        for (slot, estimate) in deviations.iter_mut().zip(scenario.estimates) {
            slot.push(estimate - length);
        }
        h3.push(scenario.estimates[2]);
        lengths.push(length);
    }

    let mean_h3 = mean(&h3)?;
    let per_heuristic = HeuristicKind::ALL
        .into_iter()
        .zip(&deviations)
        .map(|(heuristic, values)| {
            let mean_deviation = mean(values).unwrap_or_default();
            HeuristicDeviation {
                heuristic,
                mean_deviation,
                abs_mean_deviation: mean_deviation.abs(),
            }
        })
        .collect();

    Some(DeviationSummary {
        per_heuristic,
        mean_h3,
        mean_astar_path_len: mean(&lengths).unwrap_or_default(),
    })
}

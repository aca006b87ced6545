//! Batch report: the configuration, per-algorithm summaries, and heuristic
//! deviation, with a content digest over its JSON form.

use std::fmt;

use serde::Serialize;
use waypoint_kernel::carrier::grid::TileGrid;
use waypoint_kernel::proof::hash::{canonical_hash, ContentHash, DOMAIN_RUN_REPORT};
use waypoint_search::heuristic::HeuristicKind;
use waypoint_search::policy::SearchPolicy;

use crate::config::HarnessConfig;
use crate::error::HarnessError;
use crate::runner::BatchOutcome;
use crate::scenarios::scenario_digest;
use crate::stats::{heuristic_deviation, summarize, AlgorithmSummary, DeviationSummary};

/// Everything a batch produced, ready for printing or serialization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub scenario_count: usize,
    pub scramble_moves: usize,
    pub seed: u64,
    pub heuristic: Option<HeuristicKind>,
    pub policy: SearchPolicy,
    /// Digest of the ordered start grids.
    pub scenario_digest: String,
    pub summaries: Vec<AlgorithmSummary>,
    pub deviation: Option<DeviationSummary>,
}

impl RunReport {
    /// Assemble a report for a finished batch.
    #[must_use]
    pub fn build(config: &HarnessConfig, starts: &[TileGrid], batch: &BatchOutcome) -> Self {
        Self {
            scenario_count: starts.len(),
            scramble_moves: config.scramble_moves,
            seed: config.seed,
            heuristic: config.heuristic,
            policy: config.policy,
            scenario_digest: scenario_digest(starts).to_string(),
            summaries: config
                .algorithms
                .iter()
                .map(|&algorithm| summarize(batch, algorithm))
                .collect(),
            deviation: heuristic_deviation(batch),
        }
    }

    /// Compact JSON bytes. Field order is declaration order, so equal
    /// reports serialize identically.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Report`] if serialization fails.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, HarnessError> {
        serde_json::to_vec(self).map_err(HarnessError::Report)
    }

    /// Indented JSON for humans.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Report`] if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, HarnessError> {
        serde_json::to_string_pretty(self).map_err(HarnessError::Report)
    }

    /// `canonical_hash(DOMAIN_RUN_REPORT, to_json_bytes())`.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Report`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, HarnessError> {
        Ok(canonical_hash(DOMAIN_RUN_REPORT, &self.to_json_bytes()?))
    }
}

fn write_mean(f: &mut fmt::Formatter<'_>, label: &str, value: Option<f64>) -> fmt::Result {
    match value {
        Some(v) => writeln!(f, "{label}: {v:.3}"),
        None => writeln!(f, "{label}: n/a"),
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const RULE: &str = "------------------------------------------------------------";
        let context = format!(
            "{} puzzles with {} random moves",
            self.scenario_count, self.scramble_moves
        );

        if let Some(deviation) = &self.deviation {
            writeln!(f, "Mean heuristic minus A* path length, {context}")?;
            writeln!(f, "{RULE}")?;
            for entry in &deviation.per_heuristic {
                writeln!(
                    f,
                    "{}: {:.3} (abs {:.3})",
                    entry.heuristic, entry.mean_deviation, entry.abs_mean_deviation
                )?;
            }
            writeln!(f)?;
        }

        let sections: [(&str, fn(&AlgorithmSummary) -> Option<f64>); 4] = [
            ("Average maximum fringe size", |s| s.mean_max_fringe_size),
            ("Average maximum depth", |s| s.mean_max_depth),
            ("Average explored count", |s| s.mean_explored_count),
            ("Average path length", |s| s.mean_path_len),
        ];
        for (title, field) in sections {
            writeln!(f, "{title}, {context}")?;
            writeln!(f, "{RULE}")?;
            if title == "Average path length" {
                if let Some(deviation) = &self.deviation {
                    writeln!(f, "h3: {:.3}", deviation.mean_h3)?;
                }
            }
            for summary in &self.summaries {
                write_mean(f, summary.algorithm.title(), field(summary))?;
            }
            writeln!(f)?;
        }

        write!(f, "scenarios: {}", self.scenario_digest)
    }
}

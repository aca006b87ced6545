//! Harness configuration.
//!
//! Loaded from JSON; every field is optional and falls back to
//! [`HarnessConfig::default`]. CLI flags override individual fields after
//! loading.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use waypoint_kernel::carrier::grid::{MAX_SIDE, MIN_SIDE};
use waypoint_search::heuristic::HeuristicKind;
use waypoint_search::policy::SearchPolicy;

use crate::error::HarnessError;
use crate::runner::Algorithm;

const DEFAULT_SCENARIO_COUNT: usize = 100;
const DEFAULT_SCRAMBLE_MOVES: usize = 20;

/// Batch settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HarnessConfig {
    /// Number of random scenarios per batch.
    pub scenario_count: usize,
    /// Random legal moves applied to the solved grid per scenario.
    pub scramble_moves: usize,
    /// Generator seed for scrambles.
    pub seed: u64,
    /// Grid side.
    pub side: usize,
    /// Algorithms to run on every scenario, in report order.
    pub algorithms: Vec<Algorithm>,
    /// A* estimator, h3 unless set; `null` runs A* with the zero heuristic.
    pub heuristic: Option<HeuristicKind>,
    pub policy: SearchPolicy,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            scenario_count: DEFAULT_SCENARIO_COUNT,
            scramble_moves: DEFAULT_SCRAMBLE_MOVES,
            seed: 0,
            side: 3,
            algorithms: Algorithm::ALL.to_vec(),
            heuristic: Some(HeuristicKind::Manhattan),
            policy: SearchPolicy::default(),
        }
    }
}

impl HarnessConfig {
    /// Read a JSON config file.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Io`] if the file cannot be read,
    /// [`HarnessError::ConfigParse`] if it is not a valid config, and any
    /// error from [`HarnessConfig::validate`].
    pub fn load(path: &Path) -> Result<Self, HarnessError> {
        let text = fs::read_to_string(path).map_err(|source| HarnessError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text).map_err(HarnessError::ConfigParse)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the config before any scenario is built.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::InvalidConfig`] for an unsupported side or an
    /// empty algorithm list, and [`HarnessError::Search`] for an invalid
    /// policy.
    pub fn validate(&self) -> Result<(), HarnessError> {
        if !(MIN_SIDE..=MAX_SIDE).contains(&self.side) {
            return Err(HarnessError::InvalidConfig {
                detail: format!("side must be in {MIN_SIDE}..={MAX_SIDE}, got {}", self.side),
            });
        }
        if self.algorithms.is_empty() {
            return Err(HarnessError::InvalidConfig {
                detail: "algorithms must not be empty".into(),
            });
        }
        self.policy.validate()?;
        Ok(())
    }
}

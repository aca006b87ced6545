//! Search policy types.

use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Default path-length bound for depth-first search.
pub const DEFAULT_DEPTH_BOUND: usize = 10;

/// Search configuration shared by every algorithm.
///
/// Algorithms read only the fields that apply to them: `depth_bound` is used
/// by depth-first search, `dominance` by heuristic best-first search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchPolicy {
    /// Depth-first search expands only nodes whose path length is below this.
    pub depth_bound: usize,
    /// Duplicate-state rule for heuristic best-first search.
    pub dominance: DominanceRule,
}

impl SearchPolicy {
    /// Validate the policy before any search step is taken.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `depth_bound` is zero (the
    /// start state could never be expanded).
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.depth_bound == 0 {
            return Err(SearchError::InvalidPolicy {
                detail: "depth_bound must be at least 1".into(),
            });
        }
        Ok(())
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            depth_bound: DEFAULT_DEPTH_BOUND,
            dominance: DominanceRule::default(),
        }
    }
}

/// How heuristic best-first search treats a successor whose state was seen before.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DominanceRule {
    /// Every popped node is recorded; a successor is dropped when any record
    /// for its state has cost ≤ its own, and recorded again when pushed.
    #[default]
    Observed,
    /// Finalize each state once on pop; reopen only on strict cost improvement.
    Textbook,
}

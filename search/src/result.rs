//! Search results and the per-call statistics accumulator.

use crate::contract::Cost;
use crate::node::SearchNode;

/// Exploration statistics, local to one search call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Largest simultaneous frontier size.
    pub max_fringe_size: usize,
    /// Longest path among popped nodes.
    pub max_depth: usize,
    /// Explored-state count as defined by the algorithm.
    pub explored_count: usize,
}

impl SearchStats {
    /// Account for a node leaving the frontier.
    pub(crate) fn observe_pop(&mut self, depth: usize) {
        self.max_depth = self.max_depth.max(depth);
    }
}

/// Result of a search execution.
///
/// On success `path` leads from the start state to a goal. On frontier
/// exhaustion `succeeded` is `false` and `path`/`cost` describe the last
/// node popped, which lets callers tell a bounded failure from a true one by
/// inspecting depth.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<A> {
    /// Action path of the goal node (or of the last popped node on failure).
    pub path: Vec<A>,
    /// Cost of `path` as accumulated by the search.
    pub cost: Cost,
    /// Largest simultaneous frontier size.
    pub max_fringe_size: usize,
    /// Longest path among popped nodes.
    pub max_depth: usize,
    /// Explored-state count as defined by the algorithm.
    pub explored_count: usize,
    /// Whether a goal was reached.
    pub succeeded: bool,
}

impl<A> SearchResult<A> {
    pub(crate) fn finish<S>(
        node: Option<SearchNode<S, A>>,
        succeeded: bool,
        stats: SearchStats,
    ) -> Self {
        let (path, cost) = node.map_or_else(|| (Vec::new(), 0.0), |n| (n.path, n.cost));
        Self {
            path,
            cost,
            max_fringe_size: stats.max_fringe_size,
            max_depth: stats.max_depth,
            explored_count: stats.explored_count,
            succeeded,
        }
    }

    /// Number of actions in `path`.
    #[must_use]
    pub fn path_len(&self) -> usize {
        self.path.len()
    }

    /// The statistics portion of the result.
    #[must_use]
    pub fn stats(&self) -> SearchStats {
        SearchStats {
            max_fringe_size: self.max_fringe_size,
            max_depth: self.max_depth,
            explored_count: self.explored_count,
        }
    }
}

//! Explored-state bookkeeping for cost-sensitive searches.

use std::collections::HashMap;
use std::hash::Hash;

use crate::contract::Cost;

/// Best recorded cost per state, plus a count of every record written.
///
/// Searches that keep a record per visit (rather than one per state) only
/// ever ask "is there a record for this state at cost ≤ c?", which depends
/// on the minimum alone. Keeping the minimum in a map answers that in O(1)
/// while `appended` preserves the per-visit count.
#[derive(Debug)]
pub struct ExploredRecord<S> {
    best: HashMap<S, Cost>,
    appended: usize,
}

impl<S: Clone + Eq + Hash> ExploredRecord<S> {
    /// Create an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self {
            best: HashMap::new(),
            appended: 0,
        }
    }

    /// Record `state` at `cost`. The stored best only ever decreases.
    pub fn record(&mut self, state: &S, cost: Cost) {
        self.appended += 1;
        self.best
            .entry(state.clone())
            .and_modify(|best| {
                if cost < *best {
                    *best = cost;
                }
            })
            .or_insert(cost);
    }

    /// Lowest cost recorded for `state`.
    #[must_use]
    pub fn best(&self, state: &S) -> Option<Cost> {
        self.best.get(state).copied()
    }

    /// Whether some record for `state` has cost ≤ `cost`.
    #[must_use]
    pub fn dominates(&self, state: &S, cost: Cost) -> bool {
        self.best(state).is_some_and(|best| best <= cost)
    }

    /// Whether `cost` would be strictly better than anything recorded.
    #[must_use]
    pub fn improves(&self, state: &S, cost: Cost) -> bool {
        !self.dominates(state, cost)
    }

    /// Number of distinct states recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.best.len()
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }

    /// Number of `record` calls, counting repeats for the same state.
    #[must_use]
    pub fn appended(&self) -> usize {
        self.appended
    }
}

impl<S: Clone + Eq + Hash> Default for ExploredRecord<S> {
    fn default() -> Self {
        Self::new()
    }
}

//! Core search node and frontier ordering key.

use std::cmp::Ordering;

use crate::contract::{Cost, Successor};

/// A transient search node: a state plus the path and cost that reached it.
///
/// Nodes carry their full action path instead of a parent link, so no search
/// graph is retained once a node has been expanded.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchNode<S, A> {
    /// State at this node.
    pub state: S,
    /// Actions from the start state to `state`.
    pub path: Vec<A>,
    /// Cumulative path cost.
    pub cost: Cost,
}

impl<S, A: Clone> SearchNode<S, A> {
    /// The root node: empty path, zero cost.
    #[must_use]
    pub fn root(state: S) -> Self {
        Self {
            state,
            path: Vec::new(),
            cost: 0.0,
        }
    }

    /// Path length (root = 0).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Extend this node by one transition, summing the step cost.
    #[must_use]
    pub fn child(&self, successor: Successor<S, A>) -> Self {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(successor.action);
        Self {
            state: successor.state,
            path,
            cost: self.cost + successor.step_cost,
        }
    }
}

/// The priority frontier ordering key: `(priority, creation_order)`.
///
/// Lower priority first, then older `creation_order`, so equal priorities
/// pop in insertion order.
#[derive(Debug, Clone, Copy)]
pub struct FrontierKey {
    pub priority: Cost,
    pub creation_order: u64,
}

impl PartialEq for FrontierKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierKey {}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then(self.creation_order.cmp(&other.creation_order))
    }
}

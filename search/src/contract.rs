//! Search problem contract trait.

use std::hash::Hash;

/// Path and step cost. Real-valued so non-integral heuristics can share the
/// priority scale; all orderings use `f64::total_cmp`.
pub type Cost = f64;

/// One outgoing transition produced by [`SearchProblem::successors`].
#[derive(Debug, Clone, PartialEq)]
pub struct Successor<S, A> {
    /// The state reached.
    pub state: S,
    /// The action label that reaches it.
    pub action: A,
    /// Non-negative incremental cost.
    pub step_cost: Cost,
}

/// Trait for problems that support search.
///
/// # Contract
///
/// - All methods are read-only; a problem must not change over the lifetime
///   of one search call.
/// - `successors` must return a finite list. No ordering is required, but a
///   deterministic order gives reproducible results.
/// - State identity is content-based: two states are the same search node iff
///   they compare equal, and equal states hash equally.
pub trait SearchProblem {
    /// Search state. Must be cheap enough to clone into explored records.
    type State: Clone + Eq + Hash;
    /// Transition label.
    type Action: Clone;

    /// The start state.
    fn start(&self) -> Self::State;

    /// Whether `state` satisfies the goal.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Transitions out of `state`.
    fn successors(&self, state: &Self::State) -> Vec<Successor<Self::State, Self::Action>>;

    /// Total cost of applying `actions` from the start state.
    ///
    /// Returns `None` if the sequence contains a transition that is illegal
    /// where it is applied. Searches treat `None` for a path they generated
    /// themselves as a contract violation.
    fn cost_of_actions(&self, actions: &[Self::Action]) -> Option<Cost>;
}

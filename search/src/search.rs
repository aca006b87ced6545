//! Search entry points and expansion loops.
//!
//! | algorithm          | frontier                  | finalized when            |
//! |--------------------|---------------------------|---------------------------|
//! | depth-first        | LIFO                      | first pop under the bound |
//! | breadth-first      | FIFO                      | first pop                 |
//! | uniform-cost       | priority on g, `update`   | pop at a strictly lower g |
//! | best-first (A*)    | priority on g + h, `push` | see [`DominanceRule`]     |
//!
//! Every loop keeps the last popped node so that an exhausted search still
//! reports the path it ended on.

use std::collections::{HashMap, HashSet};

use tracing::{debug, trace};

use crate::contract::SearchProblem;
use crate::error::SearchError;
use crate::explored::ExploredRecord;
use crate::frontier::{FifoFrontier, Frontier, LifoFrontier, PriorityFrontier};
use crate::heuristic::Heuristic;
use crate::node::SearchNode;
use crate::policy::{DominanceRule, SearchPolicy};
use crate::result::{SearchResult, SearchStats};

type Node<P> = SearchNode<<P as SearchProblem>::State, <P as SearchProblem>::Action>;

/// Bounded depth-first search.
///
/// Nodes whose path length is at or beyond `policy.depth_bound` are dropped
/// without being finalized or goal-tested, so a goal deeper than the bound
/// is reported as `succeeded = false`.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] if the policy fails validation.
pub fn depth_first_search<P: SearchProblem>(
    problem: &P,
    policy: &SearchPolicy,
) -> Result<SearchResult<P::Action>, SearchError> {
    policy.validate()?;
    Ok(graph_search(
        problem,
        LifoFrontier::new(),
        Some(policy.depth_bound),
        "depth_first",
    ))
}

/// Breadth-first search. Finalizes each state the first time it is popped.
pub fn breadth_first_search<P: SearchProblem>(problem: &P) -> SearchResult<P::Action> {
    graph_search(problem, FifoFrontier::new(), None, "breadth_first")
}

/// Shared loop for the unprioritized disciplines.
fn graph_search<P, F>(
    problem: &P,
    mut frontier: F,
    depth_bound: Option<usize>,
    algorithm: &'static str,
) -> SearchResult<P::Action>
where
    P: SearchProblem,
    F: Frontier<Node<P>>,
{
    let mut explored: HashSet<P::State> = HashSet::new();
    let mut stats = SearchStats::default();
    let mut last: Option<Node<P>> = None;

    debug!(algorithm, ?depth_bound, "search started");
    frontier.push(SearchNode::root(problem.start()));

    while let Some(node) = frontier.pop() {
        stats.observe_pop(node.depth());

        let within_bound = !depth_bound.is_some_and(|bound| node.depth() >= bound);
        if within_bound && !explored.contains(&node.state) {
            explored.insert(node.state.clone());

            if problem.is_goal(&node.state) {
                stats.explored_count = explored.len();
                stats.max_fringe_size = frontier.high_water();
                return finish(algorithm, Some(node), true, stats);
            }

            for successor in problem.successors(&node.state) {
                frontier.push(node.child(successor));
            }
            trace!(
                algorithm,
                depth = node.depth(),
                frontier = frontier.len(),
                "expanded"
            );
        }
        last = Some(node);
    }

    stats.explored_count = explored.len();
    stats.max_fringe_size = frontier.high_water();
    finish(algorithm, last, false, stats)
}

/// Uniform-cost search.
///
/// Successors enter the frontier through [`PriorityFrontier::update`]. A
/// popped node is expanded only if its state is unexplored or its cost
/// strictly improves on the recorded best; stale entries are skipped at pop
/// time. Optimal for any non-negative step costs.
pub fn uniform_cost_search<P: SearchProblem>(problem: &P) -> SearchResult<P::Action> {
    let algorithm = "uniform_cost";
    debug!(algorithm, "search started");
    let mut frontier: PriorityFrontier<P::State, P::Action> = PriorityFrontier::new();
    let mut explored = ExploredRecord::new();
    let mut stats = SearchStats::default();
    let mut last: Option<Node<P>> = None;

    frontier.push(SearchNode::root(problem.start()), 0.0);

    while let Some(node) = frontier.pop() {
        stats.observe_pop(node.depth());

        if explored.improves(&node.state, node.cost) {
            explored.record(&node.state, node.cost);

            if problem.is_goal(&node.state) {
                stats.explored_count = explored.len();
                stats.max_fringe_size = frontier.high_water();
                return finish(algorithm, Some(node), true, stats);
            }

            for successor in problem.successors(&node.state) {
                let child = node.child(successor);
                let priority = child.cost;
                frontier.update(child, priority);
            }
            trace!(
                algorithm,
                depth = node.depth(),
                cost = node.cost,
                frontier = frontier.len(),
                "expanded"
            );
        }
        last = Some(node);
    }

    stats.explored_count = explored.len();
    stats.max_fringe_size = frontier.high_water();
    finish(algorithm, last, false, stats)
}

/// Heuristic best-first search ordered by `cost + heuristic`.
///
/// Successor costs are recomputed with [`SearchProblem::cost_of_actions`].
/// Duplicate handling follows `policy.dominance`:
///
/// - [`DominanceRule::Observed`]: every popped node is recorded; a successor
///   is dropped if any record for its state has cost ≤ its own, otherwise it
///   is pushed and recorded. `explored_count` counts records written.
/// - [`DominanceRule::Textbook`]: each state is finalized on its first pop
///   and reopened only on a strictly cheaper path. `explored_count` counts
///   finalized states.
///
/// # Errors
///
/// Returns [`SearchError::IllegalActionSequence`] if `cost_of_actions`
/// rejects a path built from the problem's own successors.
pub fn astar_search<P, H>(
    problem: &P,
    heuristic: &H,
    policy: &SearchPolicy,
) -> Result<SearchResult<P::Action>, SearchError>
where
    P: SearchProblem,
    H: Heuristic<P::State> + ?Sized,
{
    debug!(algorithm = "astar", dominance = ?policy.dominance, "search started");
    match policy.dominance {
        DominanceRule::Observed => astar_observed(problem, heuristic),
        DominanceRule::Textbook => astar_textbook(problem, heuristic),
    }
}

/// Path to `successor` and its recomputed cost.
fn successor_path<P: SearchProblem>(
    problem: &P,
    node: &Node<P>,
    action: P::Action,
) -> Result<(Vec<P::Action>, f64), SearchError> {
    let mut path = Vec::with_capacity(node.path.len() + 1);
    path.extend_from_slice(&node.path);
    path.push(action);
    let cost = problem
        .cost_of_actions(&path)
        .ok_or(SearchError::IllegalActionSequence { depth: path.len() })?;
    Ok((path, cost))
}

fn astar_observed<P, H>(problem: &P, heuristic: &H) -> Result<SearchResult<P::Action>, SearchError>
where
    P: SearchProblem,
    H: Heuristic<P::State> + ?Sized,
{
    let algorithm = "astar";
    let mut frontier: PriorityFrontier<P::State, P::Action> = PriorityFrontier::new();
    let mut explored = ExploredRecord::new();
    let mut stats = SearchStats::default();
    let mut last: Option<Node<P>> = None;

    frontier.push(SearchNode::root(problem.start()), 0.0);

    while let Some(node) = frontier.pop() {
        stats.observe_pop(node.depth());
        explored.record(&node.state, node.cost);

        if problem.is_goal(&node.state) {
            stats.explored_count = explored.appended();
            stats.max_fringe_size = frontier.high_water();
            return Ok(finish(algorithm, Some(node), true, stats));
        }

        for successor in problem.successors(&node.state) {
            let (path, cost) = successor_path(problem, &node, successor.action)?;
            if explored.dominates(&successor.state, cost) {
                continue;
            }
            let priority = cost + heuristic.estimate(&successor.state);
            explored.record(&successor.state, cost);
            frontier.push(
                SearchNode {
                    state: successor.state,
                    path,
                    cost,
                },
                priority,
            );
        }
        trace!(
            algorithm,
            depth = node.depth(),
            cost = node.cost,
            frontier = frontier.len(),
            "expanded"
        );
        last = Some(node);
    }

    stats.explored_count = explored.appended();
    stats.max_fringe_size = frontier.high_water();
    Ok(finish(algorithm, last, false, stats))
}

fn astar_textbook<P, H>(problem: &P, heuristic: &H) -> Result<SearchResult<P::Action>, SearchError>
where
    P: SearchProblem,
    H: Heuristic<P::State> + ?Sized,
{
    let algorithm = "astar_textbook";
    let mut frontier: PriorityFrontier<P::State, P::Action> = PriorityFrontier::new();
    let mut closed = ExploredRecord::new();
    let mut best_g: HashMap<P::State, f64> = HashMap::new();
    let mut stats = SearchStats::default();
    let mut last: Option<Node<P>> = None;

    let start = problem.start();
    let h0 = heuristic.estimate(&start);
    best_g.insert(start.clone(), 0.0);
    frontier.push(SearchNode::root(start), h0);

    while let Some(node) = frontier.pop() {
        stats.observe_pop(node.depth());

        if closed.improves(&node.state, node.cost) {
            closed.record(&node.state, node.cost);

            if problem.is_goal(&node.state) {
                stats.explored_count = closed.len();
                stats.max_fringe_size = frontier.high_water();
                return Ok(finish(algorithm, Some(node), true, stats));
            }

            for successor in problem.successors(&node.state) {
                let (path, cost) = successor_path(problem, &node, successor.action)?;
                if best_g
                    .get(&successor.state)
                    .is_some_and(|&known| known <= cost)
                {
                    continue;
                }
                best_g.insert(successor.state.clone(), cost);
                let priority = cost + heuristic.estimate(&successor.state);
                frontier.push(
                    SearchNode {
                        state: successor.state,
                        path,
                        cost,
                    },
                    priority,
                );
            }
            trace!(
                algorithm,
                depth = node.depth(),
                cost = node.cost,
                frontier = frontier.len(),
                "expanded"
            );
        }
        last = Some(node);
    }

    stats.explored_count = closed.len();
    stats.max_fringe_size = frontier.high_water();
    Ok(finish(algorithm, last, false, stats))
}

fn finish<S, A>(
    algorithm: &'static str,
    node: Option<SearchNode<S, A>>,
    succeeded: bool,
    stats: SearchStats,
) -> SearchResult<A> {
    let result = SearchResult::finish(node, succeeded, stats);
    debug!(
        algorithm,
        succeeded,
        path_len = result.path_len(),
        cost = result.cost,
        max_fringe_size = result.max_fringe_size,
        max_depth = result.max_depth,
        explored_count = result.explored_count,
        "search finished"
    );
    result
}

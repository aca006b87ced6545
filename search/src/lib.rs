//! Waypoint Search: generic state-space search over an abstract problem contract.
//!
//! This crate provides the search layer. It depends only on
//! `waypoint_kernel` (for the grid heuristics); it does NOT depend on
//! `waypoint_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! waypoint_kernel  ←  waypoint_search  ←  waypoint_harness
//! (tile grid, moves)  (frontiers, algos)   (worlds, batches, CLI)
//! ```
//!
//! # Key types
//!
//! - [`SearchProblem`](contract::SearchProblem) — start, goal test, successors, path cost
//! - [`LifoFrontier`](frontier::LifoFrontier), [`FifoFrontier`](frontier::FifoFrontier),
//!   [`PriorityFrontier`](frontier::PriorityFrontier) — frontier disciplines
//! - [`Heuristic`](heuristic::Heuristic) — remaining-cost estimators
//! - [`SearchPolicy`](policy::SearchPolicy) — depth bound and dominance rule
//! - [`SearchResult`](result::SearchResult) — path plus exploration statistics

#![forbid(unsafe_code)]

pub mod contract;
pub mod error;
pub mod explored;
pub mod frontier;
pub mod heuristic;
pub mod node;
pub mod policy;
pub mod result;
pub mod search;

//! Waypoint Harness: sliding-tile worlds and batch orchestration for the
//! search layer.
//!
//! The harness builds problems, runs the search algorithms over them, and
//! aggregates the results. It does NOT implement search logic; it delegates
//! to `waypoint_search`. Worlds provide domain data only.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod report;
pub mod runner;
pub mod scenarios;
pub mod stats;
pub mod walkthrough;
pub mod worlds;

//! Waypoint Kernel: the sliding-tile carrier and its move operators.
//!
//! # API Surface
//!
//! - [`carrier::grid::TileGrid`] -- packed, content-addressed puzzle grid
//! - [`operators::apply::apply`] -- slide the blank, producing a new grid
//! - [`proof::hash::canonical_hash`] -- domain-separated SHA-256 digests
//!
//! # Module Dependency Direction
//!
//! `carrier` ← `operators` ← `proof`
//!
//! One-way only. `proof` does not depend on the other two; it sits last
//! because only reporting code reaches for it.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod carrier;
pub mod operators;
pub mod proof;

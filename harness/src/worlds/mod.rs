//! World implementations for the harness runner.

pub mod tile_puzzle;

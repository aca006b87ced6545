//! Operators module: blank-slide moves and the `apply()` entry point.
//!
//! Depends on `carrier`. Does not import from `proof`.

pub mod apply;

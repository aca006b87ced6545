//! Proof module: canonical hashing for reproducible run reports.

pub mod hash;

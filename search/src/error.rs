//! Typed search errors.
//!
//! `SearchError` is reserved for pre-flight failures and contract
//! violations. Running out of frontier is NOT an error: it is reported as
//! `SearchResult { succeeded: false, .. }`.

use thiserror::Error;

/// Typed failure for a search call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The policy cannot produce a meaningful search.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },
    /// `cost_of_actions` rejected a path built from the problem's own successors.
    #[error("problem rejected a successor path of length {depth} as illegal")]
    IllegalActionSequence { depth: usize },
}

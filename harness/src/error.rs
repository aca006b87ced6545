//! Typed failures for harness operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use waypoint_kernel::carrier::grid::GridError;
use waypoint_kernel::operators::apply::IllegalTransition;
use waypoint_search::error::SearchError;

/// Error during scenario construction, a batch run, or reporting.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// Grid construction failed.
    #[error(transparent)]
    Grid(#[from] GridError),
    /// A move sequence could not be replayed.
    #[error(transparent)]
    Transition(#[from] IllegalTransition),
    /// The search rejected its input.
    #[error(transparent)]
    Search(#[from] SearchError),
    /// Start and goal grids have different sides.
    #[error("start grid has side {start} but goal grid has side {goal}")]
    ShapeMismatch { start: usize, goal: usize },
    /// Built-in puzzle index out of range.
    #[error("no built-in puzzle {index} (have {available})")]
    UnknownPuzzle { index: usize, available: usize },
    /// A CSV cell is not a tile value.
    #[error("line {line}: {value:?} is not a tile value")]
    CsvCell { line: usize, value: String },
    /// A CSV row has the right width but is not a legal grid.
    #[error("line {line}: {source}")]
    CsvGrid { line: usize, source: GridError },
    /// Reading an input file failed.
    #[error("failed to read {}", path.display())]
    Io { path: PathBuf, source: io::Error },
    /// Configuration parsed but is unusable.
    #[error("invalid config: {detail}")]
    InvalidConfig { detail: String },
    /// Configuration JSON is malformed.
    #[error("failed to parse config")]
    ConfigParse(#[source] serde_json::Error),
    /// Report serialization failed.
    #[error("failed to serialize report")]
    Report(#[source] serde_json::Error),
}

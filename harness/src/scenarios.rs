//! Scenario files: comma-separated rows of tile values, one grid per row.
//!
//! A row becomes a grid only if it has exactly `side * side` fields; rows of
//! any other width (headers, blank lines, notes) are skipped. A row of the
//! right width that does not parse or is not a legal grid is an error
//! naming its 1-based line.

use std::fs;
use std::path::Path;

use tracing::{debug, info};
use waypoint_kernel::carrier::grid::TileGrid;
use waypoint_kernel::proof::hash::{canonical_hash, ContentHash, DOMAIN_SCENARIO_SET};

use crate::error::HarnessError;

/// Parse scenario rows from CSV text.
///
/// # Errors
///
/// Returns [`HarnessError::CsvCell`] for a non-integer or out-of-range
/// cell and [`HarnessError::CsvGrid`] for a row that is not a permutation.
pub fn parse_csv(text: &str, side: usize) -> Result<Vec<TileGrid>, HarnessError> {
    let width = side * side;
    let mut grids = Vec::new();

    for (i, row) in text.lines().enumerate() {
        let line = i + 1;
        let fields: Vec<&str> = row.split(',').map(str::trim).collect();
        if fields.len() != width {
            debug!(line, fields = fields.len(), "skipping row");
            continue;
        }

        let cells = fields
            .iter()
            .map(|field| {
                field.parse::<u8>().map_err(|_| HarnessError::CsvCell {
                    line,
                    value: (*field).to_string(),
                })
            })
            .collect::<Result<Vec<u8>, _>>()?;
        let grid = TileGrid::new(&cells).map_err(|source| HarnessError::CsvGrid { line, source })?;
        grids.push(grid);
    }

    Ok(grids)
}

/// Read and parse a scenario file.
///
/// # Errors
///
/// Returns [`HarnessError::Io`] if the file cannot be read, otherwise any
/// error from [`parse_csv`].
pub fn load_csv(path: &Path, side: usize) -> Result<Vec<TileGrid>, HarnessError> {
    let text = fs::read_to_string(path).map_err(|source| HarnessError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let grids = parse_csv(&text, side)?;
    info!(path = %path.display(), scenarios = grids.len(), "loaded scenarios");
    Ok(grids)
}

/// Content digest of an ordered scenario set.
///
/// Each grid contributes its side followed by its row-major cells, so two
/// sets hash equal iff they hold the same grids in the same order.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn scenario_digest(grids: &[TileGrid]) -> ContentHash {
    let mut bytes = Vec::with_capacity(grids.len() * 10);
    for grid in grids {
        bytes.push(grid.side() as u8);
        bytes.extend(grid.cells());
    }
    canonical_hash(DOMAIN_SCENARIO_SET, &bytes)
}

//! Scenario files end to end: load from disk, solve every row.

use std::io::Write;

use waypoint_harness::error::HarnessError;
use waypoint_harness::runner::{run_algorithm, Algorithm};
use waypoint_harness::scenarios::{load_csv, scenario_digest};
use waypoint_harness::worlds::tile_puzzle::TilePuzzle;
use waypoint_search::heuristic::HeuristicKind;
use waypoint_search::policy::SearchPolicy;

fn write_csv(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn load_and_solve_every_row() {
    let file = write_csv(
        "c0,c1,c2,c3,c4,c5,c6,c7,c8,label\n\
         1,0,2,3,4,5,6,7,8\n\
         4,3,2,7,0,5,1,6,8\n\
         \n\
         0,3,1,6,8,2,7,5,4\n",
    );
    let grids = load_csv(file.path(), 3).unwrap();
    assert_eq!(grids.len(), 3, "header row has ten fields and is skipped");

    let expected = [1, 10, 12];
    for (grid, length) in grids.iter().zip(expected) {
        let puzzle = TilePuzzle::new(*grid).unwrap();
        let result = run_algorithm(
            &puzzle,
            Algorithm::Astar,
            Some(HeuristicKind::Manhattan),
            &SearchPolicy::default(),
        )
        .unwrap();
        assert!(result.succeeded);
        assert_eq!(result.path_len(), length);
    }
}

#[test]
fn reloading_gives_same_digest() {
    let file = write_csv("1,0,2,3,4,5,6,7,8\n0,1,2,3,4,5,6,7,8\n");
    let first = scenario_digest(&load_csv(file.path(), 3).unwrap());
    let second = scenario_digest(&load_csv(file.path(), 3).unwrap());
    assert_eq!(first, second);
}

#[test]
fn out_of_range_tile_names_line() {
    let file = write_csv("0,1,2,3,4,5,6,7,8\n0,1,2,3,4,5,6,7,9\n");
    let err = load_csv(file.path(), 3).unwrap_err();
    assert!(matches!(err, HarnessError::CsvGrid { line: 2, .. }), "got {err:?}");
    assert!(err.to_string().starts_with("line 2:"));
}

#[test]
fn other_sides_read_their_own_width() {
    let file = write_csv("3,1,2,0\n1,0,2,3,4,5,6,7,8\n");
    let grids = load_csv(file.path(), 2).unwrap();
    assert_eq!(grids.len(), 1);
    assert_eq!(grids[0].side(), 2);
}

//! Goal-path validity and statistics sanity across every algorithm.
//!
//! On success, replaying the returned path from the start must reach the
//! goal with every step legal, and `cost_of_actions` must accept it.

use waypoint_harness::runner::{run_algorithm, Algorithm};
use waypoint_harness::worlds::tile_puzzle::{builtin, seeded_scrambles, TilePuzzle};
use waypoint_kernel::operators::apply::apply_all;
use waypoint_search::contract::SearchProblem;
use waypoint_search::heuristic::HeuristicKind;
use waypoint_search::policy::SearchPolicy;

fn assert_valid(puzzle: &TilePuzzle, algorithm: Algorithm, heuristic: Option<HeuristicKind>) {
    let result = run_algorithm(puzzle, algorithm, heuristic, &SearchPolicy::default()).unwrap();

    assert!(result.max_fringe_size >= 1, "{algorithm}: fringe held the start");
    assert!(result.explored_count >= 1, "{algorithm}: start was explored");
    assert!(
        result.max_depth >= result.path_len(),
        "{algorithm}: returned node was popped"
    );

    if result.succeeded {
        let end = apply_all(puzzle.start_grid(), &result.path).unwrap();
        assert!(puzzle.is_goal(&end), "{algorithm}: path must end at goal");
        #[allow(clippy::cast_precision_loss)]
        let expected = result.path_len() as f64;
        assert_eq!(puzzle.cost_of_actions(&result.path), Some(expected));
    }
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: goal-path validity on the built-in table
// ---------------------------------------------------------------------------

#[test]
fn builtin_paths_replay_to_goal() {
    for index in [0, 2, 3, 5] {
        let puzzle = TilePuzzle::new(builtin(index).unwrap()).unwrap();
        for algorithm in Algorithm::ALL {
            assert_valid(&puzzle, algorithm, Some(HeuristicKind::Manhattan));
        }
    }
}

#[test]
fn scrambled_paths_replay_to_goal_for_every_heuristic() {
    for start in seeded_scrambles(3, 15, 6, 11).unwrap() {
        let puzzle = TilePuzzle::new(start).unwrap();
        for kind in HeuristicKind::ALL {
            assert_valid(&puzzle, Algorithm::Astar, Some(kind));
        }
        assert_valid(&puzzle, Algorithm::Astar, None);
        assert_valid(&puzzle, Algorithm::Dfs, None);
    }
}

#[test]
fn solved_start_returns_empty_path() {
    let puzzle = TilePuzzle::new(seeded_scrambles(3, 0, 1, 0).unwrap()[0]).unwrap();
    for algorithm in Algorithm::ALL {
        let result =
            run_algorithm(&puzzle, algorithm, None, &SearchPolicy::default()).unwrap();
        assert!(result.succeeded);
        assert!(result.path.is_empty());
        assert_eq!(result.explored_count, 1);
        assert_eq!(result.max_depth, 0);
    }
}

#[test]
fn smaller_and_larger_grids_solve() {
    for side in [2, 4] {
        for start in seeded_scrambles(side, 10, 3, 5).unwrap() {
            let puzzle = TilePuzzle::new(start).unwrap();
            assert_valid(&puzzle, Algorithm::Bfs, None);
            assert_valid(&puzzle, Algorithm::Astar, Some(HeuristicKind::Manhattan));
        }
    }
}

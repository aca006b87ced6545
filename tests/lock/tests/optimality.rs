//! Optimality on unit-cost problems: BFS, UCS, and A* with an admissible
//! estimator all return the fewest-move path.

use waypoint_harness::runner::{run_algorithm, Algorithm};
use waypoint_harness::worlds::tile_puzzle::{builtin, seeded_scrambles, TilePuzzle};
use waypoint_search::heuristic::HeuristicKind;
use waypoint_search::policy::{DominanceRule, SearchPolicy};

fn path_len(puzzle: &TilePuzzle, algorithm: Algorithm, heuristic: Option<HeuristicKind>) -> usize {
    let result = run_algorithm(puzzle, algorithm, heuristic, &SearchPolicy::default()).unwrap();
    assert!(result.succeeded, "{algorithm} must solve a reachable puzzle");
    result.path_len()
}

#[test]
fn builtin_optimal_lengths() {
    // Fewest-move solutions for EIGHT_PUZZLE_DATA rows 0, 2, 3, 4, 5.
    let expected = [(0, 1), (2, 10), (3, 14), (4, 14), (5, 12)];
    for (index, length) in expected {
        let puzzle = TilePuzzle::new(builtin(index).unwrap()).unwrap();
        assert_eq!(path_len(&puzzle, Algorithm::Bfs, None), length, "bfs #{index}");
        assert_eq!(path_len(&puzzle, Algorithm::Ucs, None), length, "ucs #{index}");
        assert_eq!(
            path_len(&puzzle, Algorithm::Astar, Some(HeuristicKind::Manhattan)),
            length,
            "astar h3 #{index}"
        );
    }
}

#[test]
fn deepest_builtin_is_solved_optimally_by_astar() {
    let puzzle = TilePuzzle::new(builtin(1).unwrap()).unwrap();
    assert_eq!(
        path_len(&puzzle, Algorithm::Astar, Some(HeuristicKind::Manhattan)),
        24
    );
}

#[test]
fn admissible_estimators_match_bfs_on_scrambles() {
    for start in seeded_scrambles(3, 18, 10, 3).unwrap() {
        let puzzle = TilePuzzle::new(start).unwrap();
        let optimal = path_len(&puzzle, Algorithm::Bfs, None);
        assert_eq!(path_len(&puzzle, Algorithm::Ucs, None), optimal);
        assert_eq!(path_len(&puzzle, Algorithm::Astar, None), optimal);
        for kind in [
            HeuristicKind::Euclidean,
            HeuristicKind::Manhattan,
            HeuristicKind::RowColumnMismatch,
        ] {
            assert_eq!(
                path_len(&puzzle, Algorithm::Astar, Some(kind)),
                optimal,
                "{kind} on {start:?}"
            );
        }
    }
}

#[test]
fn both_dominance_rules_are_optimal() {
    let textbook = SearchPolicy {
        dominance: DominanceRule::Textbook,
        ..SearchPolicy::default()
    };
    for start in seeded_scrambles(3, 20, 8, 19).unwrap() {
        let puzzle = TilePuzzle::new(start).unwrap();
        let optimal = path_len(&puzzle, Algorithm::Bfs, None);
        let observed = path_len(&puzzle, Algorithm::Astar, Some(HeuristicKind::Manhattan));
        let result = run_algorithm(
            &puzzle,
            Algorithm::Astar,
            Some(HeuristicKind::Manhattan),
            &textbook,
        )
        .unwrap();
        assert!(result.succeeded);
        assert_eq!(observed, optimal);
        assert_eq!(result.path_len(), optimal);
    }
}

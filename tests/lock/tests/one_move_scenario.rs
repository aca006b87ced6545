//! The one-move scenario: start `[1,0,2,3,4,5,6,7,8]`, goal
//! `[0,1,2,3,4,5,6,7,8]`.

use waypoint_harness::runner::{run_algorithm, Algorithm};
use waypoint_harness::walkthrough::walkthrough;
use waypoint_harness::worlds::tile_puzzle::TilePuzzle;
use waypoint_kernel::carrier::grid::TileGrid;
use waypoint_kernel::operators::apply::Move;
use waypoint_search::heuristic::HeuristicKind;
use waypoint_search::policy::{DominanceRule, SearchPolicy};

fn puzzle() -> TilePuzzle {
    let start = TileGrid::new(&[1, 0, 2, 3, 4, 5, 6, 7, 8]).unwrap();
    let goal = TileGrid::new(&[0, 1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
    TilePuzzle::with_goal(start, goal).unwrap()
}

#[test]
fn optimal_algorithms_return_left() {
    let policy = SearchPolicy::default();
    for algorithm in [Algorithm::Bfs, Algorithm::Ucs, Algorithm::Astar] {
        let result = run_algorithm(&puzzle(), algorithm, Some(HeuristicKind::Manhattan), &policy)
            .unwrap();
        assert!(result.succeeded);
        assert_eq!(result.path, vec![Move::Left], "{algorithm}");
        assert_eq!(result.path[0].as_str(), "left");
    }
}

#[test]
fn astar_returns_left_under_every_heuristic_and_rule() {
    for dominance in [DominanceRule::Observed, DominanceRule::Textbook] {
        let policy = SearchPolicy {
            dominance,
            ..SearchPolicy::default()
        };
        for kind in HeuristicKind::ALL {
            let result = run_algorithm(&puzzle(), Algorithm::Astar, Some(kind), &policy).unwrap();
            assert_eq!(result.path, vec![Move::Left], "{kind} under {dominance:?}");
        }
    }
}

#[test]
fn dfs_also_finds_single_move() {
    let result = run_algorithm(&puzzle(), Algorithm::Dfs, None, &SearchPolicy::default()).unwrap();
    assert!(result.succeeded);
    assert_eq!(result.path, vec![Move::Left]);
}

#[test]
fn start_estimates() {
    let p = puzzle();
    let start = p.start_grid();
    let goal = p.goal();
    assert_eq!(HeuristicKind::MisplacedTiles.evaluate(start, goal), 2.0);
    assert_eq!(HeuristicKind::Euclidean.evaluate(start, goal), 1.0);
    assert_eq!(HeuristicKind::Manhattan.evaluate(start, goal), 1.0);
    assert_eq!(HeuristicKind::RowColumnMismatch.evaluate(start, goal), 1.0);
}

#[test]
fn estimates_vanish_after_the_move() {
    let steps = walkthrough(&puzzle(), &[Move::Left]).unwrap();
    let last = steps.last().unwrap();
    assert_eq!(last.grid, *puzzle().goal());
    assert_eq!(last.estimates, [0.0; 4]);
}

#[test]
fn ascii_display_matches_board() {
    let text = puzzle().start_grid().to_string();
    assert!(text.contains("| 1 |   | 2 |"), "blank renders as a space:\n{text}");
    assert!(text.contains("| 6 | 7 | 8 |"));
}

//! Heuristic properties over reachable 8-puzzle states.
//!
//! h2, h3, and h4 never exceed the true distance (taken from BFS). h1
//! counts the blank, so it can overestimate by one and is only checked
//! against that looser bound. Every estimator is zero at the goal.

use proptest::prelude::*;

use waypoint_harness::worlds::tile_puzzle::{seeded_scrambles, TilePuzzle};
use waypoint_kernel::carrier::grid::TileGrid;
use waypoint_search::heuristic::{
    euclidean_displacement, manhattan_displacement, misplaced_tiles,
    misplaced_tiles_excluding_blank, row_column_mismatch, HeuristicKind,
};
use waypoint_search::search::breadth_first_search;

fn true_distance(start: TileGrid) -> usize {
    let puzzle = TilePuzzle::new(start).unwrap();
    let result = breadth_first_search(&puzzle);
    assert!(result.succeeded);
    result.path_len()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn estimators_bounded_by_true_distance(seed in any::<u64>(), moves in 0usize..16) {
        let start = seeded_scrambles(3, moves, 1, seed).unwrap()[0];
        let goal = TileGrid::solved(3).unwrap();
        let distance = true_distance(start);
        #[allow(clippy::cast_precision_loss)]
        let bound = distance as f64;

        prop_assert!(f64::from(manhattan_displacement(&start, &goal)) <= bound);
        prop_assert!(euclidean_displacement(&start, &goal) <= bound + 1e-9);
        prop_assert!(f64::from(row_column_mismatch(&start, &goal)) <= bound);
        prop_assert!(misplaced_tiles_excluding_blank(&start, &goal) as usize <= distance);
        prop_assert!(misplaced_tiles(&start, &goal) as usize <= distance + 1);
    }

    #[test]
    fn euclidean_never_exceeds_manhattan(seed in any::<u64>(), moves in 0usize..40) {
        let start = seeded_scrambles(3, moves, 1, seed).unwrap()[0];
        let goal = TileGrid::solved(3).unwrap();
        prop_assert!(
            euclidean_displacement(&start, &goal)
                <= f64::from(manhattan_displacement(&start, &goal)) + 1e-9
        );
    }
}

#[test]
fn every_estimator_is_zero_at_goal() {
    for side in [2, 3, 4] {
        let goal = TileGrid::solved(side).unwrap();
        for kind in HeuristicKind::ALL {
            assert_eq!(kind.evaluate(&goal, &goal), 0.0, "{kind} at {side}x{side}");
        }
    }
}

#[test]
fn nonzero_away_from_goal() {
    let goal = TileGrid::solved(3).unwrap();
    for start in seeded_scrambles(3, 25, 20, 2).unwrap() {
        if start == goal {
            continue;
        }
        assert!(misplaced_tiles(&start, &goal) >= 2, "blank and one tile moved");
        assert!(manhattan_displacement(&start, &goal) >= 1);
    }
}

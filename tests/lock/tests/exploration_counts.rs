//! Per-algorithm `explored_count` and frontier statistics, pinned on the
//! one-move scenario where they can be counted by hand.
//!
//! | algorithm       | explored | max fringe | why                               |
//! |-----------------|----------|------------|-----------------------------------|
//! | bfs             | 3        | 6          | start, `down`, then goal popped   |
//! | ucs             | 3        | 6          | same order: ties pop FIFO         |
//! | astar observed  | 5        | 3          | 1 pop + 3 pushes + goal pop       |
//! | astar textbook  | 2        | 3          | start and goal finalized          |

use waypoint_harness::runner::{run_algorithm, Algorithm};
use waypoint_harness::worlds::tile_puzzle::{builtin, seeded_scrambles, TilePuzzle};
use waypoint_search::heuristic::HeuristicKind;
use waypoint_search::policy::{DominanceRule, SearchPolicy};

fn one_move() -> TilePuzzle {
    TilePuzzle::new(builtin(0).unwrap()).unwrap()
}

fn textbook() -> SearchPolicy {
    SearchPolicy {
        dominance: DominanceRule::Textbook,
        ..SearchPolicy::default()
    }
}

#[test]
fn breadth_first_counts() {
    let result = run_algorithm(&one_move(), Algorithm::Bfs, None, &SearchPolicy::default()).unwrap();
    assert_eq!(result.explored_count, 3);
    assert_eq!(result.max_fringe_size, 6);
    assert_eq!(result.max_depth, 1);
}

#[test]
fn uniform_cost_counts() {
    let result = run_algorithm(&one_move(), Algorithm::Ucs, None, &SearchPolicy::default()).unwrap();
    assert_eq!(result.explored_count, 3);
    assert_eq!(result.max_fringe_size, 6);
    assert_eq!(result.max_depth, 1);
}

#[test]
fn observed_astar_counts_every_record() {
    let result = run_algorithm(
        &one_move(),
        Algorithm::Astar,
        Some(HeuristicKind::Manhattan),
        &SearchPolicy::default(),
    )
    .unwrap();
    assert_eq!(result.explored_count, 5);
    assert_eq!(result.max_fringe_size, 3);
}

#[test]
fn textbook_astar_counts_finalized_states() {
    let result = run_algorithm(
        &one_move(),
        Algorithm::Astar,
        Some(HeuristicKind::Manhattan),
        &textbook(),
    )
    .unwrap();
    assert_eq!(result.explored_count, 2);
    assert_eq!(result.max_fringe_size, 3);
}

#[test]
fn both_rules_agree_on_length() {
    // Every ancestor of a popped node was itself popped, so both counts are
    // at least one more than the depth they reached.
    for start in seeded_scrambles(3, 14, 6, 23).unwrap() {
        let puzzle = TilePuzzle::new(start).unwrap();
        let h = Some(HeuristicKind::Manhattan);
        let observed =
            run_algorithm(&puzzle, Algorithm::Astar, h, &SearchPolicy::default()).unwrap();
        let finalized = run_algorithm(&puzzle, Algorithm::Astar, h, &textbook()).unwrap();
        assert_eq!(observed.path_len(), finalized.path_len());
        assert!(observed.explored_count > observed.max_depth);
        assert!(finalized.explored_count > finalized.path_len());
    }
}

#[test]
fn counts_are_independent_across_calls() {
    let puzzle = one_move();
    let first = run_algorithm(&puzzle, Algorithm::Bfs, None, &SearchPolicy::default()).unwrap();
    let second = run_algorithm(&puzzle, Algorithm::Bfs, None, &SearchPolicy::default()).unwrap();
    assert_eq!(first.stats(), second.stats());
}

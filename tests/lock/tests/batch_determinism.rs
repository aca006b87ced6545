//! Batch determinism: the same seed and config give byte-identical reports.

use waypoint_harness::config::HarnessConfig;
use waypoint_harness::report::RunReport;
use waypoint_harness::runner::run_batch;
use waypoint_harness::worlds::tile_puzzle::seeded_scrambles;

fn report(seed: u64) -> RunReport {
    let config = HarnessConfig {
        scenario_count: 6,
        scramble_moves: 12,
        seed,
        ..HarnessConfig::default()
    };
    let starts = seeded_scrambles(
        config.side,
        config.scramble_moves,
        config.scenario_count,
        config.seed,
    )
    .unwrap();
    let batch = run_batch(&starts, &config).unwrap();
    RunReport::build(&config, &starts, &batch)
}

#[test]
fn report_bytes_identical_across_runs() {
    let first = report(3).to_json_bytes().unwrap();
    for _ in 1..4 {
        assert_eq!(first, report(3).to_json_bytes().unwrap());
    }
}

#[test]
fn different_seed_changes_scenario_digest() {
    assert_ne!(report(3).scenario_digest, report(4).scenario_digest);
}

#[test]
fn report_covers_every_algorithm() {
    let report = report(3);
    assert_eq!(report.summaries.len(), 4);
    for summary in &report.summaries {
        assert_eq!(summary.runs, 6);
    }
    let deviation = report.deviation.unwrap();
    assert_eq!(deviation.per_heuristic.len(), 4);
    // h3 is admissible, so its mean never exceeds the mean optimal length.
    assert!(deviation.mean_h3 <= deviation.mean_astar_path_len);
}

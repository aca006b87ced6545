//! Binary that runs a fixed seeded batch and prints deterministic output
//! lines for cross-process verification.
//!
//! Usage: `batch_fixture`
//!
//! Output: key=value lines (see source for format).

use waypoint_harness::config::HarnessConfig;
use waypoint_harness::report::RunReport;
use waypoint_harness::runner::run_batch;
use waypoint_harness::worlds::tile_puzzle::seeded_scrambles;

fn main() {
    let config = HarnessConfig {
        scenario_count: 8,
        scramble_moves: 12,
        seed: 7,
        ..HarnessConfig::default()
    };
    let starts = seeded_scrambles(
        config.side,
        config.scramble_moves,
        config.scenario_count,
        config.seed,
    )
    .expect("scrambles");
    let batch = run_batch(&starts, &config).expect("batch run failed");
    let report = RunReport::build(&config, &starts, &batch);

    println!("scenario_digest={}", report.scenario_digest);
    println!("report_digest={}", report.digest().expect("report digest"));
    for summary in &report.summaries {
        println!(
            "{}.explored_mean={:?}",
            summary.algorithm, summary.mean_explored_count
        );
        println!("{}.path_len_mean={:?}", summary.algorithm, summary.mean_path_len);
    }
}

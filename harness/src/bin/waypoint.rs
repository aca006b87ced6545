//! Waypoint CLI: run sliding-tile searches and batch comparisons.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use waypoint_harness::config::HarnessConfig;
use waypoint_harness::report::RunReport;
use waypoint_harness::runner::{parse_heuristic_choice, run_algorithm, run_batch, Algorithm};
use waypoint_harness::scenarios::load_csv;
use waypoint_harness::walkthrough::walkthrough;
use waypoint_harness::worlds::tile_puzzle::{builtin, seeded_scrambles, TilePuzzle};
use waypoint_kernel::carrier::grid::TileGrid;
use waypoint_search::heuristic::HeuristicKind;
use waypoint_search::policy::{DominanceRule, SearchPolicy};

#[derive(Parser)]
#[command(name = "waypoint")]
#[command(version, about = "State-space search over sliding-tile puzzles")]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run every algorithm over a batch of random scrambles and report averages
    Batch(BatchArgs),
    /// Solve every puzzle in a CSV file
    Scenarios(ScenariosArgs),
    /// Solve one puzzle and print the result
    Solve(SolveArgs),
    /// Solve one puzzle with A* and step through the path
    Walk(WalkArgs),
}

/// Search settings shared by the solving subcommands.
#[derive(Args)]
struct SearchArgs {
    /// A* estimator: h1, h2, h3, h4, or none (zero heuristic, plain uniform-cost order)
    #[arg(long, default_value = "h3")]
    heuristic: String,

    /// Depth-first path-length bound
    #[arg(long)]
    depth_bound: Option<usize>,

    /// Finalize states on first pop in A*, reopening only on strict improvement
    #[arg(long)]
    textbook: bool,
}

impl SearchArgs {
    fn heuristic(&self) -> anyhow::Result<Option<HeuristicKind>> {
        Ok(parse_heuristic_choice(&self.heuristic)?)
    }

    fn apply_to(&self, policy: &mut SearchPolicy) {
        if let Some(bound) = self.depth_bound {
            policy.depth_bound = bound;
        }
        if self.textbook {
            policy.dominance = DominanceRule::Textbook;
        }
    }

    fn policy(&self) -> SearchPolicy {
        let mut policy = SearchPolicy::default();
        self.apply_to(&mut policy);
        policy
    }
}

/// Which puzzle to work on.
#[derive(Args)]
struct PuzzleArgs {
    /// Built-in puzzle index (0-5)
    #[arg(long, conflicts_with_all = ["cells", "scramble"])]
    puzzle: Option<usize>,

    /// Row-major cells, comma separated, 0 is the blank
    #[arg(long, value_delimiter = ',', conflicts_with = "scramble")]
    cells: Option<Vec<u8>>,

    /// Random legal moves from the solved 8-puzzle
    #[arg(long)]
    scramble: Option<usize>,

    /// Seed for --scramble
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

impl PuzzleArgs {
    fn grid(&self) -> anyhow::Result<TileGrid> {
        if let Some(cells) = &self.cells {
            return TileGrid::new(cells).context("invalid --cells");
        }
        if let Some(moves) = self.scramble {
            let grids = seeded_scrambles(3, moves, 1, self.seed)?;
            return grids.into_iter().next().context("scramble produced no grid");
        }
        Ok(builtin(self.puzzle.unwrap_or(0))?)
    }
}

#[derive(Args)]
struct BatchArgs {
    /// JSON config file; flags override its fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of scenarios
    #[arg(long)]
    count: Option<usize>,

    /// Random moves per scenario
    #[arg(long)]
    moves: Option<usize>,

    #[arg(long)]
    seed: Option<u64>,

    /// Comma-separated algorithms (astar, bfs, dfs, ucs)
    #[arg(long, value_delimiter = ',')]
    algorithms: Option<Vec<Algorithm>>,

    /// A* estimator: h1, h2, h3, h4, or none (zero heuristic); defaults to h3
    #[arg(long)]
    heuristic: Option<String>,

    #[arg(long)]
    depth_bound: Option<usize>,

    #[arg(long)]
    textbook: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct ScenariosArgs {
    /// CSV file with one puzzle per row
    path: PathBuf,

    #[arg(long, default_value = "astar")]
    algorithm: Algorithm,

    #[command(flatten)]
    search: SearchArgs,
}

#[derive(Args)]
struct SolveArgs {
    #[command(flatten)]
    puzzle: PuzzleArgs,

    #[arg(long, default_value = "astar")]
    algorithm: Algorithm,

    #[command(flatten)]
    search: SearchArgs,
}

#[derive(Args)]
struct WalkArgs {
    #[command(flatten)]
    puzzle: PuzzleArgs,

    #[command(flatten)]
    search: SearchArgs,
}

fn run_batch_command(args: &BatchArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => HarnessConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => HarnessConfig::default(),
    };
    if let Some(count) = args.count {
        config.scenario_count = count;
    }
    if let Some(moves) = args.moves {
        config.scramble_moves = moves;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(algorithms) = &args.algorithms {
        config.algorithms.clone_from(algorithms);
    }
    if let Some(heuristic) = &args.heuristic {
        config.heuristic = parse_heuristic_choice(heuristic)?;
    }
    if let Some(bound) = args.depth_bound {
        config.policy.depth_bound = bound;
    }
    if args.textbook {
        config.policy.dominance = DominanceRule::Textbook;
    }
    config.validate()?;

    let starts = seeded_scrambles(
        config.side,
        config.scramble_moves,
        config.scenario_count,
        config.seed,
    )?;
    let batch = run_batch(&starts, &config)?;
    let report = RunReport::build(&config, &starts, &batch);

    if args.json {
        println!("{}", report.to_json_pretty()?);
    } else {
        println!("{report}");
    }
    println!("report: {}", report.digest()?);
    Ok(())
}

fn run_scenarios_command(args: &ScenariosArgs) -> anyhow::Result<()> {
    let grids = load_csv(&args.path, 3)?;
    if grids.is_empty() {
        bail!("no puzzles found in {}", args.path.display());
    }
    let heuristic = args.search.heuristic()?;
    let policy = args.search.policy();

    for grid in grids {
        let puzzle = TilePuzzle::new(grid)?;
        let result = run_algorithm(&puzzle, args.algorithm, heuristic, &policy)?;
        println!("{grid}");
        if result.succeeded {
            println!("{} found a path of {} moves.", args.algorithm, result.path_len());
        } else {
            println!("{} found no path.", args.algorithm);
        }
        println!("{}", format_path(&result.path));
        println!();
    }
    Ok(())
}

fn run_solve_command(args: &SolveArgs) -> anyhow::Result<()> {
    let grid = args.puzzle.grid()?;
    let puzzle = TilePuzzle::new(grid)?;
    let heuristic = args.search.heuristic()?;
    let result = run_algorithm(&puzzle, args.algorithm, heuristic, &args.search.policy())?;

    println!("{grid}");
    println!(
        "{}: succeeded={} path_len={} max_fringe_size={} max_depth={} explored_count={}",
        args.algorithm,
        result.succeeded,
        result.path_len(),
        result.max_fringe_size,
        result.max_depth,
        result.explored_count
    );
    println!("{}", format_path(&result.path));
    Ok(())
}

fn run_walk_command(args: &WalkArgs) -> anyhow::Result<()> {
    let grid = args.puzzle.grid()?;
    let puzzle = TilePuzzle::new(grid)?;
    let heuristic = args.search.heuristic()?;
    let result = run_algorithm(&puzzle, Algorithm::Astar, heuristic, &args.search.policy())?;
    if !result.succeeded {
        bail!("A* found no path");
    }
    println!(
        "A* found a path of {} moves: {}",
        result.path_len(),
        format_path(&result.path)
    );
    println!();

    for step in walkthrough(&puzzle, &result.path)? {
        match step.mv {
            Some(mv) => println!(
                "After {} move{}: {mv}",
                step.index,
                if step.index > 1 { "s" } else { "" }
            ),
            None => println!("Start:"),
        }
        for (kind, value) in HeuristicKind::ALL.iter().zip(step.estimates) {
            println!("{kind}: {value}");
        }
        println!("{}", step.grid);
        println!();
    }
    Ok(())
}

fn format_path<T: std::fmt::Display>(path: &[T]) -> String {
    let moves: Vec<String> = path.iter().map(ToString::to_string).collect();
    format!("[{}]", moves.join(", "))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    match &cli.command {
        Command::Batch(args) => run_batch_command(args),
        Command::Scenarios(args) => run_scenarios_command(args),
        Command::Solve(args) => run_solve_command(args),
        Command::Walk(args) => run_walk_command(args),
    }
}

use std::process::ExitCode;

use change_making::cs::dynamic::coin_change::{validate_denominations, SearchLimits};
use change_making::harness::{render_report, run_strategies, Strategy};
use clap::Parser;
use log::{error, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

/// Time every change-making strategy on one denomination set and target
#[derive(Parser, Debug)]
#[command(name = "change", version)]
struct Args {
    /// Coin denominations, strictly increasing (comma-separated)
    #[arg(short, long, value_delimiter = ',', default_values_t = vec![1, 5, 10, 25, 100])]
    denominations: Vec<u64>,

    /// Amount to make change for
    #[arg(short, long, default_value_t = 189)]
    target: u64,

    /// Strategy to run, repeatable (runs all if omitted)
    #[arg(short, long = "strategy")]
    strategies: Vec<Strategy>,

    /// Deepest partial coin multiset the memoized search may explore
    #[arg(long, default_value_t = SearchLimits::default().max_depth)]
    max_depth: usize,

    /// Largest grid or layer, in cells, a strategy may materialize
    #[arg(long, default_value_t = SearchLimits::default().max_grid_cells)]
    max_grid_cells: usize,

    /// Log strategy internals
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    if let Err(e) = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ) {
        eprintln!("logger unavailable: {}", e);
    }

    if let Err(e) = validate_denominations(&args.denominations) {
        error!("{}", e);
        return ExitCode::FAILURE;
    }

    let strategies = if args.strategies.is_empty() {
        Strategy::ALL.to_vec()
    } else {
        args.strategies
    };
    let limits = SearchLimits::default()
        .with_max_depth(args.max_depth)
        .with_max_grid_cells(args.max_grid_cells);

    let runs = run_strategies(&strategies, &args.denominations, args.target, &limits);
    println!();
    print!("{}", render_report(&runs));
    ExitCode::SUCCESS
}

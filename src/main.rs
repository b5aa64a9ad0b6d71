//! Command-line driver: reads a position file, searches White's best move
//! within a wall-clock budget, writes the resulting board and prints the
//! search statistics.
//!
//! Usage: `jumpy16 <input_file> <output_file> [time_limit_seconds] [--max-depth N]`

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt::time::ChronoLocal, EnvFilter};

use jumpy16::errors::JumpyResult;
use jumpy16::move_generation::move_generator::JumpMoveGenerator;
use jumpy16::search::board_scoring::KingRaceScorer;
use jumpy16::search::iterative_deepening::{iterative_deepening_search, SearchConfig};
use jumpy16::utils::board_file::{read_board_file, write_board_file};

/// Pick White's best move on a 16-square board within a time budget.
#[derive(Parser, Debug)]
#[command(name = "jumpy16", version)]
struct Args {
    /// File holding the 16-character position token
    input_file: PathBuf,

    /// File that receives the position after White's move
    output_file: PathBuf,

    /// Wall-clock search budget in seconds
    #[arg(default_value_t = 15)]
    time_limit_seconds: u64,

    /// Stop deepening after this many plies even if time remains
    #[arg(long)]
    max_depth: Option<u32>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(ChronoLocal::rfc_3339())
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> JumpyResult<()> {
    let board = read_board_file(&args.input_file)?;
    debug!(board = %board, "position loaded");

    let config = SearchConfig {
        time_limit: Duration::from_secs(args.time_limit_seconds),
        max_depth: args.max_depth,
    };
    let result = iterative_deepening_search(&board, &JumpMoveGenerator, &KingRaceScorer, config);

    write_board_file(&args.output_file, &result.best_board)?;

    println!("Output board position: {}", result.best_board);
    println!(
        "Positions evaluated by static estimation: {}.",
        result.stats.positions_evaluated
    );
    println!("MINIMAX estimate: {}.", result.best_score);
    println!("Maximum depth reached: {}", result.stats.max_depth_reached);
    println!("Completed search depth: {}", result.completed_depth);
    if result.tree_resolved {
        println!("Search tree fully resolved; deepening stopped before the time limit.");
    }
    println!(
        "Total time taken: {:.3} seconds",
        result.elapsed.as_secs_f64()
    );

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

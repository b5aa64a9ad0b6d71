//! Standalone engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release --bin match_series`
//! `cargo run --release --bin match_series -- --games 20 --depth 6`

use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{fmt::time::ChronoLocal, EnvFilter};

use jumpy16::engines::engine_minimax::MinimaxEngine;
use jumpy16::engines::engine_random::RandomEngine;
use jumpy16::engines::engine_trait::Engine;
use jumpy16::game_state::board::Board;
use jumpy16::search::iterative_deepening::SearchConfig;
use jumpy16::utils::match_harness::{
    play_engine_match_series, MatchConfig, MatchSeriesConfig, MATCH_START_POSITION,
};

/// Play the minimax engine (player 1) against the random engine (player 2).
#[derive(Parser, Debug)]
#[command(name = "match_series")]
struct Args {
    #[arg(long, default_value_t = 10)]
    games: u16,

    #[arg(long, default_value_t = 1234)]
    seed: u64,

    /// Fixed search depth for the minimax engine
    #[arg(long, default_value_t = 5)]
    depth: u32,

    /// Per-move time budget for the minimax engine, in milliseconds
    #[arg(long, default_value_t = 500)]
    movetime_ms: u64,

    #[arg(long, default_value_t = 200)]
    max_plies: u16,

    /// Start position token
    #[arg(long, default_value = MATCH_START_POSITION)]
    start: String,
}

fn main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_timer(ChronoLocal::rfc_3339())
        .init();

    let args = Args::parse();
    let depth = args.depth.max(1);
    let movetime = Duration::from_millis(args.movetime_ms.max(1));

    let player1 = move || {
        Box::new(MinimaxEngine::new(SearchConfig {
            time_limit: movetime,
            max_depth: Some(depth),
        })) as Box<dyn Engine>
    };
    let player2 = || Box::new(RandomEngine::new(args.seed)) as Box<dyn Engine>;

    let started = chrono::Local::now();
    let stats = play_engine_match_series(
        player1,
        player2,
        &MatchSeriesConfig {
            games: args.games,
            base_seed: args.seed,
            start_board: Board::from_text(&args.start),
            per_game: MatchConfig {
                max_plies: args.max_plies,
                ..MatchConfig::default()
            },
        },
    )?;
    let finished = chrono::Local::now();

    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    println!(
        "series started {} finished {} ({} s)",
        started.format("%Y-%m-%d %H:%M:%S"),
        finished.format("%Y-%m-%d %H:%M:%S"),
        (finished - started).num_seconds()
    );
    Ok(())
}

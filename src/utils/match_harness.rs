//! Minimal head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other from a start board,
//! with an optional seeded random opening prefix.

use rand::prelude::IndexedRandom;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::Instant;
use tracing::{debug, info};

use crate::engines::engine_trait::{Engine, GoParams};
use crate::game_state::board::Board;
use crate::game_state::board_types::Side;
use crate::move_generation::move_generator::{JumpMoveGenerator, MoveGenerator};

/// Start board used by match series: one king and three regular pieces per side.
pub const MATCH_START_POSITION: &str = "wwWwxxxxxxxxbBbb";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWin,
    BlackWin,
    DrawMaxPlies,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerWin { player: PlayerId, side: Side },
    DrawMaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub opening_random_plies: u8,
    pub go_params: GoParams,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            opening_random_plies: 2,
            go_params: GoParams::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_board: Board,
    pub played_boards: Vec<String>,
    pub white_move_count: u32,
    pub black_move_count: u32,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub start_board: Board,
    pub per_game: MatchConfig,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 10,
            base_seed: 0,
            start_board: Board::from_text(MATCH_START_POSITION),
            per_game: MatchConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<SeriesOutcome>,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} draws={} p1_avg_ms={:.3} p2_avg_ms={:.3}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.draws,
            avg_ms(self.player1_total_time_ns, self.player1_moves),
            avg_ms(self.player2_total_time_ns, self.player2_moves)
        )
    }
}

fn avg_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        total_ns as f64 / f64::from(moves) / 1_000_000.0
    }
}

/// Outcome of a decided board; a board with both kings gone is a Black win.
fn decided_outcome(board: &Board) -> Option<MatchOutcome> {
    if board.is_black_win() {
        Some(MatchOutcome::BlackWin)
    } else if board.is_white_win() {
        Some(MatchOutcome::WhiteWin)
    } else {
        None
    }
}

/// Play one seeded match. White moves first from `start_board`.
pub fn play_engine_match(
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    start_board: Board,
    seed: u64,
    config: &MatchConfig,
) -> Result<MatchResult, String> {
    engine_white.new_game();
    engine_black.new_game();

    let mut rng = StdRng::seed_from_u64(seed);
    let generator = JumpMoveGenerator;

    let mut board = start_board;
    let mut side = Side::White;
    let mut result = MatchResult {
        outcome: MatchOutcome::DrawMaxPlies,
        final_board: board,
        played_boards: Vec::new(),
        white_move_count: 0,
        black_move_count: 0,
        white_total_time_ns: 0,
        black_total_time_ns: 0,
    };

    for ply in 0..config.max_plies {
        if let Some(outcome) = decided_outcome(&board) {
            result.outcome = outcome;
            break;
        }

        let moves = generator.generate_moves(&board, side);

        let next = if ply < u16::from(config.opening_random_plies) {
            *moves
                .as_slice()
                .choose(&mut rng)
                .ok_or_else(|| format!("no opening move for {side:?} on {board}"))?
        } else {
            let started = Instant::now();
            let out = match side {
                Side::White => engine_white.choose_move(&board, side, &config.go_params)?,
                Side::Black => engine_black.choose_move(&board, side, &config.go_params)?,
            };
            let elapsed_ns = started.elapsed().as_nanos();

            match side {
                Side::White => {
                    result.white_move_count = result.white_move_count.saturating_add(1);
                    result.white_total_time_ns =
                        result.white_total_time_ns.saturating_add(elapsed_ns);
                }
                Side::Black => {
                    result.black_move_count = result.black_move_count.saturating_add(1);
                    result.black_total_time_ns =
                        result.black_total_time_ns.saturating_add(elapsed_ns);
                }
            }

            let chosen = out
                .best_board
                .ok_or_else(|| format!("engine returned no move for {side:?} on {board}"))?;
            if !moves.contains(&chosen) {
                return Err(format!("engine returned unreachable board {chosen} from {board}"));
            }
            chosen
        };

        debug!(ply, side = ?side, board = %next, "move played");
        result.played_boards.push(next.to_text());
        board = next;
        side = side.opposite();
    }

    if result.outcome == MatchOutcome::DrawMaxPlies {
        if let Some(outcome) = decided_outcome(&board) {
            result.outcome = outcome;
        }
    }
    result.final_board = board;

    Ok(result)
}

/// Play a series of matches and aggregate win/loss/draw statistics.
///
/// Player sides are randomized each game (deterministic from `base_seed`).
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: &MatchSeriesConfig,
) -> Result<MatchSeriesStats, String>
where
    F1: Fn() -> Box<dyn Engine>,
    F2: Fn() -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };
    let mut side_rng = StdRng::seed_from_u64(config.base_seed ^ 0xA5A5_5A5A_0123_4567);

    for i in 0..config.games {
        let player1_is_white = side_rng.random_bool(0.5);
        let seed = config.base_seed.wrapping_add(u64::from(i));

        let mut player1 = player1_factory();
        let mut player2 = player2_factory();
        let result = if player1_is_white {
            play_engine_match(
                player1.as_mut(),
                player2.as_mut(),
                config.start_board,
                seed,
                &config.per_game,
            )?
        } else {
            play_engine_match(
                player2.as_mut(),
                player1.as_mut(),
                config.start_board,
                seed,
                &config.per_game,
            )?
        };

        let (p1_moves, p1_ns, p2_moves, p2_ns) = if player1_is_white {
            (
                result.white_move_count,
                result.white_total_time_ns,
                result.black_move_count,
                result.black_total_time_ns,
            )
        } else {
            (
                result.black_move_count,
                result.black_total_time_ns,
                result.white_move_count,
                result.white_total_time_ns,
            )
        };
        stats.player1_moves = stats.player1_moves.saturating_add(p1_moves);
        stats.player2_moves = stats.player2_moves.saturating_add(p2_moves);
        stats.player1_total_time_ns = stats.player1_total_time_ns.saturating_add(p1_ns);
        stats.player2_total_time_ns = stats.player2_total_time_ns.saturating_add(p2_ns);

        let winner_side = match result.outcome {
            MatchOutcome::WhiteWin => Some(Side::White),
            MatchOutcome::BlackWin => Some(Side::Black),
            MatchOutcome::DrawMaxPlies => None,
        };
        let mapped = match winner_side {
            Some(side) => {
                let player1_won = (side == Side::White) == player1_is_white;
                let player = if player1_won {
                    stats.player1_wins += 1;
                    PlayerId::Player1
                } else {
                    stats.player2_wins += 1;
                    PlayerId::Player2
                };
                SeriesOutcome::PlayerWin { player, side }
            }
            None => {
                stats.draws += 1;
                SeriesOutcome::DrawMaxPlies
            }
        };
        stats.outcomes.push(mapped);

        info!(
            game = i + 1,
            games = config.games,
            seed,
            player1_white = player1_is_white,
            outcome = ?mapped,
            plies = result.played_boards.len(),
            "series game finished"
        );
    }

    Ok(stats)
}

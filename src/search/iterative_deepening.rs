//! Iterative deepening minimax under a wall-clock budget.
//!
//! White is always the side to move at the root. Each depth is searched in
//! full; a depth interrupted by the time governor is thrown away and the last
//! completed depth stays authoritative. Counters live in a per-invocation
//! `SearchContext`, so repeated searches never share state.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use crate::game_state::board::Board;
use crate::game_state::board_types::Side;
use crate::move_generation::move_generator::MoveGenerator;
use crate::search::board_scoring::BoardScorer;
use crate::search::time_governor::TimeGovernor;

pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(15);

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    pub time_limit: Duration,
    /// Deepest iteration to run; `None` keeps deepening until time runs out.
    pub max_depth: Option<u32>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            time_limit: DEFAULT_TIME_LIMIT,
            max_depth: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub positions_evaluated: u64,
    pub max_depth_reached: u32,
}

/// Outcome of one search invocation.
///
/// Deepening ends when the governor trips, when `max_depth` is reached, or
/// once a completed depth ended every line in a decided game. In that last
/// case `tree_resolved` is set and `stats` cover only the passes actually
/// run; the chosen board and score match what any deeper pass would return.
#[derive(Debug, Clone, Copy)]
pub struct SearchResult {
    /// Board after White's chosen move (the input board if none was chosen).
    pub best_board: Board,
    pub best_score: i32,
    /// Deepest iteration that finished before the governor tripped.
    pub completed_depth: u32,
    pub stats: SearchStats,
    pub elapsed: Duration,
    pub timed_out: bool,
    /// The last completed depth left no line open at the depth limit.
    pub tree_resolved: bool,
}

pub fn iterative_deepening_search<G: MoveGenerator, S: BoardScorer>(
    board: &Board,
    generator: &G,
    scorer: &S,
    config: SearchConfig,
) -> SearchResult {
    iterative_deepening_search_with_stop(board, generator, scorer, config, None)
}

/// Same as `iterative_deepening_search`, also stopping when `stop_signal`
/// is raised.
pub fn iterative_deepening_search_with_stop<G: MoveGenerator, S: BoardScorer>(
    board: &Board,
    generator: &G,
    scorer: &S,
    config: SearchConfig,
    stop_signal: Option<Arc<AtomicBool>>,
) -> SearchResult {
    let governor = TimeGovernor::new(config.time_limit).with_stop_signal(stop_signal);
    let mut ctx = SearchContext::new(generator, scorer, governor);

    let mut best: Option<(Board, i32)> = None;
    let mut completed_depth = 0u32;
    let mut tree_resolved = false;

    let root_moves = generator.generate_moves(board, Side::White);
    if root_moves.is_empty() {
        debug!(board = %board, "no root moves for white");
    }

    let mut depth = 1u32;
    while !root_moves.is_empty() && config.max_depth.is_none_or(|max| depth <= max) {
        ctx.horizon_reached = false;

        let Some((depth_board, depth_score)) = search_root(&mut ctx, &root_moves, depth) else {
            info!(depth, "time limit reached during depth {depth} search");
            break;
        };

        best = Some((depth_board, depth_score));
        completed_depth = depth;
        info!(
            depth,
            score = depth_score,
            positions = ctx.stats.positions_evaluated,
            "completed search at depth {depth}"
        );

        if !ctx.horizon_reached {
            // Every line ended in a decided game; deeper passes repeat this tree.
            debug!(depth, "search tree fully resolved");
            tree_resolved = true;
            break;
        }

        depth += 1;
    }

    let (best_board, best_score) = best.unwrap_or_else(|| (*board, scorer.score(board)));

    SearchResult {
        best_board,
        best_score,
        completed_depth,
        stats: ctx.stats,
        elapsed: ctx.governor.elapsed(),
        timed_out: ctx.governor.is_tripped(),
        tree_resolved,
    }
}

/// Search every root move to `depth`. `None` when the governor tripped.
fn search_root<G: MoveGenerator, S: BoardScorer>(
    ctx: &mut SearchContext<'_, G, S>,
    root_moves: &[Board],
    depth: u32,
) -> Option<(Board, i32)> {
    let mut best: Option<(Board, i32)> = None;

    for mv in root_moves {
        if ctx.governor.check() {
            return None;
        }

        let score = ctx.minimax(mv, depth - 1, false, 1);
        if ctx.governor.is_tripped() {
            return None;
        }

        // Strictly greater: earlier moves win ties.
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((*mv, score));
        }
    }

    best
}

/// Per-invocation search state threaded through the recursion.
struct SearchContext<'a, G: MoveGenerator, S: BoardScorer> {
    generator: &'a G,
    scorer: &'a S,
    governor: TimeGovernor,
    stats: SearchStats,
    /// Set when some line was cut at the depth limit rather than by a result.
    horizon_reached: bool,
}

impl<'a, G: MoveGenerator, S: BoardScorer> SearchContext<'a, G, S> {
    fn new(generator: &'a G, scorer: &'a S, governor: TimeGovernor) -> Self {
        Self {
            generator,
            scorer,
            governor,
            stats: SearchStats::default(),
            horizon_reached: false,
        }
    }

    fn evaluate(&mut self, board: &Board) -> i32 {
        self.stats.positions_evaluated += 1;
        self.scorer.score(board)
    }

    fn minimax(&mut self, board: &Board, depth: u32, maximizing: bool, current_depth: u32) -> i32 {
        if self.governor.check() {
            return self.evaluate(board);
        }

        self.stats.max_depth_reached = self.stats.max_depth_reached.max(current_depth);
        if board.is_decided() {
            return self.evaluate(board);
        }

        if depth == 0 {
            self.horizon_reached = true;
            return self.evaluate(board);
        }

        let side = if maximizing { Side::White } else { Side::Black };
        let moves = self.generator.generate_moves(board, side);
        if moves.is_empty() {
            return self.evaluate(board);
        }

        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for mv in &moves {
            let score = self.minimax(mv, depth - 1, !maximizing, current_depth + 1);
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };

            if self.governor.is_tripped() {
                break;
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use super::{
        iterative_deepening_search, iterative_deepening_search_with_stop, SearchConfig,
    };
    use crate::game_state::board::Board;
    use crate::game_state::board_types::Side;
    use crate::move_generation::move_generator::{
        JumpMoveGenerator, MoveGenerator, NullMoveGenerator,
    };
    use crate::search::board_scoring::{BoardScorer, KingRaceScorer, WIN_SCORE};

    const RICH_POSITION: &str = "wWwwwxxxxxxbbbBb";

    fn fixed_depth(max_depth: u32) -> SearchConfig {
        SearchConfig {
            time_limit: Duration::from_secs(3600),
            max_depth: Some(max_depth),
        }
    }

    /// White moves normally, Black never has a move.
    struct WhiteOnlyGenerator;

    impl MoveGenerator for WhiteOnlyGenerator {
        fn generate_moves(&self, board: &Board, side: Side) -> Vec<Board> {
            match side {
                Side::White => JumpMoveGenerator.generate_moves(board, side),
                Side::Black => Vec::new(),
            }
        }
    }

    /// King-race scorer that raises `stop` once it has scored `limit` boards.
    struct StopAfterScorer {
        stop: Arc<AtomicBool>,
        calls: AtomicU64,
        limit: u64,
    }

    impl BoardScorer for StopAfterScorer {
        fn score(&self, board: &Board) -> i32 {
            if self.calls.fetch_add(1, Ordering::Relaxed) + 1 == self.limit {
                self.stop.store(true, Ordering::Relaxed);
            }
            KingRaceScorer.score(board)
        }
    }

    /// Real move generator that raises `stop` on its `trip_on_call`-th use.
    struct StopOnCallGenerator {
        stop: Arc<AtomicBool>,
        calls: AtomicU64,
        trip_on_call: u64,
    }

    impl MoveGenerator for StopOnCallGenerator {
        fn generate_moves(&self, board: &Board, side: Side) -> Vec<Board> {
            if self.calls.fetch_add(1, Ordering::Relaxed) + 1 == self.trip_on_call {
                self.stop.store(true, Ordering::Relaxed);
            }
            JumpMoveGenerator.generate_moves(board, side)
        }
    }

    #[test]
    fn depth_one_prefers_advancing_the_king() {
        let board = Board::from_text("wWxxxxxxxxxxxxxB");
        let result =
            iterative_deepening_search(&board, &JumpMoveGenerator, &KingRaceScorer, fixed_depth(1));

        assert_eq!(result.best_board.to_text(), "wxWxxxxxxxxxxxxB");
        assert_eq!(result.best_score, 2);
        assert_eq!(result.completed_depth, 1);
        assert_eq!(result.stats.positions_evaluated, 2);
        assert_eq!(result.stats.max_depth_reached, 1);
        assert!(!result.timed_out);
    }

    #[test]
    fn ties_keep_the_first_generated_move() {
        // No white king: every successor is a lost position for White.
        let board = Board::from_text("wxxxwxxxxxxxxxxB");
        let result = iterative_deepening_search(
            &board,
            &JumpMoveGenerator,
            &KingRaceScorer,
            SearchConfig::default(),
        );

        assert_eq!(result.best_board.to_text(), "xwxxwxxxxxxxxxxB");
        assert_eq!(result.best_score, -WIN_SCORE);
        // Nothing is left to deepen once every line is decided.
        assert_eq!(result.completed_depth, 1);
        assert!(result.tree_resolved);
        assert!(!result.timed_out);
    }

    #[test]
    fn finds_forced_win_two_plies_deep() {
        // Black's only move takes its king off the board.
        let board = Board::from_text("BxxxxxxxxxxxxxWx");
        let result = iterative_deepening_search(
            &board,
            &JumpMoveGenerator,
            &KingRaceScorer,
            SearchConfig::default(),
        );

        assert_eq!(result.best_board.to_text(), "BxxxxxxxxxxxxxxW");
        assert_eq!(result.best_score, WIN_SCORE);
        assert_eq!(result.completed_depth, 2);
        assert_eq!(result.stats.positions_evaluated, 2);
        assert_eq!(result.stats.max_depth_reached, 2);
    }

    #[test]
    fn exhausted_budget_before_first_depth_returns_input_board() {
        let board = Board::from_text(RICH_POSITION);
        let result = iterative_deepening_search(
            &board,
            &JumpMoveGenerator,
            &KingRaceScorer,
            SearchConfig {
                time_limit: Duration::ZERO,
                max_depth: None,
            },
        );

        assert_eq!(result.best_board, board);
        assert_eq!(result.best_score, KingRaceScorer.score(&board));
        assert_eq!(result.completed_depth, 0);
        assert_eq!(result.stats.positions_evaluated, 0);
        assert!(result.timed_out);
    }

    #[test]
    fn raised_stop_signal_discards_all_work() {
        let board = Board::from_text(RICH_POSITION);
        let stop = Arc::new(AtomicBool::new(true));
        let result = iterative_deepening_search_with_stop(
            &board,
            &JumpMoveGenerator,
            &KingRaceScorer,
            fixed_depth(6),
            Some(stop),
        );

        assert_eq!(result.best_board, board);
        assert_eq!(result.completed_depth, 0);
        assert!(result.timed_out);
    }

    #[test]
    fn timed_out_search_reports_last_completed_depth() {
        let board = Board::from_text(RICH_POSITION);
        let timed = iterative_deepening_search(
            &board,
            &JumpMoveGenerator,
            &KingRaceScorer,
            SearchConfig {
                time_limit: Duration::from_millis(40),
                max_depth: None,
            },
        );

        assert!(timed.timed_out);
        assert!(!timed.tree_resolved);
        assert!(timed.completed_depth > 0, "40ms should finish at least depth 1");

        let replay = iterative_deepening_search(
            &board,
            &JumpMoveGenerator,
            &KingRaceScorer,
            fixed_depth(timed.completed_depth),
        );

        assert_eq!(timed.best_board, replay.best_board);
        assert_eq!(timed.best_score, replay.best_score);
        assert_eq!(replay.completed_depth, timed.completed_depth);
    }

    #[test]
    fn stop_raised_deep_in_the_tree_unwinds_every_level() {
        // Depths 1 and 2 take 5 + 25 evaluations; the stop lands inside depth 3.
        let board = Board::from_text(RICH_POSITION);
        let stop = Arc::new(AtomicBool::new(false));
        let scorer = StopAfterScorer {
            stop: stop.clone(),
            calls: AtomicU64::new(0),
            limit: 50,
        };
        let result = iterative_deepening_search_with_stop(
            &board,
            &JumpMoveGenerator,
            &scorer,
            fixed_depth(8),
            Some(stop),
        );

        // Only the node that saw the tripped governor is scored after the stop.
        assert_eq!(result.stats.positions_evaluated, 51);
        assert_eq!(scorer.calls.load(Ordering::Relaxed), 51);
        assert!(result.timed_out);
        assert_eq!(result.completed_depth, 2);

        let depth_two =
            iterative_deepening_search(&board, &JumpMoveGenerator, &KingRaceScorer, fixed_depth(2));
        assert_eq!(result.best_board, depth_two.best_board);
        assert_eq!(result.best_score, depth_two.best_score);
    }

    #[test]
    fn cut_off_nodes_do_not_count_toward_depth_reached() {
        // Call 1 lists the root moves; call 2 expands the first root move at
        // depth 2, so the stop lands just before the first ply-2 node.
        let board = Board::from_text(RICH_POSITION);
        let stop = Arc::new(AtomicBool::new(false));
        let generator = StopOnCallGenerator {
            stop: stop.clone(),
            calls: AtomicU64::new(0),
            trip_on_call: 2,
        };
        let result = iterative_deepening_search_with_stop(
            &board,
            &generator,
            &KingRaceScorer,
            fixed_depth(2),
            Some(stop),
        );

        assert!(result.timed_out);
        assert_eq!(result.completed_depth, 1);
        assert_eq!(result.stats.positions_evaluated, 5 + 1);
        assert_eq!(result.stats.max_depth_reached, 1);
    }

    #[test]
    fn deeper_fixed_searches_agree_with_plain_minimax_counts() {
        let board = Board::from_text(RICH_POSITION);
        let one = iterative_deepening_search(&board, &JumpMoveGenerator, &KingRaceScorer, fixed_depth(1));
        let two = iterative_deepening_search(&board, &JumpMoveGenerator, &KingRaceScorer, fixed_depth(2));

        // Depth 1 evaluates each of White's five successors once; depth 2
        // repeats that and adds five Black replies per successor.
        assert_eq!(one.stats.positions_evaluated, 5);
        assert_eq!(two.stats.positions_evaluated, 5 + 25);
        assert_eq!(two.stats.max_depth_reached, 2);
    }

    #[test]
    fn no_root_moves_returns_input_board() {
        let board = Board::from_text("wWxxxxxxxxxxxxxB");
        let result =
            iterative_deepening_search(&board, &NullMoveGenerator, &KingRaceScorer, fixed_depth(3));

        assert_eq!(result.best_board, board);
        assert_eq!(result.best_score, KingRaceScorer.score(&board));
        assert_eq!(result.completed_depth, 0);
    }

    #[test]
    fn node_without_moves_scores_statically() {
        let board = Board::from_text("wWxxxxxxxxxxxxxB");
        let result =
            iterative_deepening_search(&board, &WhiteOnlyGenerator, &KingRaceScorer, fixed_depth(3));

        // Black has no reply, so each root move is scored as it stands.
        assert_eq!(result.best_board.to_text(), "wxWxxxxxxxxxxxxB");
        assert_eq!(result.best_score, 2);
    }

    #[test]
    fn repeated_searches_start_from_fresh_counters() {
        let board = Board::from_text(RICH_POSITION);
        let first = iterative_deepening_search(&board, &JumpMoveGenerator, &KingRaceScorer, fixed_depth(3));
        let second = iterative_deepening_search(&board, &JumpMoveGenerator, &KingRaceScorer, fixed_depth(3));
        assert_eq!(first.stats, second.stats);
        assert_eq!(first.best_board, second.best_board);
    }
}

//! Iterative-deepening minimax engine.
//!
//! The search only knows how to move White, so Black positions are flipped
//! before searching and the chosen board is flipped back.

use std::sync::{atomic::AtomicBool, Arc};

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::board::Board;
use crate::game_state::board_types::Side;
use crate::move_generation::move_generator::{JumpMoveGenerator, MoveGenerator};
use crate::search::board_scoring::KingRaceScorer;
use crate::search::iterative_deepening::{iterative_deepening_search_with_stop, SearchConfig};

pub struct MinimaxEngine {
    config: SearchConfig,
    move_generator: JumpMoveGenerator,
    scorer: KingRaceScorer,
    stop_signal: Option<Arc<AtomicBool>>,
}

impl MinimaxEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            move_generator: JumpMoveGenerator,
            scorer: KingRaceScorer,
            stop_signal: None,
        }
    }

    pub fn set_stop_signal(&mut self, stop_signal: Option<Arc<AtomicBool>>) {
        self.stop_signal = stop_signal;
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "jumpy16 minimax"
    }

    fn choose_move(
        &mut self,
        board: &Board,
        side: Side,
        params: &GoParams,
    ) -> Result<EngineOutput, String> {
        let config = SearchConfig {
            time_limit: params.time_limit.unwrap_or(self.config.time_limit),
            max_depth: params.max_depth.or(self.config.max_depth),
        };

        let view = match side {
            Side::White => *board,
            Side::Black => board.flip(),
        };

        let result = iterative_deepening_search_with_stop(
            &view,
            &self.move_generator,
            &self.scorer,
            config,
            self.stop_signal.clone(),
        );

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info depth {} score {} positions {} seldepth {} time_ms {}",
            result.completed_depth,
            result.best_score,
            result.stats.positions_evaluated,
            result.stats.max_depth_reached,
            result.elapsed.as_millis()
        ));

        let chosen = if result.completed_depth > 0 {
            Some(result.best_board)
        } else {
            // Nothing finished in time: fall back to the first generated move.
            let fallback = self
                .move_generator
                .generate_moves(&view, Side::White)
                .into_iter()
                .next();
            if fallback.is_some() {
                out.info_lines
                    .push("info string minimax_engine no completed depth, playing first move".to_owned());
            }
            fallback
        };

        out.best_board = chosen.map(|b| match side {
            Side::White => b,
            Side::Black => b.flip(),
        });
        out.score = chosen.map(|_| result.best_score);

        Ok(out)
    }
}

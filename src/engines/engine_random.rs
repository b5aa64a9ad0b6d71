//! Random-move engine.
//!
//! Selects uniformly from generated moves and is used as a baseline opponent
//! in match series and for harness tests.

use rand::prelude::IndexedRandom;
use rand::{rngs::StdRng, SeedableRng};

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::board::Board;
use crate::game_state::board_types::Side;
use crate::move_generation::move_generator::{JumpMoveGenerator, MoveGenerator};

pub struct RandomEngine {
    move_generator: JumpMoveGenerator,
    rng: StdRng,
}

impl RandomEngine {
    pub fn new(seed: u64) -> Self {
        Self {
            move_generator: JumpMoveGenerator,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "jumpy16 random"
    }

    fn choose_move(
        &mut self,
        board: &Board,
        side: Side,
        _params: &GoParams,
    ) -> Result<EngineOutput, String> {
        let moves = self.move_generator.generate_moves(board, side);

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("info string random_engine moves {}", moves.len()));
        out.best_board = moves.as_slice().choose(&mut self.rng).copied();
        Ok(out)
    }
}

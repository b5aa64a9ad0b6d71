//! Engine abstraction used by the match harness.
//!
//! Defines common input parameters and output payloads so different move
//! choosers can play either side behind a single trait interface.

use std::time::Duration;

use crate::game_state::board::Board;
use crate::game_state::board_types::Side;

#[derive(Debug, Clone, Default)]
pub struct GoParams {
    pub time_limit: Option<Duration>,
    pub max_depth: Option<u32>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// Board after the chosen move.
    pub best_board: Option<Board>,
    /// Score from the mover's point of view, when the engine has one.
    pub score: Option<i32>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(
        &mut self,
        board: &Board,
        side: Side,
        params: &GoParams,
    ) -> Result<EngineOutput, String>;
}

//! Static evaluation interface and the king-race heuristic.
//!
//! Scores are always from White's point of view: positive favors White.

use crate::game_state::board::Board;
use crate::game_state::board_types::{Side, EXIT_SQUARE};

/// Score of a decided game.
pub const WIN_SCORE: i32 = 100;

pub trait BoardScorer: Send + Sync {
    /// Score from White's perspective.
    fn score(&self, board: &Board) -> i32;
}

/// Decided games score `±WIN_SCORE`; otherwise the sum of both kings'
/// squares minus 15.
///
/// With both kings gone the position counts as lost for White.
#[derive(Debug, Clone, Copy, Default)]
pub struct KingRaceScorer;

impl BoardScorer for KingRaceScorer {
    fn score(&self, board: &Board) -> i32 {
        match (board.king_square(Side::White), board.king_square(Side::Black)) {
            (None, _) => -WIN_SCORE,
            (Some(_), None) => WIN_SCORE,
            (Some(white), Some(black)) => {
                i32::from(white) + i32::from(black) - i32::from(EXIT_SQUARE)
            }
        }
    }
}

//! Move generation interface.
//!
//! Search code depends on the `MoveGenerator` trait only, so alternate rule
//! sets (or degenerate ones in tests) can be swapped in without touching it.

use crate::game_state::board::Board;
use crate::game_state::board_types::Side;
use crate::move_generation::white_moves::generate_white_moves;

pub trait MoveGenerator: Send + Sync {
    /// Every board reachable by one move of `side`.
    fn generate_moves(&self, board: &Board, side: Side) -> Vec<Board>;
}

/// The game's rules: one successor per piece of the side to move.
#[derive(Debug, Clone, Copy, Default)]
pub struct JumpMoveGenerator;

impl MoveGenerator for JumpMoveGenerator {
    fn generate_moves(&self, board: &Board, side: Side) -> Vec<Board> {
        let mut moves = Vec::with_capacity(board.side_piece_count(side) as usize);
        match side {
            Side::White => generate_white_moves(board, &mut moves),
            Side::Black => {
                generate_white_moves(&board.flip(), &mut moves);
                for mv in &mut moves {
                    *mv = mv.flip();
                }
            }
        }
        moves
    }
}

/// Generator that never produces a move.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullMoveGenerator;

impl MoveGenerator for NullMoveGenerator {
    fn generate_moves(&self, _board: &Board, _side: Side) -> Vec<Board> {
        Vec::new()
    }
}

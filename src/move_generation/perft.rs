//! Perft: exhaustive leaf counting used to pin down move generation.
//!
//! Decided positions are still expanded, so counts describe the raw rules
//! rather than game outcomes.

use crate::game_state::board::Board;
use crate::game_state::board_types::Side;
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub exits: u64,
    pub decided: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.exits += rhs.exits;
        self.decided += rhs.decided;
    }
}

pub fn perft<G: MoveGenerator>(generator: &G, board: &Board, side: Side, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in generator.generate_moves(board, side) {
        if depth == 1 {
            total.nodes += 1;
            if mv.piece_count() < board.piece_count() {
                total.exits += 1;
            }
            if mv.is_decided() {
                total.decided += 1;
            }
        } else {
            total.merge(perft(generator, &mv, side.opposite(), depth - 1));
        }
    }

    total
}

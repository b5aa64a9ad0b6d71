//! White's movement rule. Black reuses it through `Board::flip`.
//!
//! Every White piece yields exactly one successor board:
//! - a piece on the exit square leaves the board;
//! - otherwise it slides one square forward when that square is empty;
//! - otherwise it jumps to the first empty square ahead, leaving the board
//!   when there is none. A two-square jump over a Black piece sends that
//!   piece to the highest empty square of the resulting board.

use crate::game_state::board::Board;
use crate::game_state::board_types::*;

/// Append one successor per White piece: kings first, then regular pieces,
/// each group in ascending square order.
pub fn generate_white_moves(board: &Board, out: &mut Vec<Board>) {
    for kind in [PieceKind::King, PieceKind::Regular] {
        let mut pieces = board.bits(Side::White, kind);
        while pieces != 0 {
            let square = pieces.trailing_zeros() as Square;
            out.push(white_piece_move(board, square, kind));
            pieces &= pieces - 1;
        }
    }
}

/// Successor board for the White piece of `kind` on `from`.
pub fn white_piece_move(board: &Board, from: Square, kind: PieceKind) -> Board {
    let mut next = *board;
    next.remove_piece(Side::White, kind, from);

    if from == EXIT_SQUARE {
        return next;
    }

    if board.is_empty_square(from + 1) {
        next.set_piece(Side::White, kind, from + 1);
        return next;
    }

    let Some(landing) = first_empty_ahead(board, from) else {
        // Nothing free up to the exit square: the piece jumps off the board.
        return next;
    };

    next.set_piece(Side::White, kind, landing);

    if landing - from == 2 {
        relocate_jumped_piece(&mut next, from + 1);
    }

    next
}

fn first_empty_ahead(board: &Board, from: Square) -> Option<Square> {
    (from + 1..BOARD_SQUARES).find(|&sq| board.is_empty_square(sq))
}

/// Move a Black piece sitting on `square` to the highest empty square of
/// `board`. White pieces on `square` are left alone.
fn relocate_jumped_piece(board: &mut Board, square: Square) {
    let Some((Side::Black, kind)) = board.piece_at(square) else {
        return;
    };

    if let Some(target) = board.highest_empty_square() {
        board.remove_piece(Side::Black, kind, square);
        board.set_piece(Side::Black, kind, target);
    }
}

#[cfg(test)]
mod tests {
    use super::{generate_white_moves, white_piece_move};
    use crate::game_state::board::Board;
    use crate::game_state::board_types::PieceKind;

    fn moves_of(text: &str) -> Vec<String> {
        let mut out = Vec::new();
        generate_white_moves(&Board::from_text(text), &mut out);
        out.iter().map(Board::to_text).collect()
    }

    #[test]
    fn piece_on_exit_square_leaves_the_board() {
        let board = Board::from_text("xxxxxxxxxxxxxxxw");
        let next = white_piece_move(&board, 15, PieceKind::Regular);
        assert_eq!(next.to_text(), "xxxxxxxxxxxxxxxx");
    }

    #[test]
    fn piece_slides_into_empty_square() {
        assert_eq!(moves_of("Wxxxxxxxxxxxxxxx"), vec!["xWxxxxxxxxxxxxxx"]);
    }

    #[test]
    fn jump_over_black_piece_relocates_it_to_highest_empty_square() {
        assert_eq!(moves_of("wbxxxxxxxxxxxxxB"), vec!["xxwxxxxxxxxxxxbB"]);
    }

    #[test]
    fn jumped_piece_lands_on_vacated_square_when_higher_squares_are_full() {
        assert_eq!(moves_of("wbxbbbbbbbbbbbbb"), vec!["bxwbbbbbbbbbbbbb"]);
    }

    #[test]
    fn jump_over_black_king_relocates_the_king() {
        assert_eq!(moves_of("WBxxxxxxxxxxxxxx"), vec!["xxWxxxxxxxxxxxxB"]);
    }

    #[test]
    fn jump_over_own_piece_captures_nothing() {
        let moves = moves_of("wwxxxxxxxxxxxxxx");
        assert_eq!(moves, vec!["xwwxxxxxxxxxxxxx", "wxwxxxxxxxxxxxxx"]);
    }

    #[test]
    fn long_jump_is_free() {
        assert_eq!(moves_of("wbbxxxxxxxxxxxxx"), vec!["xbbwxxxxxxxxxxxx"]);
    }

    #[test]
    fn blocked_run_to_the_end_exits() {
        assert_eq!(moves_of("xxxxxxxxxxxxxwbb"), vec!["xxxxxxxxxxxxxxbb"]);
    }

    #[test]
    fn kings_move_before_regular_pieces() {
        let moves = moves_of("wxxWxxxxxxxxxxxx");
        assert_eq!(moves, vec!["wxxxWxxxxxxxxxxx", "xwxWxxxxxxxxxxxx"]);
    }
}

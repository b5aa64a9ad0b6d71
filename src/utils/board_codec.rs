//! Text codec for board positions.
//!
//! A position is a 16-character token; character `i` describes square `i`:
//! `w` white regular, `W` white king, `b` black regular, `B` black king,
//! `x` empty. Decoding is lenient: unknown characters leave the square empty
//! and characters past square 15 are ignored.

use thiserror::Error;

use crate::game_state::board::Board;
use crate::game_state::board_types::*;

/// Why a position token is not a clean 16-character board.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardTextIssue {
    #[error("position token has {0} characters, expected 16")]
    WrongLength(usize),

    #[error("invalid position character '{ch}' at square {square}")]
    InvalidChar { ch: char, square: usize },
}

pub fn decode(text: &str) -> Board {
    let mut board = Board::new_empty();

    for (sq, ch) in text.chars().take(usize::from(BOARD_SQUARES)).enumerate() {
        if let Some((side, kind)) = piece_from_char(ch) {
            board.set_piece(side, kind, sq as Square);
        }
    }

    board
}

pub fn encode(board: &Board) -> String {
    (0..BOARD_SQUARES)
        .map(|sq| match board.piece_at(sq) {
            Some((side, kind)) => piece_to_char(side, kind),
            None => 'x',
        })
        .collect()
}

/// Strict check used by the driver for diagnostics only.
pub fn validate_board_text(text: &str) -> Result<(), BoardTextIssue> {
    let len = text.chars().count();
    if len != usize::from(BOARD_SQUARES) {
        return Err(BoardTextIssue::WrongLength(len));
    }

    for (square, ch) in text.chars().enumerate() {
        if ch != 'x' && piece_from_char(ch).is_none() {
            return Err(BoardTextIssue::InvalidChar { ch, square });
        }
    }

    Ok(())
}

fn piece_from_char(ch: char) -> Option<(Side, PieceKind)> {
    match ch {
        'w' => Some((Side::White, PieceKind::Regular)),
        'W' => Some((Side::White, PieceKind::King)),
        'b' => Some((Side::Black, PieceKind::Regular)),
        'B' => Some((Side::Black, PieceKind::King)),
        _ => None,
    }
}

const fn piece_to_char(side: Side, kind: PieceKind) -> char {
    match (side, kind) {
        (Side::White, PieceKind::Regular) => 'w',
        (Side::White, PieceKind::King) => 'W',
        (Side::Black, PieceKind::Regular) => 'b',
        (Side::Black, PieceKind::King) => 'B',
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::{decode, encode, validate_board_text, BoardTextIssue};
    use crate::game_state::board_types::{PieceKind, Side};

    #[test]
    fn decode_scenario_sets_expected_bits() {
        let board = decode("wwwwwwwwbbbbbbbx");
        assert_eq!(board.bits(Side::White, PieceKind::Regular), 0x00FF);
        assert_eq!(board.bits(Side::Black, PieceKind::Regular), 0x7F00);
        assert_eq!(board.bits(Side::White, PieceKind::King), 0);
        assert_eq!(board.bits(Side::Black, PieceKind::King), 0);
    }

    #[test]
    fn random_tokens_round_trip() {
        let alphabet = ['w', 'W', 'b', 'B', 'x'];
        let mut rng = StdRng::seed_from_u64(16);
        for _ in 0..500 {
            let token: String = (0..16)
                .map(|_| alphabet[rng.random_range(0..alphabet.len())])
                .collect();
            let board = decode(&token);
            assert!(board.is_disjoint());
            assert_eq!(encode(&board), token);
            assert_eq!(decode(&encode(&board)), board);
        }
    }

    #[test]
    fn unknown_characters_decode_as_empty() {
        let board = decode("w?Wxxxxxxxxxxxb!");
        assert_eq!(encode(&board), "wxWxxxxxxxxxxxbx");
    }

    #[test]
    fn short_and_long_tokens_decode_partially() {
        assert_eq!(encode(&decode("wW")), "wWxxxxxxxxxxxxxx");
        assert_eq!(encode(&decode("xxxxxxxxxxxxxxxBww")), "xxxxxxxxxxxxxxxB");
    }

    #[test]
    fn validation_reports_length_and_alphabet() {
        assert_eq!(validate_board_text("wwwwwwwwbbbbbbbx"), Ok(()));
        assert_eq!(
            validate_board_text("wwb"),
            Err(BoardTextIssue::WrongLength(3))
        );
        assert_eq!(
            validate_board_text("wwwwwwwwbbbbbbbq"),
            Err(BoardTextIssue::InvalidChar { ch: 'q', square: 15 })
        );
    }
}

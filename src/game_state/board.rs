//! Core bit-set board representation.
//!
//! `Board` is the only position model in the engine. It stores one 16-bit
//! set per side and piece kind, is `Copy`, and is never mutated once handed
//! to the search: every generated move is a fresh snapshot.

use std::fmt;
use std::str::FromStr;

use crate::game_state::board_types::*;
use crate::utils::board_codec::{decode, encode};

/// Four disjoint bit-sets over squares `0..=15`, indexed `[side][kind]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Board {
    pub pieces: [[u16; 2]; 2],
}

impl Board {
    #[inline]
    pub const fn new_empty() -> Self {
        Self {
            pieces: [[0; 2]; 2],
        }
    }

    /// Lenient decode of a 16-character position token.
    #[inline]
    pub fn from_text(text: &str) -> Self {
        decode(text)
    }

    #[inline]
    pub fn to_text(&self) -> String {
        encode(self)
    }

    #[inline]
    pub const fn bits(&self, side: Side, kind: PieceKind) -> u16 {
        self.pieces[side.index()][kind.index()]
    }

    #[inline]
    pub fn set_piece(&mut self, side: Side, kind: PieceKind, square: Square) {
        self.pieces[side.index()][kind.index()] |= square_bit(square);
    }

    #[inline]
    pub fn remove_piece(&mut self, side: Side, kind: PieceKind, square: Square) {
        self.pieces[side.index()][kind.index()] &= !square_bit(square);
    }

    #[inline]
    pub const fn side_occupancy(&self, side: Side) -> u16 {
        let idx = side.index();
        self.pieces[idx][0] | self.pieces[idx][1]
    }

    #[inline]
    pub const fn occupancy(&self) -> u16 {
        self.side_occupancy(Side::White) | self.side_occupancy(Side::Black)
    }

    #[inline]
    pub const fn is_empty_square(&self, square: Square) -> bool {
        self.occupancy() & square_bit(square) == 0
    }

    /// Piece on `square`, checked in white-regular, white-king, black-regular,
    /// black-king order.
    pub fn piece_at(&self, square: Square) -> Option<(Side, PieceKind)> {
        let mask = square_bit(square);
        for side in [Side::White, Side::Black] {
            for kind in [PieceKind::Regular, PieceKind::King] {
                if self.bits(side, kind) & mask != 0 {
                    return Some((side, kind));
                }
            }
        }
        None
    }

    /// Highest-indexed empty square, if any.
    #[inline]
    pub fn highest_empty_square(&self) -> Option<Square> {
        let empty = !self.occupancy();
        if empty == 0 {
            None
        } else {
            Some((15 - empty.leading_zeros()) as Square)
        }
    }

    #[inline]
    pub const fn side_piece_count(&self, side: Side) -> u32 {
        self.side_occupancy(side).count_ones()
    }

    #[inline]
    pub const fn piece_count(&self) -> u32 {
        self.side_piece_count(Side::White) + self.side_piece_count(Side::Black)
    }

    /// True when no square is claimed by more than one bit-set.
    pub fn is_disjoint(&self) -> bool {
        let sets = [
            self.pieces[0][0],
            self.pieces[0][1],
            self.pieces[1][0],
            self.pieces[1][1],
        ];
        let total: u32 = sets.iter().map(|bb| bb.count_ones()).sum();
        total == self.occupancy().count_ones()
    }

    /// Lowest square holding a king of `side`.
    #[inline]
    pub fn king_square(&self, side: Side) -> Option<Square> {
        let kings = self.bits(side, PieceKind::King);
        (kings != 0).then(|| kings.trailing_zeros() as Square)
    }

    #[inline]
    pub const fn has_king(&self, side: Side) -> bool {
        self.bits(side, PieceKind::King) != 0
    }

    /// White has won once Black's king is gone.
    #[inline]
    pub const fn is_white_win(&self) -> bool {
        !self.has_king(Side::Black)
    }

    /// Black has won once White's king is gone.
    #[inline]
    pub const fn is_black_win(&self) -> bool {
        !self.has_king(Side::White)
    }

    #[inline]
    pub const fn is_decided(&self) -> bool {
        self.is_white_win() || self.is_black_win()
    }

    /// Swap the colors and mirror every square (`i` maps to `15 - i`).
    ///
    /// Black to move on `self` is White to move on the flipped board under
    /// identical rules, so only White's rules need to exist.
    pub fn flip(&self) -> Self {
        let mut flipped = Board::new_empty();
        for kind in [PieceKind::Regular, PieceKind::King] {
            flipped.pieces[Side::White.index()][kind.index()] =
                self.bits(Side::Black, kind).reverse_bits();
            flipped.pieces[Side::Black.index()][kind.index()] =
                self.bits(Side::White, kind).reverse_bits();
        }
        flipped
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode(self))
    }
}

impl FromStr for Board {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(decode(s))
    }
}

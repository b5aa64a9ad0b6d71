//! Shared board primitives: sides, piece kinds, square indexing.
//!
//! The board is a single row of 16 squares. White always moves toward the
//! exit square at index 15; Black's rules are derived by mirroring the board.

/// Number of squares on the board.
pub const BOARD_SQUARES: u8 = 16;

/// Last valid square. A piece moving past it leaves the board.
pub const EXIT_SQUARE: Square = 15;

/// Board square index (`0..=15`).
pub type Square = u8;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Side::White => 0,
            Side::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
}

/// Piece kind (side is tracked separately, one bit-set per side and kind).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Regular,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Regular => 0,
            PieceKind::King => 1,
        }
    }
}

/// Single-square mask for `square`.
#[inline]
pub const fn square_bit(square: Square) -> u16 {
    1u16 << square
}

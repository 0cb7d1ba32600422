//! 0x88 geometry: direction deltas, the off-board test, and per-piece move vectors.
//!
//! Each rank occupies 16 slots, only the low 8 of which are real squares. Any
//! single step off the playing area lands on an index with bit `0x08` (file
//! overflow) or bit `0x80` (rank overflow, including wrap-around below zero)
//! set, so one mask test replaces per-axis range checks.

use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

pub const NORTH: i8 = 16;
pub const SOUTH: i8 = -16;
pub const EAST: i8 = 1;
pub const WEST: i8 = -1;
pub const NORTH_EAST: i8 = NORTH + EAST;
pub const NORTH_WEST: i8 = NORTH + WEST;
pub const SOUTH_EAST: i8 = SOUTH + EAST;
pub const SOUTH_WEST: i8 = SOUTH + WEST;

const OFF_BOARD_MASK: u8 = 0x88;

/// Marker index that never holds a piece; used by malformed move keys.
pub const OFF_BOARD: Square = 0x88;

pub const LIGHT_PAWN_VECTORS: [i8; 3] = [NORTH_WEST, NORTH, NORTH_EAST];
pub const DARK_PAWN_VECTORS: [i8; 3] = [SOUTH_WEST, SOUTH, SOUTH_EAST];

pub const KNIGHT_VECTORS: [i8; 8] = [
    NORTH + NORTH_EAST,
    NORTH + NORTH_WEST,
    NORTH_EAST + EAST,
    NORTH_WEST + WEST,
    SOUTH + SOUTH_EAST,
    SOUTH + SOUTH_WEST,
    SOUTH_EAST + EAST,
    SOUTH_WEST + WEST,
];

pub const ORTHOGONAL_VECTORS: [i8; 4] = [NORTH, EAST, SOUTH, WEST];
pub const DIAGONAL_VECTORS: [i8; 4] = [NORTH_WEST, NORTH_EAST, SOUTH_WEST, SOUTH_EAST];

pub const ALL_DIRECTIONS: [i8; 8] = [
    NORTH_WEST, NORTH_EAST, SOUTH_WEST, SOUTH_EAST, NORTH, EAST, SOUTH, WEST,
];

/// Opposite direction pairs, one per ray axis.
pub const RAY_AXES: [(i8, i8); 4] = [
    (NORTH_WEST, SOUTH_EAST),
    (NORTH_EAST, SOUTH_WEST),
    (NORTH, SOUTH),
    (EAST, WEST),
];

#[inline]
pub const fn is_off_board(index: u8) -> bool {
    index & OFF_BOARD_MASK != 0
}

/// One step from `square` along `delta`, or `None` if it leaves the board.
#[inline]
pub const fn step(square: Square, delta: i8) -> Option<Square> {
    let next = square.wrapping_add(delta as u8);
    if is_off_board(next) {
        None
    } else {
        Some(next)
    }
}

/// The 64 playable indices in ascending order.
pub fn board_squares() -> impl Iterator<Item = Square> {
    (0..128u8).filter(|&sq| !is_off_board(sq))
}

/// Move vectors for `piece`; empty for the empty square.
pub fn move_vectors(piece: Piece) -> &'static [i8] {
    match (piece.color(), piece.kind()) {
        (Some(Color::Light), Some(PieceKind::Pawn)) => &LIGHT_PAWN_VECTORS,
        (Some(Color::Dark), Some(PieceKind::Pawn)) => &DARK_PAWN_VECTORS,
        (Some(_), Some(PieceKind::Knight)) => &KNIGHT_VECTORS,
        (Some(_), Some(PieceKind::Rook)) => &ORTHOGONAL_VECTORS,
        (Some(_), Some(PieceKind::Bishop)) => &DIAGONAL_VECTORS,
        (Some(_), Some(PieceKind::Queen | PieceKind::King)) => &ALL_DIRECTIONS,
        _ => &[],
    }
}

/// Straight pawn pushes are never attacks.
#[inline]
pub const fn is_pawn_push(delta: i8) -> bool {
    delta == NORTH || delta == SOUTH
}

/// Bitset over the 128 padded square indices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SquareSet(u128);

impl SquareSet {
    pub const EMPTY: SquareSet = SquareSet(0);

    #[inline]
    pub fn insert(&mut self, square: Square) {
        self.0 |= 1u128 << square;
    }

    #[inline]
    pub const fn contains(self, square: Square) -> bool {
        square < 128 && self.0 & (1u128 << square) != 0
    }

    #[inline]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Square> {
        let mut bits = self.0;
        std::iter::from_fn(move || {
            if bits == 0 {
                return None;
            }
            let square = bits.trailing_zeros() as Square;
            bits &= bits - 1;
            Some(square)
        })
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut set = SquareSet::EMPTY;
        for square in iter {
            set.insert(square);
        }
        set
    }
}

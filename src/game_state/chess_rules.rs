//! Canonical chess-rule constants.
//!
//! Standard starting position, piece values, and the home-rank geometry used
//! by pawn double pushes and promotion.

use crate::game_state::chess_types::{Color, PieceKind, Square};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Material value in centipawns.
#[inline]
pub const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 320,
        PieceKind::Bishop => 330,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 20000,
    }
}

/// Rank (0-based) the pawns of `color` start on.
#[inline]
pub const fn pawn_start_rank(color: Color) -> u8 {
    match color {
        Color::Light => 1,
        Color::Dark => 6,
    }
}

#[inline]
pub const fn rank_of(square: Square) -> u8 {
    square >> 4
}

#[inline]
pub const fn file_of(square: Square) -> u8 {
    square & 0x0f
}

#[inline]
pub const fn square_at(rank: u8, file: u8) -> Square {
    (rank << 4) | file
}

/// First or last rank; any pawn arriving there promotes.
#[inline]
pub const fn is_promotion_rank(square: Square) -> bool {
    let rank = rank_of(square);
    rank == 0 || rank == 7
}

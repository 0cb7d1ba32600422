//! Ray probes for king safety.
//!
//! `exposes_king` answers the one question the pin survey cannot: whether
//! removing two pawns from the same rank during an en-passant capture opens a
//! slider line onto the mover's king. `is_king_attacked` is an independent,
//! generator-free check test used by diagnostics and legality tests.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_vectors::{move_vectors, step, ALL_DIRECTIONS, KNIGHT_VECTORS, RAY_AXES};

#[derive(Clone, Copy, PartialEq, Eq)]
enum RayEnd {
    OwnKing,
    EnemySlider,
    Other,
}

fn first_piece_along(state: &GameState, from: Square, delta: i8) -> Option<(Square, Piece)> {
    let mut square = from;
    while let Some(next) = step(square, delta) {
        square = next;
        let piece = state.piece_at(square);
        if !piece.is_empty() {
            return Some((square, piece));
        }
    }
    None
}

fn classify_ray_end(state: &GameState, from: Square, delta: i8) -> RayEnd {
    let mover = state.side_to_move;
    match first_piece_along(state, from, delta) {
        Some((_, piece)) if piece.belongs_to(mover) && piece.is(PieceKind::King) => RayEnd::OwnKing,
        Some((_, piece))
            if piece.belongs_to(mover.opposite())
                && piece.is_slider()
                && move_vectors(piece).contains(&delta) =>
        {
            RayEnd::EnemySlider
        }
        _ => RayEnd::Other,
    }
}

/// True when `square` sits on a line with the side-to-move's king at one end
/// and an enemy slider moving along that line at the other.
pub fn exposes_king(state: &GameState, square: Square) -> bool {
    RAY_AXES.iter().any(|&(one, two)| {
        let first = classify_ray_end(state, square, one);
        let second = classify_ray_end(state, square, two);
        matches!(
            (first, second),
            (RayEnd::OwnKing, RayEnd::EnemySlider) | (RayEnd::EnemySlider, RayEnd::OwnKing)
        )
    })
}

/// Whether `color`'s king is attacked by the opposite side.
///
/// A board without a king of that color is never in check.
pub fn is_king_attacked(state: &GameState, color: Color) -> bool {
    let Some(king_sq) = state.king_square(color) else {
        return false;
    };
    is_square_attacked(state, king_sq, color.opposite())
}

/// Whether any piece of `attacker` attacks `square`.
pub fn is_square_attacked(state: &GameState, square: Square, attacker: Color) -> bool {
    let knight = Piece::new(attacker, PieceKind::Knight);
    let knight_attack = KNIGHT_VECTORS
        .iter()
        .filter_map(|&delta| step(square, delta))
        .any(|from| state.piece_at(from) == knight);
    if knight_attack {
        return true;
    }

    ALL_DIRECTIONS.iter().any(|&delta| {
        let Some((from, piece)) = first_piece_along(state, square, delta) else {
            return false;
        };
        if !piece.belongs_to(attacker) {
            return false;
        }
        // The attacker moves back along the ray towards `square`.
        let towards = -delta;
        if piece.is_slider() {
            return move_vectors(piece).contains(&towards);
        }
        let adjacent = step(square, delta) == Some(from);
        adjacent
            && (piece.is(PieceKind::King)
                || (piece.is(PieceKind::Pawn) && pawn_captures_along(piece, towards)))
    })
}

fn pawn_captures_along(pawn: Piece, delta: i8) -> bool {
    move_vectors(pawn)
        .iter()
        .any(|&vector| vector == delta && delta % 16 != 0)
}

//! Square conversions between coordinates (`e4`) and 0x88 indices.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{file_of, rank_of, square_at};
use crate::game_state::chess_types::Square;
use crate::moves::move_vectors::is_off_board;

/// Convert a coordinate such as `"e4"` to its 0x88 index. Case insensitive.
#[inline]
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let invalid = || ChessError::InvalidAlgebraic(square.to_owned());
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(invalid());
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(invalid());
    }

    Ok(square_at(rank - b'1', file - b'a'))
}

/// Convert a 0x88 index back to a coordinate such as `"e4"`.
#[inline]
pub fn square_to_algebraic(square: Square) -> ChessResult<String> {
    if is_off_board(square) {
        return Err(ChessError::InvalidAlgebraic(format!("{square:#04x}")));
    }
    let file_char = char::from(b'a' + file_of(square));
    let rank_char = char::from(b'1' + rank_of(square));
    Ok(format!("{file_char}{rank_char}"))
}

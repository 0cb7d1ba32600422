//! Coordinate move text (`e2e4`, `e7e8q`) to and from [`MoveKey`].
//!
//! Parsing only checks shape. Whether the move is legal is decided by looking
//! the key up in the generated move map.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::PieceKind;
use crate::moves::move_key::MoveKey;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

/// Lenient form: spaces ignored, case ignored, anything malformed becomes
/// [`MoveKey::INVALID`], which no generated move ever equals.
pub fn parse_move(text: &str) -> MoveKey {
    parse_move_strict(text).unwrap_or(MoveKey::INVALID)
}

pub fn parse_move_strict(text: &str) -> ChessResult<MoveKey> {
    let compact: String = text
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .map(|ch| ch.to_ascii_lowercase())
        .collect();
    let invalid = || ChessError::InvalidAlgebraic(text.to_owned());

    if !compact.is_ascii() || !(4..=5).contains(&compact.len()) {
        return Err(invalid());
    }

    let from = algebraic_to_square(&compact[0..2]).map_err(|_| invalid())?;
    let to = algebraic_to_square(&compact[2..4]).map_err(|_| invalid())?;
    match compact[4..].chars().next() {
        None => Ok(MoveKey::new(from, to)),
        Some(ch) => {
            let kind = char_to_promotion(ch).ok_or_else(invalid)?;
            Ok(MoveKey::promoting(from, to, kind))
        }
    }
}

/// `e2e4` style text; the sentinel key renders as `0000`.
pub fn move_to_text(key: &MoveKey) -> String {
    let (Ok(from), Ok(to)) = (square_to_algebraic(key.from), square_to_algebraic(key.to)) else {
        return "0000".to_owned();
    };
    let mut out = from + &to;
    if let Some(ch) = key.promotion.and_then(promotion_to_char) {
        out.push(ch);
    }
    out
}

fn promotion_to_char(kind: PieceKind) -> Option<char> {
    match kind {
        PieceKind::Knight => Some('n'),
        PieceKind::Bishop => Some('b'),
        PieceKind::Rook => Some('r'),
        PieceKind::Queen => Some('q'),
        _ => None,
    }
}

fn char_to_promotion(ch: char) -> Option<PieceKind> {
    match ch {
        'n' => Some(PieceKind::Knight),
        'b' => Some(PieceKind::Bishop),
        'r' => Some(PieceKind::Rook),
        'q' => Some(PieceKind::Queen),
        _ => None,
    }
}

//! Move identity used to look a chosen move up in the generated move map.

use crate::game_state::chess_types::{PieceKind, Square};
use crate::moves::move_vectors::OFF_BOARD;

/// `(from, to, promotion)` triple. Two keys are the same move iff all three match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MoveKey {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl MoveKey {
    /// Sentinel for malformed move text. No generated key ever equals it.
    pub const INVALID: MoveKey = MoveKey {
        from: OFF_BOARD,
        to: OFF_BOARD,
        promotion: None,
    };

    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    pub const fn promoting(from: Square, to: Square, promotion: PieceKind) -> Self {
        Self {
            from,
            to,
            promotion: Some(promotion),
        }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        *self != Self::INVALID
    }
}

//! Errors used throughout the chess engine.
//!
//! `ChessError` is the single error type for everything that can fail on
//! external input: FEN text, move text, and moves proposed against a position.
//! Move generation, evaluation and search never fail on a structurally valid
//! position, so they return plain values.

use thiserror::Error;

use crate::moves::move_key::MoveKey;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// A FEN field is missing or there are extra trailing fields.
    #[error("malformed FEN: {0}")]
    InvalidFenForm(String),

    /// A board character that is neither a piece letter nor a digit 1-8.
    #[error("illegal symbol in FEN notation: {0:?}")]
    InvalidFenToken(char),

    /// The side-to-move field is not `w` or `b`.
    #[error("illegal player symbol in FEN notation: {0:?}")]
    InvalidSideToMove(String),

    /// A halfmove or fullmove field that is not a non-negative integer.
    #[error("invalid move counter in FEN: {0:?}")]
    InvalidClock(String),

    /// A square or move string that could not be interpreted.
    #[error("invalid algebraic notation: {0:?}")]
    InvalidAlgebraic(String),

    /// A well-formed move that is not legal in the current position.
    #[error("illegal move: {0:?}")]
    IllegalMove(MoveKey),

    /// The side to move has no legal moves.
    #[error("no legal moves available")]
    NoLegalMoves,
}

pub type ChessResult<T> = Result<T, ChessError>;

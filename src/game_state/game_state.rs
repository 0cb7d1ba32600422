//! Immutable position value.
//!
//! `GameState` is never edited in place once built. Move application and the
//! `with_*` helpers return fresh copies, so generated children can be held and
//! compared freely by search and perft.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_king_attacked;
use crate::moves::move_vectors::{board_squares, is_off_board};
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// The move that produced a position, kept for move ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LastMove {
    pub piece: Piece,
    pub captured: Piece,
    pub from: Square,
    pub to: Square,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    pub(crate) board: [Piece; 128],
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_square: Option<Square>,
    pub(crate) halfmove_clock: u16,
    pub(crate) fullmove_number: u16,
    pub(crate) last_move: Option<LastMove>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: [Piece::EMPTY; 128],
            side_to_move: Color::Light,
            castling_rights: 0,
            en_passant_square: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            last_move: None,
        }
    }
}

impl GameState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard starting position.
    pub fn new_game() -> Self {
        // The literal is covered by `starting_position_parses`.
        parse_fen(STARTING_POSITION_FEN).unwrap_or_default()
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Piece on `square`; padding and out-of-range indices read as empty.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Piece {
        if is_off_board(square) {
            Piece::EMPTY
        } else {
            self.board[square as usize]
        }
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn en_passant_square(&self) -> Option<Square> {
        self.en_passant_square
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    #[inline]
    pub fn last_move(&self) -> Option<LastMove> {
        self.last_move
    }

    /// Occupied squares in ascending index order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        board_squares()
            .map(|sq| (sq, self.board[sq as usize]))
            .filter(|(_, piece)| !piece.is_empty())
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(color, PieceKind::King);
        self.pieces()
            .find(|&(_, piece)| piece == king)
            .map(|(sq, _)| sq)
    }

    /// Whether the side to move is currently in check.
    #[inline]
    pub fn in_check(&self) -> bool {
        is_king_attacked(self, self.side_to_move)
    }

    pub fn with_side_to_move(&self, color: Color) -> Self {
        Self {
            side_to_move: color,
            ..self.clone()
        }
    }

    pub fn with_en_passant_square(&self, square: Option<Square>) -> Self {
        Self {
            en_passant_square: square,
            ..self.clone()
        }
    }

    pub fn with_castling_rights(&self, rights: CastlingRights) -> Self {
        Self {
            castling_rights: rights,
            ..self.clone()
        }
    }

    pub fn with_clocks(&self, halfmove_clock: u16, fullmove_number: u16) -> Self {
        Self {
            halfmove_clock,
            fullmove_number,
            ..self.clone()
        }
    }

    /// Copy with `square` set to `piece`. Off-board squares are ignored.
    pub fn with_piece(&self, square: Square, piece: Piece) -> Self {
        let mut next = self.clone();
        if !is_off_board(square) {
            next.board[square as usize] = piece;
        }
        next
    }
}

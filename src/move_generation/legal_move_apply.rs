//! State transition: one move in, one fresh position out.

use crate::game_state::{chess_types::*, game_state::GameState};

/// Side effects of a move that the generator already knows about.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransitionOptions {
    /// Square of a pawn taken en passant (never the destination).
    pub ep_capture_square: Option<Square>,
    /// En-passant target created by a double pawn push.
    pub new_ep_target: Option<Square>,
    /// Rights this move gives up outright (king moves clear both of a side).
    pub castle_rights_consumed: CastlingRights,
    /// Rook relocation for a castling move.
    pub castle: Option<CastleMove>,
    pub promotion: Option<PieceKind>,
}

/// Move the piece on `from` to `to`. Pure: `state` is not modified.
pub fn apply_move(
    state: &GameState,
    from: Square,
    to: Square,
    options: TransitionOptions,
) -> GameState {
    let mover = state.side_to_move;
    let moving = state.piece_at(from);
    let mut captured = state.piece_at(to);

    let mut board = state.board;
    board[from as usize] = Piece::EMPTY;
    board[to as usize] = match options.promotion {
        Some(kind) => Piece::new(mover, kind),
        None => moving,
    };

    if let Some(victim) = options.ep_capture_square {
        captured = board[victim as usize];
        board[victim as usize] = Piece::EMPTY;
    }

    if let Some(castle) = options.castle {
        board[castle.rook_from() as usize] = Piece::EMPTY;
        board[castle.rook_to() as usize] = Piece::new(castle.color(), PieceKind::Rook);
    }

    let halfmove_clock = if moving.is(PieceKind::Pawn) || !captured.is_empty() {
        0
    } else {
        state.halfmove_clock.saturating_add(1)
    };
    let fullmove_number = match mover {
        Color::Dark => state.fullmove_number.saturating_add(1),
        Color::Light => state.fullmove_number,
    };

    let rights = state.castling_rights & !options.castle_rights_consumed;

    GameState {
        castling_rights: revalidate_castling_rights(&board, rights),
        board,
        side_to_move: mover.opposite(),
        en_passant_square: options.new_ep_target,
        halfmove_clock,
        fullmove_number,
        last_move: Some(LastMove {
            piece: moving,
            captured,
            from,
            to,
        }),
    }
}

/// Keep only rights whose king and rook still stand on their home squares.
///
/// Catches rooks captured in place and rooks or kings that moved in earlier
/// moves without the right being consumed explicitly.
pub fn revalidate_castling_rights(board: &[Piece; 128], rights: CastlingRights) -> CastlingRights {
    CastleMove::ALL
        .into_iter()
        .filter(|castle| rights & castle.right() != 0)
        .filter(|castle| {
            let color = castle.color();
            board[castle.king_from() as usize] == Piece::new(color, PieceKind::King)
                && board[castle.rook_from() as usize] == Piece::new(color, PieceKind::Rook)
        })
        .fold(0, |acc, castle| acc | castle.right())
}

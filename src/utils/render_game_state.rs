//! Terminal-oriented Unicode board renderer.

use crate::game_state::chess_rules::square_at;
use crate::game_state::{chess_types::*, game_state::GameState};

/// Render the board to a Unicode string, rank 8 at the top.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..8u8).rev() {
        let label = char::from(b'1' + rank);
        out.push(label);
        out.push(' ');

        for file in 0..8u8 {
            out.push(piece_to_unicode(game_state.piece_at(square_at(rank, file))));
            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(label);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color(), piece.kind()) {
        (Some(Color::Light), Some(PieceKind::Pawn)) => '♙',
        (Some(Color::Light), Some(PieceKind::Knight)) => '♘',
        (Some(Color::Light), Some(PieceKind::Bishop)) => '♗',
        (Some(Color::Light), Some(PieceKind::Rook)) => '♖',
        (Some(Color::Light), Some(PieceKind::Queen)) => '♕',
        (Some(Color::Light), Some(PieceKind::King)) => '♔',
        (Some(Color::Dark), Some(PieceKind::Pawn)) => '♟',
        (Some(Color::Dark), Some(PieceKind::Knight)) => '♞',
        (Some(Color::Dark), Some(PieceKind::Bishop)) => '♝',
        (Some(Color::Dark), Some(PieceKind::Rook)) => '♜',
        (Some(Color::Dark), Some(PieceKind::Queen)) => '♛',
        (Some(Color::Dark), Some(PieceKind::King)) => '♚',
        _ => '·',
    }
}

//! FEN-to-GameState parser.
//!
//! Accepts the four mandatory fields plus the two optional clock fields.
//! Castling letters whose king or rook is not on its home square are dropped
//! rather than rejected.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{rank_of, square_at};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::revalidate_castling_rights;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    let (board_part, side_part, castling_part, en_passant_part, clocks) = match fields.as_slice() {
        [board, side, castling, ep] => (*board, *side, *castling, *ep, None),
        [board, side, castling, ep, halfmove, fullmove] => {
            (*board, *side, *castling, *ep, Some((*halfmove, *fullmove)))
        }
        _ => {
            return Err(ChessError::InvalidFenForm(format!(
                "expected 4 or 6 fields, found {}",
                fields.len()
            )))
        }
    };

    let mut game_state = GameState::new_empty();
    parse_board(board_part, &mut game_state.board)?;
    game_state.side_to_move = parse_side_to_move(side_part)?;
    game_state.castling_rights =
        revalidate_castling_rights(&game_state.board, parse_castling_rights(castling_part)?);
    game_state.en_passant_square = parse_en_passant_square(en_passant_part, game_state.side_to_move)?;

    if let Some((halfmove_part, fullmove_part)) = clocks {
        game_state.halfmove_clock = parse_clock(halfmove_part)?;
        game_state.fullmove_number = parse_clock(fullmove_part)?;
    }

    Ok(game_state)
}

fn parse_board(board_part: &str, board: &mut [Piece; 128]) -> ChessResult<()> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessError::InvalidFenForm(format!(
            "board layout must contain 8 ranks, found {}",
            ranks.len()
        )));
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - fen_rank_idx as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessError::InvalidFenToken(ch));
                }
                file += empty_count as u8;
            } else {
                let piece = piece_from_fen_char(ch).ok_or(ChessError::InvalidFenToken(ch))?;
                if file < 8 {
                    board[square_at(rank, file) as usize] = piece;
                }
                file += 1;
            }
            if file > 8 {
                break;
            }
        }

        // Overlong ranks stop early with file > 8.
        if file != 8 {
            return Err(ChessError::InvalidFenForm(format!(
                "rank {} does not cover 8 files: {rank_str:?}",
                rank + 1
            )));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(ChessError::InvalidSideToMove(side_part.to_owned())),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    if castling_part == "-" {
        return Ok(0);
    }

    castling_part.chars().try_fold(0, |rights, ch| {
        let right = match ch {
            'K' => CASTLE_LIGHT_KINGSIDE,
            'Q' => CASTLE_LIGHT_QUEENSIDE,
            'k' => CASTLE_DARK_KINGSIDE,
            'q' => CASTLE_DARK_QUEENSIDE,
            _ => return Err(ChessError::InvalidFenToken(ch)),
        };
        Ok(rights | right)
    })
}

/// The target must sit on the rank just behind a pawn that double-pushed last
/// turn: rank 6 when Light is to move, rank 3 when Dark is.
fn parse_en_passant_square(en_passant_part: &str, side_to_move: Color) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }
    let square = algebraic_to_square(en_passant_part)?;
    let expected_rank = match side_to_move {
        Color::Light => 5,
        Color::Dark => 2,
    };
    if rank_of(square) != expected_rank {
        return Err(ChessError::InvalidFenForm(format!(
            "en passant square {en_passant_part} is not on rank {}",
            expected_rank + 1
        )));
    }
    Ok(Some(square))
}

fn parse_clock(text: &str) -> ChessResult<u16> {
    text.parse::<u16>()
        .map_err(|_| ChessError::InvalidClock(text.to_owned()))
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::Light
    } else if ch.is_ascii_lowercase() {
        Color::Dark
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(color, kind))
}

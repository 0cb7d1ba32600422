use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::TransitionOptions;
use crate::move_generation::legal_move_generator::GenerationContext;
use crate::moves::move_key::MoveKey;
use crate::moves::move_vectors::{move_vectors, step};

/// King steps onto safe squares, then castling when not in check.
pub(crate) fn generate_king_moves(ctx: &mut GenerationContext<'_>, square: Square, king: Piece) {
    let mover = ctx.state.side_to_move;
    let consumed = castling_rights_of(mover);

    for &delta in move_vectors(king) {
        let Some(target) = step(square, delta) else {
            continue;
        };
        if ctx.state.piece_at(target).belongs_to(mover) {
            continue;
        }
        if ctx.survey.unsafe_squares.contains(target) {
            continue;
        }
        ctx.push(
            MoveKey::new(square, target),
            TransitionOptions {
                castle_rights_consumed: consumed,
                ..TransitionOptions::default()
            },
        );
    }

    if ctx.survey.check {
        return;
    }
    for castle in [CastleMove::kingside(mover), CastleMove::queenside(mover)] {
        if square == castle.king_from() && castle_is_open(ctx, castle) {
            ctx.push(
                MoveKey::new(castle.king_from(), castle.king_to()),
                TransitionOptions {
                    castle: Some(castle),
                    castle_rights_consumed: consumed,
                    ..TransitionOptions::default()
                },
            );
        }
    }
}

/// Right still held, every square between king and rook empty (b1/b8 included
/// on the queen side), and no square the king stands on or crosses attacked.
fn castle_is_open(ctx: &GenerationContext<'_>, castle: CastleMove) -> bool {
    if ctx.state.castling_rights & castle.right() == 0 {
        return false;
    }

    let (king_from, king_to, rook_from) = (castle.king_from(), castle.king_to(), castle.rook_from());
    if (king_from.min(rook_from) + 1..king_from.max(rook_from))
        .any(|sq| !ctx.state.piece_at(sq).is_empty())
    {
        return false;
    }

    !(king_from.min(king_to)..=king_from.max(king_to))
        .any(|sq| ctx.survey.unsafe_squares.contains(sq))
}

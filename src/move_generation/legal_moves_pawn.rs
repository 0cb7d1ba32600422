use crate::game_state::chess_rules::{file_of, is_promotion_rank, pawn_start_rank, rank_of, square_at};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::exposes_king;
use crate::move_generation::legal_move_apply::TransitionOptions;
use crate::move_generation::legal_move_generator::GenerationContext;
use crate::moves::move_key::MoveKey;
use crate::moves::move_vectors::{is_pawn_push, move_vectors, step};

/// Pushes, double pushes, captures, en passant and promotions for one pawn.
pub(crate) fn generate_pawn_moves(ctx: &mut GenerationContext<'_>, square: Square, pawn: Piece) {
    let state = ctx.state;
    let mover = state.side_to_move;
    let pin_ray = ctx.survey.pin_ray(square);

    for &delta in move_vectors(pawn) {
        let Some(target) = step(square, delta) else {
            continue;
        };
        if pin_ray.is_some_and(|ray| !ray.contains(target)) {
            continue;
        }
        let occupant = state.piece_at(target);
        if occupant.belongs_to(mover) {
            continue;
        }

        if is_pawn_push(delta) {
            if !occupant.is_empty() {
                continue;
            }
            if ctx.survey.resolves_check(target) {
                push_with_promotions(ctx, square, target);
            }
            if rank_of(square) == pawn_start_rank(mover) {
                let double = step(target, delta).filter(|&sq| state.piece_at(sq).is_empty());
                if let Some(double) = double {
                    if ctx.survey.resolves_check(double) {
                        ctx.push(
                            MoveKey::new(square, double),
                            TransitionOptions {
                                new_ep_target: Some(target),
                                ..TransitionOptions::default()
                            },
                        );
                    }
                }
            }
        } else if state.en_passant_square == Some(target) {
            push_en_passant(ctx, square, target, pawn);
        } else if occupant.belongs_to(mover.opposite()) && ctx.survey.resolves_check(target) {
            push_with_promotions(ctx, square, target);
        }
    }
}

fn push_with_promotions(ctx: &mut GenerationContext<'_>, from: Square, to: Square) {
    if !is_promotion_rank(to) {
        ctx.push(MoveKey::new(from, to), TransitionOptions::default());
        return;
    }
    for kind in PieceKind::PROMOTIONS {
        ctx.push(
            MoveKey::promoting(from, to, kind),
            TransitionOptions {
                promotion: Some(kind),
                ..TransitionOptions::default()
            },
        );
    }
}

/// The captured pawn sits beside the capturer, not on `to`. Both leave the
/// capturer's rank at once, which the pin survey cannot see, so the vacated
/// rank is probed for a slider line onto the king.
fn push_en_passant(ctx: &mut GenerationContext<'_>, from: Square, to: Square, pawn: Piece) {
    let captured = square_at(rank_of(from), file_of(to));
    let survey = ctx.survey;
    if survey.check
        && !survey.checking_squares.contains(to)
        && !survey.checking_squares.contains(captured)
    {
        return;
    }

    let probe = ctx
        .state
        .with_piece(from, Piece::EMPTY)
        .with_piece(to, pawn)
        .with_piece(captured, Piece::EMPTY);
    if exposes_king(&probe, captured) {
        return;
    }

    ctx.push(
        MoveKey::new(from, to),
        TransitionOptions {
            ep_capture_square: Some(captured),
            ..TransitionOptions::default()
        },
    );
}

//! Full legal move generation.
//!
//! Two passes over the 64 real squares. The first (`survey_attacks`) records
//! what the opponent attacks, whether the mover is in check, and which mover
//! pieces are pinned. The second walks the mover's own rays and keeps only
//! destinations that survive those constraints, so no candidate is ever
//! applied and then thrown away.

use std::collections::BTreeMap;

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::attack_survey::{survey_attacks, AttackSurvey};
use crate::move_generation::legal_move_apply::{apply_move, TransitionOptions};
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::moves::move_key::MoveKey;
use crate::moves::move_vectors::{board_squares, move_vectors, step};

/// Legal moves keyed by move identity, iterated in key order.
pub type MoveMap = BTreeMap<MoveKey, GameState>;

/// Generated moves plus the check state found while generating them.
#[derive(Debug, Clone, Default)]
pub struct LegalMoves {
    pub moves: MoveMap,
    pub in_check: bool,
}

pub trait MoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> MoveMap;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> MoveMap {
        generate_legal_moves(game_state)
    }
}

/// Every legal move for the side to move, each mapped to its resulting position.
#[inline]
pub fn generate_legal_moves(state: &GameState) -> MoveMap {
    generate_legal_moves_with_status(state).moves
}

pub fn generate_legal_moves_with_status(state: &GameState) -> LegalMoves {
    let survey = survey_attacks(state);
    let mut ctx = GenerationContext {
        state,
        survey: &survey,
        moves: MoveMap::new(),
    };

    let mover = state.side_to_move;
    for square in board_squares() {
        let piece = state.piece_at(square);
        if !piece.belongs_to(mover) {
            continue;
        }
        if survey.double_check && !piece.is(PieceKind::King) {
            continue;
        }

        if piece.is(PieceKind::Pawn) {
            generate_pawn_moves(&mut ctx, square, piece);
        } else if piece.is(PieceKind::King) {
            generate_king_moves(&mut ctx, square, piece);
        } else {
            generate_piece_moves(&mut ctx, square, piece);
        }
    }

    LegalMoves {
        moves: ctx.moves,
        in_check: survey.check,
    }
}

/// Shared state for the per-piece generators.
pub(crate) struct GenerationContext<'a> {
    pub state: &'a GameState,
    pub survey: &'a AttackSurvey,
    pub moves: MoveMap,
}

impl GenerationContext<'_> {
    /// Apply and record one legal move.
    pub fn push(&mut self, key: MoveKey, options: TransitionOptions) {
        let next = apply_move(self.state, key.from, key.to, options);
        self.moves.insert(key, next);
    }
}

/// Knights, bishops, rooks and queens.
fn generate_piece_moves(ctx: &mut GenerationContext<'_>, square: Square, piece: Piece) {
    let mover = ctx.state.side_to_move;
    let pin_ray = ctx.survey.pin_ray(square);

    for &delta in move_vectors(piece) {
        let mut target = square;
        while let Some(next) = step(target, delta) {
            target = next;
            if pin_ray.is_some_and(|ray| !ray.contains(target)) {
                break;
            }
            let occupant = ctx.state.piece_at(target);
            if occupant.belongs_to(mover) {
                break;
            }

            if ctx.survey.resolves_check(target) {
                ctx.push(MoveKey::new(square, target), TransitionOptions::default());
            }

            if !occupant.is_empty() || !piece.is_slider() {
                break;
            }
        }
    }
}

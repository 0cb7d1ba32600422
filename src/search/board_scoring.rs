//! Static evaluation.
//!
//! Scores are always from Light's point of view: positive favors Light,
//! negative favors Dark. Search maximizes on Light's turn and minimizes on
//! Dark's, so no perspective flip happens here.

use crate::game_state::chess_rules::{file_of, piece_value};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_generator::{
    generate_legal_moves, generate_legal_moves_with_status, LegalMoves,
};
use crate::tables::piece_square_tables::pst_value;

/// Base mate magnitude: twice the king's material value.
pub const MATE_SCORE: i32 = 2 * piece_value(PieceKind::King);
pub const DOUBLED_PAWN_PENALTY: i32 = 20;
pub const ISOLATED_PAWN_PENALTY: i32 = 15;
pub const MOBILITY_WEIGHT: i32 = 5;

pub trait BoardScorer {
    /// Light-positive score of `game_state` with `remaining_depth` plies left
    /// in the search that reached it.
    fn evaluate(&self, game_state: &GameState, remaining_depth: u8) -> i32;
}

/// Material, piece-square tables, pawn structure and mobility.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalScorer;

impl BoardScorer for PositionalScorer {
    fn evaluate(&self, game_state: &GameState, remaining_depth: u8) -> i32 {
        evaluate(game_state, remaining_depth)
    }
}

pub fn evaluate(game_state: &GameState, remaining_depth: u8) -> i32 {
    let legal = generate_legal_moves_with_status(game_state);
    evaluate_with_moves(game_state, &legal, remaining_depth)
}

/// Same as [`evaluate`] when the mover's legal moves are already known.
pub fn evaluate_with_moves(game_state: &GameState, legal: &LegalMoves, remaining_depth: u8) -> i32 {
    if legal.moves.is_empty() {
        return terminal_score(game_state.side_to_move(), legal.in_check, remaining_depth);
    }

    material_and_position(game_state) - pawn_structure_penalty(game_state)
        + mobility_term(game_state, legal)
}

/// Score of a position with no legal moves for `side_to_move`.
///
/// Mate is scaled by `remaining_depth`, so shallower mates found higher in
/// the tree outweigh deeper ones. A mate reached with no depth left scores 0.
#[inline]
pub fn terminal_score(side_to_move: Color, in_check: bool, remaining_depth: u8) -> i32 {
    if !in_check {
        return 0;
    }
    -side_to_move.sign() * MATE_SCORE * i32::from(remaining_depth)
}

fn material_and_position(game_state: &GameState) -> i32 {
    game_state
        .pieces()
        .map(|(square, piece)| {
            let sign = piece.color().map_or(0, Color::sign);
            sign * pst_value(piece, square)
        })
        .sum()
}

/// Light's pawn penalties minus Dark's.
fn pawn_structure_penalty(game_state: &GameState) -> i32 {
    let mut pawns_per_file = [[0u8; 8]; 2];
    for (square, piece) in game_state.pieces() {
        if !piece.is(PieceKind::Pawn) {
            continue;
        }
        if let Some(color) = piece.color() {
            pawns_per_file[color.index()][file_of(square) as usize] += 1;
        }
    }

    [Color::Light, Color::Dark]
        .into_iter()
        .map(|color| color.sign() * file_penalties(&pawns_per_file[color.index()]))
        .sum()
}

fn file_penalties(files: &[u8; 8]) -> i32 {
    let mut penalty = 0;
    for file in 0..8 {
        if files[file] == 0 {
            continue;
        }
        if files[file] > 1 {
            penalty += DOUBLED_PAWN_PENALTY;
        }
        let left = file.checked_sub(1).map_or(0, |f| files[f]);
        let right = files.get(file + 1).copied().unwrap_or(0);
        if left == 0 && right == 0 {
            penalty += ISOLATED_PAWN_PENALTY;
        }
    }
    penalty
}

/// Legal move count difference, Light minus Dark. The side not to move is
/// counted on a copy with the turn handed over and no en-passant target.
/// When the mover is in check that copy could take the king; those captures
/// are not counted.
fn mobility_term(game_state: &GameState, legal: &LegalMoves) -> i32 {
    let mover = game_state.side_to_move();
    let mover_king = game_state.king_square(mover);
    let flipped = game_state
        .with_side_to_move(mover.opposite())
        .with_en_passant_square(None);
    let mover_count = legal.moves.len() as i32;
    let other_count = generate_legal_moves(&flipped)
        .keys()
        .filter(|key| Some(key.to) != mover_king)
        .count() as i32;
    mover.sign() * (mover_count - other_count) * MOBILITY_WEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(fen: &str) -> GameState {
        GameState::from_fen(fen).expect("test FEN should parse")
    }

    #[test]
    fn start_position_is_balanced() {
        assert_eq!(evaluate(&GameState::new_game(), 0), 0);
        assert_eq!(PositionalScorer.evaluate(&GameState::new_game(), 3), 0);
    }

    #[test]
    fn extra_queen_favors_its_owner_regardless_of_turn() {
        let light = game("4k3/8/8/8/8/8/8/3QK3 w - - 0 1");
        let dark = game("3qk3/8/8/8/8/8/8/4K3 b - - 0 1");
        assert!(evaluate(&light, 0) > 800);
        assert!(evaluate(&dark, 0) < -800);
        assert!(evaluate(&light.with_side_to_move(Color::Dark), 0) > 800);
    }

    #[test]
    fn mate_sign_and_magnitude() {
        // Back-rank mate against Dark.
        let dark_mated = game("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1");
        assert_eq!(evaluate(&dark_mated, 0), 0);
        assert_eq!(evaluate(&dark_mated, 1), MATE_SCORE);
        assert_eq!(evaluate(&dark_mated, 2), 2 * MATE_SCORE);

        // Fool's mate against Light.
        let light_mated = game("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
        assert_eq!(evaluate(&light_mated, 1), -MATE_SCORE);
        assert_eq!(evaluate(&light_mated, 3), -3 * MATE_SCORE);
    }

    #[test]
    fn stalemate_is_exactly_zero() {
        let stalemate = game("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
        assert_eq!(evaluate(&stalemate, 0), 0);
        assert_eq!(evaluate(&stalemate, 5), 0);
    }

    #[test]
    fn terminal_score_without_check_is_zero() {
        assert_eq!(terminal_score(Color::Light, false, 4), 0);
        assert_eq!(terminal_score(Color::Light, true, 0), 0);
        assert_eq!(terminal_score(Color::Light, true, 1), -MATE_SCORE);
        assert_eq!(terminal_score(Color::Dark, true, 1), MATE_SCORE);
        assert_eq!(terminal_score(Color::Dark, true, 4), 4 * MATE_SCORE);
    }

    #[test]
    fn doubled_and_isolated_pawns_are_penalized() {
        // Light: a single e-pawn, isolated. Dark: none.
        let single = game("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1");
        assert_eq!(pawn_structure_penalty(&single), ISOLATED_PAWN_PENALTY);

        // Light: doubled and isolated on e. Dark: connected d/e pawns.
        let doubled = game("4k3/3pp3/8/8/8/4P3/4P3/4K3 w - - 0 1");
        assert_eq!(
            pawn_structure_penalty(&doubled),
            DOUBLED_PAWN_PENALTY + ISOLATED_PAWN_PENALTY
        );

        // Dark penalties count in Light's favor.
        let dark_isolated = game("4k3/p7/8/8/8/8/1PP5/4K3 w - - 0 1");
        assert_eq!(pawn_structure_penalty(&dark_isolated), -ISOLATED_PAWN_PENALTY);
    }

    #[test]
    fn mobility_counts_both_sides() {
        // Kings only, mirrored: equal mobility, equal material.
        let kings = game("4k3/8/8/8/8/8/8/4K3 w - - 0 1");
        assert_eq!(evaluate(&kings, 0), 0);

        // Same material, Light rook on an open file versus a boxed-in corner.
        let open = game("4k3/8/8/8/3R4/8/8/4K3 w - - 0 1");
        let boxed = game("4k3/8/8/8/8/8/PP6/RK6 w - - 0 1");
        let legal_open = generate_legal_moves_with_status(&open);
        let legal_boxed = generate_legal_moves_with_status(&boxed);
        assert!(mobility_term(&open, &legal_open) > mobility_term(&boxed, &legal_boxed));
    }

    #[test]
    fn mobility_ignores_king_captures_while_in_check() {
        // Light is checked along the first rank and can only step up to d2, e2 or f2.
        // Dark has five king moves and ten rook moves once Rxe1 is left out.
        let checked = game("4k3/8/8/8/8/8/8/r3K3 w - - 0 1");
        let legal = generate_legal_moves_with_status(&checked);
        assert!(legal.in_check);
        assert_eq!(legal.moves.len(), 3);
        assert_eq!(mobility_term(&checked, &legal), (3 - 15) * MOBILITY_WEIGHT);
    }
}

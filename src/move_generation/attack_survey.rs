//! First generator pass: what the opponent attacks, checks and pins.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_vectors::{board_squares, is_pawn_push, move_vectors, step, SquareSet};

/// Check and pin metadata for the side to move.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttackSurvey {
    /// Squares the mover's king may not step onto or castle through.
    pub unsafe_squares: SquareSet,
    /// Attacker square plus the squares between it and the king (single check only).
    pub checking_squares: SquareSet,
    /// Pinned square and the squares it may still move to.
    pub pins: Vec<(Square, SquareSet)>,
    pub check: bool,
    pub double_check: bool,
}

impl AttackSurvey {
    /// Allowed destinations for a pinned piece on `square`, or `None` if unpinned.
    pub fn pin_ray(&self, square: Square) -> Option<SquareSet> {
        self.pins
            .iter()
            .find(|(pinned, _)| *pinned == square)
            .map(|(_, ray)| *ray)
    }

    /// Whether a non-king move landing on `square` answers the current check.
    #[inline]
    pub fn resolves_check(&self, square: Square) -> bool {
        !self.check || self.checking_squares.contains(square)
    }
}

/// Walk every ray of every enemy piece, recording unsafe squares, checks and pins.
pub fn survey_attacks(state: &GameState) -> AttackSurvey {
    let mover = state.side_to_move;
    let enemy = mover.opposite();
    let mut survey = AttackSurvey::default();

    for square in board_squares() {
        let piece = state.piece_at(square);
        if !piece.belongs_to(enemy) {
            continue;
        }

        for &delta in move_vectors(piece) {
            if piece.is(PieceKind::Pawn) && is_pawn_push(delta) {
                continue;
            }
            walk_attack_ray(state, &mut survey, square, piece, delta);
        }
    }

    survey
}

fn walk_attack_ray(
    state: &GameState,
    survey: &mut AttackSurvey,
    origin: Square,
    attacker: Piece,
    delta: i8,
) {
    let mover = state.side_to_move;
    let mut ray = SquareSet::EMPTY;
    ray.insert(origin);
    let mut possible_pin: Option<Square> = None;
    let mut target = origin;

    while let Some(next) = step(target, delta) {
        target = next;
        let occupant = state.piece_at(target);

        // A defended attacker-side piece: the king cannot take it.
        if occupant.belongs_to(mover.opposite()) {
            if possible_pin.is_none() {
                survey.unsafe_squares.insert(target);
            }
            break;
        }

        if occupant.belongs_to(mover) {
            if occupant.is(PieceKind::King) {
                if let Some(pinned) = possible_pin {
                    survey.pins.push((pinned, ray));
                    break;
                }
                ray.insert(target);
                if survey.check {
                    survey.double_check = true;
                } else {
                    survey.check = true;
                    survey.checking_squares = ray;
                }
            } else {
                if possible_pin.is_some() {
                    break;
                }
                ray.insert(target);
                possible_pin = Some(target);
            }
        } else {
            ray.insert(target);
        }

        // Squares behind a checked king stay unsafe; squares behind a blocker do not.
        if possible_pin.is_none() {
            survey.unsafe_squares.insert(target);
        }

        if !attacker.is_slider() {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn survey(fen: &str) -> AttackSurvey {
        survey_attacks(&GameState::from_fen(fen).expect("test FEN should parse"))
    }

    #[test]
    fn start_position_has_no_checks_or_pins() {
        let s = survey(crate::game_state::chess_rules::STARTING_POSITION_FEN);
        assert!(!s.check);
        assert!(s.pins.is_empty());
        // Dark pawns cover the sixth rank; nothing reaches the third.
        assert!(s.unsafe_squares.contains(0x50));
        assert!(!s.unsafe_squares.contains(0x20));
    }

    #[test]
    fn rook_check_marks_line_and_square_behind_king() {
        // Rook e8 checks king e4 down the file.
        let s = survey("4r2k/8/8/8/4K3/8/8/8 w - - 0 1");
        assert!(s.check);
        assert!(!s.double_check);
        for sq in [0x74, 0x64, 0x54, 0x44, 0x34] {
            assert!(s.checking_squares.contains(sq));
        }
        assert!(s.unsafe_squares.contains(0x24));
        assert!(!s.unsafe_squares.contains(0x33));
    }

    #[test]
    fn bishop_pins_knight_to_king() {
        // Bishop b4, knight c3, king d2 on one diagonal.
        let s = survey("4k3/8/8/8/1b6/2N5/3K4/8 w - - 0 1");
        let ray = s.pin_ray(0x22).expect("knight should be pinned");
        assert!(ray.contains(0x31));
        assert!(ray.contains(0x22));
        assert!(!ray.contains(0x13));
        assert!(!s.check);
        // Past the pinned knight nothing is unsafe along that diagonal.
        assert!(!s.unsafe_squares.contains(0x13));
    }

    #[test]
    fn knight_and_rook_give_double_check() {
        let s = survey("4r2k/8/8/8/8/3n4/8/4K3 w - - 0 1");
        assert!(s.check);
        assert!(s.double_check);
    }

    #[test]
    fn defended_piece_is_unsafe_for_the_king() {
        // Dark rook d8 defends the pawn on d5.
        let s = survey("3r3k/8/8/3p4/8/8/8/K7 w - - 0 1");
        assert!(s.unsafe_squares.contains(0x43));
    }
}

//! Performance test: count leaf positions of the legal move tree.
//!
//! The only consumer of these functions is correctness checking of the
//! generator against published node counts, so they call nothing but
//! `MoveGenerator` and the move-text codec.

use tracing::debug;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::file_of;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_generator::{LegalMoveGenerator, MoveGenerator};
use crate::moves::move_key::MoveKey;
use crate::utils::long_algebraic::{move_to_text, parse_move_strict};

/// Leaf statistics in the layout of the usual perft tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Number of leaf positions `depth` plies below `state`.
pub fn perft<G: MoveGenerator>(generator: &G, state: &GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = generator.generate_legal_moves(state);
    if depth == 1 {
        return moves.len() as u64;
    }
    moves
        .values()
        .map(|child| perft(generator, child, depth - 1))
        .sum()
}

/// Like [`perft`] but classifying every leaf move.
pub fn perft_counts<G: MoveGenerator>(generator: &G, state: &GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for (key, child) in generator.generate_legal_moves(state) {
        if depth == 1 {
            total.merge(classify_leaf(generator, state, &key, &child));
        } else {
            total.merge(perft_counts(generator, &child, depth - 1));
        }
    }
    total
}

fn classify_leaf<G: MoveGenerator>(
    generator: &G,
    parent: &GameState,
    key: &MoveKey,
    child: &GameState,
) -> PerftCounts {
    let mut counts = PerftCounts {
        nodes: 1,
        ..PerftCounts::default()
    };
    let Some(last) = child.last_move() else {
        return counts;
    };

    let is_pawn = last.piece.is(PieceKind::Pawn);
    if !last.captured.is_empty() {
        counts.captures += 1;
        if is_pawn && parent.piece_at(key.to).is_empty() {
            counts.en_passant += 1;
        }
    }
    if last.piece.is(PieceKind::King) && file_of(key.from).abs_diff(file_of(key.to)) == 2 {
        counts.castles += 1;
    }
    if key.promotion.is_some() {
        counts.promotions += 1;
    }
    if child.in_check() {
        counts.checks += 1;
        if generator.generate_legal_moves(child).is_empty() {
            counts.checkmates += 1;
        }
    }
    counts
}

/// Per-root-move leaf counts, sorted by move text.
pub fn perft_divide(state: &GameState, depth: u8) -> Vec<(String, u64)> {
    if depth == 0 {
        return Vec::new();
    }
    let generator = LegalMoveGenerator;
    let mut lines: Vec<(String, u64)> = generator
        .generate_legal_moves(state)
        .iter()
        .map(|(key, child)| {
            let count = perft(&generator, child, depth - 1);
            let text = move_to_text(key);
            debug!(target: "perft", "{text} {count}");
            (text, count)
        })
        .collect();
    lines.sort();
    lines
}

/// Play `moves` from `fen`, then divide at `depth`.
///
/// Every move must be legal in the position reached so far; the first one
/// that is not aborts with [`ChessError::IllegalMove`].
pub fn perft_from_moves<S: AsRef<str>>(
    fen: &str,
    depth: u8,
    moves: &[S],
) -> ChessResult<Vec<(String, u64)>> {
    let mut state = GameState::from_fen(fen)?;
    for text in moves {
        let key = parse_move_strict(text.as_ref())?;
        state = LegalMoveGenerator
            .generate_legal_moves(&state)
            .remove(&key)
            .ok_or(ChessError::IllegalMove(key))?;
    }
    Ok(perft_divide(&state, depth))
}

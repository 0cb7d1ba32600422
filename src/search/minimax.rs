//! Fixed-depth alpha-beta minimax.
//!
//! Light maximizes and Dark minimizes the Light-positive evaluation. The
//! recursion depth equals the requested search depth, which is capped at
//! [`MAX_SEARCH_DEPTH`].

use tracing::{debug, info, warn};

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_generator::generate_legal_moves_with_status;
use crate::moves::move_key::MoveKey;
use crate::search::board_scoring::{terminal_score, BoardScorer, PositionalScorer};
use crate::search::move_ordering::order_moves;
use crate::utils::long_algebraic::move_to_text;

/// Deepest search accepted; larger requests are clamped.
pub const MAX_SEARCH_DEPTH: u8 = 16;
pub const DEFAULT_SEARCH_DEPTH: u8 = 4;

const INFINITY: i32 = i32::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_SEARCH_DEPTH,
        }
    }
}

impl SearchConfig {
    pub fn new(depth: u8) -> Self {
        Self { depth }
    }

    /// Requested depth limited to `1..=MAX_SEARCH_DEPTH`.
    pub fn effective_depth(&self) -> u8 {
        let clamped = self.depth.clamp(1, MAX_SEARCH_DEPTH);
        if clamped != self.depth {
            warn!(
                requested = self.depth,
                used = clamped,
                "search depth outside 1..={MAX_SEARCH_DEPTH}, clamping"
            );
        }
        clamped
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// `None` when the root has no legal move (mate or stalemate).
    pub best_move: Option<MoveKey>,
    pub best_state: Option<GameState>,
    /// Light-positive score of the chosen line.
    pub score: i32,
    /// Positions visited, root included.
    pub nodes: u64,
    pub depth: u8,
}

/// Best move for the side to move using the positional evaluator.
pub fn search(state: &GameState, depth: u8) -> SearchResult {
    search_with(&PositionalScorer, state, SearchConfig::new(depth))
}

pub fn search_with<S: BoardScorer>(scorer: &S, state: &GameState, config: SearchConfig) -> SearchResult {
    let depth = config.effective_depth();
    let mut nodes = 1u64;
    let legal = generate_legal_moves_with_status(state);

    if legal.moves.is_empty() {
        let score = terminal_score(state.side_to_move(), legal.in_check, depth);
        info!(depth, score, in_check = legal.in_check, "no legal moves at root");
        return SearchResult {
            best_move: None,
            best_state: None,
            score,
            nodes,
            depth,
        };
    }

    let maximizing = state.side_to_move() == Color::Light;
    let (mut alpha, mut beta) = (-INFINITY, INFINITY);
    let mut best: Option<(MoveKey, &GameState, i32)> = None;

    for (key, child) in order_moves(&legal.moves) {
        let score = alpha_beta(scorer, child, depth - 1, alpha, beta, &mut nodes);
        debug!(target: "search", "root {} score {score}", move_to_text(&key));

        let improves = match best {
            None => true,
            Some((_, _, best_score)) if maximizing => score > best_score,
            Some((_, _, best_score)) => score < best_score,
        };
        if improves {
            best = Some((key, child, score));
        }
        if maximizing {
            alpha = alpha.max(score);
        } else {
            beta = beta.min(score);
        }
    }

    let (best_move, best_state, score) = match best {
        Some((key, child, score)) => (Some(key), Some(child.clone()), score),
        None => (None, None, 0),
    };
    info!(
        depth,
        nodes,
        score,
        best = %best_move.as_ref().map_or_else(|| "none".to_owned(), move_to_text),
        "search finished"
    );

    SearchResult {
        best_move,
        best_state,
        score,
        nodes,
        depth,
    }
}

fn alpha_beta<S: BoardScorer>(
    scorer: &S,
    state: &GameState,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;
    if depth == 0 {
        return scorer.evaluate(state, 0);
    }

    let legal = generate_legal_moves_with_status(state);
    if legal.moves.is_empty() {
        return terminal_score(state.side_to_move(), legal.in_check, depth);
    }

    if state.side_to_move() == Color::Light {
        let mut value = -INFINITY;
        for (_, child) in order_moves(&legal.moves) {
            value = value.max(alpha_beta(scorer, child, depth - 1, alpha, beta, nodes));
            alpha = alpha.max(value);
            if alpha >= beta {
                break;
            }
        }
        value
    } else {
        let mut value = INFINITY;
        for (_, child) in order_moves(&legal.moves) {
            value = value.min(alpha_beta(scorer, child, depth - 1, alpha, beta, nodes));
            beta = beta.min(value);
            if beta <= alpha {
                break;
            }
        }
        value
    }
}

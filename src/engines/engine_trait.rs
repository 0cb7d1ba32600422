//! Engine abstraction used by the play loop.
//!
//! Each strategy receives a position plus search parameters and answers with
//! the move it picked, the resulting position and a few human-readable lines
//! describing how it got there.

use crate::chess_errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::moves::move_key::MoveKey;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GoParams {
    /// Search depth in plies; engines fall back to their own default when `None`.
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineOutput {
    /// `None` when the side to move has no legal move.
    pub best_move: Option<MoveKey>,
    pub next_state: Option<GameState>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(&mut self, game_state: &GameState, params: &GoParams) -> ChessResult<EngineOutput>;
}

//! Fixed-depth alpha-beta engine.

use crate::chess_errors::ChessResult;
use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::game_state::GameState;
use crate::search::board_scoring::PositionalScorer;
use crate::search::minimax::{search_with, SearchConfig};
use crate::utils::long_algebraic::move_to_text;

#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    config: SearchConfig,
}

impl MinimaxEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn with_depth(depth: u8) -> Self {
        Self::new(SearchConfig::new(depth))
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "Chessy Minimax"
    }

    fn choose_move(&mut self, game_state: &GameState, params: &GoParams) -> ChessResult<EngineOutput> {
        let config = params.depth.map_or(self.config, SearchConfig::new);
        let result = search_with(&PositionalScorer, game_state, config);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info depth {} nodes {} score cp {}",
            result.depth, result.nodes, result.score
        ));
        if let Some(key) = result.best_move {
            out.info_lines.push(format!("info pv {}", move_to_text(&key)));
        }
        out.best_move = result.best_move;
        out.next_state = result.best_state;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::long_algebraic::parse_move;

    #[test]
    fn engine_reports_search_and_mate_move() {
        let state = GameState::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").expect("FEN");
        let mut engine = MinimaxEngine::with_depth(2);
        let out = engine
            .choose_move(&state, &GoParams::default())
            .expect("search never fails");
        assert_eq!(out.best_move, Some(parse_move("a1a8")));
        assert!(out.next_state.is_some());
        assert!(out.info_lines[0].starts_with("info depth 2 nodes "));
        assert_eq!(out.info_lines[1], "info pv a1a8");
    }

    #[test]
    fn params_depth_overrides_default() {
        let mut engine = MinimaxEngine::default();
        let out = engine
            .choose_move(&GameState::new_game(), &GoParams { depth: Some(1) })
            .expect("search never fails");
        assert!(out.info_lines[0].starts_with("info depth 1 "));
    }

    #[test]
    fn no_move_when_mated() {
        let state = GameState::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").expect("FEN");
        let out = MinimaxEngine::with_depth(2)
            .choose_move(&state, &GoParams::default())
            .expect("search never fails");
        assert!(out.best_move.is_none());
        assert!(out.next_state.is_none());
    }
}

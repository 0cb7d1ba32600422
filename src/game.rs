//! A game in progress: current position, move history and result.

use chrono::{Local, NaiveDate};

use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_generator::{generate_legal_moves_with_status, MoveMap};
use crate::moves::move_key::MoveKey;
use crate::utils::long_algebraic::parse_move_strict;
use crate::utils::pgn::{standard_headers, write_pgn_with_headers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
}

impl GameOutcome {
    /// PGN result token.
    pub fn result_token(self) -> &'static str {
        match self {
            GameOutcome::Ongoing => "*",
            GameOutcome::Checkmate {
                winner: Color::Light,
            } => "1-0",
            GameOutcome::Checkmate {
                winner: Color::Dark,
            } => "0-1",
            GameOutcome::Stalemate => "1/2-1/2",
        }
    }
}

#[derive(Debug, Clone)]
pub struct GameSession {
    initial_state: GameState,
    current: GameState,
    moves: Vec<MoveKey>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameState::new_game())
    }
}

impl GameSession {
    pub fn new(initial_state: GameState) -> Self {
        Self {
            current: initial_state.clone(),
            initial_state,
            moves: Vec::new(),
        }
    }

    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        Ok(Self::new(GameState::from_fen(fen)?))
    }

    pub fn current(&self) -> &GameState {
        &self.current
    }

    pub fn moves(&self) -> &[MoveKey] {
        &self.moves
    }

    pub fn legal_moves(&self) -> MoveMap {
        generate_legal_moves_with_status(&self.current).moves
    }

    /// Play `key` if it is legal in the current position.
    pub fn play_move(&mut self, key: MoveKey) -> ChessResult<&GameState> {
        let next = self
            .legal_moves()
            .remove(&key)
            .ok_or(ChessError::IllegalMove(key))?;
        self.current = next;
        self.moves.push(key);
        Ok(&self.current)
    }

    /// Parse coordinate text such as `e7e8q` and play it.
    pub fn play_text(&mut self, text: &str) -> ChessResult<&GameState> {
        let key = parse_move_strict(text)?;
        self.play_move(key)
    }

    /// Let `engine` pick and play the next move.
    pub fn play_engine<E: Engine + ?Sized>(
        &mut self,
        engine: &mut E,
        params: &GoParams,
    ) -> ChessResult<EngineOutput> {
        let output = engine.choose_move(&self.current, params)?;
        let key = output.best_move.ok_or(ChessError::NoLegalMoves)?;
        self.play_move(key)?;
        Ok(output)
    }

    pub fn outcome(&self) -> GameOutcome {
        let legal = generate_legal_moves_with_status(&self.current);
        if !legal.moves.is_empty() {
            GameOutcome::Ongoing
        } else if legal.in_check {
            GameOutcome::Checkmate {
                winner: self.current.side_to_move().opposite(),
            }
        } else {
            GameOutcome::Stalemate
        }
    }

    /// PGN record dated today.
    pub fn to_pgn(&self, white: &str, black: &str) -> String {
        self.to_pgn_dated(white, black, Local::now().date_naive())
    }

    pub fn to_pgn_dated(&self, white: &str, black: &str, date: NaiveDate) -> String {
        let result = self.outcome().result_token();
        let headers = standard_headers(&self.initial_state, white, black, result, date);
        write_pgn_with_headers(&self.initial_state, &self.moves, &headers)
    }
}

//! Crate root module declarations for the chessy engine.
//!
//! Exposes the board model, legal move generation, evaluation and search,
//! the engines built on them, and the notation helpers, so binaries, tests
//! and benchmarks can import stable module paths.

pub mod chess_errors;
pub mod game;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod moves {
    pub mod move_key;
    pub mod move_vectors;
}

pub mod move_generation {
    pub mod attack_survey;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_moves_king;
    pub mod legal_moves_pawn;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
    pub mod move_ordering;
}

pub mod tables {
    pub mod piece_square_tables;
}

pub mod engines {
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod pgn;
    pub mod render_game_state;
}

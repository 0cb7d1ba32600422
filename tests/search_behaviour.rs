use chessy::engines::engine_minimax::MinimaxEngine;
use chessy::engines::engine_trait::{Engine, GoParams};
use chessy::game::{GameOutcome, GameSession};
use chessy::game_state::chess_types::Color;
use chessy::game_state::game_state::GameState;
use chessy::move_generation::legal_move_generator::generate_legal_moves;
use chessy::search::board_scoring::{evaluate, MATE_SCORE};
use chessy::search::minimax::search;
use chessy::utils::long_algebraic::parse_move;

fn game(fen: &str) -> GameState {
    GameState::from_fen(fen).expect("test FEN should parse")
}

#[test]
fn terminal_positions_score_without_a_move() {
    let mated = game("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
    assert_eq!(evaluate(&mated, 0), 0);
    assert_eq!(evaluate(&mated, 1), -MATE_SCORE);
    let result = search(&mated, 2);
    assert_eq!(result.best_move, None);
    assert_eq!(result.score, -2 * MATE_SCORE);

    let stalemate = game("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    assert_eq!(evaluate(&stalemate, 0), 0);
    assert_eq!(search(&stalemate, 4).score, 0);
}

#[test]
fn finds_back_rank_mate_at_several_depths() {
    let state = game("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1");
    for depth in 2..=4 {
        let result = search(&state, depth);
        assert_eq!(result.best_move, Some(parse_move("a1a8")), "depth {depth}");
        assert_eq!(result.score, i32::from(depth - 1) * MATE_SCORE);
    }
}

#[test]
fn dark_defends_against_immediate_mate() {
    // Dark has no flight square and must stop a1a8 mate.
    let state = game("6k1/5ppp/8/8/8/8/5PPP/R5K1 b - - 0 1");
    let result = search(&state, 3);
    let key = result.best_move.expect("Dark has moves");
    let child = generate_legal_moves(&state)
        .remove(&key)
        .expect("best move must be legal");
    assert!(!generate_legal_moves(&child)
        .into_iter()
        .any(|(_, reply)| generate_legal_moves(&reply).is_empty() && reply.in_check()));
}

#[test]
fn repeated_searches_agree() {
    let state = game("r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4");
    let first = search(&state, 3);
    assert_eq!(first, search(&state, 3));
    assert!(first.best_move.is_some());
}

#[test]
fn minimax_engine_plays_mate_through_session() {
    let mut session = GameSession::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").expect("FEN");
    let mut engine = MinimaxEngine::with_depth(2);
    let output = session
        .play_engine(&mut engine, &GoParams::default())
        .expect("engine finds a move");
    assert_eq!(output.best_move, Some(parse_move("a1a8")));
    assert!(output.info_lines.iter().any(|line| line.starts_with("info depth 2")));
    assert_eq!(
        session.outcome(),
        GameOutcome::Checkmate {
            winner: Color::Light
        }
    );
    assert_eq!(engine.name(), "Chessy Minimax");
}

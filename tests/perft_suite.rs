use chessy::game_state::chess_rules::STARTING_POSITION_FEN;
use chessy::game_state::game_state::GameState;
use chessy::move_generation::legal_move_generator::LegalMoveGenerator;
use chessy::move_generation::perft::{perft, perft_counts, perft_divide, PerftCounts};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
const POSITION_3: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
const POSITION_4: &str = "r2q1rk1/pP1p2pp/Q4n2/bbp1p3/Np6/1B3NBn/pPPP1PPP/R3K2R b KQ - 0 1";
const POSITION_5: &str = "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8";

fn assert_node_counts(fen: &str, expected: &[u64]) {
    let game = GameState::from_fen(fen).expect("perft FEN should parse");
    for (idx, nodes) in expected.iter().enumerate() {
        let depth = (idx + 1) as u8;
        assert_eq!(
            perft(&LegalMoveGenerator, &game, depth),
            *nodes,
            "{fen} at depth {depth}"
        );
    }
}

#[test]
fn starting_position_node_counts() {
    assert_node_counts(STARTING_POSITION_FEN, &[20, 400, 8902, 197_281]);
}

#[test]
fn kiwipete_node_counts() {
    assert_node_counts(KIWIPETE, &[48, 2039]);
}

#[test]
fn endgame_with_en_passant_pins_node_counts() {
    assert_node_counts(POSITION_3, &[14, 191, 2812]);
}

#[test]
fn promotion_heavy_position_node_counts() {
    assert_node_counts(POSITION_4, &[6, 264, 9467]);
}

#[test]
fn position_5_node_counts() {
    assert_node_counts(POSITION_5, &[44, 1486]);
}

#[test]
fn starting_position_leaf_statistics() {
    let game = GameState::new_game();
    assert_eq!(
        perft_counts(&LegalMoveGenerator, &game, 3),
        PerftCounts {
            nodes: 8902,
            captures: 34,
            en_passant: 0,
            castles: 0,
            promotions: 0,
            checks: 12,
            checkmates: 0,
        }
    );
}

#[test]
fn kiwipete_leaf_statistics() {
    let game = GameState::from_fen(KIWIPETE).expect("FEN");
    assert_eq!(
        perft_counts(&LegalMoveGenerator, &game, 2),
        PerftCounts {
            nodes: 2039,
            captures: 351,
            en_passant: 1,
            castles: 91,
            promotions: 0,
            checks: 3,
            checkmates: 0,
        }
    );
}

#[test]
fn divide_sums_to_total() {
    let game = GameState::from_fen(KIWIPETE).expect("FEN");
    let divide = perft_divide(&game, 2);
    assert_eq!(divide.len(), 48);
    assert!(divide.windows(2).all(|pair| pair[0].0 < pair[1].0));
    assert!(divide.iter().any(|(text, _)| text == "e1g1"));
    assert!(divide.iter().any(|(text, _)| text == "e1c1"));
    assert_eq!(divide.iter().map(|(_, n)| n).sum::<u64>(), 2039);
}

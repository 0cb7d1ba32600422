use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use chessy::game_state::game_state::GameState;
use chessy::move_generation::legal_move_generator::generate_legal_moves;
use chessy::search::minimax::search;
use chessy::utils::long_algebraic::parse_move;

struct SearchCase {
    name: &'static str,
    fen: &'static str,
    depth: u8,
    /// Move the search must return, when the position has a forced answer.
    expected_move: Option<&'static str>,
}

const CASES: &[SearchCase] = &[
    SearchCase {
        name: "startpos",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        depth: 3,
        expected_move: None,
    },
    SearchCase {
        name: "italian",
        fen: "r1bqk1nr/pppp1ppp/2n5/2b1p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4",
        depth: 3,
        expected_move: None,
    },
    SearchCase {
        name: "back_rank_mate",
        fen: "6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1",
        depth: 3,
        expected_move: Some("a1a8"),
    },
];

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(5));
    group.sample_size(10);

    for case in CASES {
        let game = GameState::from_fen(case.fen).expect("benchmark FEN should parse");

        // Correctness guard before benchmarking.
        let warmup = search(&game, case.depth);
        let best = warmup.best_move.expect("benchmark positions have legal moves");
        assert!(generate_legal_moves(&game).contains_key(&best));
        if let Some(expected) = case.expected_move {
            assert_eq!(best, parse_move(expected), "wrong move for {}", case.name);
        }

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_d{}", case.name, case.depth)),
            &case.depth,
            |b, &depth| {
                b.iter(|| {
                    let result = search(black_box(&game), black_box(depth));
                    assert_eq!(result.best_move, Some(best));
                    black_box(result.nodes)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(search_benches, bench_search);
criterion_main!(search_benches);

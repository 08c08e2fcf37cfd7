use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use greedy_chess::engines::engine_greedy::GreedyEngine;
use greedy_chess::game_state::chess_types::{Color, GameState};
use greedy_chess::move_generation::candidate_moves::all_candidate_moves;
use greedy_chess::move_generation::legal_move_checks::is_king_in_check;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    fen: &'static str,
    expected_white_candidates: Option<usize>,
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "startpos",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w",
        expected_white_candidates: Some(20),
    },
    BenchCase {
        name: "middlegame",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w",
        expected_white_candidates: None,
    },
];

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy_search");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));
    group.sample_size(30);

    for case in CASES {
        let game = GameState::from_fen(case.fen).expect("benchmark FEN should parse");

        // Correctness guard before benchmarking.
        if let Some(expected) = case.expected_white_candidates {
            assert_eq!(
                all_candidate_moves(&game, Color::White).len(),
                expected,
                "candidate count mismatch for {}",
                case.name
            );
        }

        group.bench_with_input(
            BenchmarkId::new("candidates", case.name),
            &game,
            |b, game| b.iter(|| black_box(all_candidate_moves(black_box(game), Color::White).len())),
        );

        group.bench_with_input(BenchmarkId::new("in_check", case.name), &game, |b, game| {
            b.iter(|| black_box(is_king_in_check(black_box(game), Color::White)))
        });

        group.bench_with_input(BenchmarkId::new("find_move", case.name), &game, |b, game| {
            let mut engine = GreedyEngine::from_seed(Some(1));
            let mut state = game.clone();
            b.iter(|| {
                let out = engine
                    .find_move(black_box(&mut state), Color::Black)
                    .expect("greedy search should run");
                black_box(out.best_move)
            });
        });
    }

    group.finish();
}

criterion_group!(search_benches, bench_search);
criterion_main!(search_benches);

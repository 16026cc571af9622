//! Benchmarks for Amazons engine performance.

use std::sync::atomic::AtomicBool;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use amazons_engine::board::{search, Board, SearchConfig, SearchState, Square};

/// A position a few moves into the game, with spears scattered around.
fn middlegame() -> Board {
    let mut board = Board::new();
    for text in [
        "d1-d7(g7)",
        "a7-c7(c2)",
        "g1-g4(d1)",
        "j7-h7(h2)",
        "a4-b5(b9)",
        "d10-e9(e3)",
    ] {
        if let Ok(mv) = board.parse_move(text) {
            board.make_move(mv);
        }
    }
    board
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    let mut board = Board::new();
    for depth in 1..=2 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| board.perft(black_box(depth)))
        });
    }

    let mut middle = middlegame();
    for depth in 1..=2 {
        group.bench_with_input(BenchmarkId::new("middlegame", depth), &depth, |b, &depth| {
            b.iter(|| middle.perft(black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let startpos = Board::new();
    group.bench_function("startpos", |b| {
        b.iter(|| black_box(startpos.legal_moves().count()))
    });

    let middle = middlegame();
    group.bench_function("middlegame", |b| {
        b.iter(|| black_box(middle.legal_moves().count()))
    });

    let from = Square::sq(3, 0);
    group.bench_function("reachable_from", |b| {
        b.iter(|| black_box(startpos.reachable_from(black_box(from), None).count()))
    });

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10); // Fewer samples for slower benchmarks

    let stop = AtomicBool::new(false);

    group.bench_with_input(BenchmarkId::new("startpos", 1), &1, |b, &depth| {
        b.iter(|| {
            let mut board = Board::new();
            let mut state = SearchState::new();
            search(&mut board, &mut state, SearchConfig::depth(depth), &stop)
        })
    });

    // Depth 2 from the start is far too wide; cap it by nodes instead.
    group.bench_with_input(BenchmarkId::new("middlegame", 2), &2, |b, &depth| {
        b.iter(|| {
            let mut board = middlegame();
            let mut state = SearchState::new();
            let config = SearchConfig::depth(depth).with_nodes(50_000);
            search(&mut board, &mut state, config, &stop)
        })
    });

    group.finish();
}

fn bench_eval(c: &mut Criterion) {
    let mut group = c.benchmark_group("eval");

    let positions = [("startpos", Board::new()), ("middlegame", middlegame())];
    for (name, board) in positions {
        group.bench_with_input(BenchmarkId::new("position", name), &board, |b, board| {
            b.iter(|| black_box(board.evaluate()))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_perft,
    bench_movegen,
    bench_search,
    bench_eval
);
criterion_main!(benches);

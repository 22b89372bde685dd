//! Benchmarks for table construction, move generation and apply/undo.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_position::board::{AttackTables, Color, ColoredPiece, Piece, Position, Square};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

fn bench_tables(c: &mut Criterion) {
    let mut group = c.benchmark_group("tables");
    group.sample_size(10);
    group.bench_function("build", |b| b.iter(|| black_box(AttackTables::new())));

    let tables = AttackTables::shared();
    let e4: Square = "e4".parse().unwrap();
    let occupancy = Position::new().occupied();
    group.bench_function("queen_lookup", |b| {
        b.iter(|| black_box(tables.queen(black_box(e4), black_box(occupancy))))
    });
    group.finish();
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    let mut position = Position::new();
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| position.perft(black_box(depth)))
        });
    }

    let mut kiwipete = Position::from_fen(KIWIPETE).unwrap();
    group.bench_with_input(BenchmarkId::new("kiwipete", 1), &1, |b, &depth| {
        b.iter(|| kiwipete.perft(black_box(depth)))
    });

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let mut startpos = Position::new();
    group.bench_function("startpos", |b| b.iter(|| black_box(startpos.legal_moves())));

    let mut middlegame =
        Position::from_fen("r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4")
            .unwrap();
    group.bench_function("middlegame", |b| {
        b.iter(|| black_box(middlegame.legal_moves()))
    });

    let mut kiwipete = Position::from_fen(KIWIPETE).unwrap();
    group.bench_function("kiwipete", |b| b.iter(|| black_box(kiwipete.legal_moves())));

    let mut pinned = Position::from_fen("4r1k1/8/8/8/8/8/4R3/4K3 w - - 0 1").unwrap();
    let rook = ColoredPiece::new(Color::White, Piece::Rook);
    let e2: Square = "e2".parse().unwrap();
    group.bench_function("pinned_rook", |b| {
        b.iter(|| black_box(pinned.legal_moves_for(rook, e2)))
    });

    group.finish();
}

fn bench_apply_undo(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_undo");

    let mut position = Position::from_fen(KIWIPETE).unwrap();
    let moves = position.legal_moves();
    group.bench_function("kiwipete_all_moves", |b| {
        b.iter(|| {
            for mv in &moves {
                position.apply_move(mv.piece, mv.from, mv.to);
                position.undo_move();
            }
        })
    });

    let mut start = Position::new();
    group.bench_function("null_move", |b| {
        b.iter(|| {
            start.apply_null_move();
            start.undo_move();
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_tables,
    bench_perft,
    bench_movegen,
    bench_apply_undo
);
criterion_main!(benches);

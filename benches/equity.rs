use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use rand::prelude::*;

use showdown::core::{cards_from_str, Card};
use showdown::equity::{enumerate_equity, estimate_equity};

fn hole(s: &str) -> [Card; 2] {
    let cards = cards_from_str(s).unwrap();
    [cards[0], cards[1]]
}

fn bench_estimate_preflop(c: &mut Criterion) {
    let players = [hole("AsAh"), hole("KsKh")];

    c.bench_function("estimate_equity_preflop_1k", |b| {
        let mut rng = SmallRng::seed_from_u64(42);
        b.iter(|| estimate_equity(black_box(&players), &[], 1000, &mut rng))
    });
}

fn bench_estimate_flop(c: &mut Criterion) {
    let players = [hole("AsAh"), hole("KsKh"), hole("8c7c")];
    let board = cards_from_str("9c6h2d").unwrap();

    c.bench_function("estimate_equity_flop_1k", |b| {
        let mut rng = SmallRng::seed_from_u64(42);
        b.iter(|| estimate_equity(black_box(&players), black_box(&board), 1000, &mut rng))
    });
}

fn bench_enumerate_turn(c: &mut Criterion) {
    let players = [hole("Ah9h"), hole("KsKc")];
    let board = cards_from_str("Kh7h2d9c").unwrap();

    c.bench_function("enumerate_equity_turn", |b| {
        b.iter(|| enumerate_equity(black_box(&players), black_box(&board)))
    });
}

criterion_group!(
    benches,
    bench_estimate_preflop,
    bench_estimate_flop,
    bench_enumerate_turn
);
criterion_main!(benches);

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use rand::prelude::*;

use showdown::core::{evaluate, Card, Deck};

fn random_cards(count: usize, seed: u64) -> Vec<Card> {
    let mut rng = SmallRng::seed_from_u64(seed);
    Deck::default()
        .shuffled(&mut rng)
        .into_iter()
        .take(count)
        .collect()
}

fn bench_evaluate_five(c: &mut Criterion) {
    let cards = random_cards(7, 5);
    let hole = [cards[0], cards[1]];
    let board = &cards[2..5];

    c.bench_function("evaluate_five_cards", |b| {
        b.iter(|| evaluate(black_box(hole), black_box(board)))
    });
}

fn bench_evaluate_seven(c: &mut Criterion) {
    let cards = random_cards(7, 7);
    let hole = [cards[0], cards[1]];
    let board = &cards[2..7];

    c.bench_function("evaluate_seven_cards", |b| {
        b.iter(|| evaluate(black_box(hole), black_box(board)))
    });
}

criterion_group!(benches, bench_evaluate_five, bench_evaluate_seven);
criterion_main!(benches);

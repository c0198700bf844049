#[macro_use]
extern crate criterion;
extern crate holdem_eval;

use criterion::Criterion;
use holdem_eval::core::Card;
use holdem_eval::holdem::{compare_holdings, evaluate};

fn holding(hole: &str, board: &str) -> (Vec<Card>, Vec<Card>) {
    (
        Card::parse_many(hole).unwrap(),
        Card::parse_many(board).unwrap(),
    )
}

fn evaluate_high_card(c: &mut Criterion) {
    // Falls through every detector.
    let (hole, board) = holding("3s5h", "7hJh9sKd2h");
    c.bench_function("Evaluate high card", move |b| {
        b.iter(|| evaluate(&hole, &board))
    });
}

fn evaluate_royal_flush(c: &mut Criterion) {
    let (hole, board) = holding("TsAs", "JsQsKs2h4d");
    c.bench_function("Evaluate royal flush", move |b| {
        b.iter(|| evaluate(&hole, &board))
    });
}

fn evaluate_two_pair(c: &mut Criterion) {
    let (hole, board) = holding("7s7d", "5h5s2dKh9s");
    c.bench_function("Evaluate two pair", move |b| {
        b.iter(|| evaluate(&hole, &board))
    });
}

fn showdown(c: &mut Criterion) {
    let (first, board) = holding("7s7d", "5h5s2dKh9s");
    let second = Card::parse_many("AcKd").unwrap();
    c.bench_function("Heads up showdown", move |b| {
        b.iter(|| compare_holdings(&first, &second, &board))
    });
}

criterion_group!(
    benches,
    evaluate_high_card,
    evaluate_royal_flush,
    evaluate_two_pair,
    showdown
);
criterion_main!(benches);

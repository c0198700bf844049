#[macro_use]
extern crate criterion;
extern crate holdem_eval;

use criterion::Criterion;
use holdem_eval::core::Card;

fn parse_one(c: &mut Criterion) {
    c.bench_function("Parse one card (As)", |b| {
        b.iter(|| "As".parse::<Card>());
    });
}

fn parse_board(c: &mut Criterion) {
    c.bench_function("Parse board (JsQsKs2h4d)", |b| {
        b.iter(|| Card::parse_many("JsQsKs2h4d"));
    });
}

criterion_group!(benches, parse_one, parse_board);
criterion_main!(benches);

//! Benchmark for Maybe chains.
//!
//! Compares `bind`/`map` chains and the `maybe!` macro against the same chain
//! written with `Option`.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use varia::maybe;
use varia::maybe::Maybe;

fn parse(text: &str) -> Maybe<i32> {
    text.parse().ok().into()
}

fn benchmark_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("maybe_chain");

    for inputs in [["5", "7", "3"], ["5", "x", "3"]] {
        let label = inputs.join(",");

        group.bench_with_input(BenchmarkId::new("bind", &label), &inputs, |bencher, inputs| {
            bencher.iter(|| {
                let [a, b, c] = black_box(*inputs);
                parse(a)
                    .bind(|a| parse(b).map(move |b| a + b))
                    .bind(|sum| parse(c).map(move |c| sum + c))
            });
        });

        group.bench_with_input(BenchmarkId::new("macro", &label), &inputs, |bencher, inputs| {
            bencher.iter(|| {
                let [a, b, c] = black_box(*inputs);
                maybe! {
                    x <= parse(a);
                    y <= parse(b);
                    z <= parse(c);
                    yield x + y + z
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("option", &label), &inputs, |bencher, inputs| {
            bencher.iter(|| {
                let [a, b, c] = black_box(*inputs);
                a.parse::<i32>()
                    .ok()
                    .and_then(|a| b.parse::<i32>().ok().map(move |b| a + b))
                    .and_then(|sum| c.parse::<i32>().ok().map(move |c| sum + c))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_chain);
criterion_main!(benches);

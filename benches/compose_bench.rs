//! Benchmark for composition and currying.
//!
//! Measures the call overhead of composed and curried functions relative to
//! direct application.

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use varia::compose::compose2;
use varia::{compose, curry4};

fn square(x: i32) -> i32 {
    x.wrapping_mul(x)
}

fn add4(a: i32, b: i32, c: i32, d: i32) -> i32 {
    a.wrapping_add(b).wrapping_add(c).wrapping_add(d)
}

fn benchmark_compose(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("compose");
    let composed = compose!(square, |x: i32| x + 5);
    let composed2 = compose2(square, |a: i32, b: i32| a + b);

    group.bench_function("compose_macro", |bencher| {
        bencher.iter(|| composed(black_box(4)));
    });

    group.bench_function("compose2", |bencher| {
        bencher.iter(|| composed2(black_box(5), black_box(3)));
    });

    group.bench_function("direct", |bencher| {
        bencher.iter(|| square(black_box(4) + 5));
    });

    group.finish();
}

fn benchmark_curry(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("curry");
    let partial = curry4!(add4)(5)(3);

    group.bench_function("saturate_partial", |bencher| {
        bencher.iter(|| partial(black_box(1))(black_box(2)));
    });

    group.bench_function("full_chain", |bencher| {
        bencher.iter(|| curry4!(add4)(black_box(5))(3)(1)(2));
    });

    group.bench_function("direct", |bencher| {
        bencher.iter(|| add4(black_box(5), 3, 1, 2));
    });

    group.finish();
}

criterion_group!(benches, benchmark_compose, benchmark_curry);
criterion_main!(benches);

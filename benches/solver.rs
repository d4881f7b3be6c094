//! Benchmarks for the rolling-block solver.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use roller::level::{Level, SAMPLE};
use roller::solver::solve;

/// Benchmark the complete search on the bundled 14x9 course.
fn bench_solve_sample(c: &mut Criterion) {
    let level = Level::parse(SAMPLE).unwrap();

    c.bench_function("solve_sample", |b| {
        b.iter(|| solve(black_box(&level.grid), level.start, level.goal))
    });
}

/// Benchmark generating the successors of one configuration.
fn bench_successors(c: &mut Criterion) {
    let level = Level::parse(SAMPLE).unwrap();

    c.bench_function("successors", |b| {
        b.iter(|| black_box(level.start).successors(&level.grid))
    });
}

/// Benchmark parsing the bundled course text.
fn bench_parse_level(c: &mut Criterion) {
    c.bench_function("parse_level", |b| {
        b.iter(|| Level::parse(black_box(SAMPLE)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_solve_sample,
    bench_successors,
    bench_parse_level
);
criterion_main!(benches);

// Baseline benchmarks for fp-result hot paths
// Run with: cargo bench

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use fp_result::{Error, ErrorKind, Fallible, Result, ResultExt, internal, maybe_error, not_found, try_to_result};

/// Benchmark creating an error through a named constructor
fn bench_error_creation(c: &mut Criterion) {
    c.bench_function("error_creation_constructor", |b| {
        b.iter(|| {
            let error = not_found(black_box("user 42"));
            black_box(error);
        });
    });

    c.bench_function("error_creation_from_kind", |b| {
        b.iter(|| {
            let error = Error::from(black_box(ErrorKind::Timeout));
            black_box(error);
        });
    });
}

/// Benchmark rendering (logging hot path)
fn bench_error_display(c: &mut Criterion) {
    let error = internal("Database connection failed");
    let result: Result<u64> = Ok(7);

    c.bench_function("error_display", |b| {
        b.iter(|| black_box(error.to_string()));
    });

    c.bench_function("result_display", |b| {
        b.iter(|| black_box(result.display().to_string()));
    });
}

/// Benchmark first-failure aggregation
fn bench_maybe_error(c: &mut Criterion) {
    let results: Vec<Result<u32>> = (0..16)
        .map(|i| if i == 12 { Err(internal("late failure")) } else { Ok(i) })
        .collect();
    let id: Result<u64> = Ok(1);
    let name: Result<String> = Err(not_found("name"));

    c.bench_function("maybe_error_slice", |b| {
        b.iter(|| black_box(maybe_error(black_box(&results))));
    });

    c.bench_function("maybe_error_mixed", |b| {
        b.iter(|| black_box(maybe_error([&id as &dyn Fallible, &name])));
    });
}

/// Benchmark the panic-free path of the adapter
fn bench_try_to_result(c: &mut Criterion) {
    c.bench_function("try_to_result_success", |b| {
        b.iter(|| black_box(try_to_result(|| black_box(21) * 2)));
    });
}

criterion_group!(
    benches,
    bench_error_creation,
    bench_error_display,
    bench_maybe_error,
    bench_try_to_result
);
criterion_main!(benches);

// Baseline benchmarks for outcome operations
// Run with: cargo bench

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use outcome::prelude::*;

fn layered_error() -> Error {
    Error::internal("CFG_LOAD", "Config load failed", "could not load settings")
        .with_inner(Error::new("IO_READ", "Read failed", "disk unreachable"))
}

/// Benchmark creating a bare error
fn bench_error_creation(c: &mut Criterion) {
    c.bench_function("error_creation", |b| {
        b.iter(|| {
            let error: Error = Error::new(
                black_box("404"),
                black_box("NotFound"),
                black_box("The item was not found."),
            );
            black_box(error);
        });
    });
}

/// Benchmark the explicit stack capture (the expensive transformation)
fn bench_stack_capture(c: &mut Criterion) {
    let error = layered_error();
    c.bench_function("error_with_stack_trace", |b| {
        b.iter(|| {
            let traced = black_box(error.clone()).with_stack_trace();
            black_box(traced);
        });
    });
}

/// Benchmark full sanitization of a layered error
fn bench_sanitize_full(c: &mut Criterion) {
    let error = layered_error().with_stack_trace();
    c.bench_function("error_sanitize_full", |b| {
        b.iter(|| {
            let redacted = black_box(&error).sanitize(SanitizeLevel::Full);
            black_box(redacted);
        });
    });
}

/// Benchmark casting a success payload through the erased form
fn bench_cast_success(c: &mut Criterion) {
    c.bench_function("cast_success_widen_narrow", |b| {
        b.iter(|| {
            let hit: Outcome<i32> = success(black_box(42));
            let narrowed = hit.erase().cast::<i32>();
            black_box(narrowed);
        });
    });
}

/// Benchmark failure forwarding through cast (no payload inspection)
fn bench_cast_failure_forward(c: &mut Criterion) {
    let miss: Outcome<i32> = failure_with("404", "NotFound", "The item was not found.");
    c.bench_function("cast_failure_forward", |b| {
        b.iter(|| {
            let forwarded = black_box(miss.clone()).cast::<String>();
            black_box(forwarded);
        });
    });
}

/// Benchmark the deterministic text rendering
fn bench_to_text(c: &mut Criterion) {
    let error = layered_error();
    c.bench_function("error_to_text", |b| {
        b.iter(|| {
            let text = black_box(&error).to_text();
            black_box(text);
        });
    });
}

criterion_group!(
    benches,
    bench_error_creation,
    bench_stack_capture,
    bench_sanitize_full,
    bench_cast_success,
    bench_cast_failure_forward,
    bench_to_text,
);
criterion_main!(benches);

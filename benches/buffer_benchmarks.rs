//! Benchmarks for the work done on every keystroke: rebuilding the buffer,
//! counting lines and regenerating the gutter.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use quill_buffer::{gutter, TextBuffer};

/// Generates a large text string for benchmarking.
fn generate_large_text(lines: usize) -> String {
    (0..lines)
        .map(|i| format!("Line {}: This is a sample line of text for benchmarking purposes.  \n", i))
        .collect()
}

/// Benchmarks buffer creation.
fn bench_buffer_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("buffer_creation");

    for size in [100, 1000, 10000, 100000].iter() {
        let text = generate_large_text(*size);

        group.bench_with_input(BenchmarkId::new("from_string", size), &text, |b, text| {
            b.iter(|| {
                let buffer = TextBuffer::from(black_box(text.as_str()));
                black_box(buffer)
            })
        });
    }

    group.finish();
}

/// Benchmarks the per-edit sync: replace the text, then count lines.
fn bench_set_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_text");

    for size in [1000, 10000].iter() {
        let text = generate_large_text(*size);

        group.bench_with_input(BenchmarkId::new("set_and_count", size), &text, |b, text| {
            let mut buffer = TextBuffer::new();
            b.iter(|| {
                buffer.set_text(black_box(text));
                black_box(buffer.len_lines())
            })
        });

        group.bench_with_input(BenchmarkId::new("unchanged_compare", size), &text, |b, text| {
            let buffer = TextBuffer::from(text.as_str());
            b.iter(|| black_box(buffer.eq_str(black_box(text))))
        });
    }

    group.finish();
}

/// Benchmarks gutter label generation.
fn bench_gutter(c: &mut Criterion) {
    let mut group = c.benchmark_group("gutter");

    for count in [100, 10000, 100000].iter() {
        group.bench_with_input(BenchmarkId::new("line_labels", count), count, |b, &count| {
            b.iter(|| black_box(gutter::line_labels(black_box(count), gutter::DEFAULT_SUFFIX)))
        });
    }

    group.finish();
}

/// Benchmarks Format → Trim Trailing Whitespace.
fn bench_trim(c: &mut Criterion) {
    let mut group = c.benchmark_group("trim");

    let base_text = generate_large_text(10000);

    group.bench_function("trim_trailing_whitespace", |b| {
        b.iter_with_setup(
            || TextBuffer::from(base_text.as_str()),
            |mut buffer| {
                let changed = buffer.trim_trailing_whitespace();
                black_box((buffer, changed))
            },
        )
    });

    group.finish();
}

criterion_group!(benches, bench_buffer_creation, bench_set_text, bench_gutter, bench_trim);
criterion_main!(benches);

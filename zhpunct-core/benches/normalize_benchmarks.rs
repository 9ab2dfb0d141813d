//! Performance benchmarks for the normalizer
//!
//! Run with: cargo bench --bench normalize_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use zhpunct_core::passes::{annotate, MarkerResolver};
use zhpunct_core::tables::DelimiterSet;
use zhpunct_core::Normalizer;

/// Generate mixed-script text of roughly `size` bytes
fn generate_text(size: usize) -> String {
    let base = "这是Python代码，它使用Flask框架。注意：**版本3.11已发布！！**他说“你好”。\n";
    let mut text = base.repeat(size / base.len() + 1);
    let cut = (0..=size.min(text.len()))
        .rev()
        .find(|&i| text.is_char_boundary(i))
        .unwrap_or(0);
    text.truncate(cut);
    text
}

/// Benchmark full normalization over different text sizes
fn bench_text_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_sizes");
    let normalizer = Normalizer::default();

    for size in [1024, 10_240, 102_400] {
        let text = generate_text(size);

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("normalize", size), &text, |b, text| {
            b.iter(|| normalizer.normalize(black_box(text)));
        });
    }

    group.finish();
}

/// Benchmark already-normalized ASCII input
fn bench_ascii_passthrough(c: &mut Criterion) {
    let normalizer = Normalizer::default();
    let text = "Plain English text with punctuation, numbers like 3.11, and more. ".repeat(1000);

    c.bench_function("ascii_passthrough", |b| {
        b.iter(|| normalizer.normalize(black_box(&text)));
    });
}

/// Benchmark quote tracking and marker resolution alone
fn bench_marker_resolution(c: &mut Criterion) {
    let text = generate_text(102_400);
    let chars: Vec<char> = text.chars().collect();
    let delimiters = DelimiterSet::new(["**"]);
    let resolver = MarkerResolver::new(&delimiters);

    c.bench_function("marker_resolution", |b| {
        b.iter(|| {
            let quotes = annotate(black_box(&chars));
            resolver.resolve(&chars, &quotes)
        });
    });
}

/// Benchmark a single long line dense with bold spans and quote pairs
fn bench_dense_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("dense_line");
    let normalizer = Normalizer::default();

    for pairs in [100, 1_000, 10_000] {
        let text = "**粗体**和“引用”".repeat(pairs);

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("normalize", pairs), &text, |b, text| {
            b.iter(|| normalizer.normalize(black_box(text)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_text_sizes,
    bench_ascii_passthrough,
    bench_marker_resolution,
    bench_dense_line
);
criterion_main!(benches);

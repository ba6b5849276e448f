//! Throughput comparison: this crate's per-codepoint decode loop
//! against `core::str::from_utf8` + `char_indices`, over a handful of
//! representative inputs (pure ASCII, mixed multi-byte, and mostly
//! 4-byte emoji).

use std::hint::black_box;

use criterion::measurement::WallTime;
use criterion::{criterion_group, criterion_main, BenchmarkGroup, Criterion};
use utf8fsm::Parser;

fn decode_with_parser(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut parser = Parser::new();
    let mut pos = 0;
    let mut count = 0;
    while pos < bytes.len() {
        pos = parser.parse_next_code_point(bytes, pos).expect("valid utf-8 fixture");
        count += 1;
    }
    count
}

fn decode_with_std(text: &str) -> usize {
    text.char_indices().count()
}

fn bench_corpus(name: &'static str, text: &'static str, group: &mut BenchmarkGroup<'_, WallTime>) {
    group.bench_function(format!("{name}_utf8fsm"), |b| {
        b.iter(|| black_box(decode_with_parser(black_box(text))));
    });
    group.bench_function(format!("{name}_std"), |b| {
        b.iter(|| black_box(decode_with_std(black_box(text))));
    });
}

fn decode_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    let ascii = "the quick brown fox jumps over the lazy dog, thirteen times in a row. ".repeat(16);
    let mixed = "Price: 10€, café \u{1F600} naïve résumé — 100% déjà vu ".repeat(16);
    let emoji = "\u{1F600}\u{1F601}\u{1F602}\u{1F923}\u{1F60A}\u{1F60D}".repeat(64);

    bench_corpus("ascii", Box::leak(ascii.into_boxed_str()), &mut group);
    bench_corpus("mixed", Box::leak(mixed.into_boxed_str()), &mut group);
    bench_corpus("emoji", Box::leak(emoji.into_boxed_str()), &mut group);

    group.finish();
}

criterion_group!(benches, decode_benches);
criterion_main!(benches);

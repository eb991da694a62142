//! Benchmarks for tokenizing and geometry parsing

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use oe_text::{parse, split_string, Rect, StringTokenizer, TokenizerMode};

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");

    for count in [4usize, 64, 1024].iter() {
        let text = (0..*count).map(|i| i.to_string()).collect::<Vec<_>>().join(",");
        group.throughput(Throughput::Bytes(text.len() as u64));

        group.bench_with_input(BenchmarkId::new("iterate", count), &text, |b, text| {
            b.iter(|| StringTokenizer::new(black_box(text), ",").count());
        });

        group.bench_with_input(BenchmarkId::new("split_string", count), &text, |b, text| {
            b.iter(|| {
                let mut list = Vec::with_capacity(*count);
                split_string(&mut list, black_box(text), ",", TokenizerMode::Default);
                list
            });
        });
    }

    group.finish();
}

fn bench_parse_rect(c: &mut Criterion) {
    c.bench_function("parse_rect", |b| {
        b.iter(|| parse::<Rect>(black_box("120,-40,1280,720")))
    });
}

criterion_group!(benches, bench_tokenize, bench_parse_rect);
criterion_main!(benches);

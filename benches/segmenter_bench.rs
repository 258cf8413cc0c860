//! Segmenter throughput benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use segment::detect::{Lines, Whitespace};
use segment::Segmenter;

fn sample_text() -> Vec<u8> {
    let paragraph = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. \
                     Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.\n\
                     Ünïcödé wörds, 日本語のテキスト, and\ttabs mixed in.\r\n";
    paragraph.repeat(256).into_bytes()
}

fn benchmark_segmenter(c: &mut Criterion) {
    let text = sample_text();
    let mut group = c.benchmark_group("segmenter");
    group.throughput(Throughput::Bytes(text.len() as u64));

    // One cursor reused across iterations, so history storage is recycled.
    let mut words = Segmenter::new(Whitespace);
    group.bench_function("whitespace", |b| {
        b.iter(|| {
            words.set_text(black_box(&text));
            let mut count = 0usize;
            while words.next() {
                count += 1;
            }
            black_box(count)
        });
    });

    let mut lines = Segmenter::new(Lines);
    group.bench_function("lines", |b| {
        b.iter(|| {
            lines.set_text(black_box(&text));
            let mut count = 0usize;
            while lines.next() {
                count += 1;
            }
            black_box(count)
        });
    });

    let mut walker = Segmenter::new(Whitespace);
    group.bench_function("whitespace_walk_back", |b| {
        b.iter(|| {
            walker.set_text(black_box(&text));
            while walker.next() {}
            let mut count = 0usize;
            while walker.previous() {
                count += 1;
            }
            black_box(count)
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_segmenter);
criterion_main!(benches);

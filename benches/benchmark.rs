//! Performance benchmarks for seedinfo.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use seedinfo::{extract_document, extract_with_options, parse_accordion, parse_facts, Document, Options, Selectors};

const PRODUCT_PAGE: &str = include_str!("../tests/fixtures/deep_purple_onion.html");

fn page_options() -> Options {
    Options::for_page("https://www.johnnyseeds.com/vegetables/onions/deep-purple-onion-seed-491.html")
        .unwrap_or_default()
}

fn bench_extract(c: &mut Criterion) {
    let options = page_options();
    let mut group = c.benchmark_group("extract");
    group.throughput(Throughput::Bytes(PRODUCT_PAGE.len() as u64));

    group.bench_function("parse_and_extract", |b| {
        b.iter(|| extract_with_options(black_box(PRODUCT_PAGE), &options));
    });

    let doc = Document::from(PRODUCT_PAGE);
    group.bench_function("extract_parsed", |b| {
        b.iter(|| extract_document(black_box(&doc), &options));
    });

    group.finish();
}

fn bench_passes(c: &mut Criterion) {
    let doc = Document::from(PRODUCT_PAGE);
    let selectors = Selectors::default();

    c.bench_function("parse_facts", |b| {
        b.iter(|| parse_facts(black_box(&doc), &selectors));
    });
    c.bench_function("parse_accordion", |b| {
        b.iter(|| parse_accordion(black_box(&doc), &selectors));
    });
}

criterion_group!(benches, bench_extract, bench_passes);
criterion_main!(benches);

//! Benchmarks for the bible pipeline.

use std::fs;
use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bible::{export_cards, group_identity, is_rule_line, parse_document};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn load_fixture(name: &str) -> String {
    fs::read_to_string(fixtures_dir().join(name)).unwrap()
}

/// The fixture's card file repeated `n` times under one header.
fn large_document(source: &str, n: usize) -> String {
    let cards = source
        .split_once("CARD FILE")
        .map(|(_, rest)| rest)
        .unwrap_or(source);
    let mut doc = String::from("CARD FILE\n");
    for _ in 0..n {
        doc.push_str(cards);
        doc.push('\n');
    }
    doc
}

// -- Classifier benchmarks --

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    group.bench_function("rules_symbol", |b| {
        b.iter(|| is_rule_line(black_box("{T}: Draw a card.")))
    });

    group.bench_function("flavor_prose", |b| {
        b.iter(|| is_rule_line(black_box("A gentle breeze stirs the dust over the ruins of Jund.")))
    });

    group.finish();
}

// -- Parsing benchmarks --

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    let source = load_fixture("alara.bible.md");
    let large = large_document(&source, 200);

    group.bench_function("parse_fixture", |b| {
        b.iter(|| parse_document(black_box(&source)))
    });

    group.bench_function("parse_large", |b| b.iter(|| parse_document(black_box(&large))));

    group.finish();
}

// -- Identity benchmarks --

fn bench_identity(c: &mut Criterion) {
    let mut group = c.benchmark_group("identity");

    let doc = parse_document(&large_document(&load_fixture("alara.bible.md"), 200));

    group.bench_function("group_identity_all", |b| {
        b.iter(|| {
            for card in &doc.cards {
                black_box(group_identity(card));
            }
        })
    });

    group.bench_function("export_all", |b| b.iter(|| export_cards(black_box(&doc))));

    group.finish();
}

criterion_group!(benches, bench_classify, bench_parsing, bench_identity);
criterion_main!(benches);

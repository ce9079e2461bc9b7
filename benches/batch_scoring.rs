//! Benchmarks for batch scoring.
//!
//! Run with: cargo bench --bench batch_scoring

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use seo_tools::{ContentRecord, SeoScorer, score_batch};
use std::hint::black_box;

/// Generate `count` records with varied lengths so every rule tier is hit.
fn generate_records(count: usize) -> Vec<ContentRecord> {
    (0..count)
        .map(|i| {
            let body = vec!["lorem"; (i * 37) % 1400].join(" ");
            ContentRecord::builder()
                .title(format!("Post {i}: notes on lorem ipsum and friends"))
                .description("d".repeat((i * 13) % 200))
                .content(body)
                .focus_keyword(if i % 3 == 0 { "" } else { "lorem" })
                .tags((0..i % 7).map(|t| format!("tag{t}")))
                .build()
        })
        .collect()
}

fn bench_single_record(c: &mut Criterion) {
    let record = generate_records(30).pop().unwrap_or_default();
    let scorer = SeoScorer::new();
    c.bench_function("evaluate_single", |b| {
        b.iter(|| scorer.evaluate(black_box(&record)));
    });
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("score_batch");
    let scorer = SeoScorer::new();

    for size in [10, 100, 1000] {
        let records = generate_records(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            b.iter(|| score_batch(&scorer, black_box(records)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_record, bench_batch);
criterion_main!(benches);

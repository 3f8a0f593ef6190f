use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use std::path::Path;

use sepsis_core::config::SepsisConfig;
use sepsis_core::evidence::PubMedProxy;
use sepsis_core::ranking::rank_targets;
use sepsis_core::scoring::{composite_score, score_genes};
use sepsis_core::signature::load_gene_signature;
use sepsis_core::types::GeneRecord;
use sepsis_core::TargetPrioritizer;

use criterion_config::configure_criterion;

fn signature() -> Vec<GeneRecord> {
    load_gene_signature(Path::new(env!("CARGO_MANIFEST_DIR")).join("../data/gene_signature.csv"))
        .expect("shipped signature")
}

/// Repeats the signature `copies` times with distinct symbols.
fn enlarged(copies: usize) -> Vec<GeneRecord> {
    let base = signature();
    (0..copies)
        .flat_map(|i| {
            base.iter().map(move |g| GeneRecord {
                symbol: format!("{}_{i}", g.symbol),
                ..g.clone()
            })
        })
        .collect()
}

fn bench_composite_score(c: &mut Criterion) {
    let genes = signature();
    c.bench_function("composite_score/signature", |b| {
        b.iter(|| {
            for gene in &genes {
                black_box(composite_score(black_box(gene)));
            }
        })
    });
}

fn bench_score_and_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("score_and_rank");
    for copies in [1, 100, 1000] {
        let genes = enlarged(copies);
        group.throughput(Throughput::Elements(genes.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(genes.len()), &genes, |b, genes| {
            b.iter(|| rank_targets(score_genes(genes.clone(), &PubMedProxy)))
        });
    }
    group.finish();
}

fn bench_thread_counts(c: &mut Criterion) {
    let genes = enlarged(1000);
    let mut group = c.benchmark_group("thread_count");
    for threads in [1, 2, 4] {
        let prioritizer = TargetPrioritizer::new(SepsisConfig {
            num_threads: Some(threads),
            ..Default::default()
        });
        group.bench_with_input(BenchmarkId::from_parameter(threads), &genes, |b, genes| {
            b.iter(|| prioritizer.rank(genes.clone()).expect("rank"))
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = configure_criterion();
    targets = bench_composite_score, bench_score_and_rank, bench_thread_counts
}
criterion_main!(benches);

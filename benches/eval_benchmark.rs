//! Performance benchmarks for batch evaluation.
//!
//! Run with: cargo bench --bench eval_benchmark

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use vehicle_eval::{lcs_ratio, normalize, Lexicon, MatchConfig, Record, Report, RowEvaluator};

const MAKES: &[&str] = &["Toyota", "Honda", "Ford", "Chevy", "VW", "Mercedes", "BMW"];
const MODELS: &[&str] = &["Camry", "Civic", "Focus", "Tahoe", "Golf GTI", "C300", "330i"];
const COLORS: &[&str] = &["Silver", "Blue", "Red", "Black", "White", "Grey", "Green"];

/// Generate a synthetic results batch with a mix of matches and misses.
fn generate_records(count: usize) -> Vec<Record> {
    (0..count)
        .map(|i| {
            let make = MAKES[i % MAKES.len()];
            let model = MODELS[i % MODELS.len()];
            let color = COLORS[i % COLORS.len()];
            let ground_truth = format!("{} {} {} {}", 2000 + (i % 25), make, model, color);
            // Every third prediction names a different model
            let predicted = if i % 3 == 0 {
                format!("{} {}", make, MODELS[(i + 1) % MODELS.len()])
            } else {
                format!("{} {} {}", make, model, color)
            };
            Record::new(ground_truth, predicted, i % 3 != 0, i % 2 == 0)
        })
        .collect()
}

fn bench_normalize(c: &mut Criterion) {
    let lexicon = Lexicon::with_builtins();

    c.bench_function("normalize_single", |b| {
        b.iter(|| {
            let _ = black_box(normalize(
                black_box("2012 Toyota Camry LE Silver Sedan"),
                &lexicon,
            ));
        })
    });
}

fn bench_lcs_ratio(c: &mut Criterion) {
    c.bench_function("lcs_ratio_model_names", |b| {
        b.iter(|| {
            let _ = black_box(lcs_ratio(black_box("camry hybrid"), black_box("camri")));
        })
    });
}

fn bench_evaluate_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate_scaling");
    let evaluator = RowEvaluator::new(Lexicon::with_builtins(), MatchConfig::balanced());

    for size in [100, 1_000, 10_000].iter() {
        let records = generate_records(*size);
        group.bench_with_input(BenchmarkId::new("batch", size), size, |b, _| {
            b.iter(|| {
                let verdicts = evaluator.evaluate_all(black_box(&records));
                let _ = black_box(Report::from_verdicts(&verdicts));
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_normalize, bench_lcs_ratio, bench_evaluate_scaling);
criterion_main!(benches);

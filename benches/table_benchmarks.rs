//! Benchmarks for truth-table generation
//!
//! Measures each stage separately (normalize, parse, tabulate) and the full
//! request for formulas of increasing width.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use truth_table::{generate_table, generate_tables, normalize, Formula, TruthTable};

const FORMULAS: &[(&str, &str)] = &[
    ("one_variable", "p ∨ ¬p"),
    ("two_variables", "(p → q) ↔ (¬q → ¬p)"),
    ("three_variables", "((p → q) ∧ (q → r)) → (p → r)"),
    ("ascii", "!(p & q) <=> (!p | !q) => r"),
];

fn bench_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("stages");
    for (name, formula) in FORMULAS {
        let normalized = normalize(formula);

        group.bench_with_input(BenchmarkId::new("normalize", name), formula, |b, f| {
            b.iter(|| normalize(black_box(f)))
        });
        group.bench_with_input(BenchmarkId::new("parse", name), &normalized, |b, n| {
            b.iter(|| Formula::parse(black_box(n)))
        });
        group.bench_with_input(BenchmarkId::new("tabulate", name), formula, |b, f| {
            b.iter(|| TruthTable::generate(black_box(f)))
        });
    }
    group.finish();
}

fn bench_full_request(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_table");
    for (name, formula) in FORMULAS {
        group.bench_with_input(BenchmarkId::from_parameter(name), formula, |b, f| {
            b.iter(|| generate_table(black_box(f)))
        });
    }
    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let input: String = FORMULAS
        .iter()
        .cycle()
        .take(100)
        .map(|(_, formula)| format!("{}\n", formula))
        .collect();

    c.bench_function("batch_100_lines", |b| {
        b.iter(|| generate_tables(black_box(&input)))
    });
}

criterion_group!(benches, bench_stages, bench_full_request, bench_batch);
criterion_main!(benches);

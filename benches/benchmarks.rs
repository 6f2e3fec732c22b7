//! Benchmarks for Resonance operations.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use resonance::{reconcile, CategorySet, Pointer, Resonance, ResonanceConfig};

fn baseline() -> CategorySet {
    CategorySet::create(&["A", "B", "C", "D"], &["One", "Two", "Three", "Four"]).unwrap()
}

fn benchmark_reconcile(c: &mut Criterion) {
    let base = baseline();
    let incoming = ["One", "Three", "Four", "One"];

    c.bench_function("reconcile", |b| {
        b.iter(|| reconcile(black_box(&base), black_box(&incoming), 3.0))
    });
}

fn benchmark_present(c: &mut Criterion) {
    let resonance = Resonance::default();
    let base = baseline();

    c.bench_function("memory_present_4096", |b| {
        b.iter(|| resonance.memory_for(black_box(&base)))
    });
}

fn benchmark_trace(c: &mut Criterion) {
    let resonance = Resonance::default();
    let memory = resonance.memory_for(&baseline()).unwrap();
    let pointer = Pointer::observation("B", "Four");

    c.bench_function("trace", |b| b.iter(|| memory.trace(black_box(&pointer))));
}

fn benchmark_run(c: &mut Criterion) {
    let resonance = Resonance::new(ResonanceConfig {
        dimensions: 1024,
        ..Default::default()
    })
    .unwrap();
    let base = baseline();
    let incoming = ["One", "Three", "Four", "One"];

    c.bench_function("run_1024", |b| {
        b.iter(|| resonance.run(black_box(&base), black_box(&incoming)))
    });
}

criterion_group!(
    benches,
    benchmark_reconcile,
    benchmark_present,
    benchmark_trace,
    benchmark_run,
);
criterion_main!(benches);

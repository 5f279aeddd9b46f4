use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use emergence::{EmergenceIntegrator, ScoreEngine, SyntheticStateCollector};

fn bench_cumulative_index(c: &mut Criterion) {
    let engine = ScoreEngine::from_snapshot(SyntheticStateCollector::new(42).generate())
        .expect("synthetic snapshot is valid");
    let integrator = EmergenceIntegrator::new(engine);

    let mut group = c.benchmark_group("cumulative_index");
    for cycles in [100u32, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(cycles), &cycles, |b, &cycles| {
            b.iter(|| integrator.cumulative_index(black_box(cycles), black_box(0.01)));
        });
    }
    group.finish();
}

fn bench_instantaneous_index(c: &mut Criterion) {
    let engine = ScoreEngine::from_snapshot(SyntheticStateCollector::new(42).generate())
        .expect("synthetic snapshot is valid");

    c.bench_function("instantaneous_index", |b| {
        b.iter(|| black_box(&engine).instantaneous_index());
    });
}

criterion_group!(benches, bench_cumulative_index, bench_instantaneous_index);
criterion_main!(benches);

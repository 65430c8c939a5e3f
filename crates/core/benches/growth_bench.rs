use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use quantbio_core::growth::{GrowthParams, estimate_threshold_time};

fn bench_growth_curves(c: &mut Criterion) {
    let mut group = c.benchmark_group("growth_curves");
    let params = GrowthParams::default();

    for &count in &[1, 100, 10_000] {
        group.bench_with_input(BenchmarkId::new("generate", count), &count, |b, &count| {
            b.iter(|| black_box(params.generate(black_box(count))))
        });
    }

    group.finish();
}

fn bench_threshold(c: &mut Criterion) {
    let mut group = c.benchmark_group("threshold_time");

    for &dt in &[0.1, 0.01, 0.001] {
        group.bench_with_input(BenchmarkId::new("euler", dt), &dt, |b, &dt| {
            b.iter(|| {
                black_box(estimate_threshold_time(
                    black_box(1000.0),
                    black_box(10.0),
                    black_box(0.15),
                    dt,
                ))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_growth_curves, bench_threshold);
criterion_main!(benches);

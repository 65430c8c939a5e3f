use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use quantbio_core::distance::{distance_matrix, hamming_distance, pairwise_distances};

fn make_strings(n: usize, len: usize) -> Vec<String> {
    const ALPHABET: &[u8] = b"ACGT";
    (0..n)
        .map(|i| {
            (0..len)
                .map(|j| ALPHABET[(i * 7 + j * 3 + i * j) % 4] as char)
                .collect()
        })
        .collect()
}

fn bench_hamming(c: &mut Criterion) {
    let mut group = c.benchmark_group("hamming_distance");

    for &len in &[8, 1_000, 100_000] {
        let strings = make_strings(2, len);
        group.bench_with_input(BenchmarkId::new("ascii", len), &strings, |b, s| {
            b.iter(|| black_box(hamming_distance(black_box(&s[0]), black_box(&s[1]))))
        });
    }

    group.finish();
}

fn bench_distance_sets(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance_sets");
    let strings = make_strings(200, 171);

    group.bench_function("pairwise_200x171", |b| {
        b.iter(|| black_box(pairwise_distances(black_box(&strings))))
    });
    group.bench_function("matrix_200x171", |b| {
        b.iter(|| black_box(distance_matrix(black_box(&strings))))
    });

    group.finish();
}

criterion_group!(benches, bench_hamming, bench_distance_sets);
criterion_main!(benches);

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use quantbio_core::translation::{TranslationMode, translate, translate_batch, translate_with};

/// Open reading frame of `codons` sense codons with no stop.
fn orf(codons: usize) -> String {
    const SENSE: [&str; 8] = ["ATG", "GCC", "AAG", "TGG", "CTT", "GAA", "GAT", "CGC"];
    (0..codons).map(|i| SENSE[i % SENSE.len()]).collect()
}

fn bench_translate(c: &mut Criterion) {
    let mut group = c.benchmark_group("translate");

    for &codons in &[10, 1_000, 100_000] {
        let seq = orf(codons);
        group.bench_with_input(BenchmarkId::new("lenient", codons), &seq, |b, seq| {
            b.iter(|| black_box(translate(black_box(seq))))
        });
        group.bench_with_input(BenchmarkId::new("strict", codons), &seq, |b, seq| {
            b.iter(|| black_box(translate_with(black_box(seq), TranslationMode::Strict)))
        });
    }

    group.finish();
}

fn bench_translate_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("translate_batch");
    let seqs: Vec<String> = (0..1_000).map(|i| orf(100 + i % 50)).collect();

    group.bench_function("1000x~125", |b| {
        b.iter(|| black_box(translate_batch(black_box(&seqs))))
    });

    group.finish();
}

criterion_group!(benches, bench_translate, bench_translate_batch);
criterion_main!(benches);

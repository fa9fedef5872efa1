//! Seed mixer benchmarks
//!
//! Run: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use evocore::seed::{hash_mix, mix_pair, SeedMixer};

fn bench_mix_pair(c: &mut Criterion) {
    c.bench_function("mix_pair", |b| {
        b.iter(|| mix_pair(black_box(0xBEEF), black_box(42)));
    });
}

fn bench_hash_mix_lengths(c: &mut Criterion) {
    let mut group = c.benchmark_group("hash_mix");
    for len in [2usize, 8, 32, 128] {
        let numbers: Vec<u64> = (0..len as u64).collect();
        group.bench_function(format!("len_{}", len), |b| {
            b.iter(|| hash_mix(black_box(&numbers)));
        });
    }
    group.finish();
}

fn bench_incremental(c: &mut Criterion) {
    c.bench_function("incremental_mix_finish", |b| {
        b.iter(|| {
            let mut mixer = SeedMixer::new();
            for value in 0..16u64 {
                mixer.mix(black_box(value));
            }
            mixer.finish()
        });
    });
}

criterion_group!(benches, bench_mix_pair, bench_hash_mix_lengths, bench_incremental);
criterion_main!(benches);

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sequential_sample::SessionBuilder;

fn run(population: usize, sample: usize, rng: &mut fastrand::Rng) -> usize {
    let session = SessionBuilder::new(sample)
        .rng(rng)
        .build_exact(0..population)
        .unwrap();
    let mut last = 0;
    session.for_each(|s| last = black_box(s.index)).unwrap();
    last
}

fn bench_ratio(c: &mut Criterion) {
    let mut group = c.benchmark_group("ratio");
    let population = 1_000_000;

    // Sparse samples stay in method D; dense ones fall through to method A early.
    for sample in [10, 1_000, 50_000, 500_000] {
        let mut rng = fastrand::Rng::with_seed(sample as u64);
        group.bench_with_input(BenchmarkId::new("skip", sample), &sample, |b, &sample| {
            b.iter(|| run(population, sample, &mut rng));
        });
    }

    group.finish();
}

fn bench_vs_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("vs_scan");
    let population = 100_000;
    let sample = 100;

    let mut rng = fastrand::Rng::with_seed(1);
    group.bench_function("skip", |b| {
        b.iter(|| run(population, sample, &mut rng));
    });

    // Selection sampling: one draw per element.
    let mut rng = fastrand::Rng::with_seed(1);
    group.bench_function("per_element", |b| {
        b.iter(|| {
            let mut needed = sample;
            let mut last = 0;
            for i in 0..population {
                let left = population - i;
                if rng.usize(0..left) < needed {
                    last = black_box(i);
                    needed -= 1;
                    if needed == 0 {
                        break;
                    }
                }
            }
            last
        });
    });

    group.finish();
}

criterion_group!(benches, bench_ratio, bench_vs_scan);
criterion_main!(benches);

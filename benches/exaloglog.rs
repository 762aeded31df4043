use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use exaloglog::{estimate_distinct_count_from_tokens, ExaLogLog};
use rand::prelude::*;

// (t, d) configurations worth comparing
const CONFIGS: [(u32, u32); 4] = [(0, 2), (1, 9), (2, 20), (2, 24)];

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("ExaLogLog Insert");
    let mut rng = StdRng::seed_from_u64(42);
    let numbers: Vec<u64> = (0..10_000).map(|_| rng.gen()).collect();

    for (t, d) in CONFIGS {
        for p in [8, 12, 16] {
            let id = format!("t{t}-d{d}-p{p}");
            group.bench_with_input(BenchmarkId::from_parameter(id), &p, |b, &p| {
                b.iter(|| {
                    let mut sketch = ExaLogLog::new(t, d, p).unwrap();
                    for &num in numbers.iter() {
                        sketch.add(black_box(num));
                    }
                });
            });
        }
    }
    group.finish();
}

fn bench_estimate_ml(c: &mut Criterion) {
    let mut group = c.benchmark_group("ExaLogLog Estimate (ML)");
    let mut rng = StdRng::seed_from_u64(42);

    for (t, d) in CONFIGS {
        for p in [8, 10, 12] {
            let mut sketch = ExaLogLog::new(t, d, p).unwrap();
            for _ in 0..10_000 {
                sketch.add(rng.gen());
            }

            let id = format!("t{t}-d{d}-p{p}");
            group.bench_with_input(BenchmarkId::from_parameter(id), &p, |b, _| {
                b.iter(|| {
                    black_box(sketch.get_distinct_count_estimate());
                });
            });
        }
    }
    group.finish();
}

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("ExaLogLog Merge");
    let mut rng = StdRng::seed_from_u64(42);
    let (t, d) = (2, 20);

    for (p1, p2) in [(10, 10), (10, 12), (8, 12)] {
        let mut s1 = ExaLogLog::new(t, d, p1).unwrap();
        let mut s2 = ExaLogLog::new(t, d, p2).unwrap();
        for _ in 0..10_000 {
            s1.add(rng.gen());
            s2.add(rng.gen());
        }

        let id = format!("p{p1}-p{p2}");
        group.bench_with_input(BenchmarkId::from_parameter(id), &p1, |b, _| {
            b.iter(|| {
                black_box(ExaLogLog::merge(&s1, &s2).unwrap());
            });
        });
    }
    group.finish();
}

fn bench_tokens(c: &mut Criterion) {
    let mut group = c.benchmark_group("Token Estimate");
    let mut rng = StdRng::seed_from_u64(42);

    for &size in &[100, 10_000, 100_000] {
        let mut tokens: Vec<u32> = (0..size)
            .map(|_| ExaLogLog::compute_token(rng.gen()))
            .collect();
        tokens.sort_unstable();

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                black_box(estimate_distinct_count_from_tokens(tokens.iter().copied()));
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_insert,
    bench_estimate_ml,
    bench_merge,
    bench_tokens
);
criterion_main!(benches);

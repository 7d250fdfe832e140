use criterion::{black_box, BenchmarkId, Criterion, Throughput};

use algorist::searching::{binary_search, linear_search};

pub fn run(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for &len in &[1_000u64, 1_000_000] {
        let sorted: Vec<u64> = (0..len).map(|i| i * 2).collect();
        // Odd targets miss, forcing a full scan / full descent.
        let targets: Vec<u64> = (0..64).map(|i| (i * len / 32) | 1).collect();
        group.throughput(Throughput::Elements(targets.len() as u64));

        group.bench_with_input(BenchmarkId::new("binary_search", len), &sorted, |b, sorted| {
            b.iter(|| {
                for t in &targets {
                    black_box(binary_search(sorted, black_box(t)));
                }
            });
        });

        if len <= 1_000 {
            group.bench_with_input(BenchmarkId::new("linear_search", len), &sorted, |b, sorted| {
                b.iter(|| {
                    for t in &targets {
                        black_box(linear_search(sorted, black_box(t)));
                    }
                });
            });
        }
    }

    group.finish();
}

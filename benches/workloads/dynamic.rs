use criterion::{black_box, BenchmarkId, Criterion, Throughput};

use algorist::dynamic::{fibonacci, longest_common_subsequence};

use super::scrambled;

pub fn run(c: &mut Criterion) {
    let mut group = c.benchmark_group("dynamic");

    group.bench_function("fibonacci_186", |b| {
        b.iter(|| black_box(fibonacci(black_box(186))));
    });

    for &len in &[100usize, 1_000] {
        let a: Vec<u8> = scrambled(len).iter().map(|v| (v % 4) as u8).collect();
        let b: Vec<u8> = scrambled(len * 2)[len..].iter().map(|v| (v % 4) as u8).collect();
        group.throughput(Throughput::Elements((len * len) as u64));
        group.bench_with_input(BenchmarkId::new("lcs", len), &(a, b), |bench, (a, b)| {
            bench.iter(|| black_box(longest_common_subsequence(black_box(a), black_box(b))));
        });
    }

    group.finish();
}

use criterion::{black_box, BenchmarkId, Criterion, Throughput};

use algorist::sorting::{bubble_sort, merge_sort, quick_sort};

use super::scrambled;

pub fn run(c: &mut Criterion) {
    bench_quadratic(c);
    bench_n_log_n(c);
}

fn bench_quadratic(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_quadratic");
    group.sample_size(10);

    for &len in &[100usize, 1_000] {
        let input = scrambled(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("bubble_sort", len), &input, |b, input| {
            b.iter(|| black_box(bubble_sort(black_box(input))));
        });
    }

    group.finish();
}

fn bench_n_log_n(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_n_log_n");

    for &len in &[1_000usize, 100_000] {
        let input = scrambled(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("quick_sort", len), &input, |b, input| {
            b.iter(|| black_box(quick_sort(black_box(input))));
        });
        group.bench_with_input(BenchmarkId::new("merge_sort", len), &input, |b, input| {
            b.iter(|| black_box(merge_sort(black_box(input))));
        });

        #[cfg(feature = "parallel")]
        group.bench_with_input(BenchmarkId::new("par_merge_sort", len), &input, |b, input| {
            b.iter(|| black_box(algorist::sorting::par_merge_sort(black_box(input))));
        });

        group.bench_with_input(BenchmarkId::new("std_sort", len), &input, |b, input| {
            b.iter(|| {
                let mut v = input.clone();
                v.sort();
                black_box(v)
            });
        });
    }

    group.finish();
}

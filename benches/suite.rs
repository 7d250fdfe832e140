use criterion::{criterion_group, criterion_main, Criterion};

mod workloads;

fn bench_main(c: &mut Criterion) {
    workloads::sorting::run(c);
    workloads::searching::run(c);
    workloads::traversal::run(c);
    workloads::dynamic::run(c);
}

criterion_group!(benches, bench_main);
criterion_main!(benches);

use std::collections::HashMap;

use criterion::{black_box, BenchmarkId, Criterion, Throughput};

use algorist::graph::{breadth_first_search, depth_first_search};

use super::scrambled;

/// Sparse random digraph with `nodes` nodes and out-degree `degree`, plus a
/// spanning chain so every node is reachable from 0.
fn random_graph(nodes: usize, degree: usize) -> HashMap<u64, Vec<u64>> {
    let noise = scrambled(nodes * degree);
    let n = nodes as u64;
    (0..n)
        .map(|u| {
            let mut adj = Vec::with_capacity(degree + 1);
            if u + 1 < n {
                adj.push(u + 1);
            }
            let base = u as usize * degree;
            adj.extend(noise[base..base + degree].iter().map(|r| r % n));
            (u, adj)
        })
        .collect()
}

pub fn run(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");

    for &nodes in &[1_000usize, 50_000] {
        let graph = random_graph(nodes, 4);
        group.throughput(Throughput::Elements(nodes as u64));

        group.bench_with_input(BenchmarkId::new("bfs", nodes), &graph, |b, g| {
            b.iter(|| black_box(breadth_first_search(g, black_box(0))));
        });
        group.bench_with_input(BenchmarkId::new("dfs", nodes), &graph, |b, g| {
            b.iter(|| black_box(depth_first_search(g, black_box(0))));
        });
    }

    group.finish();
}

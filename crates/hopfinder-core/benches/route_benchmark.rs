//! Benchmark both solvers on synthetic star maps.
//!
//! Run with: `cargo bench --bench route_benchmark`

#![allow(clippy::cast_precision_loss)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hopfinder_core::{
    admit_all, solve_unweighted, solve_weighted, uniform_weight, Cost, Error, Graph, NodeId,
    Result,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Ring of `size` systems with a few random gates each; payload is security.
fn generate_map(size: u64, seed: u64) -> Graph<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Graph::with_capacity(usize::try_from(size).unwrap_or(0));
    for id in 0..size {
        let mut connections = vec![(id + 1) % size, (id + size - 1) % size];
        for _ in 0..rng.gen_range(0..3) {
            connections.push(rng.gen_range(0..size));
        }
        graph.register(id, connections, rng.gen_range(0.0..1.0));
    }
    graph
}

fn security_penalty(graph: &Graph<f64>, _: Option<NodeId>, _: NodeId, candidate: NodeId) -> Result<Cost> {
    let security = graph.payload(candidate).copied().unwrap_or(0.0);
    Ok(if security < 0.5 { 100.0 } else { 1.0 })
}

fn bench_unweighted(c: &mut Criterion) {
    let mut group = c.benchmark_group("unweighted");

    for size in [1_000u64, 8_000, 50_000] {
        let graph = generate_map(size, 42);
        let to = size / 2;

        group.bench_with_input(BenchmarkId::new("admit_all", size), &size, |b, _| {
            b.iter(|| solve_unweighted(black_box(&graph), 0, to, admit_all));
        });

        group.bench_with_input(BenchmarkId::new("high_security", size), &size, |b, _| {
            b.iter(|| {
                solve_unweighted(black_box(&graph), 0, to, |g: &Graph<f64>, id| {
                    g.payload(id).is_some_and(|&sec| sec >= 0.3)
                })
            });
        });
    }

    group.finish();
}

fn bench_weighted(c: &mut Criterion) {
    let mut group = c.benchmark_group("weighted");
    group.sample_size(20);

    for size in [1_000u64, 8_000] {
        let graph = generate_map(size, 42);
        let to = size / 2;

        group.bench_with_input(BenchmarkId::new("uniform", size), &size, |b, _| {
            b.iter(|| solve_weighted(black_box(&graph), 0, to, uniform_weight));
        });

        group.bench_with_input(BenchmarkId::new("security_penalty", size), &size, |b, _| {
            b.iter(|| solve_weighted(black_box(&graph), 0, to, security_penalty));
        });

        // Veto the second and fourth hops of the uniform route.
        if let Ok(path) = solve_weighted(&graph, 0, to, uniform_weight) {
            let pruned: Vec<NodeId> = path.iter().skip(1).step_by(2).take(2).copied().collect();
            group.bench_with_input(BenchmarkId::new("pruned", size), &size, |b, _| {
                b.iter(|| {
                    solve_weighted(black_box(&graph), 0, to, |g: &Graph<f64>, previous, current, candidate| {
                        if pruned.contains(&candidate) {
                            return Err(Error::InvalidEdge);
                        }
                        uniform_weight(g, previous, current, candidate)
                    })
                });
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_unweighted, bench_weighted);
criterion_main!(benches);

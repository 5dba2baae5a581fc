//! Criterion benchmarks for the Ja-Be-Ja round loop.
//!
//! Uses synthetic ring-of-cliques graphs so the optimum is known and the
//! per-round cost depends only on node count and degree.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use jabeja::graph::{Graph, InitialColoring, NodeId};
use jabeja::jabeja::{AcceptancePolicy, CoolingSchedule, JabejaConfig, JabejaRunner};
use rand::rngs::StdRng;
use rand::SeedableRng;

// ===========================================================================
// Ring of cliques: `cliques` cliques of size `k`, consecutive cliques joined
// by one edge.
// ===========================================================================

fn ring_of_cliques(cliques: u32, k: u32) -> Graph {
    let n = cliques * k;
    Graph::from_adjacency((0..n).map(|i| {
        let base = i / k * k;
        let mut adj: Vec<NodeId> = (base..base + k).filter(|&j| j != i).collect();
        if i == base + k - 1 {
            adj.push((base + k) % n);
        }
        if i == base {
            adj.push((base + n - 1) % n);
        }
        (i, 0, adj)
    }))
    .expect("ring of cliques is a valid graph")
}

fn colored_ring(cliques: u32, k: u32, partitions: u32) -> Graph {
    let mut graph = ring_of_cliques(cliques, k);
    let mut rng = StdRng::seed_from_u64(7);
    InitialColoring::Random
        .apply(&mut graph, partitions, &mut rng)
        .expect("positive partition count");
    graph
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_strict_linear(c: &mut Criterion) {
    let mut group = c.benchmark_group("strict_linear");
    group.sample_size(10);

    for (cliques, k) in [(16u32, 8u32), (64, 8), (64, 16)] {
        let graph = colored_ring(cliques, k, 4);
        let config = JabejaConfig::default()
            .with_rounds(50)
            .with_cooling(CoolingSchedule::Linear { delta: 0.02 })
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("c{}_k{}", cliques, k), cliques * k),
            &(graph, config),
            |b, (g, cfg)| {
                b.iter(|| {
                    let mut g = g.clone();
                    let result = JabejaRunner::run(black_box(&mut g), black_box(cfg));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_metropolis_restart(c: &mut Criterion) {
    let mut group = c.benchmark_group("metropolis_restart");
    group.sample_size(10);

    for &cliques in &[16u32, 64] {
        let graph = colored_ring(cliques, 8, 4);
        let config = JabejaConfig::default()
            .with_rounds(50)
            .with_acceptance(AcceptancePolicy::Metropolis)
            .with_cooling(CoolingSchedule::geometric_restart(0.9, 20))
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(cliques * 8),
            &(graph, config),
            |b, (g, cfg)| {
                b.iter(|| {
                    let mut g = g.clone();
                    let result = JabejaRunner::run(black_box(&mut g), black_box(cfg));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_strict_linear, bench_metropolis_restart);
criterion_main!(benches);

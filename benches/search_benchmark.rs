use criterion::{criterion_group, criterion_main, Criterion};
use env_logger::Env;
use nanorand::{Rng, WyRand};
use std::hint::black_box;

use network_pathfinding::prelude::*;

/// A random geometric Network: Nodes scattered over a square, each linked to its
/// nearest neighbors with a Cost slightly above the straight-line distance, so the
/// Euclidean Heuristic stays admissible.
fn random_network(node_count: u64, seed: u64) -> (Graph<u64>, PositionMap<u64>) {
    let mut rng = WyRand::new_seed(seed);

    let mut positions = PositionMap::default();
    for id in 0..node_count {
        let x = rng.generate_range(0..1_000u32) as f64;
        let y = rng.generate_range(0..1_000u32) as f64;
        positions.insert(id, (x, y));
    }

    let mut graph = Graph::new();
    for id in 0..node_count {
        graph.add_node(id);
    }

    let distance = |a: u64, b: u64| euclid(&a, &b, &positions).unwrap();

    // link each Node to its 4 nearest neighbors
    for a in 0..node_count {
        let mut others: Vec<u64> = (0..node_count).filter(|&b| b != a).collect();
        others.sort_by(|&x, &y| distance(a, x).total_cmp(&distance(a, y)));

        for &b in others.iter().take(4) {
            let detour = 1.0 + rng.generate_range(0..50u32) as f64 / 100.0;
            graph.add_edge(a, b, distance(a, b) * detour).unwrap();
        }
    }

    (graph, positions)
}

fn bench_find_path(c: &mut Criterion) {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .try_init()
        .ok();

    let mut group = c.benchmark_group("find_path");

    for &node_count in &[100u64, 500, 1_000] {
        let (graph, positions) = random_network(node_count, 4);

        let id = format!("Random Geometric Network, {} Nodes", node_count);
        group.bench_function(id, |b| {
            b.iter(|| {
                find_path(
                    &graph,
                    black_box(&0),
                    black_box(&(node_count - 1)),
                    |a, b| euclid(a, b, &positions),
                )
                .unwrap()
            })
        });

        let id = format!(
            "Random Geometric Network, {} Nodes, no Estimate",
            node_count
        );
        group.bench_function(id, |b| {
            b.iter(|| {
                find_path(&graph, black_box(&0), black_box(&(node_count - 1)), zero).unwrap()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_find_path);
criterion_main!(benches);

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use meridian_core::prelude::*;

/// Square lattice of `side * side` intersections with streets between
/// horizontal and vertical neighbours.
fn lattice(side: usize) -> StreetGraph {
    let mut graph = StreetGraph::new();
    for row in 0..side {
        for col in 0..side {
            let lat = 43.0 + row as f64 * 0.001;
            let lon = -77.0 + col as f64 * 0.001;
            graph
                .add_intersection(&format!("{row}_{col}"), lat, lon)
                .expect("unique title");
        }
    }
    for row in 0..side {
        for col in 0..side {
            let here = format!("{row}_{col}");
            if col + 1 < side {
                let east = format!("{row}_{}", col + 1);
                graph.add_edge("street", &here, &east).expect("known titles");
            }
            if row + 1 < side {
                let north = format!("{}_{col}", row + 1);
                graph.add_edge("avenue", &here, &north).expect("known titles");
            }
        }
    }
    graph
}

fn bench_engines(c: &mut Criterion) {
    let graph = lattice(100);

    c.bench_function("shortest_paths_10k", |b| {
        b.iter(|| {
            let paths = ShortestPaths::new(black_box(&graph), "0_0").expect("source exists");
            black_box(paths.distance_to("99_99").expect("target exists"))
        });
    });

    c.bench_function("path_to_corner_10k", |b| {
        let paths = ShortestPaths::new(&graph, "0_0").expect("source exists");
        b.iter(|| black_box(paths.path_to("99_99").expect("reachable")));
    });

    c.bench_function("minimum_spanning_tree_10k", |b| {
        b.iter(|| black_box(MinimumSpanningTree::new(black_box(&graph)).expect("connected")));
    });
}

criterion_group!(benches, bench_engines);
criterion_main!(benches);

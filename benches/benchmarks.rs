//! Criterion benchmarks for flowchart-graph.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

use flowchart_graph::engine::GraphEngine;
use flowchart_graph::graph::GraphSnapshot;
use flowchart_graph::types::{Edge, Flowchart, Node, NodeId};

/// Build a large random graph; about one edge in fifty dangles.
fn make_large_graph(node_count: usize, edges_per_node: usize) -> GraphSnapshot {
    let mut rng = rand::thread_rng();
    let nodes: Vec<NodeId> = (0..node_count as u64).map(NodeId::from).collect();

    let mut edges: Vec<Edge> = Vec::with_capacity(node_count * edges_per_node);
    for i in 0..node_count {
        for _ in 0..edges_per_node {
            let target = if rng.gen_range(0..50) == 0 {
                node_count + rng.gen_range(0..node_count)
            } else {
                rng.gen_range(0..node_count)
            };
            edges.push(Edge::new(edges.len() as u64, i as u64, target as u64));
        }
    }

    GraphSnapshot::from_parts(nodes, edges)
}

/// A single chain 0 -> 1 -> ... -> n-1.
fn make_chain(node_count: usize) -> GraphSnapshot {
    let nodes: Vec<NodeId> = (0..node_count as u64).map(NodeId::from).collect();
    let edges: Vec<Edge> = (1..node_count as u64)
        .map(|i| Edge::new(i, i - 1, i))
        .collect();
    GraphSnapshot::from_parts(nodes, edges)
}

fn bench_snapshot_build(c: &mut Criterion) {
    let graph = make_large_graph(10_000, 3);
    let flowchart = Flowchart::new(1, "bench").with_data(
        graph.nodes().iter().cloned().map(Node::new).collect(),
        graph.edges().to_vec(),
    );

    c.bench_function("snapshot_from_document_10k", |b| {
        b.iter(|| black_box(flowchart.snapshot()))
    });
}

fn bench_validate(c: &mut Criterion) {
    let graph = make_large_graph(100_000, 3);
    let engine = GraphEngine::new();

    c.bench_function("validate_edges_100k", |b| {
        b.iter(|| black_box(engine.validate_edges(&graph)))
    });
}

fn bench_outgoing(c: &mut Criterion) {
    let graph = make_large_graph(100_000, 3);
    let engine = GraphEngine::new();

    c.bench_function("outgoing_edges_100k", |b| {
        let mut rng = rand::thread_rng();
        b.iter(|| {
            let id = rng.gen_range(0..100_000u64).to_string();
            black_box(engine.outgoing_edges(&graph, &id).unwrap().len())
        })
    });
}

fn bench_reachable(c: &mut Criterion) {
    let graph = make_large_graph(100_000, 3);
    let engine = GraphEngine::new();

    c.bench_function("reachable_from_100k", |b| {
        b.iter(|| black_box(engine.reachable_from(&graph, "0").unwrap().len()))
    });
}

fn bench_reachable_chain(c: &mut Criterion) {
    let graph = make_chain(100_000);
    let engine = GraphEngine::new();

    c.bench_function("reachable_chain_100k", |b| {
        b.iter(|| black_box(engine.reachable_from(&graph, "0").unwrap().len()))
    });
}

criterion_group!(
    benches,
    bench_snapshot_build,
    bench_validate,
    bench_outgoing,
    bench_reachable,
    bench_reachable_chain,
);
criterion_main!(benches);

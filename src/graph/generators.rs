use crate::graph::{DirectedGraph, MutableGraph};
use ordered_float::OrderedFloat;
use rand::prelude::*;
use std::collections::HashSet;

/// Generates a uniformly random sparse directed graph.
///
/// Each vertex gets up to `edges_per_vertex` outgoing edges to distinct
/// random targets, with weights drawn from (0, max_weight).
pub fn generate_random_graph(
    n: usize,
    edges_per_vertex: usize,
    max_weight: f64,
) -> DirectedGraph<OrderedFloat<f64>> {
    assert!(max_weight > 0.1, "max_weight must exceed the 0.1 weight floor");

    let mut graph = DirectedGraph::new();
    let mut rng = rand::thread_rng();

    for _ in 0..n {
        graph.add_vertex();
    }

    for v in 0..n {
        let mut targets = HashSet::new();

        // A vertex can reach at most n-1 distinct neighbors
        let out_degree = edges_per_vertex.min(n.saturating_sub(1));
        while targets.len() < out_degree {
            let target = rng.gen_range(0..n);
            if target != v && targets.insert(target) {
                let weight = OrderedFloat(rng.gen_range(0.1..max_weight));
                graph.add_edge(v, target, weight);
            }
        }
    }

    graph
}

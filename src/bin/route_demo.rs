use lazy_dijkstra::graph::{Graph, MutableGraph};
use lazy_dijkstra::{
    reconstruct_path, Dijkstra, DirectedGraph, PathReconstruction, ShortestPathAlgorithm,
};
use ordered_float::OrderedFloat;

fn main() {
    env_logger::init();

    // Build the six-vertex sample graph, labelling vertices A-F
    let labels = ["A", "B", "C", "D", "E", "F"];
    let mut graph = DirectedGraph::new();
    for _ in 0..labels.len() {
        graph.add_vertex();
    }

    let edges = [
        (0, 1, 5.0),
        (0, 2, 1.0),
        (1, 0, 5.0),
        (1, 2, 2.0),
        (1, 3, 1.0),
        (2, 0, 1.0),
        (2, 1, 2.0),
        (2, 3, 4.0),
        (2, 4, 8.0),
        (3, 1, 1.0),
        (3, 2, 4.0),
        (3, 4, 3.0),
        (3, 5, 6.0),
        (4, 2, 8.0),
        (4, 3, 3.0),
        (5, 3, 6.0),
    ];
    for (from, to, weight) in edges {
        graph.add_edge(from, to, OrderedFloat(weight));
    }

    let source = 0;
    let dijkstra = Dijkstra::new();
    let result = dijkstra
        .compute_shortest_paths(&graph, source)
        .expect("sample graph is well formed");

    println!("Shortest distances from vertex {}", labels[source]);
    for v in 0..graph.vertex_count() {
        match result.distances[v] {
            Some(dist) => println!("  {}: {:.1}", labels[v], dist.into_inner()),
            None => println!("  {}: unreachable", labels[v]),
        }
    }

    println!("\nPaths from vertex {}", labels[source]);
    for v in 0..graph.vertex_count() {
        match reconstruct_path(&result, v).expect("tables come from this run") {
            PathReconstruction::Route(path) => {
                let rendered: Vec<&str> = path.iter().map(|&p| labels[p]).collect();
                println!("  {}", rendered.join(" -> "));
            }
            PathReconstruction::Unreachable => {
                println!("  no path to {}", labels[v]);
            }
        }
    }
}

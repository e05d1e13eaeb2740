use lazy_dijkstra::graph::MutableGraph;
use lazy_dijkstra::{
    reconstruct_path, Dijkstra, DirectedGraph, Error, PathReconstruction, ShortestPathAlgorithm,
    ShortestPathResult,
};
use ordered_float::OrderedFloat;

fn chain_graph(length: usize) -> DirectedGraph<OrderedFloat<f64>> {
    let mut graph = DirectedGraph::new();
    for _ in 0..length {
        graph.add_vertex();
    }
    for v in 0..length - 1 {
        graph.add_edge(v, v + 1, OrderedFloat(1.0));
    }
    graph
}

#[test]
fn test_target_equals_source() {
    let graph = chain_graph(4);
    let result = Dijkstra::new().compute_shortest_paths(&graph, 2).unwrap();

    assert_eq!(
        reconstruct_path(&result, 2).unwrap(),
        PathReconstruction::Route(vec![2])
    );
}

#[test]
fn test_path_is_in_source_to_target_order() {
    let graph = chain_graph(4);
    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(
        reconstruct_path(&result, 3).unwrap(),
        PathReconstruction::Route(vec![0, 1, 2, 3])
    );
}

#[test]
fn test_unreachable_target() {
    // Edges only point forward, so nothing is reachable from the last vertex
    let graph = chain_graph(4);
    let result = Dijkstra::new().compute_shortest_paths(&graph, 3).unwrap();

    let reconstruction = reconstruct_path(&result, 0).unwrap();
    assert_eq!(reconstruction, PathReconstruction::Unreachable);
    assert_eq!(reconstruction.vertices(), None);
}

#[test]
fn test_target_out_of_range() {
    let graph = chain_graph(4);
    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();

    assert!(matches!(
        reconstruct_path(&result, 99),
        Err(Error::InvalidVertex(99))
    ));
}

#[test]
fn test_cyclic_predecessor_table_is_rejected() {
    // Hand-built tables with a 1 <-> 2 predecessor cycle, which no engine
    // run produces
    let corrupt: ShortestPathResult<OrderedFloat<f64>> = ShortestPathResult {
        distances: vec![Some(OrderedFloat(0.0)); 3],
        predecessors: vec![None, Some(2), Some(1)],
        source: 0,
    };

    assert!(matches!(
        reconstruct_path(&corrupt, 2),
        Err(Error::CorruptPredecessors(_))
    ));
}

#[test]
fn test_self_predecessor_is_rejected() {
    let corrupt: ShortestPathResult<OrderedFloat<f64>> = ShortestPathResult {
        distances: vec![Some(OrderedFloat(0.0)), Some(OrderedFloat(1.0))],
        predecessors: vec![None, Some(1)],
        source: 0,
    };

    assert!(matches!(
        reconstruct_path(&corrupt, 1),
        Err(Error::CorruptPredecessors(_))
    ));
}

#[test]
fn test_out_of_range_predecessor_is_rejected() {
    let corrupt: ShortestPathResult<OrderedFloat<f64>> = ShortestPathResult {
        distances: vec![Some(OrderedFloat(0.0)), Some(OrderedFloat(1.0))],
        predecessors: vec![None, Some(7)],
        source: 0,
    };

    assert!(matches!(
        reconstruct_path(&corrupt, 1),
        Err(Error::InvalidVertex(7))
    ));
}

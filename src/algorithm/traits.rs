use num_traits::{Float, Zero};
use rayon::prelude::*;
use std::fmt::Debug;

use crate::graph::Graph;
use crate::Result;

/// Result of a shortest path algorithm execution.
///
/// Distances and predecessors are updated together during the run, so for
/// every vertex with a finite distance the predecessor entry lies on a
/// minimum-weight path from the source. `None` in `distances` means the
/// vertex is unreachable; its predecessor entry is `None` as well.
#[derive(Debug, Clone)]
pub struct ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Distances from source to each vertex
    pub distances: Vec<Option<W>>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}

/// Computes shortest paths from several sources in parallel.
///
/// The graph is only read, so independent queries share it safely; each
/// source gets its own tables. A failed query surfaces in its slot without
/// affecting the others.
pub fn batch_shortest_paths<W, G, A>(
    algorithm: &A,
    graph: &G,
    sources: &[usize],
) -> Vec<Result<ShortestPathResult<W>>>
where
    W: Float + Zero + Debug + Copy + Send,
    G: Graph<W> + Sync,
    A: ShortestPathAlgorithm<W, G> + Sync,
{
    sources
        .par_iter()
        .map(|&source| algorithm.compute_shortest_paths(graph, source))
        .collect()
}

use log::debug;
use num_traits::{Float, Zero};
use std::fmt::Debug;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::BinaryHeapWrapper;
use crate::graph::Graph;
use crate::{Error, Result};

/// Dijkstra's algorithm with a lazy-deletion frontier.
///
/// The frontier is a plain binary heap that accepts duplicate entries per
/// vertex; whenever a relaxation improves a distance, a fresh entry is pushed
/// and older ones are left behind. An extracted entry whose distance no
/// longer matches the table is stale and gets discarded, which replaces any
/// decrease-key operation.
///
/// Edge weights must be non-negative. This is a precondition, not a checked
/// error: negative weights silently produce wrong distances, matching the
/// classical algorithm's contract. `DirectedGraph::validate_non_negative` is
/// available to callers wanting the check.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }

        let n = graph.vertex_count();

        // Initialize distances and predecessors
        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];

        // Distance to source is 0
        distances[source] = Some(W::zero());

        // Initialize the frontier
        let mut frontier = BinaryHeapWrapper::new();
        frontier.push(source, W::zero());

        let mut settled = 0usize;

        // Main Dijkstra loop
        while let Some((u, dist_u)) = frontier.pop() {
            // Stale entry: a better distance was recorded after this one was
            // queued, skip it
            if let Some(best) = distances[u] {
                if best < dist_u {
                    continue;
                }
            }
            settled += 1;

            // Relax all outgoing edges
            for (v, weight) in graph.outgoing_edges(u) {
                if !graph.has_vertex(v) {
                    return Err(Error::MissingVertex { from: u, to: v });
                }

                let candidate = dist_u + weight;
                if !candidate.is_finite() {
                    return Err(Error::NumericOverflow { from: u, to: v });
                }

                let improved = match distances[v] {
                    None => true,
                    Some(best) => candidate < best,
                };

                if improved {
                    distances[v] = Some(candidate);
                    predecessors[v] = Some(u);
                    frontier.push(v, candidate);
                }
            }
        }

        debug!("settled {} of {} vertices from source {}", settled, n, source);

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
        })
    }
}

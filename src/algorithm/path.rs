use num_traits::{Float, Zero};
use std::fmt::Debug;

use crate::algorithm::ShortestPathResult;
use crate::{Error, Result};

/// Outcome of reconstructing a source-to-target path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathReconstruction {
    /// Ordered vertex sequence from the source to the target, inclusive
    Route(Vec<usize>),
    /// The target has no path from the source
    Unreachable,
}

impl PathReconstruction {
    /// Returns the vertex sequence, or `None` for an unreachable target
    pub fn vertices(&self) -> Option<&[usize]> {
        match self {
            PathReconstruction::Route(path) => Some(path),
            PathReconstruction::Unreachable => None,
        }
    }
}

/// Reconstructs the shortest path to `target` from a finished engine run.
///
/// Walks the recorded predecessors back from the target and reverses the
/// result. An unreachable target is a normal outcome, not an error. The walk
/// is bounded by the vertex count: a predecessor table that cycles (which a
/// matching engine run never produces) is reported as
/// [`Error::CorruptPredecessors`] instead of looping forever.
pub fn reconstruct_path<W>(
    result: &ShortestPathResult<W>,
    target: usize,
) -> Result<PathReconstruction>
where
    W: Float + Zero + Debug + Copy,
{
    let n = result.predecessors.len();
    if target >= n {
        return Err(Error::InvalidVertex(target));
    }

    if target == result.source {
        return Ok(PathReconstruction::Route(vec![target]));
    }

    // Build the path in reverse order
    let mut path = vec![target];
    let mut current = target;

    while current != result.source {
        match result.predecessors[current] {
            Some(pred) => {
                if pred >= n {
                    return Err(Error::InvalidVertex(pred));
                }
                path.push(pred);
                current = pred;
            }
            // No predecessor before reaching the source: no path exists
            None => return Ok(PathReconstruction::Unreachable),
        }

        // A genuine path visits each vertex at most once
        if path.len() > n {
            return Err(Error::CorruptPredecessors(current));
        }
    }

    path.reverse();
    Ok(PathReconstruction::Route(path))
}

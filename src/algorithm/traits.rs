use crate::graph::{Graph, NodeId, Weight};
use crate::{Error, Result};
use num_traits::Zero;
use rayon::prelude::*;
use std::collections::HashMap;

/// Result of a shortest path computation from one source node.
///
/// Immutable once returned and safe to share; any number of reconstruction
/// calls may consume the same result, including concurrently.
#[derive(Debug, Clone)]
pub struct ShortestPathResult<W>
where
    W: Weight,
{
    /// Source node the computation started from
    pub source: NodeId,

    /// Minimal accumulated weight from the source for every node strictly
    /// reachable from it. The source itself is omitted; unreached nodes have
    /// no entry.
    pub distances: HashMap<NodeId, W>,

    /// Predecessor on the discovered shortest path for every node in the
    /// graph; `None` for the source and for unreached nodes.
    pub predecessors: HashMap<NodeId, Option<NodeId>>,
}

impl<W> ShortestPathResult<W>
where
    W: Weight,
{
    /// Returns the shortest distance from the source to `node`, `Some(zero)`
    /// for the source itself, or `None` when `node` was not reached.
    pub fn distance(&self, node: NodeId) -> Option<W> {
        if node == self.source {
            return Some(W::zero());
        }
        self.distances.get(&node).copied()
    }

    /// Returns true if `node` lies on some path from the source
    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.distance(node).is_some()
    }

    /// Reconstruct the shortest route from the source to `target` as an
    /// ordered node sequence.
    ///
    /// Errors:
    /// - [`Error::InvalidNode`] when `target` is unknown to the result;
    /// - [`Error::NoPath`] when `target` was never reached from the source.
    ///
    /// `target == source` yields the single-element route `[source]`, also
    /// for a source without any edges.
    pub fn reconstruct_path(&self, target: NodeId) -> Result<Vec<NodeId>> {
        let Some(&first_hop) = self.predecessors.get(&target) else {
            return Err(Error::InvalidNode(target));
        };
        if target == self.source {
            return Ok(vec![target]);
        }
        if first_hop.is_none() {
            return Err(Error::NoPath(target));
        }

        // Iterative backward walk, bounded by the node count so a corrupt
        // predecessor table cannot loop forever.
        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            if path.len() > self.predecessors.len() {
                return Err(Error::AlgorithmError(format!(
                    "predecessor chain for node {} exceeds the node count",
                    target
                )));
            }
            match self.predecessors.get(&current).copied().flatten() {
                Some(previous) => {
                    path.push(previous);
                    current = previous;
                }
                None => {
                    return Err(Error::AlgorithmError(format!(
                        "predecessor chain for node {} breaks off at node {}",
                        target, current
                    )));
                }
            }
        }
        path.reverse();

        Ok(path)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Compute shortest paths from a source node to all reachable nodes.
    ///
    /// Fails with [`Error::SourceNotFound`] when `source` does not belong to
    /// the graph.
    fn compute_shortest_paths(&self, graph: &G, source: NodeId) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Compute shortest paths from several sources over the same graph in
    /// parallel. Each computation keeps its working state local, so sharing
    /// the read-only graph across workers is safe.
    fn compute_shortest_paths_multi(
        &self,
        graph: &G,
        sources: &[NodeId],
    ) -> Result<Vec<ShortestPathResult<W>>>
    where
        Self: Sync,
        G: Sync,
        W: Send,
    {
        sources
            .par_iter()
            .map(|&source| self.compute_shortest_paths(graph, source))
            .collect()
    }
}

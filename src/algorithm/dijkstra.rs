use log::{debug, trace};
use num_traits::Zero;
use std::collections::HashMap;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::Frontier;
use crate::graph::{Graph, NodeId, Weight};
use crate::{Error, Result};

/// Classic Dijkstra label-setting shortest path search
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: NodeId) -> Result<ShortestPathResult<W>> {
        if !graph.has_node(source) {
            return Err(Error::SourceNotFound);
        }

        // Tentative distances; absent entry means "infinite"
        let mut distances: HashMap<NodeId, W> = HashMap::with_capacity(graph.node_count());
        let mut predecessors: HashMap<NodeId, Option<NodeId>> =
            graph.nodes().map(|node| (node, None)).collect();

        distances.insert(source, W::zero());

        let mut frontier = Frontier::new();
        frontier.push(source, W::zero());

        let mut settled = 0usize;
        while let Some((active, dist_active)) = frontier.pop() {
            // A smaller distance was settled after this entry was queued
            if let Some(&best) = distances.get(&active) {
                if best < dist_active {
                    trace!("skipping stale frontier entry for node {}", active);
                    continue;
                }
            }
            settled += 1;

            for (neighbor, weight) in graph.neighbors(active) {
                let Some(candidate) = dist_active.checked_add(&weight) else {
                    continue;
                };

                let should_update = match distances.get(&neighbor) {
                    None => true,
                    Some(&best) => candidate < best,
                };

                if should_update {
                    distances.insert(neighbor, candidate);
                    predecessors.insert(neighbor, Some(active));
                    frontier.push(neighbor, candidate);
                }
            }
        }

        debug!(
            "settled {} of {} nodes from source {}",
            settled,
            graph.node_count(),
            source
        );

        // The source's zero distance is trivial and stays out of the mapping
        distances.remove(&source);

        Ok(ShortestPathResult {
            source,
            distances,
            predecessors,
        })
    }
}

use crate::graph::traits::{Graph, NodeId, Weight};
use crate::{Error, Result};
use log::debug;
use std::collections::{HashMap, HashSet};

/// An undirected weighted graph, frozen after construction.
///
/// Instances can only be created through [`GraphBuilder`]; there are no
/// mutation operations afterwards, so a graph may be shared freely across
/// concurrent shortest-path computations.
#[derive(Debug, Clone)]
pub struct UndirectedGraph<W>
where
    W: Weight,
{
    /// Node identifiers in insertion order
    node_ids: Vec<NodeId>,

    /// Adjacency table: node -> [(other endpoint, weight)], each undirected
    /// edge stored under both of its endpoints
    adjacency: HashMap<NodeId, Vec<(NodeId, W)>>,

    /// Number of undirected edges
    edge_count: usize,
}

impl<W> UndirectedGraph<W>
where
    W: Weight,
{
    /// Starts building a new graph
    pub fn builder() -> GraphBuilder<W> {
        GraphBuilder::new()
    }
}

impl<W> Graph<W> for UndirectedGraph<W>
where
    W: Weight,
{
    fn node_count(&self) -> usize {
        self.node_ids.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = NodeId> + '_> {
        Box::new(self.node_ids.iter().copied())
    }

    fn has_node(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    fn neighbors(&self, node: NodeId) -> Box<dyn Iterator<Item = (NodeId, W)> + '_> {
        if let Some(edges) = self.adjacency.get(&node) {
            Box::new(edges.iter().copied())
        } else {
            Box::new(std::iter::empty())
        }
    }
}

/// Append-only accumulator for [`UndirectedGraph`].
///
/// Nodes and edges are collected in any order; [`GraphBuilder::build`]
/// validates the edge set against the node set and freezes the graph.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder<W>
where
    W: Weight,
{
    node_ids: Vec<NodeId>,
    seen: HashSet<NodeId>,
    edges: Vec<(NodeId, NodeId, W)>,
}

impl<W> GraphBuilder<W>
where
    W: Weight,
{
    /// Creates a new empty builder
    pub fn new() -> Self {
        GraphBuilder {
            node_ids: Vec::new(),
            seen: HashSet::new(),
            edges: Vec::new(),
        }
    }

    /// Adds a node. Adding the same identifier twice is idempotent.
    pub fn add_node(&mut self, id: NodeId) -> &mut Self {
        if self.seen.insert(id) {
            self.node_ids.push(id);
        }
        self
    }

    /// Adds an undirected edge between `a` and `b` with the given weight.
    ///
    /// Parallel edges between the same pair are allowed and all of them are
    /// reported by adjacency lookups. Endpoints are validated in
    /// [`GraphBuilder::build`], not here.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId, weight: W) -> &mut Self {
        self.edges.push((a, b, weight));
        self
    }

    /// Validates the accumulated nodes and edges and freezes them into an
    /// [`UndirectedGraph`].
    ///
    /// Fails with [`Error::InvalidEdge`] when an edge endpoint does not name
    /// a declared node, or when an edge connects a node to itself.
    pub fn build(self) -> Result<UndirectedGraph<W>> {
        let mut adjacency: HashMap<NodeId, Vec<(NodeId, W)>> =
            HashMap::with_capacity(self.node_ids.len());
        for &id in &self.node_ids {
            adjacency.insert(id, Vec::new());
        }

        for &(a, b, weight) in &self.edges {
            if a == b || !self.seen.contains(&a) || !self.seen.contains(&b) {
                return Err(Error::InvalidEdge(a, b));
            }
            adjacency
                .get_mut(&a)
                .ok_or(Error::InvalidEdge(a, b))?
                .push((b, weight));
            adjacency
                .get_mut(&b)
                .ok_or(Error::InvalidEdge(a, b))?
                .push((a, weight));
        }

        debug!(
            "built graph with {} nodes and {} edges",
            self.node_ids.len(),
            self.edges.len()
        );

        Ok(UndirectedGraph {
            node_ids: self.node_ids,
            adjacency,
            edge_count: self.edges.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_node_ids_collapse() {
        let mut builder = GraphBuilder::<u32>::new();
        builder.add_node(1).add_node(1).add_node(2);
        let graph = builder.build().unwrap();
        assert_eq!(graph.node_count(), 2);
    }

    #[test]
    fn self_loop_is_rejected() {
        let mut builder = GraphBuilder::<u32>::new();
        builder.add_node(1).add_edge(1, 1, 3);
        assert_eq!(builder.build().unwrap_err(), Error::InvalidEdge(1, 1));
    }

    #[test]
    fn dangling_endpoint_is_rejected() {
        let mut builder = GraphBuilder::<u32>::new();
        builder.add_node(1).add_edge(1, 2, 3);
        assert_eq!(builder.build().unwrap_err(), Error::InvalidEdge(1, 2));
    }

    #[test]
    fn parallel_edges_are_all_reported() {
        let mut builder = GraphBuilder::<u32>::new();
        builder
            .add_node(1)
            .add_node(2)
            .add_edge(1, 2, 5)
            .add_edge(1, 2, 9);
        let graph = builder.build().unwrap();
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.neighbors(1).count(), 2);
        assert_eq!(graph.neighbors(2).count(), 2);
    }

    #[test]
    fn unknown_node_has_no_neighbors() {
        let mut builder = GraphBuilder::<u32>::new();
        builder.add_node(1);
        let graph = builder.build().unwrap();
        assert_eq!(graph.neighbors(42).count(), 0);
    }
}

use num_traits::{CheckedAdd, Zero};
use std::fmt::Debug;

/// Identifier of a node. Nodes are identity-only: two nodes are the same
/// node exactly when their identifiers are equal.
pub type NodeId = u32;

/// Bound for edge weights: non-negative integers with checked addition.
///
/// "Infinite" distances are never encoded as a sentinel value; absence of a
/// distance entry means unreached, and relaxation adds weights with
/// `checked_add` so an overflowing candidate is discarded instead of wrapping.
pub trait Weight: Copy + Ord + Zero + CheckedAdd + Debug {}

impl<W> Weight for W where W: Copy + Ord + Zero + CheckedAdd + Debug {}

/// Trait representing a weighted undirected graph
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the node identifiers
    fn nodes(&self) -> Box<dyn Iterator<Item = NodeId> + '_>;

    /// Returns true if the node exists in the graph
    fn has_node(&self, node: NodeId) -> bool;

    /// Returns an iterator over every edge touching `node`, resolved to the
    /// other endpoint and the edge weight, in no guaranteed order.
    ///
    /// Parallel edges yield one entry each. A node without edges, or a node
    /// that is not part of the graph, yields an empty iterator.
    fn neighbors(&self, node: NodeId) -> Box<dyn Iterator<Item = (NodeId, W)> + '_>;
}

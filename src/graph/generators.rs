use crate::graph::undirected::{GraphBuilder, UndirectedGraph};
use crate::graph::NodeId;
use rand::prelude::*;

/// Generates a connected random undirected graph with `n` nodes (ids `0..n`)
/// and `extra_edges` edges beyond the random spanning tree, with weights drawn
/// uniformly from `1..=max_weight`. Extra edges may parallel existing ones;
/// for `n == 1` there is no legal pair and `extra_edges` is ignored.
pub fn generate_random_connected(
    n: usize,
    extra_edges: usize,
    max_weight: u32,
) -> UndirectedGraph<u32> {
    assert!(n > 0, "n must be positive");
    assert!(max_weight > 0, "max_weight must be positive");

    let mut rng = rand::thread_rng();
    let mut builder = GraphBuilder::new();
    for id in 0..n as NodeId {
        builder.add_node(id);
    }

    // Random spanning tree: attach each node to an already attached one
    for id in 1..n as NodeId {
        let anchor = rng.gen_range(0..id);
        builder.add_edge(id, anchor, rng.gen_range(1..=max_weight));
    }

    // A single-node graph has no legal pair to carry an extra edge
    let mut added = 0;
    while added < extra_edges && n > 1 {
        let a = rng.gen_range(0..n as NodeId);
        let b = rng.gen_range(0..n as NodeId);
        if a != b {
            builder.add_edge(a, b, rng.gen_range(1..=max_weight));
            added += 1;
        }
    }

    builder
        .build()
        .expect("generated edges reference generated nodes")
}

/// Generates a `width` x `height` grid graph with unit weights, nodes
/// numbered row-major from 0.
pub fn generate_grid(width: usize, height: usize) -> UndirectedGraph<u32> {
    assert!(width > 0 && height > 0, "grid dimensions must be positive");

    let mut builder = GraphBuilder::new();
    for id in 0..(width * height) as NodeId {
        builder.add_node(id);
    }

    for y in 0..height {
        for x in 0..width {
            let node = (y * width + x) as NodeId;
            if x + 1 < width {
                builder.add_edge(node, node + 1, 1);
            }
            if y + 1 < height {
                builder.add_edge(node, node + width as NodeId, 1);
            }
        }
    }

    builder
        .build()
        .expect("generated edges reference generated nodes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn random_graph_has_requested_shape() {
        let graph = generate_random_connected(20, 10, 50);
        assert_eq!(graph.node_count(), 20);
        assert_eq!(graph.edge_count(), 19 + 10);
    }

    #[test]
    fn two_node_graph_accepts_extra_parallel_edges() {
        let graph = generate_random_connected(2, 3, 10);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1 + 3);
    }

    #[test]
    fn grid_graph_has_expected_edge_count() {
        let graph = generate_grid(4, 3);
        assert_eq!(graph.node_count(), 12);
        // 3 horizontal per row * 3 rows + 4 vertical per column pair * 2
        assert_eq!(graph.edge_count(), 3 * 3 + 4 * 2);
    }
}

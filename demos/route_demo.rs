use shortest_route::graph::Graph;
use shortest_route::{Dijkstra, GraphBuilder, NodeId, ShortestPathAlgorithm};

fn main() {
    env_logger::init();

    // Build the 9-node demonstration network
    let mut builder = GraphBuilder::new();
    for id in 1..=9 {
        builder.add_node(id);
    }

    let edges: [(NodeId, NodeId, u32); 15] = [
        (1, 2, 2),
        (1, 6, 7),
        (1, 7, 3),
        (2, 3, 4),
        (2, 7, 6),
        (3, 4, 2),
        (3, 9, 2),
        (4, 5, 1),
        (4, 9, 8),
        (5, 6, 6),
        (5, 8, 2),
        (6, 8, 5),
        (7, 8, 1),
        (7, 9, 3),
        (8, 9, 4),
    ];
    for (a, b, weight) in edges {
        builder.add_edge(a, b, weight);
    }
    let graph = builder.build().expect("demo graph is well formed");

    println!(
        "Graph has {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    let source = 1;
    let dijkstra = Dijkstra::new();
    let result = dijkstra
        .compute_shortest_paths(&graph, source)
        .expect("source belongs to the demo graph");

    println!("\nShortest distances from node {}:", source);
    for node in graph.nodes() {
        match result.distance(node) {
            None => println!("  Node {}: unreachable", node),
            Some(distance) => {
                let path = result
                    .reconstruct_path(node)
                    .expect("reached nodes have a route");
                println!("  Node {}: distance = {}, route = {:?}", node, distance, path);
            }
        }
    }
}

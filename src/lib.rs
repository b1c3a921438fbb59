//! Shortest Route - Single-Source Shortest Paths over Undirected Graphs
//!
//! This library computes single-source shortest paths (SSSP) over weighted,
//! undirected graphs with non-negative integer weights, and reconstructs
//! concrete routes from the computation's output.
//!
//! The caller builds an [`UndirectedGraph`] through a [`GraphBuilder`], runs
//! [`Dijkstra`] to obtain a [`ShortestPathResult`], and may then reconstruct
//! the route to any number of targets from that one result.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm, ShortestPathResult};
/// Re-export main types for convenient use
pub use graph::undirected::{GraphBuilder, UndirectedGraph};
pub use graph::NodeId;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid node ID: {0}")]
    InvalidNode(NodeId),

    #[error("Invalid edge: between {0} and {1}")]
    InvalidEdge(NodeId, NodeId),

    #[error("Source node not found in graph")]
    SourceNotFound,

    #[error("No path to node {0}")]
    NoPath(NodeId),

    #[error("Algorithm execution error: {0}")]
    AlgorithmError(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

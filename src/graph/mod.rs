pub mod generators;
pub mod traits;
pub mod undirected;

pub use traits::{Graph, NodeId, Weight};
pub use undirected::{GraphBuilder, UndirectedGraph};

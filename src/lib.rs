//! graph-walk — undirected graphs with depth-first and breadth-first traversal.
//!
//! A graph is built once from a node count and an edge list, then walked
//! from a start node. Walks only reach the start node's connected component
//! and follow neighbors in the order their edges were added.

pub mod cli;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::GraphFile;
pub use graph::{
    bfs, bfs_waves, build_graph, dfs, traverse, Graph, GraphBuilder, TraversalOrder, VisitedSet,
};
pub use types::{Edge, GraphError, GraphResult, NodeId};

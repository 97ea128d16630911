//! In-memory graph operations — the core data structure.

pub mod adjacency;
pub mod builder;
pub mod traversal;

pub use adjacency::Graph;
pub use builder::{build_graph, GraphBuilder};
pub use traversal::{bfs, bfs_waves, dfs, traverse, TraversalOrder, VisitedSet};

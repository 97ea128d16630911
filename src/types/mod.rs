//! All data types for the graph-walk library.

pub mod edge;
pub mod error;

pub use edge::Edge;
pub use error::{GraphError, GraphResult};

/// Node identifier. Nodes of a graph are the dense range `0..node_count`.
pub type NodeId = usize;

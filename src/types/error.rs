//! Error types for the graph-walk library.

use thiserror::Error;

/// All errors that can occur in the graph-walk library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Node count is negative.
    #[error("Invalid node count: {0} (must be >= 0)")]
    InvalidNodeCount(i64),

    /// An edge endpoint lies outside `[0, node_count)`.
    #[error("Edge {index} references invalid node {node} (graph has {node_count} nodes)")]
    InvalidEdgeEndpoint {
        index: usize,
        node: i64,
        node_count: usize,
    },

    /// Traversal start node lies outside `[0, node_count)`.
    #[error("Invalid start node {node} (graph has {node_count} nodes)")]
    InvalidStartNode { node: i64, node_count: usize },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed graph definition file.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A command-line value could not be interpreted.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl GraphError {
    /// True for errors caused by an invalid graph or start node.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidNodeCount(_)
                | Self::InvalidEdgeEndpoint { .. }
                | Self::InvalidStartNode { .. }
        )
    }
}

/// Convenience result type for graph-walk operations.
pub type GraphResult<T> = Result<T, GraphError>;

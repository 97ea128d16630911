//! The undirected edge struct.

use serde::{Deserialize, Serialize};

use super::NodeId;

/// An undirected edge. `source_id` and `target_id` are interchangeable;
/// the names only record the order the pair was given in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub source_id: NodeId,
    pub target_id: NodeId,
}

impl Edge {
    /// Create a new edge between two nodes.
    pub fn new(source_id: NodeId, target_id: NodeId) -> Self {
        Self {
            source_id,
            target_id,
        }
    }

    /// True if both endpoints are the same node.
    pub fn is_self_loop(&self) -> bool {
        self.source_id == self.target_id
    }
}

impl From<(NodeId, NodeId)> for Edge {
    fn from((source_id, target_id): (NodeId, NodeId)) -> Self {
        Self::new(source_id, target_id)
    }
}

impl From<[NodeId; 2]> for Edge {
    fn from([source_id, target_id]: [NodeId; 2]) -> Self {
        Self::new(source_id, target_id)
    }
}

impl From<&(NodeId, NodeId)> for Edge {
    fn from(&(source_id, target_id): &(NodeId, NodeId)) -> Self {
        Self::new(source_id, target_id)
    }
}

impl From<&[NodeId; 2]> for Edge {
    fn from(&[source_id, target_id]: &[NodeId; 2]) -> Self {
        Self::new(source_id, target_id)
    }
}

impl From<&Edge> for Edge {
    fn from(edge: &Edge) -> Self {
        *edge
    }
}

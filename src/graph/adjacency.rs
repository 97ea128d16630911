//! Core graph structure — adjacency lists indexed by node ID.

use std::fmt;

use crate::types::{Edge, GraphError, GraphResult, NodeId};

/// An undirected graph over the nodes `0..node_count`.
///
/// Each node owns an ordered neighbor list. Neighbors appear in the order
/// their edges were added; repeated edges and self-loops are kept as given.
/// The graph never changes after it is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    /// Neighbor lists, indexed by node ID.
    adjacency: Vec<Vec<NodeId>>,
    /// Number of edges the graph was built from.
    edge_count: usize,
}

impl Graph {
    /// Build a graph from a node count and an edge list.
    ///
    /// For each edge `(u, v)`, `v` is appended to the neighbors of `u` and
    /// `u` to the neighbors of `v`, in edge order. Fails on the first edge
    /// with an endpoint outside `0..node_count`.
    pub fn build<I, E>(node_count: usize, edges: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        let mut adjacency: Vec<Vec<NodeId>> = vec![Vec::new(); node_count];
        let mut edge_count = 0;

        for (index, edge) in edges.into_iter().enumerate() {
            let edge: Edge = edge.into();
            for node in [edge.source_id, edge.target_id] {
                if node >= node_count {
                    return Err(GraphError::InvalidEdgeEndpoint {
                        index,
                        node: i64::try_from(node).unwrap_or(i64::MAX),
                        node_count,
                    });
                }
            }
            adjacency[edge.source_id].push(edge.target_id);
            adjacency[edge.target_id].push(edge.source_id);
            edge_count += 1;
        }

        log::debug!("built graph: {} nodes, {} edges", node_count, edge_count);

        Ok(Self {
            adjacency,
            edge_count,
        })
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges, counting repeats and self-loops once each.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// True if `node` is in `0..node_count`.
    pub fn contains(&self, node: NodeId) -> bool {
        node < self.adjacency.len()
    }

    /// Neighbors of a node in insertion order. Empty for unknown nodes.
    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        self.adjacency
            .get(node)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Length of the neighbor list. A self-loop contributes 2.
    pub fn degree(&self, node: NodeId) -> usize {
        self.neighbors(node).len()
    }

    /// All neighbor lists, indexed by node ID.
    pub fn adjacency(&self) -> &[Vec<NodeId>] {
        &self.adjacency
    }

    /// Iterate `(node, neighbors)` pairs in node order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &[NodeId])> {
        self.adjacency
            .iter()
            .enumerate()
            .map(|(node, neighbors)| (node, neighbors.as_slice()))
    }

    /// Check that `start` can begin a traversal.
    pub(crate) fn check_start(&self, start: NodeId) -> GraphResult<()> {
        if self.contains(start) {
            Ok(())
        } else {
            Err(GraphError::InvalidStartNode {
                node: i64::try_from(start).unwrap_or(i64::MAX),
                node_count: self.node_count(),
            })
        }
    }
}

/// Renders as `{0: [1, 2], 1: [0], 2: [0]}`.
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (node, neighbors) in self.iter() {
            if node > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {:?}", node, neighbors)?;
        }
        write!(f, "}}")
    }
}

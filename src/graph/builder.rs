//! Fluent API for building Graph instances.

use crate::types::{Edge, GraphResult, NodeId};

use super::Graph;

/// Fluent builder for constructing a Graph.
///
/// Edges are only validated in [`GraphBuilder::build`], so a builder can be
/// filled in any order.
pub struct GraphBuilder {
    node_count: usize,
    edges: Vec<Edge>,
}

impl GraphBuilder {
    /// Create a builder for a graph with `node_count` nodes and no edges.
    pub fn new(node_count: usize) -> Self {
        Self {
            node_count,
            edges: Vec::new(),
        }
    }

    /// Add an undirected edge between two nodes.
    pub fn link(&mut self, source_id: NodeId, target_id: NodeId) -> &mut Self {
        self.edges.push(Edge::new(source_id, target_id));
        self
    }

    /// Add every edge from an iterator, in order.
    pub fn extend_edges<I, E>(&mut self, edges: I) -> &mut Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        self.edges.extend(edges.into_iter().map(Into::into));
        self
    }

    /// Number of edges added so far.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Build the final Graph.
    pub fn build(&self) -> GraphResult<Graph> {
        Graph::build(self.node_count, self.edges.iter().copied())
    }
}

/// Build a graph from a node count and an edge list.
///
/// Same as [`Graph::build`].
pub fn build_graph<I, E>(node_count: usize, edges: I) -> GraphResult<Graph>
where
    I: IntoIterator<Item = E>,
    E: Into<Edge>,
{
    Graph::build(node_count, edges)
}

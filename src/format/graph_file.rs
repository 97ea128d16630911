//! JSON graph definition files.
//!
//! ```json
//! { "nodes": 3, "edges": [[0, 1], [1, 2]], "start": 0 }
//! ```
//!
//! Values are read as signed integers so that a negative count or node ID
//! surfaces as a typed validation error rather than a parse failure.

use std::io::{Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::graph::Graph;
use crate::types::{Edge, GraphError, GraphResult, NodeId};

/// Node count used by [`GraphFile::demo`].
pub const DEMO_NODE_COUNT: i64 = 7;

/// Edge list used by [`GraphFile::demo`].
pub const DEMO_EDGES: [[i64; 2]; 8] = [
    [0, 1],
    [1, 3],
    [0, 2],
    [3, 4],
    [5, 1],
    [6, 1],
    [0, 5],
    [6, 3],
];

/// A graph definition as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphFile {
    /// Number of nodes; node IDs are `0..nodes`.
    pub nodes: i64,
    /// Undirected edges as `[u, v]` pairs.
    #[serde(default)]
    pub edges: Vec<[i64; 2]>,
    /// Default start node for traversals.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<i64>,
}

impl GraphFile {
    /// Create a definition from raw values.
    pub fn new(nodes: i64, edges: Vec<[i64; 2]>, start: Option<i64>) -> Self {
        Self {
            nodes,
            edges,
            start,
        }
    }

    /// The 7-node, 8-edge demonstration graph, starting at node 0.
    pub fn demo() -> Self {
        Self::new(DEMO_NODE_COUNT, DEMO_EDGES.to_vec(), Some(0))
    }

    /// Read a definition from a JSON file.
    pub fn read_from_file(path: &Path) -> GraphResult<Self> {
        let file = std::fs::File::open(path)?;
        Self::read_from(std::io::BufReader::new(file))
    }

    /// Read a definition from any reader.
    pub fn read_from(reader: impl Read) -> GraphResult<Self> {
        let file: Self = serde_json::from_reader(reader)?;
        log::debug!(
            "read graph definition: {} nodes, {} edges",
            file.nodes,
            file.edges.len()
        );
        Ok(file)
    }

    /// Write the definition to a JSON file.
    pub fn write_to_file(&self, path: &Path, pretty: bool) -> GraphResult<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        self.write_to(&mut writer, pretty)?;
        writer.flush()?;
        Ok(())
    }

    /// Write the definition to any writer.
    pub fn write_to(&self, writer: &mut impl Write, pretty: bool) -> GraphResult<()> {
        if pretty {
            serde_json::to_writer_pretty(&mut *writer, self)?;
        } else {
            serde_json::to_writer(&mut *writer, self)?;
        }
        writeln!(writer)?;
        Ok(())
    }

    /// Validated node count.
    pub fn node_count(&self) -> GraphResult<usize> {
        usize::try_from(self.nodes).map_err(|_| GraphError::InvalidNodeCount(self.nodes))
    }

    /// Validated edge list.
    pub fn to_edges(&self) -> GraphResult<Vec<Edge>> {
        let node_count = self.node_count()?;
        self.edges
            .iter()
            .enumerate()
            .map(|(index, &[u, v])| -> GraphResult<Edge> {
                let endpoint = |node: i64| {
                    checked_node(node, node_count).ok_or(GraphError::InvalidEdgeEndpoint {
                        index,
                        node,
                        node_count,
                    })
                };
                Ok(Edge::new(endpoint(u)?, endpoint(v)?))
            })
            .collect()
    }

    /// Build the graph this file describes.
    pub fn to_graph(&self) -> GraphResult<Graph> {
        Graph::build(self.node_count()?, self.to_edges()?)
    }

    /// Resolve the traversal start node: `requested` if given, else the
    /// file's `start`, else node 0.
    pub fn start_node(&self, requested: Option<i64>) -> GraphResult<NodeId> {
        let node_count = self.node_count()?;
        let node = requested.or(self.start).unwrap_or(0);
        checked_node(node, node_count).ok_or(GraphError::InvalidStartNode { node, node_count })
    }
}

/// Convert a raw node ID, returning None unless it is in `0..node_count`.
fn checked_node(node: i64, node_count: usize) -> Option<NodeId> {
    usize::try_from(node).ok().filter(|&n| n < node_count)
}

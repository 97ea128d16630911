//! Graph definition file tests: JSON parsing, validation, file round-trips.

use std::io::Cursor;

use graph_walk::format::{GraphFile, DEMO_EDGES, DEMO_NODE_COUNT};
use graph_walk::graph::{bfs, dfs};
use graph_walk::types::GraphError;
use tempfile::NamedTempFile;

fn parse(json: &str) -> Result<GraphFile, GraphError> {
    GraphFile::read_from(Cursor::new(json))
}

// ==================== Parsing Tests ====================

#[test]
fn test_parse_full_definition() {
    let file = parse(r#"{"nodes": 3, "edges": [[0, 1], [1, 2]], "start": 2}"#).unwrap();
    assert_eq!(file.nodes, 3);
    assert_eq!(file.edges, vec![[0, 1], [1, 2]]);
    assert_eq!(file.start, Some(2));

    let graph = file.to_graph().unwrap();
    assert_eq!(graph.neighbors(1), &[0, 2]);
    assert_eq!(file.start_node(None).unwrap(), 2);
}

#[test]
fn test_edges_and_start_optional() {
    let file = parse(r#"{"nodes": 4}"#).unwrap();
    assert!(file.edges.is_empty());
    assert_eq!(file.start, None);
    assert_eq!(file.start_node(None).unwrap(), 0);
    assert_eq!(file.to_graph().unwrap().edge_count(), 0);
}

#[test]
fn test_requested_start_overrides_file() {
    let file = parse(r#"{"nodes": 3, "edges": [], "start": 1}"#).unwrap();
    assert_eq!(file.start_node(Some(2)).unwrap(), 2);
}

#[test]
fn test_malformed_json() {
    assert!(matches!(parse(r#"{"nodes": "#), Err(GraphError::Json(_))));
    assert!(matches!(
        parse(r#"{"edges": [[0, 1]]}"#),
        Err(GraphError::Json(_))
    ));
}

// ==================== Validation Tests ====================

#[test]
fn test_negative_node_count() {
    let file = GraphFile::new(-1, vec![], None);
    assert!(matches!(
        file.to_graph(),
        Err(GraphError::InvalidNodeCount(-1))
    ));
    assert!(matches!(
        file.start_node(None),
        Err(GraphError::InvalidNodeCount(-1))
    ));
}

#[test]
fn test_negative_endpoint() {
    let file = GraphFile::new(3, vec![[0, 1], [2, -1]], None);
    match file.to_graph() {
        Err(GraphError::InvalidEdgeEndpoint {
            index,
            node,
            node_count,
        }) => {
            assert_eq!(index, 1);
            assert_eq!(node, -1);
            assert_eq!(node_count, 3);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_endpoint_past_end() {
    let file = GraphFile::new(2, vec![[0, 2]], None);
    assert!(matches!(
        file.to_edges(),
        Err(GraphError::InvalidEdgeEndpoint { node: 2, .. })
    ));
}

#[test]
fn test_invalid_start() {
    let file = GraphFile::new(3, vec![], Some(3));
    assert!(matches!(
        file.start_node(None),
        Err(GraphError::InvalidStartNode {
            node: 3,
            node_count: 3
        })
    ));
    assert!(matches!(
        file.start_node(Some(-4)),
        Err(GraphError::InvalidStartNode { node: -4, .. })
    ));
}

#[test]
fn test_empty_graph_has_no_valid_start() {
    let file = GraphFile::new(0, vec![], None);
    assert_eq!(file.to_graph().unwrap().node_count(), 0);
    assert!(file.start_node(None).is_err());
}

// ==================== Demo Graph ====================

#[test]
fn test_demo_definition() {
    let file = GraphFile::demo();
    assert_eq!(file.nodes, DEMO_NODE_COUNT);
    assert_eq!(file.edges, DEMO_EDGES.to_vec());

    let graph = file.to_graph().unwrap();
    let start = file.start_node(None).unwrap();
    assert_eq!(dfs(&graph, start).unwrap(), vec![0, 1, 3, 4, 6, 5, 2]);
    assert_eq!(bfs(&graph, start).unwrap(), vec![0, 1, 2, 5, 3, 6, 4]);
}

// ==================== File Round-trip ====================

#[test]
fn test_write_and_read_file() {
    let tmp = NamedTempFile::new().unwrap();
    let original = GraphFile::demo();

    for pretty in [false, true] {
        original.write_to_file(tmp.path(), pretty).unwrap();
        let loaded = GraphFile::read_from_file(tmp.path()).unwrap();
        assert_eq!(loaded, original);
    }
}

#[test]
fn test_start_omitted_when_absent() {
    let mut buf = Vec::new();
    GraphFile::new(2, vec![[0, 1]], None)
        .write_to(&mut buf, false)
        .unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert_eq!(text.trim_end(), r#"{"nodes":2,"edges":[[0,1]]}"#);
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = GraphFile::read_from_file(&dir.path().join("missing.json"));
    assert!(matches!(result, Err(GraphError::Io(_))));
}

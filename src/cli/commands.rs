//! CLI command implementations.
//!
//! Each `render_*` function builds the text a command prints, so output can
//! be checked without capturing stdout. The `cmd_*` functions load input,
//! render, and print.

use std::path::Path;

use serde::Serialize;

use crate::format::GraphFile;
use crate::graph::{bfs, bfs_waves, dfs, traverse, Graph, TraversalOrder};
use crate::types::{GraphResult, NodeId};

/// Summary numbers for `gwalk stats`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub nodes: usize,
    pub edges: usize,
    pub isolated_nodes: usize,
    pub self_loops: usize,
    pub max_degree: usize,
    /// None for an empty graph with no requested start.
    pub start: Option<NodeId>,
    pub reachable_from_start: usize,
}

impl GraphStats {
    /// Compute statistics for a graph and an optional traversal start node.
    pub fn collect(graph: &Graph, start: Option<NodeId>) -> GraphResult<Self> {
        let reachable_from_start = match start {
            Some(start) => dfs(graph, start)?.len(),
            None => 0,
        };
        let self_loops = graph
            .iter()
            .map(|(node, neighbors)| neighbors.iter().filter(|&&n| n == node).count())
            .sum::<usize>()
            / 2;

        Ok(Self {
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            isolated_nodes: graph.iter().filter(|(_, n)| n.is_empty()).count(),
            self_loops,
            max_degree: graph.iter().map(|(_, n)| n.len()).max().unwrap_or(0),
            start,
            reachable_from_start,
        })
    }
}

/// Adjacency as a JSON object keyed by node ID.
fn adjacency_json(graph: &Graph) -> serde_json::Value {
    let map: serde_json::Map<String, serde_json::Value> = graph
        .iter()
        .map(|(node, neighbors)| (node.to_string(), serde_json::json!(neighbors)))
        .collect();
    serde_json::Value::Object(map)
}

/// Render the graph alone.
pub fn render_graph(graph: &Graph, json: bool) -> String {
    if json {
        serde_json::json!({
            "nodes": graph.node_count(),
            "edges": graph.edge_count(),
            "graph": adjacency_json(graph),
        })
        .to_string()
    } else {
        format!("Graph:  {}", graph)
    }
}

/// Render one traversal result.
pub fn render_order(order: TraversalOrder, start: NodeId, visited: &[NodeId], json: bool) -> String {
    if json {
        serde_json::json!({
            "order": order.name(),
            "start": start,
            "visited": visited,
        })
        .to_string()
    } else {
        format!("{}:  {:?}", order.name().to_uppercase(), visited)
    }
}

/// Render BFS waves, one line per wave in text mode.
pub fn render_waves(start: NodeId, waves: &[Vec<NodeId>], json: bool) -> String {
    if json {
        serde_json::json!({
            "order": TraversalOrder::BreadthFirst.name(),
            "start": start,
            "waves": waves,
        })
        .to_string()
    } else {
        waves
            .iter()
            .enumerate()
            .map(|(i, wave)| format!("Wave {}:  {:?}", i, wave))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Render the three-line report: graph, DFS order, BFS order.
pub fn render_report(graph: &Graph, start: NodeId, json: bool) -> GraphResult<String> {
    let dfs_res = dfs(graph, start)?;
    let bfs_res = bfs(graph, start)?;

    if json {
        let report = serde_json::json!({
            "graph": adjacency_json(graph),
            "start": start,
            "dfs": dfs_res,
            "bfs": bfs_res,
        });
        Ok(serde_json::to_string_pretty(&report)?)
    } else {
        Ok(format!(
            "{}\n{}\n{}",
            render_graph(graph, false),
            render_order(TraversalOrder::DepthFirst, start, &dfs_res, false),
            render_order(TraversalOrder::BreadthFirst, start, &bfs_res, false),
        ))
    }
}

/// Render graph statistics.
pub fn render_stats(stats: &GraphStats, json: bool) -> GraphResult<String> {
    if json {
        return Ok(serde_json::to_string_pretty(stats)?);
    }
    Ok([
        format!("Nodes: {}", stats.nodes),
        format!("Edges: {}", stats.edges),
        format!("Isolated nodes: {}", stats.isolated_nodes),
        format!("Self-loops: {}", stats.self_loops),
        format!("Max degree: {}", stats.max_degree),
        match stats.start {
            Some(start) => format!(
                "Reachable from {}: {}/{}",
                start, stats.reachable_from_start, stats.nodes
            ),
            None => format!(
                "Reachable: {}/{} (no start node)",
                stats.reachable_from_start, stats.nodes
            ),
        },
    ]
    .join("\n"))
}

/// Load a graph file without touching its start node.
fn load_graph(path: &Path) -> GraphResult<(GraphFile, Graph)> {
    let file = GraphFile::read_from_file(path)?;
    let graph = file.to_graph()?;
    Ok((file, graph))
}

/// Load a graph file and resolve the traversal start node.
fn load(path: &Path, start: Option<i64>) -> GraphResult<(Graph, NodeId)> {
    let (file, graph) = load_graph(path)?;
    let start = file.start_node(start)?;
    Ok((graph, start))
}

/// Run the built-in demonstration graph.
pub fn cmd_demo(json: bool) -> GraphResult<()> {
    let file = GraphFile::demo();
    let graph = file.to_graph()?;
    let start = file.start_node(None)?;
    println!("{}", render_report(&graph, start, json)?);
    Ok(())
}

/// Write the demonstration graph to a JSON file.
pub fn cmd_init(path: &Path, pretty: bool) -> GraphResult<()> {
    GraphFile::demo().write_to_file(path, pretty)?;
    println!("Created {}", path.display());
    Ok(())
}

/// Print a graph's adjacency.
pub fn cmd_show(path: &Path, json: bool) -> GraphResult<()> {
    let (_, graph) = load_graph(path)?;
    println!("{}", render_graph(&graph, json));
    Ok(())
}

/// Run a single traversal.
pub fn cmd_walk(
    path: &Path,
    start: Option<i64>,
    order: TraversalOrder,
    json: bool,
) -> GraphResult<()> {
    let (graph, start) = load(path, start)?;
    let visited = traverse(&graph, start, order)?;
    println!("{}", render_order(order, start, &visited, json));
    Ok(())
}

/// Run BFS and print its waves.
pub fn cmd_waves(path: &Path, start: Option<i64>, json: bool) -> GraphResult<()> {
    let (graph, start) = load(path, start)?;
    let waves = bfs_waves(&graph, start)?;
    println!("{}", render_waves(start, &waves, json));
    Ok(())
}

/// Print the graph followed by both traversals.
pub fn cmd_traverse(path: &Path, start: Option<i64>, json: bool) -> GraphResult<()> {
    let (graph, start) = load(path, start)?;
    println!("{}", render_report(&graph, start, json)?);
    Ok(())
}

/// Print graph statistics.
///
/// An empty graph has no start node; unless one is requested explicitly,
/// reachability is reported as 0.
pub fn cmd_stats(path: &Path, start: Option<i64>, json: bool) -> GraphResult<()> {
    let (file, graph) = load_graph(path)?;
    let start = if start.is_none() && graph.node_count() == 0 {
        None
    } else {
        Some(file.start_node(start)?)
    };
    let stats = GraphStats::collect(&graph, start)?;
    println!("{}", render_stats(&stats, json)?);
    Ok(())
}

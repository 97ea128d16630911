//! Graph traversal algorithms (DFS, BFS).
//!
//! Both walks start from a single node and only reach its connected
//! component. Neighbors are followed in stored adjacency order, and every
//! call owns its own visited markers.

use std::collections::VecDeque;

use crate::types::{GraphError, GraphResult, NodeId};

use super::Graph;

/// Order in which a traversal visits nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// Pre-order depth-first search.
    DepthFirst,
    /// Level-order breadth-first search.
    BreadthFirst,
}

impl TraversalOrder {
    /// Return a short name for this order.
    pub fn name(&self) -> &'static str {
        match self {
            Self::DepthFirst => "dfs",
            Self::BreadthFirst => "bfs",
        }
    }

    /// Parse an order from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "dfs" | "depth_first" | "depthfirst" => Some(Self::DepthFirst),
            "bfs" | "breadth_first" | "breadthfirst" => Some(Self::BreadthFirst),
            _ => None,
        }
    }
}

impl std::str::FromStr for TraversalOrder {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
            .ok_or_else(|| GraphError::InvalidArgument(format!("unknown traversal order: {s}")))
    }
}

/// Per-call visited markers, one flag per node.
#[derive(Debug, Clone)]
pub struct VisitedSet {
    marks: Vec<bool>,
    count: usize,
}

impl VisitedSet {
    /// Create a set sized for `node_count` nodes, all unvisited.
    pub fn new(node_count: usize) -> Self {
        Self {
            marks: vec![false; node_count],
            count: 0,
        }
    }

    /// Mark a node visited. Returns false if it already was, or if `node`
    /// is outside the range the set was created for.
    pub fn insert(&mut self, node: NodeId) -> bool {
        match self.marks.get_mut(node) {
            Some(mark) if !*mark => {
                *mark = true;
                self.count += 1;
                true
            }
            _ => false,
        }
    }

    /// True if the node has been visited.
    pub fn contains(&self, node: NodeId) -> bool {
        self.marks.get(node).copied().unwrap_or(false)
    }

    /// Number of visited nodes.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Depth-first traversal from `start`, returning nodes in visit order.
///
/// Uses an explicit stack, so deep graphs cannot overflow the call stack.
/// Neighbors are pushed in reverse and the visited check happens on pop,
/// which reproduces the order of a recursive walk that checks on entry.
pub fn dfs(graph: &Graph, start: NodeId) -> GraphResult<Vec<NodeId>> {
    graph.check_start(start)?;

    let mut visited = VisitedSet::new(graph.node_count());
    let mut order = Vec::new();
    walk_depth_first(graph, start, &mut visited, &mut order);

    log::debug!(
        "dfs from {}: visited {} of {} nodes",
        start,
        order.len(),
        graph.node_count()
    );
    Ok(order)
}

fn walk_depth_first(
    graph: &Graph,
    start: NodeId,
    visited: &mut VisitedSet,
    order: &mut Vec<NodeId>,
) {
    let mut stack: Vec<NodeId> = vec![start];

    while let Some(node) = stack.pop() {
        if !visited.insert(node) {
            continue;
        }
        order.push(node);
        stack.extend(graph.neighbors(node).iter().rev().copied());
    }
}

/// Breadth-first traversal from `start`, returning nodes in visit order.
pub fn bfs(graph: &Graph, start: NodeId) -> GraphResult<Vec<NodeId>> {
    Ok(bfs_waves(graph, start)?.into_iter().flatten().collect())
}

/// Breadth-first traversal grouped by wave.
///
/// Each wave drains exactly the nodes queued when it began. The result
/// holds, per wave, the nodes visited for the first time in it; waves that
/// find nothing new are left out. Flattening the waves gives [`bfs`].
pub fn bfs_waves(graph: &Graph, start: NodeId) -> GraphResult<Vec<Vec<NodeId>>> {
    graph.check_start(start)?;

    let mut visited = VisitedSet::new(graph.node_count());
    let waves = walk_breadth_first(graph, start, &mut visited);

    log::debug!(
        "bfs from {}: visited {} of {} nodes in {} waves",
        start,
        visited.len(),
        graph.node_count(),
        waves.len()
    );
    Ok(waves)
}

fn walk_breadth_first(graph: &Graph, start: NodeId, visited: &mut VisitedSet) -> Vec<Vec<NodeId>> {
    let mut waves: Vec<Vec<NodeId>> = Vec::new();
    let mut queue: VecDeque<NodeId> = VecDeque::from([start]);

    while !queue.is_empty() {
        let wave_size = queue.len();
        let mut wave = Vec::new();

        for _ in 0..wave_size {
            let Some(node) = queue.pop_front() else {
                break;
            };
            if !visited.insert(node) {
                continue;
            }
            wave.push(node);
            queue.extend(graph.neighbors(node).iter().copied());
        }

        log::trace!("bfs wave {}: {} queued, {:?} new", waves.len(), wave_size, wave);
        if !wave.is_empty() {
            waves.push(wave);
        }
    }

    waves
}

/// Run the traversal selected by `order`.
pub fn traverse(graph: &Graph, start: NodeId, order: TraversalOrder) -> GraphResult<Vec<NodeId>> {
    match order {
        TraversalOrder::DepthFirst => dfs(graph, start),
        TraversalOrder::BreadthFirst => bfs(graph, start),
    }
}

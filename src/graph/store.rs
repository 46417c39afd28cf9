use std::fmt;

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::{DirectedGraph, GraphError, NodeName, Weight};

/// Index of a node in the graph arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub usize);

/// Index of a directed edge in the graph arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub usize);

#[derive(Debug, Clone, PartialEq)]
struct Node {
    name: NodeName,
    /// Outgoing edges owned by this node, in insertion order.
    edges: Vec<EdgeId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Edge {
    to: VertexId,
    weight: Weight,
}

/// In-memory directed graph of named nodes and weighted edges.
///
/// Nodes live in a dense arena and edges reference them by index, so queries never need
/// to mutate the graph: all the per-query state is owned by the query itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    names: FxHashMap<NodeName, VertexId>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph made of the given nodes and without any edge.
    pub fn from_nodes<N: Into<NodeName>>(names: impl IntoIterator<Item = N>) -> Self {
        let mut graph = Self::new();
        for name in names {
            graph.add_node(name);
        }
        graph
    }

    /// Inserts a node with the given name and returns its vertex.
    ///
    /// Adding a name that already exists replaces the node: its outgoing edges are dropped
    /// while its vertex is kept, so edges entering it from other nodes remain valid.
    pub fn add_node(&mut self, name: impl Into<NodeName>) -> VertexId {
        let name = name.into();

        if let Some(&vertex) = self.names.get(&name) {
            debug!("Replacing node {name}");
            self.clear_exiting_edges(vertex);
            return vertex;
        }

        let vertex = VertexId(self.nodes.len());
        self.nodes.push(Node {
            name: name.clone(),
            edges: vec![],
        });
        self.names.insert(name, vertex);
        vertex
    }

    /// Adds the directed edge `from -> to`, and `to -> from` as well if bidirectional.
    /// Both nodes must already belong to the graph, parallel edges are allowed.
    pub fn add_edge(
        &mut self,
        from: impl Into<NodeName>,
        to: impl Into<NodeName>,
        weight: Weight,
        bidirectional: bool,
    ) -> Result<(), GraphError> {
        let from = self.resolve(from.into())?;
        let to = self.resolve(to.into())?;

        self.push_edge(from, to, weight);
        if bidirectional {
            self.push_edge(to, from, weight);
        }

        Ok(())
    }

    /// Adds all the edges `(from, to, weight, bidirectional)` in order.
    /// Stops at the first edge that references a node not in the graph, the edges added
    /// before it are kept.
    pub fn extend_edges<F, T>(
        &mut self,
        edges: impl IntoIterator<Item = (F, T, Weight, bool)>,
    ) -> Result<(), GraphError>
    where
        F: Into<NodeName>,
        T: Into<NodeName>,
    {
        edges
            .into_iter()
            .try_for_each(|(from, to, weight, bidirectional)| {
                self.add_edge(from, to, weight, bidirectional)
            })
    }

    /// Returns true if at least one edge goes from `from` to `to`.
    /// Returns false if any of the two nodes doesn't belong to the graph.
    pub fn has_edge(&self, from: impl Into<NodeName>, to: impl Into<NodeName>) -> bool {
        self.edge_weight(from, to).is_some()
    }

    /// Gets the smallest weight among the edges going from `from` to `to`.
    pub fn edge_weight(
        &self,
        from: impl Into<NodeName>,
        to: impl Into<NodeName>,
    ) -> Option<Weight> {
        let from = self.vertex(from)?;
        let to = self.vertex(to)?;
        self.cheapest_edge(from, to).and_then(|e| self.get_edge_weight(e))
    }

    /// Gets the vertex of the node with the given name.
    pub fn vertex(&self, name: impl Into<NodeName>) -> Option<VertexId> {
        self.names.get(&name.into()).copied()
    }

    pub fn contains(&self, name: impl Into<NodeName>) -> bool {
        self.vertex(name).is_some()
    }

    /// Gets the name of the node at the given vertex.
    pub fn vertex_name(&self, vertex: VertexId) -> Option<&NodeName> {
        self.nodes.get(vertex.0).map(|node| &node.name)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of directed edges, a bidirectional edge counts twice.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|node| node.edges.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Gets an iterator over all the nodes in insertion order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = NodeView<'_>> {
        self.nodes.iter().map(|node| NodeView { graph: self, node })
    }

    /// Gets the edge with the smallest weight going from `from` to `to`.
    pub(crate) fn cheapest_edge(&self, from: VertexId, to: VertexId) -> Option<EdgeId> {
        self.vertex_exiting_edges(from)
            .filter(|&(_, v)| v == to)
            .filter_map(|(e, _)| self.get_edge_weight(e).map(|w| (w, e)))
            .min()
            .map(|(_, e)| e)
    }

    pub(crate) fn resolve(&self, name: NodeName) -> Result<VertexId, GraphError> {
        match self.names.get(&name) {
            Some(&vertex) => Ok(vertex),
            None => {
                warn!("Node {name} not found");
                Err(GraphError::InvalidReference(name))
            }
        }
    }

    fn push_edge(&mut self, from: VertexId, to: VertexId, weight: Weight) {
        let edge = EdgeId(self.edges.len());
        self.edges.push(Edge { to, weight });
        self.nodes[from.0].edges.push(edge);
    }

    fn clear_exiting_edges(&mut self, vertex: VertexId) {
        // edges stay in the arena but are no longer reachable from any node
        if let Some(node) = self.nodes.get_mut(vertex.0) {
            node.edges.clear();
        }
    }
}

impl DirectedGraph for Graph {
    type VertexId = VertexId;
    type EdgeId = EdgeId;

    fn get_edge_end_vertex(&self, edge: Self::EdgeId) -> Option<Self::VertexId> {
        self.edges.get(edge.0).map(|e| e.to)
    }

    fn get_edge_weight(&self, edge: Self::EdgeId) -> Option<Weight> {
        self.edges.get(edge.0).map(|e| e.weight)
    }

    fn vertex_exiting_edges(
        &self,
        vertex: Self::VertexId,
    ) -> impl Iterator<Item = (Self::EdgeId, Self::VertexId)> {
        self.nodes
            .get(vertex.0)
            .into_iter()
            .flat_map(|node| &node.edges)
            .map(|&e| (e, self.edges[e.0].to))
    }
}

/// Read-only view of a node and its outgoing edges.
#[derive(Debug, Clone, Copy)]
pub struct NodeView<'a> {
    graph: &'a Graph,
    node: &'a Node,
}

impl<'a> NodeView<'a> {
    pub fn name(&self) -> &'a NodeName {
        &self.node.name
    }

    /// Gets an iterator over the outgoing edges of the node, in insertion order.
    /// For each edge returns the name of the target node and the edge weight.
    pub fn edges(&self) -> impl Iterator<Item = (&'a NodeName, Weight)> + use<'a> {
        let (graph, node) = (self.graph, self.node);
        node.edges.iter().map(move |e| {
            let Edge { to, weight } = graph.edges[e.0];
            (&graph.nodes[to.0].name, weight)
        })
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in self.nodes() {
            write!(f, "Node {} ->", node.name())?;
            for (i, (target, weight)) in node.edges().enumerate() {
                let separator = if i == 0 { " " } else { ", " };
                write!(f, "{separator}{target}({weight})")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    fn triangle() -> Graph {
        let mut graph = Graph::from_nodes(["A", "B", "C"]);
        graph
            .extend_edges([
                ("A", "B", Weight::new(1), false),
                ("B", "C", Weight::new(2), false),
                ("A", "C", Weight::new(4), false),
            ])
            .unwrap();
        graph
    }

    #[test]
    fn graph_add_node_001() {
        let mut graph = Graph::new();
        assert!(graph.is_empty());

        let a = graph.add_node("a");
        let b = graph.add_node("B");

        assert_eq!(a, VertexId(0));
        assert_eq!(b, VertexId(1));
        assert_eq!(graph.node_count(), 2);
        assert!(graph.contains("A"));
        assert!(graph.contains("b"));
        assert!(!graph.contains("C"));
        assert_eq!(graph.vertex_name(a).unwrap(), "A");
    }

    #[test]
    fn graph_add_node_002() {
        let mut graph = triangle();
        assert_eq!(graph.edge_count(), 3);

        // last write wins: the replaced node loses its outgoing edges
        let a = graph.add_node("A");
        assert_eq!(a, VertexId(0));
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.vertex_out_degree(a), 0);
        assert!(!graph.has_edge("A", "B"));
        assert!(graph.has_edge("B", "C"));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn graph_add_node_003() {
        let mut graph = Graph::from_nodes(["A", "B"]);
        graph.add_edge("B", "A", Weight::new(7), false).unwrap();

        // edges entering a replaced node are kept
        graph.add_node("A");
        assert_eq!(graph.edge_weight("B", "A"), Some(Weight::new(7)));
    }

    #[test]
    fn graph_add_edge_001() {
        let graph = triangle();

        assert!(graph.has_edge("A", "B"));
        assert!(graph.has_edge("B", "C"));
        assert!(graph.has_edge("A", "C"));
        assert!(!graph.has_edge("B", "A"));
        assert!(!graph.has_edge("C", "A"));
        assert_eq!(graph.vertex_out_degree(VertexId(0)), 2);
    }

    #[test]
    fn graph_add_edge_002() {
        let mut graph = Graph::from_nodes(["A", "B"]);
        graph.add_edge("A", "B", Weight::new(5), true).unwrap();

        assert_eq!(graph.edge_weight("A", "B"), Some(Weight::new(5)));
        assert_eq!(graph.edge_weight("B", "A"), Some(Weight::new(5)));
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn graph_add_edge_003() {
        let mut graph = Graph::from_nodes(["A", "B"]);

        assert_eq!(
            graph.add_edge("A", "Z", Weight::new(1), true),
            Err(GraphError::InvalidReference(NodeName::new("Z")))
        );
        assert_eq!(
            graph.add_edge("Y", "B", Weight::new(1), false),
            Err(GraphError::InvalidReference(NodeName::new("Y")))
        );
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn graph_add_edge_004() {
        let mut graph = Graph::from_nodes(["A", "B"]);
        graph.add_edge("A", "B", Weight::new(9), false).unwrap();
        graph.add_edge("a", "b", Weight::new(3), false).unwrap();

        // parallel edges are allowed, the cheapest one is reported
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.edge_weight("A", "B"), Some(Weight::new(3)));
    }

    #[test]
    fn graph_extend_edges_001() {
        let mut graph = Graph::from_nodes(["A", "B"]);
        let result = graph.extend_edges([
            ("A", "B", Weight::new(1), false),
            ("B", "X", Weight::new(1), false),
            ("B", "A", Weight::new(1), false),
        ]);

        assert_eq!(
            result,
            Err(GraphError::InvalidReference(NodeName::new("X")))
        );
        assert!(graph.has_edge("A", "B"));
        assert!(!graph.has_edge("B", "A"));
    }

    #[test]
    fn graph_has_edge_001() {
        let graph = triangle();
        assert!(!graph.has_edge("X", "A"));
        assert!(!graph.has_edge("A", "X"));
        assert!(graph.has_edge("a", "c"));
    }

    #[test]
    fn graph_nodes_001() {
        let graph = triangle();

        let nodes: Vec<(String, Vec<(String, u64)>)> = graph
            .nodes()
            .map(|node| {
                let edges = node
                    .edges()
                    .map(|(target, weight)| (target.to_string(), weight.value()))
                    .collect();
                (node.name().to_string(), edges)
            })
            .collect();

        assert_eq!(
            nodes,
            vec![
                ("A".into(), vec![("B".into(), 1), ("C".into(), 4)]),
                ("B".into(), vec![("C".into(), 2)]),
                ("C".into(), vec![]),
            ]
        );
    }

    #[test]
    fn graph_display_001() {
        let graph = triangle();
        assert_eq!(
            graph.to_string(),
            "Node A -> B(1), C(4)\nNode B -> C(2)\nNode C ->\n"
        );
    }

    #[test]
    fn graph_edge_vertices_001() {
        let graph = triangle();
        let (edge, end) = graph.vertex_exiting_edges(VertexId(1)).next().unwrap();

        assert_eq!(graph.get_edge_end_vertex(edge), Some(end));
        assert_eq!(graph.get_edge_weight(edge), Some(Weight::new(2)));
        assert_eq!(graph.get_edge_weight(EdgeId(42)), None);
        assert_eq!(graph.vertex_exiting_edges(VertexId(42)).count(), 0);
    }
}

use std::fmt::Debug;
use std::hash::Hash;

use crate::Weight;

/// Directed weighted graph.
/// Exposes the behavior the shortest path engine runs on, and is implemented by [`Graph`].
///
/// [`Graph`]: crate::Graph
pub trait DirectedGraph {
    /// Uniquely identify a vertex that belongs to the graph.
    type VertexId: Debug + Copy + Ord + Hash;
    /// Uniquely identify a directed edge that belongs to the graph.
    type EdgeId: Debug + Copy + Ord + Hash;

    /// Gets the end vertex of the directed edge.
    fn get_edge_end_vertex(&self, edge: Self::EdgeId) -> Option<Self::VertexId>;

    /// Gets the weight of the directed edge.
    fn get_edge_weight(&self, edge: Self::EdgeId) -> Option<Weight>;

    /// Gets an iterator over all the outgoing edges from the given vertex.
    /// For each edge returns the edge ID and the edge end vertex.
    /// Returns an empty iterator if the vertex doesn't belong to the graph.
    fn vertex_exiting_edges(
        &self,
        vertex: Self::VertexId,
    ) -> impl Iterator<Item = (Self::EdgeId, Self::VertexId)>;

    /// Returns the total number of edges exiting the vertex.
    fn vertex_out_degree(&self, vertex: Self::VertexId) -> usize {
        self.vertex_exiting_edges(vertex).count()
    }
}

pub mod dijkstra;
pub mod path;
pub mod store;

use crate::{DirectedGraph, Weight};

/// Route found by the shortest path engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Path<VertexId> {
    /// Total weight of the edges along the path.
    pub length: Weight,
    /// Vertices from origin to destination, both included.
    pub vertices: Vec<VertexId>,
}

impl<VertexId> Path<VertexId> {
    pub fn origin(&self) -> Option<&VertexId> {
        self.vertices.first()
    }

    pub fn destination(&self) -> Option<&VertexId> {
        self.vertices.last()
    }
}

/// Returns true only if all the vertices of the path are sequentially connected by an edge
/// in the given graph.
pub fn is_path_connected<G: DirectedGraph>(graph: &G, path: &[G::VertexId]) -> bool {
    path.windows(2).all(|window| {
        let [v1, v2] = [window[0], window[1]];
        graph.vertex_exiting_edges(v1).any(|(_, v)| v == v2)
    })
}

/// Gets the total weight of the path when following the cheapest edge between each pair of
/// consecutive vertices. Returns None if the path is not connected or if the total overflows.
pub fn path_weight<G: DirectedGraph>(graph: &G, path: &[G::VertexId]) -> Option<Weight> {
    path.windows(2).try_fold(Weight::ZERO, |total, window| {
        let [v1, v2] = [window[0], window[1]];
        let weight = graph
            .vertex_exiting_edges(v1)
            .filter(|&(_, v)| v == v2)
            .filter_map(|(e, _)| graph.get_edge_weight(e))
            .min()?;
        total.checked_add(weight)
    })
}

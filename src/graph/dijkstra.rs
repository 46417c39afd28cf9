use std::hash::Hash;

use rustc_hash::FxHashMap;

/// Unpacks the shortest path from destination back to origin.
/// The returned vertices are ordered from origin to destination (both included).
pub fn unpack_path<VertexId: Copy + Eq + Hash>(
    previous_map: &FxHashMap<VertexId, VertexId>,
    destination: VertexId,
) -> Vec<VertexId> {
    let mut vertices = vec![destination];
    let mut next = destination;

    while let Some(&v) = previous_map.get(&next) {
        next = v;
        vertices.push(v);
    }

    vertices.reverse();
    vertices
}

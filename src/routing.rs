use std::cmp::Reverse;

use radix_heap::RadixHeapMap;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, trace};

use crate::graph::dijkstra::unpack_path;
use crate::{DirectedGraph, Graph, GraphError, NodeName, Path, Weight};

#[derive(Debug, Clone, Copy)]
pub struct ShortestPathConfig {
    /// Stop the search as soon as the destination is finalized.
    /// The result is the same as running until the frontier is exhausted since a finalized
    /// vertex can never be improved when all the weights are non-negative.
    pub early_exit: bool,
    /// Paths longer than this are not explored, and the destination is considered unreachable.
    pub max_weight: Weight,
}

impl Default for ShortestPathConfig {
    fn default() -> Self {
        Self {
            early_exit: true,
            max_weight: Weight::MAX,
        }
    }
}

/// Computes the shortest path from origin to destination with Dijkstra's algorithm.
/// Returns None if the destination cannot be reached from the origin.
///
/// The frontier has no decrease-key operation: a vertex is pushed again every time a shorter
/// distance is found, and the stale entries are skipped when popped after the vertex has been
/// finalized. All the search state is local to the call.
pub fn shortest_path<G: DirectedGraph>(
    config: &ShortestPathConfig,
    graph: &G,
    origin: G::VertexId,
    destination: G::VertexId,
) -> Option<Path<G::VertexId>> {
    debug!("Computing shortest path {origin:?} -> {destination:?} with {config:?}");

    // (current) shortest distance from origin to this vertex, missing means infinite
    let mut shortest_distances = FxHashMap::from_iter([(origin, Weight::ZERO)]);

    // previous vertex (value) on the current best known path from origin to this vertex (key)
    let mut previous_map: FxHashMap<G::VertexId, G::VertexId> = FxHashMap::default();

    // vertices whose shortest distance from origin is known
    let mut finalized: FxHashSet<G::VertexId> = FxHashSet::default();

    // max heap of discovered vertices that may need to be visited, keyed by reversed distance
    let mut frontier = RadixHeapMap::from_iter([(Reverse(Weight::ZERO.value()), origin)]);

    while let Some((Reverse(distance), vertex)) = frontier.pop() {
        if !finalized.insert(vertex) {
            // stale entry, a shorter distance was already popped
            continue;
        }

        if vertex == destination && config.early_exit {
            break;
        }

        let distance = Weight::from_total(distance);

        for (edge, vertex_to) in graph.vertex_exiting_edges(vertex) {
            if finalized.contains(&vertex_to) {
                continue;
            }

            let Some(weight) = graph.get_edge_weight(edge) else {
                continue;
            };

            let Some(candidate) = distance.checked_add(weight) else {
                continue;
            };

            if candidate > config.max_weight {
                continue;
            }

            let shortest_distance = shortest_distances.get(&vertex_to).copied();

            // check if we can follow the current path to reach the neighbor in a cheaper way
            if shortest_distance.is_none_or(|shortest| candidate < shortest) {
                trace!("Relax {vertex_to:?} via {vertex:?}: {shortest_distance:?} -> {candidate}");
                shortest_distances.insert(vertex_to, candidate);
                previous_map.insert(vertex_to, vertex);
                frontier.push(Reverse(candidate.value()), vertex_to);
            }
        }
    }

    let Some(&length) = shortest_distances.get(&destination) else {
        debug!("No path found {origin:?} -> {destination:?}");
        return None;
    };

    let vertices = unpack_path(&previous_map, destination);
    debug!("Found path of length {length}: {vertices:?}");

    Some(Path { length, vertices })
}

/// Outcome of a shortest path query between two named nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResult {
    /// Names of the nodes from source to destination, both included.
    /// Empty if the destination cannot be reached.
    pub node_names: Vec<String>,
    /// Sum of the edge weights along the path, or [`PathResult::UNREACHABLE`] if there is no path.
    pub distance: i64,
}

impl PathResult {
    pub const UNREACHABLE: i64 = -1;

    pub const fn unreachable() -> Self {
        Self {
            node_names: vec![],
            distance: Self::UNREACHABLE,
        }
    }

    pub const fn is_reachable(&self) -> bool {
        self.distance != Self::UNREACHABLE
    }
}

impl Graph {
    /// Finds the shortest path between two named nodes.
    /// Fails if any of the two nodes doesn't belong to the graph, while a destination that
    /// cannot be reached is reported by [`PathResult::unreachable`].
    pub fn shortest_path(
        &self,
        source: impl Into<NodeName>,
        destination: impl Into<NodeName>,
    ) -> Result<PathResult, GraphError> {
        self.shortest_path_with(&ShortestPathConfig::default(), source, destination)
    }

    /// Same as [`Graph::shortest_path`] with a custom configuration.
    pub fn shortest_path_with(
        &self,
        config: &ShortestPathConfig,
        source: impl Into<NodeName>,
        destination: impl Into<NodeName>,
    ) -> Result<PathResult, GraphError> {
        let origin = self.resolve(source.into())?;
        let destination = self.resolve(destination.into())?;

        let Some(path) = shortest_path(config, self, origin, destination) else {
            return Ok(PathResult::unreachable());
        };

        let node_names = path
            .vertices
            .iter()
            .filter_map(|&v| self.vertex_name(v))
            .map(|name| name.to_string())
            .collect();

        Ok(PathResult {
            node_names,
            distance: path.length.into(),
        })
    }
}

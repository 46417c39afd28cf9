#![doc = include_str!("../README.md")]

mod error;
mod graph;
mod model;
mod routing;

pub use error::GraphError;
pub use graph::DirectedGraph;
pub use graph::path::{Path, is_path_connected, path_weight};
pub use graph::store::{EdgeId, Graph, NodeView, VertexId};
pub use model::{NodeName, Weight};
pub use routing::{PathResult, ShortestPathConfig, shortest_path};

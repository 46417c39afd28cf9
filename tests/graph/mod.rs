use std::sync::LazyLock;

use waypath::{Graph, Weight};

/// Nine nodes A to I, all edges are bidirectional except E -> B.
pub static DEFAULT_GRAPH: LazyLock<Graph> = LazyLock::new(|| {
    let mut graph = Graph::from_nodes(["A", "B", "C", "D", "E", "F", "G", "H", "I"]);

    graph
        .extend_edges([
            ("A", "B", Weight::new(4), true),
            ("A", "C", Weight::new(6), true),
            ("C", "D", Weight::new(8), true),
            ("D", "E", Weight::new(4), true),
            ("D", "G", Weight::new(1), true),
            ("E", "F", Weight::new(3), true),
            ("F", "B", Weight::new(2), true),
            ("F", "H", Weight::new(6), true),
            ("G", "H", Weight::new(5), true),
            ("G", "F", Weight::new(4), true),
            ("E", "I", Weight::new(8), true),
            ("G", "I", Weight::new(5), true),
            ("E", "B", Weight::new(2), false),
        ])
        .unwrap();

    graph
});

/// A -> B (1), B -> C (2), A -> C (4).
pub static TRIANGLE_GRAPH: LazyLock<Graph> = LazyLock::new(|| {
    let mut graph = Graph::from_nodes(["A", "B", "C"]);

    graph
        .extend_edges([
            ("A", "B", Weight::new(1), false),
            ("B", "C", Weight::new(2), false),
            ("A", "C", Weight::new(4), false),
        ])
        .unwrap();

    graph
});

use ricochet_core::{ExpansionStrategy, Graph, Traversal, TraversalBuilder};

/// Builds a traversal with the given strategy and cutoff on the global pool.
pub fn traversal(strategy: ExpansionStrategy, cutoff: usize) -> Traversal {
    TraversalBuilder::new()
        .with_strategy(strategy)
        .with_cutoff(cutoff)
        .build()
        .expect("cutoff is positive")
}

/// Builds a graph of `size` vertices from an edge slice.
pub fn graph_from_edges(size: usize, edges: &[(usize, usize)]) -> Graph {
    let mut graph = Graph::new(size).expect("size is positive");
    for &(u, v) in edges {
        graph.add_edge(u, v).expect("edge endpoints are in range");
    }
    graph
}

/// Source `0` joined to `width` middle vertices, each joined to the target
/// `width + 1`, so the second frontier is `width` vertices wide.
pub fn wide_fan(width: usize) -> Graph {
    let target = width + 1;
    let mut graph = Graph::new(width + 2).expect("size is positive");
    for middle in 1..=width {
        graph.add_edge(0, middle).expect("hub edge in range");
        graph.add_edge(middle, target).expect("sink edge in range");
    }
    graph
}

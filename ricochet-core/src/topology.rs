//! Fixed demo topologies for exercising the traversal engine.
//!
//! Real puzzle graphs are produced elsewhere and fed in as edge lists; these
//! constructors only build regular shapes with known distances.

use crate::{error::GraphError, graph::Graph};

/// Builds an N-dimensional grid with `sides[k]` vertices along axis `k`.
///
/// Vertex identifiers use mixed-radix order with axis 0 varying fastest, so in
/// a `[3, 3, 3]` lattice vertex `0` touches `1`, `3` and `9`. Every row runs in
/// the same direction: vertex `3` sits above `0`, not above `2`.
///
/// # Errors
/// Returns [`GraphError::InvalidSize`] when `sides` is empty or any side is
/// zero, and [`GraphError::SizeOverflow`] when the vertex count does not fit in
/// `usize`.
///
/// # Examples
/// ```
/// use ricochet_core::topology::lattice;
///
/// let cube = lattice(&[3, 3, 3])?;
/// assert_eq!(cube.len(), 27);
/// assert_eq!(cube.edge_count(), 54);
/// assert!(cube.contains_edge(0, 9)?);
/// # Ok::<(), ricochet_core::GraphError>(())
/// ```
pub fn lattice(sides: &[usize]) -> Result<Graph, GraphError> {
    if sides.is_empty() || sides.contains(&0) {
        return Err(GraphError::InvalidSize { got: 0 });
    }
    let size = sides
        .iter()
        .try_fold(1_usize, |acc, &side| acc.checked_mul(side))
        .ok_or(GraphError::SizeOverflow {
            dimensions: sides.len(),
        })?;

    let mut graph = Graph::new(size)?;
    let mut stride = 1;
    for &side in sides {
        for vertex in 0..size {
            let coordinate = (vertex / stride) % side;
            if coordinate + 1 < side {
                graph.add_edge(vertex, vertex + stride)?;
            }
        }
        stride *= side;
    }
    Ok(graph)
}

/// Builds a `width` × `height` grid.
///
/// # Errors
/// Same as [`lattice`].
///
/// # Examples
/// ```
/// use ricochet_core::topology::grid;
///
/// let grid = grid(3, 3)?;
/// assert_eq!(grid.edge_count(), 12);
/// # Ok::<(), ricochet_core::GraphError>(())
/// ```
pub fn grid(width: usize, height: usize) -> Result<Graph, GraphError> {
    lattice(&[width, height])
}

/// Builds the `dimensions`-dimensional hypercube: `2^dimensions` vertices,
/// adjacent when their identifiers differ in exactly one bit.
///
/// # Errors
/// Returns [`GraphError::SizeOverflow`] when `2^dimensions` does not fit in
/// `usize`.
///
/// # Examples
/// ```
/// use ricochet_core::topology::hypercube;
///
/// let cube = hypercube(3)?;
/// assert_eq!(cube.len(), 8);
/// assert_eq!(cube.degree(5)?, 3);
/// # Ok::<(), ricochet_core::GraphError>(())
/// ```
pub fn hypercube(dimensions: usize) -> Result<Graph, GraphError> {
    let size = u32::try_from(dimensions)
        .ok()
        .and_then(|shift| 1_usize.checked_shl(shift))
        .ok_or(GraphError::SizeOverflow { dimensions })?;

    let mut graph = Graph::new(size)?;
    for vertex in 0..size {
        for bit in 0..dimensions {
            let neighbour = vertex ^ (1 << bit);
            if vertex < neighbour {
                graph.add_edge(vertex, neighbour)?;
            }
        }
    }
    Ok(graph)
}

/// Builds a cycle `0 - 1 - … - (len - 1) - 0`.
///
/// Lengths below three collapse to a single edge or a lone vertex, since the
/// graph holds neither duplicate edges nor self-loops.
///
/// # Errors
/// Returns [`GraphError::InvalidSize`] when `len` is zero.
///
/// # Examples
/// ```
/// use ricochet_core::topology::cycle;
///
/// let ring = cycle(4)?;
/// assert!(ring.contains_edge(3, 0)?);
/// assert_eq!(ring.edge_count(), 4);
/// # Ok::<(), ricochet_core::GraphError>(())
/// ```
pub fn cycle(len: usize) -> Result<Graph, GraphError> {
    let mut graph = Graph::new(len)?;
    for vertex in 0..len {
        graph.add_edge(vertex, (vertex + 1) % len)?;
    }
    Ok(graph)
}

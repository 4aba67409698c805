//! Strategy builders for BFS property-based tests.
//!
//! Graphs are generated from a proptest-chosen [`Shape`] and seed, so a failing
//! case is reproducible from the pair alone.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{graph::Graph, topology};

use super::types::{BfsFixture, Shape};

/// Minimum vertex count for random graphs.
const MIN_VERTICES: usize = 2;
/// Maximum vertex count for sparse and disconnected graphs.
const MAX_VERTICES: usize = 96;
/// Maximum vertex count for dense graphs.
const DENSE_MAX_VERTICES: usize = 32;
/// Maximum width of the middle layer of a fan.
const MAX_FAN_WIDTH: usize = 256;

/// Generates fixtures covering every [`Shape`].
pub(super) fn bfs_fixture_strategy() -> impl Strategy<Value = BfsFixture> {
    (any::<Shape>(), any::<u64>()).prop_map(|(shape, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(shape, &mut rng)
    })
}

/// Generates a fixture for an explicit shape.
pub(super) fn generate_fixture(shape: Shape, rng: &mut SmallRng) -> BfsFixture {
    match shape {
        Shape::Sparse => {
            let size = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
            let probability = 4.0 / size as f64;
            random_query(random_graph(size, probability.min(1.0), rng), shape, rng)
        }
        Shape::Dense => {
            let size = rng.gen_range(MIN_VERTICES..=DENSE_MAX_VERTICES);
            let probability = rng.gen_range(0.5..0.95);
            random_query(random_graph(size, probability, rng), shape, rng)
        }
        Shape::Disconnected => generate_disconnected(rng),
        Shape::Lattice => generate_lattice(rng),
        Shape::Fan => generate_fan(rng),
    }
}

fn connect(graph: &mut Graph, u: usize, v: usize) {
    graph
        .add_edge(u, v)
        .unwrap_or_else(|err| panic!("generated edge ({u}, {v}) must be valid: {err}"));
}

fn empty_graph(size: usize) -> Graph {
    Graph::new(size).unwrap_or_else(|err| panic!("generated size {size} must be valid: {err}"))
}

fn random_graph(size: usize, probability: f64, rng: &mut SmallRng) -> Graph {
    let mut graph = empty_graph(size);
    for u in 0..size {
        for v in (u + 1)..size {
            if rng.gen_bool(probability) {
                connect(&mut graph, u, v);
            }
        }
    }
    graph
}

fn random_query(graph: Graph, shape: Shape, rng: &mut SmallRng) -> BfsFixture {
    let source = rng.gen_range(0..graph.len());
    let target = rng.gen_range(0..graph.len());
    BfsFixture {
        graph,
        source,
        target,
        shape,
    }
}

/// Two random components `[0, split)` and `[split, size)`; the query crosses
/// between them.
fn generate_disconnected(rng: &mut SmallRng) -> BfsFixture {
    let size = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let split = rng.gen_range(1..size);
    let probability = (6.0 / size as f64).min(1.0);
    let mut graph = empty_graph(size);
    for (start, end) in [(0, split), (split, size)] {
        for u in start..end {
            for v in (u + 1)..end {
                if rng.gen_bool(probability) {
                    connect(&mut graph, u, v);
                }
            }
        }
    }
    BfsFixture {
        graph,
        source: rng.gen_range(0..split),
        target: rng.gen_range(split..size),
        shape: Shape::Disconnected,
    }
}

fn generate_lattice(rng: &mut SmallRng) -> BfsFixture {
    let axes = rng.gen_range(1..=3);
    let sides: Vec<usize> = (0..axes).map(|_| rng.gen_range(1..=6)).collect();
    let graph = topology::lattice(&sides)
        .unwrap_or_else(|err| panic!("generated sides {sides:?} must be valid: {err}"));
    random_query(graph, Shape::Lattice, rng)
}

/// Hub `0` reaches every middle vertex; hub `1` is reached from a random subset
/// of them. The middle layer forms a single wide frontier.
fn generate_fan(rng: &mut SmallRng) -> BfsFixture {
    let width = rng.gen_range(1..=MAX_FAN_WIDTH);
    let mut graph = empty_graph(width + 2);
    for middle in 2..width + 2 {
        connect(&mut graph, 0, middle);
        if rng.gen_bool(0.2) {
            connect(&mut graph, middle, 1);
        }
        if middle + 1 < width + 2 && rng.gen_bool(0.1) {
            connect(&mut graph, middle, middle + 1);
        }
    }
    BfsFixture {
        graph,
        source: 0,
        target: 1,
        shape: Shape::Fan,
    }
}

impl Arbitrary for Shape {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        prop_oneof![
            3 => Just(Self::Sparse),
            1 => Just(Self::Dense),
            2 => Just(Self::Disconnected),
            2 => Just(Self::Lattice),
            3 => Just(Self::Fan),
        ]
        .boxed()
    }
}

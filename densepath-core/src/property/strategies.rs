//! Seeded graph fixtures for the cross-validation properties.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::graph::AdjacencyMatrix;

/// Smallest generated vertex count.
const MIN_NODES: usize = 2;
/// Largest generated vertex count; dense fixtures grow quadratically.
const MAX_NODES: usize = 24;

/// A symmetric, non-negative-weight graph in both input representations.
///
/// The matrix and the edge list describe the same graph, so results computed
/// from either must agree.
#[derive(Debug)]
pub(super) struct SymmetricFixture {
    pub(super) matrix: AdjacencyMatrix,
}

/// Generates symmetric graphs with varied density, including sparse ones
/// that are frequently disconnected.
pub(super) fn symmetric_fixture() -> impl Strategy<Value = SymmetricFixture> {
    any::<u64>().prop_map(|seed| {
        let mut rng = SmallRng::seed_from_u64(seed);
        let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
        let edge_probability: f64 = rng.gen_range(0.05..=0.9);
        generate_symmetric(&mut rng, node_count, edge_probability)
    })
}

/// Generates graphs guaranteed to have at least two components, by building
/// two internally connected blocks with no cross-block edges.
pub(super) fn split_fixture() -> impl Strategy<Value = SymmetricFixture> {
    any::<u64>().prop_map(|seed| {
        let mut rng = SmallRng::seed_from_u64(seed);
        let left = rng.gen_range(1..=MAX_NODES / 2);
        let right = rng.gen_range(1..=MAX_NODES / 2);
        let node_count = left + right;
        let mut matrix = empty_matrix(node_count);
        connect_block(&mut rng, &mut matrix, 0, left);
        connect_block(&mut rng, &mut matrix, left, right);
        SymmetricFixture { matrix }
    })
}

fn generate_symmetric(
    rng: &mut SmallRng,
    node_count: usize,
    edge_probability: f64,
) -> SymmetricFixture {
    let mut matrix = empty_matrix(node_count);
    for source in 0..node_count {
        for target in (source + 1)..node_count {
            if rng.gen_bool(edge_probability) {
                set_symmetric(&mut matrix, source, target, rng.gen_range(0..=100));
            }
        }
    }
    SymmetricFixture { matrix }
}

/// Wires a contiguous block of vertices into one component: a random chain
/// for guaranteed connectivity plus a few probabilistic extras.
fn connect_block(rng: &mut SmallRng, matrix: &mut AdjacencyMatrix, offset: usize, size: usize) {
    for index in 1..size {
        let weight = rng.gen_range(0..=100);
        set_symmetric(matrix, offset + index - 1, offset + index, weight);
    }
    for source in 0..size {
        for target in (source + 1)..size {
            if rng.gen_bool(0.2) {
                let weight = rng.gen_range(0..=100);
                set_symmetric(matrix, offset + source, offset + target, weight);
            }
        }
    }
}

fn empty_matrix(node_count: usize) -> AdjacencyMatrix {
    AdjacencyMatrix::new(node_count).expect("generated vertex counts are positive")
}

fn set_symmetric(matrix: &mut AdjacencyMatrix, source: usize, target: usize, weight: i64) {
    matrix
        .set(source, target, weight)
        .expect("generated endpoints and weights are in range");
    matrix
        .set(target, source, weight)
        .expect("generated endpoints and weights are in range");
}

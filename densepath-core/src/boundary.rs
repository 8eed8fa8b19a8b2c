//! Float marshalling layer for hosts that exchange numbers as `f64`.
//!
//! The engines compute on exact integers; hosts such as scripting runtimes
//! typically carry every number as a 64-bit float. This module is the single
//! adaptation layer between the two conventions: inbound values must be
//! integral and no larger in magnitude than the [`INFINITY`] sentinel
//! (which, at `10^18`, is exactly representable in `f64` and round-trips
//! unchanged), and outbound distances and totals convert back losslessly.
//! Matrices cross the boundary as flat row-major slices; vertices are
//! 0-indexed on both sides.
//!
//! "No spanning tree" crosses the boundary as `None` so it can never be
//! mistaken for a numeric total.

use crate::{
    bellman_ford::bellman_ford,
    dijkstra::dijkstra,
    error::GraphError,
    graph::{AdjacencyMatrix, GraphEdge},
    kruskal::kruskal,
    prim::prim,
    result::MstOutcome,
    weight::{INFINITY, Weight},
};

/// An error raised while marshalling host values into engine inputs.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum BoundaryError {
    /// A host value was not an integral number within sentinel magnitude.
    #[error("value {value} is not representable as an exact edge weight")]
    NotRepresentable {
        /// The rejected host value.
        value: f64,
    },
    /// A flat matrix slice did not hold `node_count * node_count` entries.
    #[error("matrix payload has {len} entries, expected {expected}")]
    LengthMismatch {
        /// Number of entries the payload actually holds.
        len: usize,
        /// Number of entries a square matrix requires.
        expected: usize,
    },
    /// The marshalled input failed engine validation.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Host-facing edge triple: `(source, target, weight)`.
pub type HostEdge = (usize, usize, f64);

/// Reports whether any present off-diagonal matrix entry is negative.
///
/// # Errors
/// Returns [`BoundaryError`] for a malformed payload.
pub fn detect_negative_weight(node_count: usize, matrix: &[f64]) -> Result<bool, BoundaryError> {
    Ok(matrix_from_flat(node_count, matrix)?.has_negative_edge())
}

/// Runs [`dijkstra`] on a flat `f64` matrix, returning `f64` distances.
///
/// Unreachable vertices report the sentinel value `1e18`.
///
/// # Errors
/// Returns [`BoundaryError`] for a malformed payload or an out-of-range
/// source.
///
/// # Examples
/// ```
/// use densepath_core::boundary::shortest_paths_greedy;
///
/// let inf = 1e18;
/// let matrix = [0.0, 2.0, inf, 2.0, 0.0, 3.0, inf, 3.0, 0.0];
/// let distances = shortest_paths_greedy(3, 0, &matrix)?;
/// assert_eq!(distances, vec![0.0, 2.0, 5.0]);
/// # Ok::<(), densepath_core::boundary::BoundaryError>(())
/// ```
pub fn shortest_paths_greedy(
    node_count: usize,
    source: usize,
    matrix: &[f64],
) -> Result<Vec<f64>, BoundaryError> {
    let matrix = matrix_from_flat(node_count, matrix)?;
    let paths = dijkstra(&matrix, source)?;
    Ok(distances_to_host(paths.distances()))
}

/// Runs [`bellman_ford`] on host edge triples, returning `f64` distances.
///
/// # Errors
/// Returns [`BoundaryError`] for a malformed payload or an out-of-range
/// source.
pub fn shortest_paths_relaxation(
    node_count: usize,
    source: usize,
    edges: &[HostEdge],
) -> Result<Vec<f64>, BoundaryError> {
    let edges = edges_from_host(edges)?;
    let paths = bellman_ford(node_count, &edges, source)?;
    Ok(distances_to_host(paths.distances()))
}

/// Runs [`kruskal`] on host edge triples.
///
/// Returns the total weight, or `None` when no spanning tree exists.
///
/// # Errors
/// Returns [`BoundaryError`] for a malformed payload.
pub fn minimum_spanning_tree_sorted(
    node_count: usize,
    edges: &[HostEdge],
) -> Result<Option<f64>, BoundaryError> {
    let edges = edges_from_host(edges)?;
    Ok(total_to_host(&kruskal(node_count, &edges)?))
}

/// Runs [`prim`] on a flat `f64` matrix.
///
/// Returns the total weight, or `None` when no spanning tree exists.
///
/// # Errors
/// Returns [`BoundaryError`] for a malformed payload.
pub fn minimum_spanning_tree_greedy(
    node_count: usize,
    matrix: &[f64],
) -> Result<Option<f64>, BoundaryError> {
    let matrix = matrix_from_flat(node_count, matrix)?;
    Ok(total_to_host(&prim(&matrix)))
}

fn weight_from_host(value: f64) -> Result<Weight, BoundaryError> {
    let in_range = value.is_finite() && value.fract() == 0.0 && value.abs() <= INFINITY as f64;
    if !in_range {
        return Err(BoundaryError::NotRepresentable { value });
    }
    Ok(value as Weight)
}

fn matrix_from_flat(node_count: usize, values: &[f64]) -> Result<AdjacencyMatrix, BoundaryError> {
    let expected = node_count * node_count;
    if values.len() != expected {
        return Err(BoundaryError::LengthMismatch {
            len: values.len(),
            expected,
        });
    }
    let mut matrix = AdjacencyMatrix::new(node_count)?;
    for (index, &value) in values.iter().enumerate() {
        let source = index / node_count;
        let target = index % node_count;
        if source != target {
            matrix.set(source, target, weight_from_host(value)?)?;
        }
    }
    Ok(matrix)
}

fn edges_from_host(edges: &[HostEdge]) -> Result<Vec<GraphEdge>, BoundaryError> {
    edges
        .iter()
        .map(|&(source, target, weight)| {
            Ok(GraphEdge::new(source, target, weight_from_host(weight)?))
        })
        .collect()
}

fn distances_to_host(distances: &[Weight]) -> Vec<f64> {
    distances.iter().map(|&distance| distance as f64).collect()
}

fn total_to_host(outcome: &MstOutcome) -> Option<f64> {
    outcome.total_weight().map(|total| total as f64)
}

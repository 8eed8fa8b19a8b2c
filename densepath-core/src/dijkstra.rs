//! Single-source shortest paths via greedy vertex selection.

use tracing::instrument;

use crate::{
    error::{GraphError, Result},
    graph::AdjacencyMatrix,
    result::ShortestPaths,
    weight::{INFINITY, Weight, relaxed_add},
};

/// Computes single-source shortest paths with Dijkstra's algorithm.
///
/// Repeatedly selects the unvisited vertex with the smallest tentative
/// distance (ties go to the lowest vertex id, so output is deterministic),
/// relaxes its outgoing matrix row, and stops once every reachable vertex is
/// visited. Unreachable vertices report [`INFINITY`]. O(n²): the linear
/// min-scan is intentional at the dense sizes this crate targets.
///
/// The caller must have checked
/// [`AdjacencyMatrix::has_negative_edge`] first: behaviour on
/// negative weights is unspecified (the run terminates and does not panic,
/// but distances may be wrong). Use [`bellman_ford`](crate::bellman_ford)
/// for graphs with negative edges.
///
/// # Errors
/// Returns [`GraphError::SourceOutOfRange`] when `source` is not a vertex of
/// the matrix.
///
/// # Examples
/// ```
/// use densepath_core::{AdjacencyMatrix, INFINITY, dijkstra};
///
/// let matrix = AdjacencyMatrix::from_rows(&[
///     vec![0, 1, INFINITY, 10],
///     vec![1, 0, 2, INFINITY],
///     vec![INFINITY, 2, 0, 1],
///     vec![10, INFINITY, 1, 0],
/// ])?;
/// let paths = dijkstra(&matrix, 0)?;
/// assert_eq!(paths.distances(), &[0, 1, 3, 4]);
/// # Ok::<(), densepath_core::GraphError>(())
/// ```
#[instrument(
    name = "engine.dijkstra",
    err,
    skip(matrix),
    fields(node_count = matrix.node_count(), source = source)
)]
pub fn dijkstra(matrix: &AdjacencyMatrix, source: usize) -> Result<ShortestPaths> {
    let node_count = matrix.node_count();
    if source >= node_count {
        return Err(GraphError::SourceOutOfRange {
            vertex: source,
            node_count,
        });
    }

    let mut distances = vec![INFINITY; node_count];
    let mut predecessors = vec![None; node_count];
    let mut visited = vec![false; node_count];
    distances[source] = 0;

    for _ in 0..node_count {
        let Some(current) = nearest_unvisited(&distances, &visited) else {
            break;
        };
        visited[current] = true;

        for (target, &weight) in matrix.row(current).iter().enumerate() {
            let candidate = relaxed_add(distances[current], weight);
            if candidate < distances[target] {
                distances[target] = candidate;
                predecessors[target] = Some(current);
            }
        }
    }

    Ok(ShortestPaths::new(source, distances, predecessors))
}

/// Returns the unvisited vertex with the smallest finite tentative distance.
///
/// The strict comparison makes the lowest vertex id win ties, and returns
/// `None` once only unreachable vertices remain.
fn nearest_unvisited(distances: &[Weight], visited: &[bool]) -> Option<usize> {
    let mut best = INFINITY;
    let mut nearest = None;
    for (vertex, &distance) in distances.iter().enumerate() {
        if !visited[vertex] && distance < best {
            best = distance;
            nearest = Some(vertex);
        }
    }
    nearest
}

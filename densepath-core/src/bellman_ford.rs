//! Single-source shortest paths via iterative edge relaxation.

use tracing::instrument;

use crate::{
    error::{GraphError, Result},
    graph::{GraphEdge, validate_edges},
    result::ShortestPaths,
    weight::{INFINITY, is_reachable, relaxed_add},
};

/// Computes single-source shortest paths with the Bellman-Ford algorithm.
///
/// Relaxes every edge in list order, exactly `node_count - 1` times — the
/// standard bound guaranteeing convergence when no negative cycle is
/// reachable from the source. Negative edge weights are permitted; this is
/// the engine to use when [`AdjacencyMatrix::has_negative_edge`]
/// reports `true`. Unreachable vertices report [`INFINITY`].
///
/// Negative cycles are not detected: if one is reachable from the source,
/// the distances of affected vertices are simply the best found within the
/// relaxation bound, with no optimality guarantee.
///
/// [`AdjacencyMatrix::has_negative_edge`]: crate::AdjacencyMatrix::has_negative_edge
///
/// # Errors
/// Returns [`GraphError::EmptyGraph`] when `node_count` is zero,
/// [`GraphError::SourceOutOfRange`] when the source is not a vertex, and
/// [`GraphError::InvalidNodeId`] / [`GraphError::WeightOutOfRange`] for
/// malformed edges.
///
/// # Examples
/// ```
/// use densepath_core::{GraphEdge, bellman_ford};
///
/// let edges = [
///     GraphEdge::new(0, 1, 4),
///     GraphEdge::new(0, 2, 5),
///     GraphEdge::new(1, 2, -3),
/// ];
/// let paths = bellman_ford(3, &edges, 0)?;
/// assert_eq!(paths.distances(), &[0, 4, 1]);
/// # Ok::<(), densepath_core::GraphError>(())
/// ```
#[instrument(
    name = "engine.bellman_ford",
    err,
    skip(edges),
    fields(node_count = node_count, edge_count = edges.len(), source = source)
)]
pub fn bellman_ford(
    node_count: usize,
    edges: &[GraphEdge],
    source: usize,
) -> Result<ShortestPaths> {
    validate_edges(node_count, edges)?;
    if source >= node_count {
        return Err(GraphError::SourceOutOfRange {
            vertex: source,
            node_count,
        });
    }

    let mut distances = vec![INFINITY; node_count];
    let mut predecessors = vec![None; node_count];
    distances[source] = 0;

    for _ in 1..node_count {
        for edge in edges {
            if !is_reachable(distances[edge.source()]) {
                continue;
            }
            let candidate = relaxed_add(distances[edge.source()], edge.weight());
            if candidate < distances[edge.target()] {
                distances[edge.target()] = candidate;
                predecessors[edge.target()] = Some(edge.source());
            }
        }
    }

    Ok(ShortestPaths::new(source, distances, predecessors))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::error::GraphError;
    use crate::graph::GraphEdge;
    use crate::weight::INFINITY;

    use super::bellman_ford;

    fn edge(source: usize, target: usize, weight: i64) -> GraphEdge {
        GraphEdge::new(source, target, weight)
    }

    #[rstest]
    #[case::empty_graph(0, 0, GraphError::EmptyGraph)]
    #[case::bad_source(2, 5, GraphError::SourceOutOfRange { vertex: 5, node_count: 2 })]
    fn rejects_invalid_inputs(
        #[case] node_count: usize,
        #[case] source: usize,
        #[case] expected: GraphError,
    ) {
        assert_eq!(
            bellman_ford(node_count, &[], source).map(|_| ()),
            Err(expected)
        );
    }

    #[test]
    fn rejects_malformed_edges_before_computing() {
        let result = bellman_ford(2, &[edge(0, 7, 1)], 0);
        assert_eq!(
            result.map(|_| ()),
            Err(GraphError::InvalidNodeId {
                node: 7,
                node_count: 2
            })
        );
    }

    #[test]
    fn negative_edges_shorten_paths() {
        let edges = [edge(0, 1, 4), edge(0, 2, 5), edge(1, 2, -3)];
        let paths = bellman_ford(3, &edges, 0).expect("input is valid");
        assert_eq!(paths.distances(), &[0, 4, 1]);
        assert_eq!(paths.path_to(2), Some(vec![0, 1, 2]));
    }

    #[test]
    fn converges_on_chains_listed_in_reverse() {
        // Worst case for the pass bound: each pass propagates one hop.
        let edges = [edge(2, 3, 1), edge(1, 2, 1), edge(0, 1, 1)];
        let paths = bellman_ford(4, &edges, 0).expect("input is valid");
        assert_eq!(paths.distances(), &[0, 1, 2, 3]);
    }

    #[test]
    fn edges_are_directed() {
        let paths = bellman_ford(2, &[edge(1, 0, 3)], 0).expect("input is valid");
        assert_eq!(paths.distances(), &[0, INFINITY]);
    }

    #[test]
    fn single_vertex_graph_reports_zero() {
        let paths = bellman_ford(1, &[], 0).expect("input is valid");
        assert_eq!(paths.distances(), &[0]);
    }

    #[test]
    fn unreachable_vertices_stay_at_the_sentinel() {
        let paths = bellman_ford(3, &[edge(1, 2, 1)], 0).expect("input is valid");
        assert_eq!(paths.distances(), &[0, INFINITY, INFINITY]);
    }

    #[test]
    fn reruns_are_bit_identical() {
        let edges = [edge(0, 1, -2), edge(1, 2, 7), edge(0, 2, 6)];
        let first = bellman_ford(3, &edges, 0).expect("input is valid");
        let second = bellman_ford(3, &edges, 0).expect("input is valid");
        assert_eq!(first, second);
    }
}

//! Minimum spanning tree via sorted edges and union-find.

use tracing::instrument;

use crate::{
    error::Result,
    graph::{GraphEdge, validate_edges},
    result::{MstEdge, MstOutcome, SpanningTree},
    union_find::DisjointSet,
};

/// Computes a minimum spanning tree with Kruskal's algorithm.
///
/// The edge list is undirected: each edge connects its two endpoints
/// regardless of orientation, and duplicate or mirrored entries are harmless
/// because the union-find acceptance test collapses them. Edges are sorted
/// ascending by weight with a stable sort, so equal weights keep their
/// original list order and the selected edge set is deterministic. Each
/// invocation owns a freshly initialised union-find forest sized to
/// `node_count`.
///
/// Acceptance stops early once `node_count - 1` edges are in the tree. When
/// fewer unions succeed after exhausting the list, the graph is disconnected
/// and the result is [`MstOutcome::Disconnected`] rather than a partial
/// total.
///
/// # Errors
/// Returns [`GraphError::EmptyGraph`] when `node_count` is zero, and
/// [`GraphError::InvalidNodeId`] / [`GraphError::WeightOutOfRange`] for
/// malformed edges.
///
/// [`GraphError::EmptyGraph`]: crate::GraphError::EmptyGraph
/// [`GraphError::InvalidNodeId`]: crate::GraphError::InvalidNodeId
/// [`GraphError::WeightOutOfRange`]: crate::GraphError::WeightOutOfRange
///
/// # Examples
/// ```
/// use densepath_core::{GraphEdge, kruskal};
///
/// let edges = [
///     GraphEdge::new(0, 1, 1),
///     GraphEdge::new(1, 2, 2),
///     GraphEdge::new(2, 3, 1),
///     GraphEdge::new(0, 3, 10),
/// ];
/// let outcome = kruskal(4, &edges)?;
/// assert_eq!(outcome.total_weight(), Some(4));
/// # Ok::<(), densepath_core::GraphError>(())
/// ```
#[instrument(
    name = "engine.kruskal",
    err,
    skip(edges),
    fields(node_count = node_count, edge_count = edges.len())
)]
pub fn kruskal(node_count: usize, edges: &[GraphEdge]) -> Result<MstOutcome> {
    validate_edges(node_count, edges)?;

    let mut sorted: Vec<GraphEdge> = edges.to_vec();
    sorted.sort_by_key(GraphEdge::weight);

    let tree_size = node_count - 1;
    let mut forest = DisjointSet::new(node_count);
    let mut accepted = Vec::with_capacity(tree_size);

    for edge in &sorted {
        if forest.union(edge.source(), edge.target()) {
            accepted.push(MstEdge::new(edge.source(), edge.target(), edge.weight()));
            if accepted.len() == tree_size {
                break;
            }
        }
    }

    if accepted.len() == tree_size {
        Ok(MstOutcome::Tree(SpanningTree::new(accepted)))
    } else {
        Ok(MstOutcome::Disconnected)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::error::GraphError;
    use crate::graph::GraphEdge;
    use crate::result::MstOutcome;
    use crate::weight::INFINITY;

    use super::kruskal;

    fn edge(source: usize, target: usize, weight: i64) -> GraphEdge {
        GraphEdge::new(source, target, weight)
    }

    #[test]
    fn rejects_empty_graph() {
        assert_eq!(kruskal(0, &[]).map(|_| ()), Err(GraphError::EmptyGraph));
    }

    #[test]
    fn rejects_out_of_range_endpoints() {
        assert_eq!(
            kruskal(3, &[edge(0, 3, 1)]).map(|_| ()),
            Err(GraphError::InvalidNodeId {
                node: 3,
                node_count: 3
            })
        );
    }

    #[test]
    fn builds_the_cheapest_spanning_tree() {
        let edges = [
            edge(0, 1, 1),
            edge(1, 2, 2),
            edge(2, 3, 1),
            edge(0, 3, 10),
        ];
        let outcome = kruskal(4, &edges).expect("input is valid");
        let tree = outcome.spanning_tree().expect("graph is connected");
        assert_eq!(tree.total_weight(), 4);
        assert_eq!(tree.edges().len(), 3);
        // The expensive 0-3 closing edge is never accepted.
        assert!(
            tree.edges()
                .iter()
                .all(|accepted| accepted.weight() != 10)
        );
    }

    #[test]
    fn equal_weights_keep_list_order() {
        // Both orderings of two interchangeable edges: the first listed wins.
        let forward = [edge(0, 1, 1), edge(0, 2, 5), edge(1, 2, 5)];
        let outcome = kruskal(3, &forward).expect("input is valid");
        let tree = outcome.spanning_tree().expect("graph is connected");
        assert_eq!(tree.edges()[1].source(), 0);
        assert_eq!(tree.edges()[1].target(), 2);

        let reversed = [edge(0, 1, 1), edge(1, 2, 5), edge(0, 2, 5)];
        let outcome = kruskal(3, &reversed).expect("input is valid");
        let tree = outcome.spanning_tree().expect("graph is connected");
        assert_eq!(tree.edges()[1].source(), 1);
        assert_eq!(tree.edges()[1].target(), 2);
    }

    #[test]
    fn mirrored_duplicates_are_harmless() {
        let edges = [edge(0, 1, 3), edge(1, 0, 3), edge(1, 2, 4)];
        let outcome = kruskal(3, &edges).expect("input is valid");
        assert_eq!(outcome.total_weight(), Some(7));
    }

    #[rstest]
    #[case::no_edges(3, vec![])]
    #[case::two_islands(4, vec![edge(0, 1, 1), edge(2, 3, 1)])]
    fn disconnected_graphs_yield_no_tree(#[case] node_count: usize, #[case] edges: Vec<GraphEdge>) {
        let outcome = kruskal(node_count, &edges).expect("input is valid");
        assert_eq!(outcome, MstOutcome::Disconnected);
    }

    #[test]
    fn single_vertex_graph_is_the_empty_tree() {
        let outcome = kruskal(1, &[]).expect("input is valid");
        assert_eq!(outcome.total_weight(), Some(0));
    }

    #[test]
    fn negative_weights_produce_negative_totals() {
        let edges = [edge(0, 1, -4), edge(1, 2, -1), edge(0, 2, 3)];
        let outcome = kruskal(3, &edges).expect("input is valid");
        assert_eq!(outcome.total_weight(), Some(-5));
    }

    #[test]
    fn near_sentinel_chains_clamp_instead_of_wrapping() {
        // Eleven valid edges whose exact sum exceeds i64::MAX.
        let weight = 900_000_000_000_000_000;
        let edges: Vec<GraphEdge> = (0..11)
            .map(|index| edge(index, index + 1, weight))
            .collect();
        let outcome = kruskal(12, &edges).expect("input is valid");
        assert_eq!(outcome.total_weight(), Some(INFINITY));
    }
}

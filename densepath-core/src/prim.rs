//! Minimum spanning tree via greedy vertex attachment.

use tracing::instrument;

use crate::{
    graph::AdjacencyMatrix,
    result::{MstEdge, MstOutcome, SpanningTree},
    weight::{INFINITY, Weight},
};

/// Computes a minimum spanning tree with Prim's algorithm.
///
/// Grows the tree from vertex 0, maintaining for every vertex the cheapest
/// edge connecting it to the tree so far. Each of the `n` steps attaches the
/// unused vertex with the smallest such cost (ties go to the lowest vertex
/// id) and then re-scans that vertex's matrix row. If the cheapest
/// attachable vertex costs [`INFINITY`], the rest of the graph is
/// unreachable and the result is [`MstOutcome::Disconnected`] immediately.
/// O(n²), no priority queue.
///
/// The matrix is assumed symmetric: a spanning tree is an undirected
/// concept, and an asymmetric matrix leaves the result caller-defined.
///
/// Unlike the edge-list engines, every input a well-formed
/// [`AdjacencyMatrix`] can express is acceptable here, so there is no error
/// path.
///
/// # Examples
/// ```
/// use densepath_core::{AdjacencyMatrix, INFINITY, prim};
///
/// let matrix = AdjacencyMatrix::from_rows(&[
///     vec![0, 1, INFINITY, 10],
///     vec![1, 0, 2, INFINITY],
///     vec![INFINITY, 2, 0, 1],
///     vec![10, INFINITY, 1, 0],
/// ])?;
/// assert_eq!(prim(&matrix).total_weight(), Some(4));
/// # Ok::<(), densepath_core::GraphError>(())
/// ```
#[instrument(name = "engine.prim", skip(matrix), fields(node_count = matrix.node_count()))]
#[must_use]
pub fn prim(matrix: &AdjacencyMatrix) -> MstOutcome {
    let node_count = matrix.node_count();
    let mut attach_costs = vec![INFINITY; node_count];
    let mut tree_links: Vec<Option<usize>> = vec![None; node_count];
    let mut used = vec![false; node_count];
    let mut accepted = Vec::with_capacity(node_count.saturating_sub(1));

    attach_costs[0] = 0;

    for _ in 0..node_count {
        let Some(current) = cheapest_unused(&attach_costs, &used) else {
            return MstOutcome::Disconnected;
        };
        used[current] = true;

        if let Some(parent) = tree_links[current] {
            accepted.push(MstEdge::new(parent, current, attach_costs[current]));
        }

        for (target, &weight) in matrix.row(current).iter().enumerate() {
            if !used[target] && weight < attach_costs[target] {
                attach_costs[target] = weight;
                tree_links[target] = Some(current);
            }
        }
    }

    MstOutcome::Tree(SpanningTree::new(accepted))
}

/// Returns the unused vertex with the smallest finite attachment cost,
/// lowest id first on ties, or `None` when only unreachable vertices remain.
fn cheapest_unused(attach_costs: &[Weight], used: &[bool]) -> Option<usize> {
    let mut best = INFINITY;
    let mut cheapest = None;
    for (vertex, &cost) in attach_costs.iter().enumerate() {
        if !used[vertex] && cost < best {
            best = cost;
            cheapest = Some(vertex);
        }
    }
    cheapest
}

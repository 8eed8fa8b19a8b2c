//! Connected component discovery over the dense matrix.

use tracing::instrument;

use crate::{graph::AdjacencyMatrix, union_find::DisjointSet};

/// Groups the vertices of `matrix` into connected components.
///
/// Every present entry joins its endpoints regardless of orientation, so an
/// asymmetric matrix is treated as undirected for connectivity. Components
/// are returned largest first; the sort is stable, so equally sized
/// components keep the order of their lowest vertex, and vertices inside
/// each component ascend. A connected graph yields a single component
/// holding every vertex, which is exactly the condition under which
/// [`kruskal`](crate::kruskal) and [`prim`](crate::prim) find a spanning
/// tree.
///
/// # Examples
/// ```
/// use densepath_core::{AdjacencyMatrix, connected_components};
///
/// let mut matrix = AdjacencyMatrix::new(4)?;
/// matrix.set(0, 1, 2)?;
/// let components = connected_components(&matrix);
/// assert_eq!(components, vec![vec![0, 1], vec![2], vec![3]]);
/// # Ok::<(), densepath_core::GraphError>(())
/// ```
#[instrument(
    name = "engine.connected_components",
    skip(matrix),
    fields(node_count = matrix.node_count())
)]
#[must_use]
pub fn connected_components(matrix: &AdjacencyMatrix) -> Vec<Vec<usize>> {
    let node_count = matrix.node_count();
    let mut forest = DisjointSet::new(node_count);
    for edge in matrix.directed_edges() {
        forest.union(edge.source(), edge.target());
    }

    let mut slots: Vec<Option<usize>> = vec![None; node_count];
    let mut components: Vec<Vec<usize>> = Vec::new();
    for vertex in 0..node_count {
        let root = forest.find(vertex);
        match slots[root] {
            Some(slot) => components[slot].push(vertex),
            None => {
                slots[root] = Some(components.len());
                components.push(vec![vertex]);
            }
        }
    }

    components.sort_by_key(|component| std::cmp::Reverse(component.len()));
    components
}

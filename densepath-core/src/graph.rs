//! Graph input representations: weighted edges and the dense adjacency matrix.
//!
//! Both representations validate eagerly so the engines can assume their
//! inputs are well-formed: vertex ids are in range and every weight magnitude
//! stays strictly below the [`INFINITY`] sentinel (the matrix additionally
//! admits the sentinel itself, meaning "no direct edge").

use crate::{
    error::{GraphError, Result},
    weight::{INFINITY, Weight, is_reachable},
};

/// A directed, weighted edge `(source, target, weight)`.
///
/// [`bellman_ford`](crate::bellman_ford) treats the triple as directed;
/// [`kruskal`](crate::kruskal) interprets it as undirected. Weights may be
/// negative.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GraphEdge {
    source: usize,
    target: usize,
    weight: Weight,
}

impl GraphEdge {
    /// Creates an edge from `source` to `target` with the given weight.
    ///
    /// # Examples
    /// ```
    /// use densepath_core::GraphEdge;
    ///
    /// let edge = GraphEdge::new(0, 2, -7);
    /// assert_eq!(edge.weight(), -7);
    /// ```
    #[must_use]
    pub const fn new(source: usize, target: usize, weight: Weight) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the source vertex id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the target vertex id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Weight { self.weight }
}

/// Dense row-major adjacency matrix for a graph of `node_count` vertices.
///
/// `weight(i, j)` is the direct edge weight from `i` to `j`, or [`INFINITY`]
/// when no direct edge exists. The diagonal is pinned to zero. The matrix
/// need not be symmetric for shortest-path use; [`prim`](crate::prim) assumes
/// symmetry because a spanning tree is an undirected concept.
///
/// # Examples
/// ```
/// use densepath_core::{AdjacencyMatrix, INFINITY};
///
/// let mut matrix = AdjacencyMatrix::new(3)?;
/// matrix.set(0, 1, 4)?;
/// assert_eq!(matrix.weight(0, 1), 4);
/// assert_eq!(matrix.weight(1, 0), INFINITY);
/// assert_eq!(matrix.weight(2, 2), 0);
/// # Ok::<(), densepath_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdjacencyMatrix {
    node_count: usize,
    weights: Vec<Weight>,
}

impl AdjacencyMatrix {
    /// Creates a matrix with no edges: every off-diagonal entry is
    /// [`INFINITY`] and the diagonal is zero.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyGraph`] when `node_count` is zero.
    pub fn new(node_count: usize) -> Result<Self> {
        if node_count == 0 {
            return Err(GraphError::EmptyGraph);
        }
        let mut weights = vec![INFINITY; node_count * node_count];
        for vertex in 0..node_count {
            weights[vertex * node_count + vertex] = 0;
        }
        Ok(Self {
            node_count,
            weights,
        })
    }

    /// Builds a matrix from per-vertex rows, validating shape and weights.
    ///
    /// The diagonal is forced to zero regardless of the supplied values,
    /// matching the convention every engine assumes.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyGraph`] for zero rows,
    /// [`GraphError::RaggedMatrix`] when any row's length differs from the
    /// row count, and [`GraphError::WeightOutOfRange`] for any entry whose
    /// magnitude reaches the sentinel without being exactly [`INFINITY`].
    ///
    /// # Examples
    /// ```
    /// use densepath_core::{AdjacencyMatrix, INFINITY};
    ///
    /// let matrix = AdjacencyMatrix::from_rows(&[
    ///     vec![0, 2, INFINITY],
    ///     vec![2, 0, 5],
    ///     vec![INFINITY, 5, 0],
    /// ])?;
    /// assert_eq!(matrix.node_count(), 3);
    /// # Ok::<(), densepath_core::GraphError>(())
    /// ```
    pub fn from_rows(rows: &[Vec<Weight>]) -> Result<Self> {
        let node_count = rows.len();
        let mut matrix = Self::new(node_count)?;
        for (source, row) in rows.iter().enumerate() {
            if row.len() != node_count {
                return Err(GraphError::RaggedMatrix {
                    row: source,
                    len: row.len(),
                    expected: node_count,
                });
            }
            for (target, &weight) in row.iter().enumerate() {
                if source != target {
                    matrix.set(source, target, weight)?;
                }
            }
        }
        Ok(matrix)
    }

    /// Sets the direct edge weight from `source` to `target`.
    ///
    /// Use [`INFINITY`] to remove an edge. Diagonal entries stay pinned to
    /// zero; a write to `(v, v)` is a no-op.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidNodeId`] for an out-of-range vertex and
    /// [`GraphError::WeightOutOfRange`] when the weight's magnitude reaches
    /// the sentinel without being exactly [`INFINITY`].
    pub fn set(&mut self, source: usize, target: usize, weight: Weight) -> Result<()> {
        for node in [source, target] {
            if node >= self.node_count {
                return Err(GraphError::InvalidNodeId {
                    node,
                    node_count: self.node_count,
                });
            }
        }
        if weight != INFINITY && !weight_in_range(weight) {
            return Err(GraphError::WeightOutOfRange { weight });
        }
        if source != target {
            self.weights[source * self.node_count + target] = weight;
        }
        Ok(())
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub const fn node_count(&self) -> usize { self.node_count }

    /// Returns the direct edge weight from `source` to `target`, or
    /// [`INFINITY`] when no direct edge exists.
    ///
    /// # Panics
    /// Panics when either vertex id is out of range.
    #[must_use]
    pub fn weight(&self, source: usize, target: usize) -> Weight {
        assert!(source < self.node_count && target < self.node_count);
        self.weights[source * self.node_count + target]
    }

    /// Returns the outgoing row of `source` for relaxation scans.
    pub(crate) fn row(&self, source: usize) -> &[Weight] {
        let start = source * self.node_count;
        &self.weights[start..start + self.node_count]
    }

    /// Reports whether any present off-diagonal edge carries a negative
    /// weight.
    ///
    /// Callers use this to decide whether [`dijkstra`](crate::dijkstra) is
    /// safe to run or [`bellman_ford`](crate::bellman_ford) is required. The
    /// scan is O(n²) and does not mutate the matrix.
    ///
    /// # Examples
    /// ```
    /// use densepath_core::AdjacencyMatrix;
    ///
    /// let mut matrix = AdjacencyMatrix::new(2)?;
    /// assert!(!matrix.has_negative_edge());
    /// matrix.set(1, 0, -5)?;
    /// assert!(matrix.has_negative_edge());
    /// # Ok::<(), densepath_core::GraphError>(())
    /// ```
    #[must_use]
    pub fn has_negative_edge(&self) -> bool {
        (0..self.node_count).any(|source| {
            self.row(source)
                .iter()
                .enumerate()
                .any(|(target, &weight)| {
                    source != target && is_reachable(weight) && weight < 0
                })
        })
    }

    /// Collects every present off-diagonal entry as a directed edge, in
    /// row-major order.
    #[must_use]
    pub fn directed_edges(&self) -> Vec<GraphEdge> {
        let mut edges = Vec::new();
        for source in 0..self.node_count {
            for (target, &weight) in self.row(source).iter().enumerate() {
                if source != target && is_reachable(weight) {
                    edges.push(GraphEdge::new(source, target, weight));
                }
            }
        }
        edges
    }

    /// Collects the upper-triangle present entries as an undirected edge
    /// list, suitable for [`kruskal`](crate::kruskal) on symmetric matrices.
    #[must_use]
    pub fn undirected_edges(&self) -> Vec<GraphEdge> {
        let mut edges = Vec::new();
        for source in 0..self.node_count {
            for (target, &weight) in self.row(source).iter().enumerate().skip(source + 1) {
                if is_reachable(weight) {
                    edges.push(GraphEdge::new(source, target, weight));
                }
            }
        }
        edges
    }
}

/// Returns `true` when a list-edge weight is representable: strictly between
/// the negative and positive sentinel magnitudes.
const fn weight_in_range(weight: Weight) -> bool {
    weight > -INFINITY && weight < INFINITY
}

/// Validates an edge list against a vertex count.
///
/// List edges may not carry the sentinel: an absent edge is simply absent
/// from the list.
pub(crate) fn validate_edges(node_count: usize, edges: &[GraphEdge]) -> Result<()> {
    if node_count == 0 {
        return Err(GraphError::EmptyGraph);
    }
    for edge in edges {
        for node in [edge.source(), edge.target()] {
            if node >= node_count {
                return Err(GraphError::InvalidNodeId { node, node_count });
            }
        }
        if !weight_in_range(edge.weight()) {
            return Err(GraphError::WeightOutOfRange {
                weight: edge.weight(),
            });
        }
    }
    Ok(())
}

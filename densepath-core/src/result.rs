//! Result types returned by the engines.
//!
//! Shortest-path engines return a [`ShortestPaths`] vector; MST engines
//! return an [`MstOutcome`] so a disconnected graph is a distinguishable
//! outcome rather than a fake total or an error.

use crate::weight::{Weight, is_reachable, relaxed_add};

/// Single-source shortest-path distances with predecessor links.
///
/// `distances()[v]` is the best known distance from the source to vertex
/// `v`, or [`INFINITY`](crate::INFINITY) when `v` is unreachable. Predecessors record the
/// vertex each distance was relaxed through, enabling path reconstruction.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShortestPaths {
    source: usize,
    distances: Vec<Weight>,
    predecessors: Vec<Option<usize>>,
}

impl ShortestPaths {
    pub(crate) fn new(
        source: usize,
        distances: Vec<Weight>,
        predecessors: Vec<Option<usize>>,
    ) -> Self {
        debug_assert_eq!(distances.len(), predecessors.len());
        Self {
            source,
            distances,
            predecessors,
        }
    }

    /// Returns the source vertex the distances are measured from.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the per-vertex distances, [`INFINITY`](crate::INFINITY) for
    /// unreachable.
    #[must_use]
    #[rustfmt::skip]
    pub fn distances(&self) -> &[Weight] { &self.distances }

    /// Returns the distance to `target`.
    ///
    /// # Panics
    /// Panics when `target` is out of range.
    #[must_use]
    pub fn distance(&self, target: usize) -> Weight {
        self.distances[target]
    }

    /// Reports whether `target` is reachable from the source.
    ///
    /// # Panics
    /// Panics when `target` is out of range.
    #[must_use]
    pub fn is_reachable(&self, target: usize) -> bool {
        is_reachable(self.distances[target])
    }

    /// Reconstructs the vertex sequence from the source to `target`.
    ///
    /// Returns `None` when `target` is out of range or unreachable. The path
    /// starts at the source and ends at `target`; the source's own path is
    /// the single-element sequence. The walk is bounded by the vertex count,
    /// so a predecessor cycle left behind by a negative-cycle graph yields
    /// `None` instead of looping.
    ///
    /// # Examples
    /// ```
    /// use densepath_core::{AdjacencyMatrix, dijkstra};
    ///
    /// let mut matrix = AdjacencyMatrix::new(3)?;
    /// matrix.set(0, 1, 1)?;
    /// matrix.set(1, 2, 1)?;
    /// let paths = dijkstra(&matrix, 0)?;
    /// assert_eq!(paths.path_to(2), Some(vec![0, 1, 2]));
    /// # Ok::<(), densepath_core::GraphError>(())
    /// ```
    #[must_use]
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if target >= self.distances.len() || !is_reachable(self.distances[target]) {
            return None;
        }
        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            current = self.predecessors[current]?;
            if path.len() > self.distances.len() {
                return None;
            }
            path.push(current);
        }
        path.reverse();
        Some(path)
    }
}

/// An edge accepted into a spanning tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MstEdge {
    source: usize,
    target: usize,
    weight: Weight,
}

impl MstEdge {
    pub(crate) const fn new(source: usize, target: usize, weight: Weight) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns one endpoint of the edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the other endpoint of the edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Weight { self.weight }
}

/// A minimum spanning tree: the accepted edges and their total weight.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SpanningTree {
    edges: Vec<MstEdge>,
    total_weight: Weight,
}

impl SpanningTree {
    pub(crate) fn new(edges: Vec<MstEdge>) -> Self {
        let total_weight = edges
            .iter()
            .fold(0, |total, edge| relaxed_add(total, edge.weight()));
        Self {
            edges,
            total_weight,
        }
    }

    /// Returns the accepted edges in acceptance order.
    ///
    /// A tree over `n` vertices holds `n - 1` edges; the single-vertex tree
    /// holds none.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[MstEdge] { &self.edges }

    /// Returns the total weight of the tree.
    ///
    /// May be negative when edge weights are. Exact for every total whose
    /// magnitude stays below the sentinel; a running total that reaches
    /// [`INFINITY`](crate::INFINITY) in either direction clamps to the
    /// sentinel of that sign rather than wrapping.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_weight(&self) -> Weight { self.total_weight }
}

/// The outcome of a minimum spanning tree computation.
///
/// # Examples
/// ```
/// use densepath_core::{GraphEdge, MstOutcome, kruskal};
///
/// let outcome = kruskal(2, &[GraphEdge::new(0, 1, 3)])?;
/// assert_eq!(outcome.total_weight(), Some(3));
///
/// let outcome = kruskal(2, &[])?;
/// assert_eq!(outcome, MstOutcome::Disconnected);
/// # Ok::<(), densepath_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MstOutcome {
    /// The graph is connected; a spanning tree was built.
    Tree(SpanningTree),
    /// The graph has two or more components; no spanning tree exists.
    Disconnected,
}

impl MstOutcome {
    /// Returns the spanning tree, or `None` when the graph is disconnected.
    #[must_use]
    pub const fn spanning_tree(&self) -> Option<&SpanningTree> {
        match self {
            Self::Tree(tree) => Some(tree),
            Self::Disconnected => None,
        }
    }

    /// Returns the total weight, or `None` when the graph is disconnected.
    #[must_use]
    pub const fn total_weight(&self) -> Option<Weight> {
        match self.spanning_tree() {
            Some(tree) => Some(tree.total_weight()),
            None => None,
        }
    }
}

//! Union-find (disjoint set union) backing Kruskal's cycle test and
//! component discovery.
//!
//! Each [`kruskal`](crate::kruskal) or
//! [`connected_components`](crate::connected_components) invocation owns a
//! freshly initialised forest sized to its vertex count, so concurrent
//! invocations can never corrupt one another's state. Path compression keeps the acceptance test
//! correct; union by rank keeps the trees shallow.

#[derive(Clone, Debug)]
pub(crate) struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    /// Creates a forest of `n` singleton sets.
    pub(crate) fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    /// Returns the representative of `node`'s set, compressing the walked
    /// path onto the root.
    pub(crate) fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// Returns `false` when both are already in the same set, in which case
    /// adding an edge between them would close a cycle.
    pub(crate) fn union(&mut self, left: usize, right: usize) -> bool {
        let mut left = self.find(left);
        let mut right = self.find(right);
        if left == right {
            return false;
        }
        let left_rank = self.rank[left];
        let right_rank = self.rank[right];
        if left_rank < right_rank {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        if left_rank == right_rank {
            self.rank[left] = left_rank.saturating_add(1);
        }
        true
    }
}

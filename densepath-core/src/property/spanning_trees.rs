//! Cross-validation of the two MST engines, plus structural checks on
//! Kruskal's accepted edge set.
//!
//! The engines may select different edges under weight ties, but the total
//! weight of a minimum spanning tree is unique, so the totals must match
//! exactly. The engines must also agree on whether a spanning tree exists
//! at all.

use proptest::prelude::*;

use crate::{
    kruskal::kruskal,
    result::{MstEdge, MstOutcome},
};

use super::strategies::{SymmetricFixture, split_fixture, symmetric_fixture};

proptest! {
    #[test]
    fn engine_totals_agree(fixture in symmetric_fixture()) {
        let SymmetricFixture { matrix } = fixture;
        let sorted = kruskal(matrix.node_count(), &matrix.undirected_edges())
            .expect("generated edges are valid");
        let greedy = crate::prim::prim(&matrix);
        prop_assert_eq!(sorted.total_weight(), greedy.total_weight());
    }

    #[test]
    fn split_graphs_never_have_a_spanning_tree(fixture in split_fixture()) {
        let SymmetricFixture { matrix } = fixture;
        let sorted = kruskal(matrix.node_count(), &matrix.undirected_edges())
            .expect("generated edges are valid");
        prop_assert_eq!(sorted, MstOutcome::Disconnected);
        prop_assert_eq!(crate::prim::prim(&matrix), MstOutcome::Disconnected);
    }

    #[test]
    fn accepted_edges_form_a_spanning_tree(fixture in symmetric_fixture()) {
        let SymmetricFixture { matrix } = fixture;
        let node_count = matrix.node_count();
        let outcome = kruskal(node_count, &matrix.undirected_edges())
            .expect("generated edges are valid");
        if let Some(tree) = outcome.spanning_tree() {
            prop_assert_eq!(tree.edges().len(), node_count - 1);
            prop_assert!(is_acyclic_and_spanning(node_count, tree.edges()));
        }
    }

    #[test]
    fn component_count_matches_the_mst_outcome(fixture in symmetric_fixture()) {
        let SymmetricFixture { matrix } = fixture;
        let components = crate::connected_components::connected_components(&matrix);
        let outcome = kruskal(matrix.node_count(), &matrix.undirected_edges())
            .expect("generated edges are valid");
        prop_assert_eq!(components.len() == 1, outcome.spanning_tree().is_some());
    }

    #[test]
    fn reruns_are_bit_identical(fixture in symmetric_fixture()) {
        let SymmetricFixture { matrix } = fixture;
        let edges = matrix.undirected_edges();
        let first = kruskal(matrix.node_count(), &edges).expect("generated edges are valid");
        let second = kruskal(matrix.node_count(), &edges).expect("generated edges are valid");
        prop_assert_eq!(first, second);

        let first = crate::prim::prim(&matrix);
        let second = crate::prim::prim(&matrix);
        prop_assert_eq!(first, second);
    }
}

/// Test-local union-find oracle: accepts each tree edge exactly when it does
/// not close a cycle, then checks that a single component remains.
fn is_acyclic_and_spanning(node_count: usize, edges: &[MstEdge]) -> bool {
    fn find(parent: &mut [usize], mut node: usize) -> usize {
        while parent[node] != node {
            parent[node] = parent[parent[node]];
            node = parent[node];
        }
        node
    }

    let mut parent: Vec<usize> = (0..node_count).collect();
    for edge in edges {
        let left = find(&mut parent, edge.source());
        let right = find(&mut parent, edge.target());
        if left == right {
            return false;
        }
        parent[right] = left;
    }

    let root = find(&mut parent, 0);
    (0..node_count).all(|node| find(&mut parent, node) == root)
}

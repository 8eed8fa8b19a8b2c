//! Cross-validation of the two shortest-path engines.
//!
//! On graphs without negative edges both engines are safe to run, and must
//! produce identical distance vectors: Dijkstra's greedy selection and
//! Bellman-Ford's exhaustive relaxation are independent derivations of the
//! same quantity.

use proptest::prelude::*;

use crate::{bellman_ford::bellman_ford, dijkstra::dijkstra, weight::is_reachable};

use super::strategies::{SymmetricFixture, symmetric_fixture};

proptest! {
    #[test]
    fn engines_agree_on_non_negative_graphs(fixture in symmetric_fixture()) {
        let SymmetricFixture { matrix } = fixture;
        let node_count = matrix.node_count();
        let edges = matrix.directed_edges();

        for source in 0..node_count {
            let greedy = dijkstra(&matrix, source)
                .expect("source is in range by construction");
            let relaxed = bellman_ford(node_count, &edges, source)
                .expect("generated edges are valid");
            prop_assert_eq!(greedy.distances(), relaxed.distances());
        }
    }

    #[test]
    fn reachable_paths_sum_to_their_distance(fixture in symmetric_fixture()) {
        let SymmetricFixture { matrix } = fixture;
        let paths = dijkstra(&matrix, 0).expect("source 0 always exists");

        for target in 0..matrix.node_count() {
            let Some(path) = paths.path_to(target) else {
                prop_assert!(!is_reachable(paths.distance(target)));
                continue;
            };
            prop_assert_eq!(path[0], 0);
            prop_assert_eq!(path[path.len() - 1], target);
            let total: i64 = path
                .windows(2)
                .map(|hop| matrix.weight(hop[0], hop[1]))
                .sum();
            prop_assert_eq!(total, paths.distance(target));
        }
    }

    #[test]
    fn reruns_are_bit_identical(fixture in symmetric_fixture()) {
        let SymmetricFixture { matrix } = fixture;
        let first = dijkstra(&matrix, 0).expect("source 0 always exists");
        let second = dijkstra(&matrix, 0).expect("source 0 always exists");
        prop_assert_eq!(first, second);

        let edges = matrix.directed_edges();
        let node_count = matrix.node_count();
        let first = bellman_ford(node_count, &edges, 0).expect("generated edges are valid");
        let second = bellman_ford(node_count, &edges, 0).expect("generated edges are valid");
        prop_assert_eq!(first, second);
    }
}

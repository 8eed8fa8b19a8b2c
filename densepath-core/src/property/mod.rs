//! Property-based tests cross-validating the four engines.
//!
//! The engines are deliberately independent implementations, which makes
//! them natural oracles for one another: Dijkstra and Bellman-Ford must
//! agree wherever both are safe to run, and Kruskal and Prim must agree on
//! every spanning-tree total. Fixtures are generated from seeded
//! [`rand::rngs::SmallRng`] instances so failures replay deterministically.

mod shortest_paths;
mod spanning_trees;
mod strategies;

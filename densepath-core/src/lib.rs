//! Shortest-path and minimum-spanning-tree engines for small dense graphs.
//!
//! The crate exposes four independent, deterministic engines over graphs
//! supplied as an [`AdjacencyMatrix`] or a [`GraphEdge`] list:
//!
//! - [`dijkstra`] — single-source shortest paths via greedy vertex selection
//!   (no negative weights);
//! - [`bellman_ford`] — single-source shortest paths via iterative edge
//!   relaxation (negative weights allowed);
//! - [`kruskal`] — minimum spanning tree via sorted edges and union-find;
//! - [`prim`] — minimum spanning tree via greedy vertex attachment.
//!
//! [`connected_components`] groups vertices by undirected reachability,
//! agreeing with the MST engines on when a graph is disconnected.
//! [`AdjacencyMatrix::has_negative_edge`] gates which shortest-path engine is
//! safe to run. Absent edges and unreachable vertices are carried as the
//! [`INFINITY`] sentinel; all arithmetic against the sentinel short-circuits
//! rather than overflowing. Engines share no mutable state and may run
//! concurrently on independent inputs.
//!
//! Hosts that exchange numbers as `f64` (0-indexed, row-major matrices)
//! should go through the [`boundary`] module rather than converting by hand.

mod bellman_ford;
pub mod boundary;
mod connected_components;
mod dijkstra;
mod error;
mod graph;
mod kruskal;
mod prim;
#[cfg(test)]
mod property;
mod result;
mod union_find;
mod weight;

pub use crate::{
    bellman_ford::bellman_ford,
    connected_components::connected_components,
    dijkstra::dijkstra,
    error::{GraphError, GraphErrorCode, Result},
    graph::{AdjacencyMatrix, GraphEdge},
    kruskal::kruskal,
    prim::prim,
    result::{MstEdge, MstOutcome, ShortestPaths, SpanningTree},
    weight::{INFINITY, Weight, relaxed_add},
};

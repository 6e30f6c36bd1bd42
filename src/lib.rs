//! adjgraph — small in-memory graph library.
//!
//! Two independent graph models share one traversal contract:
//! [`DirectedGraph`], a dense adjacency matrix over integer vertices with
//! non-negative weights, and [`UndirectedGraph`], sorted adjacency lists keyed
//! by arbitrary comparable labels. Both offer DFS, BFS, path checks and cycle
//! detection; the directed graph adds Dijkstra and the undirected graph adds
//! connected components.
//!
//! Mutations come in two forms: a strict `try_*` method returning
//! [`GraphResult`], and a lenient method that ignores invalid input.

pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{bfs, dfs, dijkstra, Adjacency, DirectedGraph, GraphBuilder, UndirectedGraph};
pub use types::{
    Distance, Edge, GraphError, GraphResult, VertexId, Weight, WeightedEdge, DEFAULT_WEIGHT,
};

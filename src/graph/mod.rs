//! In-memory graph models and the algorithms that run over them.

pub mod builder;
pub mod directed;
pub mod shortest_path;
pub mod traversal;
pub mod undirected;

pub use builder::GraphBuilder;
pub use directed::DirectedGraph;
pub use shortest_path::dijkstra;
pub use traversal::{bfs, dfs, Adjacency};
pub use undirected::UndirectedGraph;

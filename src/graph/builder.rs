//! Fluent API for building DirectedGraph instances.

use crate::types::{GraphResult, VertexId, Weight, WeightedEdge, DEFAULT_WEIGHT};

use super::DirectedGraph;

/// Fluent builder for constructing a [`DirectedGraph`].
///
/// Unlike [`DirectedGraph::from_edges`], the builder is strict: [`build`](Self::build)
/// fails on the first edge that [`DirectedGraph::try_add_edge`] rejects.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    vertex_count: usize,
    edges: Vec<WeightedEdge>,
}

impl GraphBuilder {
    /// Create a new builder with no vertices.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of vertices.
    pub fn vertices(&mut self, count: usize) -> &mut Self {
        self.vertex_count = count;
        self
    }

    /// Add a weighted edge. A later edge between the same pair replaces it.
    pub fn edge(&mut self, src: VertexId, dst: VertexId, weight: Weight) -> &mut Self {
        self.edges.push(WeightedEdge::new(src, dst, weight));
        self
    }

    /// Add an edge with the default weight.
    pub fn unit_edge(&mut self, src: VertexId, dst: VertexId) -> &mut Self {
        self.edge(src, dst, DEFAULT_WEIGHT)
    }

    /// Build the final graph.
    pub fn build(&self) -> GraphResult<DirectedGraph> {
        let mut graph = DirectedGraph::with_vertices(self.vertex_count);
        for edge in &self.edges {
            graph.try_add_edge(edge.source, edge.target, edge.weight)?;
        }
        Ok(graph)
    }
}

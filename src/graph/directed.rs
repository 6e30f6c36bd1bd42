//! Directed, weighted graph stored as a dense adjacency matrix.

use log::debug;

use crate::types::{
    Distance, GraphError, GraphResult, VertexId, Weight, WeightedEdge, DEFAULT_WEIGHT,
};

use super::shortest_path;
use super::traversal::{self, Adjacency};

/// Exploration state of a vertex during cycle detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Unvisited,
    OnPath,
    Finished,
}

/// Directed graph over vertices `0..vertex_count` with non-negative weights.
///
/// Cell `[i][j]` holds the weight of edge `i -> j`, or `None` when there is no
/// such edge. The matrix is always square, the diagonal is always `None`, and
/// vertices are never removed, so a returned index stays valid for the life
/// of the graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectedGraph {
    matrix: Vec<Vec<Option<Weight>>>,
}

impl DirectedGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self { matrix: Vec::new() }
    }

    /// Create a graph with `count` vertices and no edges.
    pub fn with_vertices(count: usize) -> Self {
        Self {
            matrix: vec![vec![None; count]; count],
        }
    }

    /// Create a graph from `(src, dst, weight)` triples.
    ///
    /// The vertex count is one past the largest endpoint mentioned. Triples
    /// are applied with [`add_edge`](Self::add_edge), so self-loops and
    /// negative weights are dropped and a repeated pair keeps its last weight.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (VertexId, VertexId, Weight)>,
    {
        let edges: Vec<_> = edges.into_iter().collect();
        let count = edges
            .iter()
            .map(|&(u, v, _)| u.max(v) + 1)
            .max()
            .unwrap_or(0);
        let mut graph = Self::with_vertices(count);
        for (src, dst, weight) in edges {
            graph.add_edge(src, dst, weight);
        }
        graph
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.matrix.len()
    }

    /// Whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.matrix.is_empty()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.matrix
            .iter()
            .map(|row| row.iter().filter(|cell| cell.is_some()).count())
            .sum()
    }

    /// Whether `v` is in `[0, vertex_count)`.
    pub fn contains_vertex(&self, v: VertexId) -> bool {
        v < self.matrix.len()
    }

    fn check_vertex(&self, v: VertexId) -> GraphResult<()> {
        if self.contains_vertex(v) {
            Ok(())
        } else {
            Err(GraphError::InvalidVertex(v))
        }
    }

    /// Append a vertex with no edges, returning the new vertex count.
    pub fn add_vertex(&mut self) -> usize {
        for row in &mut self.matrix {
            row.push(None);
        }
        let count = self.matrix.len() + 1;
        self.matrix.push(vec![None; count]);
        debug!("added vertex {}", count - 1);
        count
    }

    /// Add or re-weight the edge `src -> dst`.
    pub fn try_add_edge(
        &mut self,
        src: VertexId,
        dst: VertexId,
        weight: Weight,
    ) -> GraphResult<()> {
        self.check_vertex(src)?;
        self.check_vertex(dst)?;
        if src == dst {
            return Err(GraphError::SelfLoop(src.to_string()));
        }
        if weight < 0 {
            return Err(GraphError::NegativeWeight(weight));
        }
        self.matrix[src][dst] = Some(weight);
        Ok(())
    }

    /// Add or re-weight the edge `src -> dst`, ignoring invalid input.
    pub fn add_edge(&mut self, src: VertexId, dst: VertexId, weight: Weight) {
        if let Err(e) = self.try_add_edge(src, dst, weight) {
            debug!("ignored edge {} -> {}: {}", src, dst, e);
        }
    }

    /// Add the edge `src -> dst` with the default weight of 1.
    pub fn add_unit_edge(&mut self, src: VertexId, dst: VertexId) {
        self.add_edge(src, dst, DEFAULT_WEIGHT);
    }

    /// Remove the edge `src -> dst`, returning its weight.
    pub fn try_remove_edge(&mut self, src: VertexId, dst: VertexId) -> GraphResult<Weight> {
        self.check_vertex(src)?;
        self.check_vertex(dst)?;
        self.matrix[src][dst]
            .take()
            .ok_or_else(|| GraphError::EdgeNotFound {
                from: src.to_string(),
                to: dst.to_string(),
            })
    }

    /// Remove the edge `src -> dst` if present; out-of-range input is ignored.
    pub fn remove_edge(&mut self, src: VertexId, dst: VertexId) {
        if let Err(e) = self.try_remove_edge(src, dst) {
            debug!("ignored removal of {} -> {}: {}", src, dst, e);
        }
    }

    /// All vertices in ascending order.
    pub fn vertices(&self) -> Vec<VertexId> {
        (0..self.vertex_count()).collect()
    }

    /// Outgoing edges of `v` in ascending target order. Empty if `v` is out of range.
    pub fn out_edges(&self, v: VertexId) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.matrix
            .get(v)
            .into_iter()
            .flat_map(move |row| {
                row.iter().enumerate().filter_map(move |(w, cell)| {
                    cell.map(|weight| WeightedEdge::new(v, w, weight))
                })
            })
    }

    /// All edges in row-major order.
    pub fn edges(&self) -> Vec<WeightedEdge> {
        (0..self.vertex_count())
            .flat_map(|v| self.out_edges(v))
            .collect()
    }

    /// Weight of `src -> dst`, if that edge exists.
    pub fn edge_weight(&self, src: VertexId, dst: VertexId) -> Option<Weight> {
        self.matrix.get(src).and_then(|row| row.get(dst)).copied().flatten()
    }

    /// Whether the edge `src -> dst` exists.
    pub fn has_edge(&self, src: VertexId, dst: VertexId) -> bool {
        self.edge_weight(src, dst).is_some()
    }

    /// Direct successors of `v` in ascending order.
    pub fn neighbors(&self, v: VertexId) -> Vec<VertexId> {
        self.out_edges(v).map(|e| e.target).collect()
    }

    /// Number of outgoing edges of `v`.
    pub fn out_degree(&self, v: VertexId) -> usize {
        self.out_edges(v).count()
    }

    /// Whether every consecutive pair of `path` is joined by a forward edge.
    ///
    /// An empty path and a single vertex are valid. Fails with
    /// [`GraphError::InvalidVertex`] if any index is out of range.
    pub fn is_valid_path(&self, path: &[VertexId]) -> GraphResult<bool> {
        if let Some(&bad) = path.iter().find(|&&v| !self.contains_vertex(v)) {
            return Err(GraphError::InvalidVertex(bad));
        }
        Ok(path
            .windows(2)
            .all(|pair| self.matrix[pair[0]][pair[1]].is_some()))
    }

    /// Depth-first visitation order from `start`, stopping at `end` if given.
    pub fn dfs(&self, start: VertexId, end: Option<VertexId>) -> Vec<VertexId> {
        traversal::dfs(self, &start, end.as_ref())
    }

    /// Breadth-first visitation order from `start`, stopping at `end` if given.
    pub fn bfs(&self, start: VertexId, end: Option<VertexId>) -> Vec<VertexId> {
        traversal::bfs(self, &start, end.as_ref())
    }

    /// Whether the graph contains a directed cycle.
    pub fn has_cycle(&self) -> bool {
        let n = self.vertex_count();
        let mut color = vec![Color::Unvisited; n];

        for root in 0..n {
            if color[root] != Color::Unvisited {
                continue;
            }
            color[root] = Color::OnPath;
            // (vertex, next column to inspect)
            let mut stack: Vec<(VertexId, usize)> = vec![(root, 0)];

            while let Some(frame) = stack.last_mut() {
                let (v, next) = *frame;
                match (next..n).find(|&w| self.matrix[v][w].is_some()) {
                    Some(w) => {
                        frame.1 = w + 1;
                        match color[w] {
                            Color::OnPath => {
                                debug!("back edge {} -> {} closes a cycle", v, w);
                                return true;
                            }
                            Color::Unvisited => {
                                color[w] = Color::OnPath;
                                stack.push((w, 0));
                            }
                            Color::Finished => {}
                        }
                    }
                    None => {
                        color[v] = Color::Finished;
                        stack.pop();
                    }
                }
            }
        }

        false
    }

    /// Shortest distance from `source` to every vertex, indexed by vertex.
    ///
    /// Empty if `source` is out of range.
    pub fn dijkstra(&self, source: VertexId) -> Vec<Distance> {
        shortest_path::dijkstra(self, source)
    }
}

impl Adjacency for DirectedGraph {
    type Vertex = VertexId;

    fn contains(&self, v: &VertexId) -> bool {
        self.contains_vertex(*v)
    }

    fn successors(&self, v: &VertexId) -> Vec<VertexId> {
        self.neighbors(*v)
    }
}

impl std::fmt::Display for DirectedGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let n = self.vertex_count();
        if n == 0 {
            return writeln!(f, "EMPTY GRAPH");
        }

        writeln!(f, "GRAPH ({} vertices):", n)?;
        let header: Vec<String> = (0..n).map(|i| format!("{:2}", i)).collect();
        writeln!(f, "   |{}", header.join(" "))?;
        writeln!(f, "{}", "-".repeat(n * 3 + 3))?;
        for (i, row) in self.matrix.iter().enumerate() {
            let cells: Vec<String> = row
                .iter()
                .map(|cell| match cell {
                    Some(w) => format!("{:2}", w),
                    None => " .".to_string(),
                })
                .collect();
            writeln!(f, "{:2} |{}", i, cells.join(" "))?;
        }
        Ok(())
    }
}

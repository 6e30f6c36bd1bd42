//! Undirected, unweighted graph stored as sorted adjacency lists.

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use log::debug;

use crate::types::{Edge, GraphError, GraphResult, INLINE_RENDER_LIMIT};

use super::traversal::{self, Adjacency};

/// Undirected simple graph keyed by arbitrary comparable labels.
///
/// Every neighbour list is sorted ascending and the relation is symmetric:
/// `u` lists `v` iff `v` lists `u`. No vertex lists itself. Vertices are
/// reported in insertion order, which also drives component discovery.
#[derive(Debug, Clone)]
pub struct UndirectedGraph<L> {
    /// Labels in insertion order.
    order: Vec<L>,
    /// Label -> sorted neighbour labels.
    adjacency: HashMap<L, Vec<L>>,
}

impl<L> UndirectedGraph<L>
where
    L: Clone + Ord + Hash + Debug,
{
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            adjacency: HashMap::new(),
        }
    }

    /// Create a graph from a list of edges, creating vertices on demand.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (L, L)>,
    {
        let mut graph = Self::new();
        for (u, v) in edges {
            graph.add_edge(u, v);
        }
        graph
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.order.len()
    }

    /// Whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of (undirected) edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    /// Whether `v` is a vertex.
    pub fn contains_vertex(&self, v: &L) -> bool {
        self.adjacency.contains_key(v)
    }

    /// Neighbours of `v` in ascending order. Empty if `v` is absent.
    pub fn neighbors(&self, v: &L) -> &[L] {
        self.adjacency.get(v).map_or(&[][..], Vec::as_slice)
    }

    /// Number of neighbours of `v`.
    pub fn degree(&self, v: &L) -> usize {
        self.neighbors(v).len()
    }

    /// Whether `u` and `v` are adjacent.
    pub fn has_edge(&self, u: &L, v: &L) -> bool {
        self.neighbors(u).binary_search(v).is_ok()
    }

    /// Add `v` with no neighbours. Returns `false` if it already existed.
    pub fn add_vertex(&mut self, v: L) -> bool {
        if self.adjacency.contains_key(&v) {
            return false;
        }
        debug!("added vertex {:?}", v);
        self.order.push(v.clone());
        self.adjacency.insert(v, Vec::new());
        true
    }

    /// Join `u` and `v`, creating either vertex if needed.
    ///
    /// Returns `Ok(false)` if the edge already existed.
    pub fn try_add_edge(&mut self, u: L, v: L) -> GraphResult<bool> {
        if u == v {
            return Err(GraphError::SelfLoop(format!("{:?}", u)));
        }
        self.add_vertex(u.clone());
        self.add_vertex(v.clone());
        if self.has_edge(&u, &v) {
            return Ok(false);
        }
        self.link(&u, v.clone());
        self.link(&v, u);
        Ok(true)
    }

    /// Join `u` and `v`; a self-loop is ignored.
    pub fn add_edge(&mut self, u: L, v: L) {
        if let Err(e) = self.try_add_edge(u, v) {
            debug!("ignored edge: {}", e);
        }
    }

    /// Insert `to` into the sorted neighbour list of `from`.
    fn link(&mut self, from: &L, to: L) {
        if let Some(list) = self.adjacency.get_mut(from) {
            if let Err(pos) = list.binary_search(&to) {
                list.insert(pos, to);
            }
        }
    }

    /// Remove `to` from the neighbour list of `from`.
    fn unlink(&mut self, from: &L, to: &L) {
        if let Some(list) = self.adjacency.get_mut(from) {
            if let Ok(pos) = list.binary_search(to) {
                list.remove(pos);
            }
        }
    }

    /// Remove the edge between `u` and `v`.
    pub fn try_remove_edge(&mut self, u: &L, v: &L) -> GraphResult<()> {
        for x in [u, v] {
            if !self.contains_vertex(x) {
                return Err(GraphError::UnknownVertex(format!("{:?}", x)));
            }
        }
        if !self.has_edge(u, v) {
            return Err(GraphError::EdgeNotFound {
                from: format!("{:?}", u),
                to: format!("{:?}", v),
            });
        }
        self.unlink(u, v);
        self.unlink(v, u);
        Ok(())
    }

    /// Remove the edge between `u` and `v` if they are adjacent.
    pub fn remove_edge(&mut self, u: &L, v: &L) {
        if let Err(e) = self.try_remove_edge(u, v) {
            debug!("ignored edge removal: {}", e);
        }
    }

    /// Remove `v` and every edge touching it, returning its former neighbours.
    pub fn try_remove_vertex(&mut self, v: &L) -> GraphResult<Vec<L>> {
        let neighbors = self
            .adjacency
            .remove(v)
            .ok_or_else(|| GraphError::UnknownVertex(format!("{:?}", v)))?;
        for u in &neighbors {
            self.unlink(u, v);
        }
        self.order.retain(|x| x != v);
        debug!("removed vertex {:?} with {} edges", v, neighbors.len());
        Ok(neighbors)
    }

    /// Remove `v` and every edge touching it, if present.
    pub fn remove_vertex(&mut self, v: &L) {
        if let Err(e) = self.try_remove_vertex(v) {
            debug!("ignored vertex removal: {}", e);
        }
    }

    /// All vertices in insertion order.
    pub fn vertices(&self) -> Vec<L> {
        self.order.clone()
    }

    /// All edges, each reported once.
    pub fn edges(&self) -> Vec<Edge<L>> {
        self.order
            .iter()
            .flat_map(|v| {
                self.neighbors(v)
                    .iter()
                    .filter(move |u| v < *u)
                    .map(move |u| Edge::new(v.clone(), u.clone()))
            })
            .collect()
    }

    /// Whether consecutive labels of `path` are all adjacent.
    ///
    /// An empty path is valid; a single label is valid iff it is a vertex.
    pub fn is_valid_path(&self, path: &[L]) -> bool {
        match path {
            [] => true,
            [only] => self.contains_vertex(only),
            _ => path.windows(2).all(|pair| self.has_edge(&pair[0], &pair[1])),
        }
    }

    /// Depth-first visitation order from `start`, stopping at `end` if given.
    pub fn dfs(&self, start: &L, end: Option<&L>) -> Vec<L> {
        traversal::dfs(self, start, end)
    }

    /// Breadth-first visitation order from `start`, stopping at `end` if given.
    pub fn bfs(&self, start: &L, end: Option<&L>) -> Vec<L> {
        traversal::bfs(self, start, end)
    }

    /// Connected components, each in DFS order, discovered in vertex order.
    pub fn connected_components(&self) -> Vec<Vec<L>> {
        let mut covered: HashSet<L> = HashSet::new();
        let mut components = Vec::new();
        for v in &self.order {
            if covered.contains(v) {
                continue;
            }
            let component = self.dfs(v, None);
            covered.extend(component.iter().cloned());
            components.push(component);
        }
        components
    }

    /// Number of connected components.
    pub fn count_connected_components(&self) -> usize {
        self.connected_components().len()
    }

    /// Whether the graph contains a cycle.
    ///
    /// Stepping back over the edge to the DFS parent does not count.
    pub fn has_cycle(&self) -> bool {
        let mut visited: HashSet<&L> = HashSet::new();

        for root in &self.order {
            if !visited.insert(root) {
                continue;
            }
            // (vertex, parent, next neighbour index)
            let mut stack: Vec<(&L, Option<&L>, usize)> = vec![(root, None, 0)];

            while let Some(frame) = stack.last_mut() {
                let (v, parent, next) = *frame;
                match self.neighbors(v).get(next) {
                    Some(u) => {
                        frame.2 += 1;
                        if Some(u) == parent {
                            continue;
                        }
                        if !visited.insert(u) {
                            debug!("edge {:?} -- {:?} closes a cycle", v, u);
                            return true;
                        }
                        stack.push((u, Some(v), 0));
                    }
                    None => {
                        stack.pop();
                    }
                }
            }
        }

        false
    }
}

impl<L> Default for UndirectedGraph<L>
where
    L: Clone + Ord + Hash + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<L> PartialEq for UndirectedGraph<L>
where
    L: Clone + Ord + Hash + Debug,
{
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order && self.adjacency == other.adjacency
    }
}

impl<L> Eq for UndirectedGraph<L> where L: Clone + Ord + Hash + Debug {}

impl<L> Adjacency for UndirectedGraph<L>
where
    L: Clone + Ord + Hash + Debug,
{
    type Vertex = L;

    fn contains(&self, v: &L) -> bool {
        self.contains_vertex(v)
    }

    fn successors(&self, v: &L) -> Vec<L> {
        self.neighbors(v).to_vec()
    }
}

impl<L> std::fmt::Display for UndirectedGraph<L>
where
    L: Clone + Ord + Hash + Debug + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let lines: Vec<String> = self
            .order
            .iter()
            .map(|v| {
                let neighbors: Vec<String> =
                    self.neighbors(v).iter().map(|u| u.to_string()).collect();
                format!("{}: [{}]", v, neighbors.join(", "))
            })
            .collect();

        let body = lines.join("\n  ");
        if body.len() < INLINE_RENDER_LIMIT {
            write!(f, "GRAPH: {{{}}}", lines.join(", "))
        } else {
            write!(f, "GRAPH: {{\n  {}}}", body)
        }
    }
}

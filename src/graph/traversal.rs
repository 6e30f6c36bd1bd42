//! Graph traversal algorithms (DFS, BFS).

use std::collections::{HashSet, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;

use log::trace;

/// Read access that traversals need from a graph.
pub trait Adjacency {
    /// Vertex identifier.
    type Vertex: Clone + Eq + Hash + Debug;

    /// Whether `v` is a vertex of the graph.
    fn contains(&self, v: &Self::Vertex) -> bool;

    /// Vertices reachable from `v` over one edge, in ascending order.
    /// Empty when `v` is not a vertex.
    fn successors(&self, v: &Self::Vertex) -> Vec<Self::Vertex>;
}

/// Pre-order depth-first traversal from `start`.
///
/// Siblings are visited lowest first. Returns an empty list if `start` is not
/// a vertex; stops as soon as `end` is visited.
pub fn dfs<G>(graph: &G, start: &G::Vertex, end: Option<&G::Vertex>) -> Vec<G::Vertex>
where
    G: Adjacency + ?Sized,
{
    if !graph.contains(start) {
        return Vec::new();
    }

    let mut visited: HashSet<G::Vertex> = HashSet::new();
    let mut order: Vec<G::Vertex> = Vec::new();
    let mut stack: Vec<G::Vertex> = vec![start.clone()];

    while let Some(v) = stack.pop() {
        if visited.insert(v.clone()) {
            trace!("dfs visit {:?}", v);
            order.push(v.clone());
            // Pushed in reverse so the lowest neighbour is popped next.
            stack.extend(
                graph
                    .successors(&v)
                    .into_iter()
                    .rev()
                    .filter(|n| !visited.contains(n)),
            );
        }
        if end == Some(&v) {
            break;
        }
    }

    order
}

/// Level-order breadth-first traversal from `start`.
///
/// Neighbours are enqueued in ascending order. Same `start`/`end` contract as
/// [`dfs`].
pub fn bfs<G>(graph: &G, start: &G::Vertex, end: Option<&G::Vertex>) -> Vec<G::Vertex>
where
    G: Adjacency + ?Sized,
{
    if !graph.contains(start) {
        return Vec::new();
    }

    let mut visited: HashSet<G::Vertex> = HashSet::new();
    let mut order: Vec<G::Vertex> = Vec::new();
    let mut queue: VecDeque<G::Vertex> = VecDeque::new();
    queue.push_back(start.clone());

    while let Some(v) = queue.pop_front() {
        if visited.insert(v.clone()) {
            trace!("bfs visit {:?}", v);
            order.push(v.clone());
            for n in graph.successors(&v) {
                if !visited.contains(&n) {
                    queue.push_back(n);
                }
            }
        }
        if end == Some(&v) {
            break;
        }
    }

    order
}

//! Single-source shortest paths (Dijkstra).

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use log::trace;

use crate::types::{Distance, VertexId, Weight};

use super::DirectedGraph;

/// Dijkstra's algorithm over a graph with non-negative weights.
///
/// Returns one [`Distance`] per vertex; unreachable vertices are
/// [`Distance::Infinite`]. Returns an empty list if `source` is out of range.
pub fn dijkstra(graph: &DirectedGraph, source: VertexId) -> Vec<Distance> {
    if !graph.contains_vertex(source) {
        return Vec::new();
    }

    let n = graph.vertex_count();
    let mut distances = vec![Distance::Infinite; n];
    let mut settled = vec![false; n];
    // Min-heap keyed by tentative distance, ties broken by lower vertex.
    let mut heap: BinaryHeap<Reverse<(Weight, VertexId)>> = BinaryHeap::new();
    heap.push(Reverse((0, source)));

    while let Some(Reverse((dist, v))) = heap.pop() {
        if settled[v] {
            continue;
        }
        settled[v] = true;
        distances[v] = Distance::Finite(dist);
        trace!("settled {} at {}", v, dist);

        for edge in graph.out_edges(v) {
            if !settled[edge.target] {
                heap.push(Reverse((dist.saturating_add(edge.weight), edge.target)));
            }
        }
    }

    distances
}

//! Edge records returned by edge enumeration.

use serde::Serialize;

use super::{VertexId, Weight};

/// A directed, weighted edge of a [`DirectedGraph`](crate::DirectedGraph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct WeightedEdge {
    /// Vertex the edge leaves.
    pub source: VertexId,
    /// Vertex the edge enters.
    pub target: VertexId,
    /// Weight of the edge (never negative).
    pub weight: Weight,
}

impl WeightedEdge {
    /// Create a new edge record.
    pub fn new(source: VertexId, target: VertexId, weight: Weight) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// The edge as a `(source, target, weight)` triple.
    pub fn as_tuple(&self) -> (VertexId, VertexId, Weight) {
        (self.source, self.target, self.weight)
    }
}

impl From<(VertexId, VertexId, Weight)> for WeightedEdge {
    fn from((source, target, weight): (VertexId, VertexId, Weight)) -> Self {
        Self::new(source, target, weight)
    }
}

impl std::fmt::Display for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {} ({})", self.source, self.target, self.weight)
    }
}

/// An unordered, unweighted edge of an [`UndirectedGraph`](crate::UndirectedGraph).
///
/// The endpoints are normalised so that `low <= high`; two edges compare equal
/// whichever order their endpoints were given in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Edge<L> {
    /// The smaller endpoint.
    pub low: L,
    /// The larger endpoint.
    pub high: L,
}

impl<L: Ord> Edge<L> {
    /// Create a new edge, ordering the endpoints.
    pub fn new(u: L, v: L) -> Self {
        if u <= v {
            Self { low: u, high: v }
        } else {
            Self { low: v, high: u }
        }
    }

    /// Whether `v` is one of the endpoints.
    pub fn touches(&self, v: &L) -> bool {
        &self.low == v || &self.high == v
    }
}

impl<L: std::fmt::Display> std::fmt::Display for Edge<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -- {}", self.low, self.high)
    }
}

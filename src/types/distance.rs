//! Shortest-path distances.

use serde::Serialize;

use super::Weight;

/// Distance from a source vertex, as reported by Dijkstra.
///
/// `Infinite` marks an unreachable vertex and orders after every finite
/// distance. In JSON a finite distance is a number and `Infinite` is `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum Distance {
    /// Reachable at this total weight.
    Finite(Weight),
    /// Not reachable.
    Infinite,
}

impl Distance {
    /// Whether the vertex was reached.
    pub fn is_finite(&self) -> bool {
        matches!(self, Self::Finite(_))
    }

    /// The total weight, if reachable.
    pub fn finite(&self) -> Option<Weight> {
        match self {
            Self::Finite(w) => Some(*w),
            Self::Infinite => None,
        }
    }

    /// The distance as a float, with `Infinite` mapped to `f64::INFINITY`.
    pub fn as_f64(&self) -> f64 {
        match self {
            Self::Finite(w) => *w as f64,
            Self::Infinite => f64::INFINITY,
        }
    }
}

impl From<Weight> for Distance {
    fn from(w: Weight) -> Self {
        Self::Finite(w)
    }
}

impl std::fmt::Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Finite(w) => write!(f, "{}", w),
            Self::Infinite => write!(f, "inf"),
        }
    }
}

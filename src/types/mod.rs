//! Value types shared by both graph models.

pub mod distance;
pub mod edge;
pub mod error;

pub use distance::Distance;
pub use edge::{Edge, WeightedEdge};
pub use error::{GraphError, GraphResult};

/// Positional identifier of a directed-graph vertex.
pub type VertexId = usize;

/// Directed edge weight. Signed so that negative input can be rejected.
pub type Weight = i64;

/// Weight used when an edge is added without an explicit weight.
pub const DEFAULT_WEIGHT: Weight = 1;

/// Bodies at least this long are rendered one vertex per line.
pub const INLINE_RENDER_LIMIT: usize = 70;

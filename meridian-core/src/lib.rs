//! Street map routing core.
//!
//! Builds an undirected graph of intersections and streets from line
//! records and answers shortest-path and minimum spanning tree queries.

pub mod collections;
pub mod error;
pub mod export;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use collections::{EdgeStack, IndexMinPQ, StructureError};
pub use error::{Error, InputFormatError};
pub use model::{DistanceModel, Intersection, StreetEdge, StreetGraph};

/// Dense intersection id, `0..vertex_count()` in insertion order
pub type IntersectionId = petgraph::graph::NodeIndex;
/// Street id in the graph's edge arena
pub type StreetEdgeId = petgraph::graph::EdgeIndex;
/// Distance in miles
pub type Miles = f64;

//! Data model for the street map
//!
//! Contains the intersections, streets and the graph that owns them.

pub mod streets;

pub use streets::components::{Intersection, StreetEdge};
pub use streets::distance::DistanceModel;
pub use streets::network::StreetGraph;

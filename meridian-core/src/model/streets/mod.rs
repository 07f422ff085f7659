//! Street network model

pub mod components;
pub mod distance;
pub mod network;

pub use components::{Intersection, StreetEdge};
pub use distance::DistanceModel;
pub use network::StreetGraph;

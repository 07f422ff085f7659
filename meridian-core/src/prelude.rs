// Re-export key components
pub use crate::export::{to_geojson, to_geojson_string};
pub use crate::loading::{GraphConfig, create_street_graph, load_street_graph};
pub use crate::model::{DistanceModel, Intersection, StreetEdge, StreetGraph};
pub use crate::routing::{
    DistanceResult, EdgeLeg, Highlight, MinimumSpanningTree, Path, ShortestPaths,
};
pub use crate::{Error, InputFormatError};

// Core types for the street network
pub use crate::IntersectionId;
pub use crate::Miles;
pub use crate::StreetEdgeId;

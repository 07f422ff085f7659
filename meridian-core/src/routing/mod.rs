//! Query engines over the street graph

mod highlight;
mod result;
mod shortest_path;
mod spanning_tree;

pub use highlight::Highlight;
pub use result::{DistanceResult, EdgeLeg, Path};
pub use shortest_path::ShortestPaths;
pub use spanning_tree::MinimumSpanningTree;

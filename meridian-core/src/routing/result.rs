//! Query results handed to renderers and the command line

use serde::{Serialize, Serializer};

use super::Highlight;
use crate::{Miles, StreetEdge, StreetEdgeId};

/// Reachability and distance of one target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistanceResult {
    pub reachable: bool,
    /// `+inf` when unreachable, serialized as `null`
    pub distance_miles: Miles,
}

/// One street of a path or spanning tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeLeg {
    #[serde(serialize_with = "serialize_edge_id")]
    pub edge: StreetEdgeId,
    pub edge_name: String,
    pub weight_miles: Miles,
}

impl EdgeLeg {
    pub(crate) fn new(edge: StreetEdgeId, street: &StreetEdge) -> Self {
        Self {
            edge,
            edge_name: street.name.clone(),
            weight_miles: street.weight,
        }
    }
}

fn serialize_edge_id<S: Serializer>(
    edge: &StreetEdgeId,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(edge.index() as u64)
}

/// Shortest path from the engine's source to a target, in travel order.
#[derive(Debug, Clone, Serialize)]
pub struct Path {
    pub source: String,
    pub target: String,
    pub legs: Vec<EdgeLeg>,
    pub total_miles: Miles,
    pub highlight: Highlight,
}

impl Path {
    pub fn len(&self) -> usize {
        self.legs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    pub fn edges(&self) -> impl Iterator<Item = StreetEdgeId> + '_ {
        self.legs.iter().map(|leg| leg.edge)
    }
}

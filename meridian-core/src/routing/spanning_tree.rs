use fixedbitset::FixedBitSet;
use log::{debug, warn};
use serde::Serialize;

use super::{EdgeLeg, Highlight};
use crate::{Error, IndexMinPQ, IntersectionId, Miles, StreetEdgeId, StreetGraph};

/// Minimum spanning tree of a street graph (Prim, rooted at id 0).
#[derive(Debug, Clone, Serialize)]
pub struct MinimumSpanningTree {
    legs: Vec<EdgeLeg>,
    total_miles: Miles,
    highlight: Highlight,
}

impl MinimumSpanningTree {
    /// Computes the spanning tree. An empty graph has an empty tree.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DisconnectedGraph`] if some intersection cannot be
    /// reached from intersection 0.
    pub fn new(graph: &StreetGraph) -> Result<Self, Error> {
        let node_count = graph.vertex_count();
        let mut highlight = Highlight::for_graph(graph);
        if node_count == 0 {
            return Ok(Self {
                legs: Vec::new(),
                total_miles: 0.0,
                highlight,
            });
        }

        let mut connecting: Vec<Option<StreetEdgeId>> = vec![None; node_count];
        let mut best = vec![Miles::INFINITY; node_count];
        let mut visited = FixedBitSet::with_capacity(node_count);
        let mut queue = IndexMinPQ::with_capacity(node_count);

        best[0] = 0.0;
        queue.insert(0, 0.0)?;

        while !queue.is_empty() {
            let current = queue.del_min()?;
            visited.insert(current);

            for (edge, other, street) in graph.incident_edges(IntersectionId::new(current)) {
                let other = other.index();
                if visited.contains(other) || street.weight >= best[other] {
                    continue;
                }

                best[other] = street.weight;
                connecting[other] = Some(edge);
                if queue.contains(other) {
                    queue.change_key(other, street.weight)?;
                } else {
                    queue.insert(other, street.weight)?;
                }
            }
        }

        let reached = visited.count_ones(..);
        if reached < node_count {
            warn!("Street graph is disconnected: {reached} of {node_count} intersections reached");
            return Err(Error::DisconnectedGraph {
                reached,
                total: node_count,
            });
        }

        let legs: Vec<EdgeLeg> = connecting
            .iter()
            .flatten()
            .map(|&edge| {
                highlight.insert(edge);
                EdgeLeg::new(edge, &graph[edge])
            })
            .collect();
        debug_assert_eq!(legs.len(), node_count - 1);

        let total_miles: Miles = legs.iter().map(|leg| leg.weight_miles).sum();
        debug!(
            "Spanning tree of {} streets, {total_miles:.4} miles",
            legs.len()
        );

        Ok(Self {
            legs,
            total_miles,
            highlight,
        })
    }

    /// Selected streets, one per intersection other than the root.
    pub fn edges(&self) -> impl Iterator<Item = StreetEdgeId> + '_ {
        self.legs.iter().map(|leg| leg.edge)
    }

    pub fn legs(&self) -> &[EdgeLeg] {
        &self.legs
    }

    pub fn len(&self) -> usize {
        self.legs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    pub fn total_weight(&self) -> Miles {
        self.total_miles
    }

    pub fn highlight(&self) -> &Highlight {
        &self.highlight
    }
}

use fixedbitset::FixedBitSet;
use serde::{Serialize, Serializer};

use crate::{StreetEdgeId, StreetGraph};

/// Set of streets selected by one query, for visualization.
///
/// Every path or spanning tree result carries its own set, so nothing
/// has to be reset between queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    edges: FixedBitSet,
}

impl Highlight {
    pub(crate) fn for_graph(graph: &StreetGraph) -> Self {
        Self {
            edges: FixedBitSet::with_capacity(graph.edge_count()),
        }
    }

    pub(crate) fn insert(&mut self, edge: StreetEdgeId) {
        self.edges.grow(edge.index() + 1);
        self.edges.insert(edge.index());
    }

    pub fn contains(&self, edge: StreetEdgeId) -> bool {
        self.edges.contains(edge.index())
    }

    pub fn len(&self) -> usize {
        self.edges.count_ones(..)
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_clear()
    }

    /// Highlighted street ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = StreetEdgeId> + '_ {
        self.edges.ones().map(StreetEdgeId::new)
    }
}

impl Serialize for Highlight {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter().map(|edge| edge.index()))
    }
}

use super::StructureError;
use crate::StreetEdgeId;

const NAME: &str = "edge stack";

/// LIFO stack of street edges, used to turn a target-to-source
/// predecessor walk into source-to-target order.
#[derive(Debug, Clone, Default)]
pub struct EdgeStack {
    edges: Vec<StreetEdgeId>,
}

impl EdgeStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            edges: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, edge: StreetEdgeId) {
        self.edges.push(edge);
    }

    pub fn pop(&mut self) -> Result<StreetEdgeId, StructureError> {
        self.edges.pop().ok_or(StructureError::Empty(NAME))
    }

    pub fn peek(&self) -> Result<StreetEdgeId, StructureError> {
        self.edges.last().copied().ok_or(StructureError::Empty(NAME))
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

//! Supporting containers for the routing engines

mod edge_stack;
mod index_min_pq;

pub use edge_stack::EdgeStack;
pub use index_min_pq::IndexMinPQ;

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructureError {
    #[error("{0} is empty")]
    Empty(&'static str),
    #[error("Index {index} is out of range for capacity {capacity}")]
    IndexOutOfRange { index: usize, capacity: usize },
    #[error("Index {0} is already queued")]
    AlreadyQueued(usize),
    #[error("Index {0} is not queued")]
    NotQueued(usize),
}

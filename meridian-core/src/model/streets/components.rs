//! Street network components - intersections and street edges

use geo::Point;

use crate::{IntersectionId, Miles};

/// Street graph node
#[derive(Debug, Clone)]
pub struct Intersection {
    /// Dense id, assigned in insertion order
    pub id: IntersectionId,
    /// Unique title used to refer to the intersection in input records
    pub title: String,
    /// Coordinates, x is longitude and y is latitude
    pub geometry: Point<f64>,
}

impl Intersection {
    pub fn latitude(&self) -> f64 {
        self.geometry.y()
    }

    pub fn longitude(&self) -> f64 {
        self.geometry.x()
    }
}

/// Street graph edge (street segment between two intersections)
#[derive(Debug, Clone)]
pub struct StreetEdge {
    /// Street name, not required to be unique
    pub name: String,
    /// Length of the street in miles
    pub weight: Miles,
}

impl StreetEdge {
    pub fn length_miles(&self) -> Miles {
        self.weight
    }
}

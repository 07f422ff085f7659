//! Street graph: owns every intersection and street and resolves titles

use std::ops::Index;

use geo::{Point, Rect};
use hashbrown::HashMap;
use log::trace;
use petgraph::{graph::UnGraph, visit::EdgeRef};

use super::{DistanceModel, Intersection, StreetEdge};
use crate::{Error, InputFormatError, IntersectionId, Miles, StreetEdgeId};

/// Undirected street graph.
///
/// Intersection ids are dense and follow insertion order. Streets are
/// stored once in the graph arena and referenced by id from both
/// endpoints' adjacency.
#[derive(Debug, Clone, Default)]
pub struct StreetGraph {
    pub(crate) graph: UnGraph<Intersection, StreetEdge>,
    titles: HashMap<String, IntersectionId>,
    distance_model: DistanceModel,
}

impl StreetGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty graph whose streets are weighted with `distance_model`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] unless the earth radius and km per
    /// mile are finite and positive.
    pub fn with_distance_model(distance_model: DistanceModel) -> Result<Self, Error> {
        distance_model.validate()?;
        Ok(Self {
            distance_model,
            ..Self::default()
        })
    }

    pub fn distance_model(&self) -> &DistanceModel {
        &self.distance_model
    }

    /// Adds an intersection under the next dense id.
    ///
    /// # Errors
    ///
    /// Fails if the title is already taken or the coordinate is not a
    /// valid latitude/longitude pair.
    pub fn add_intersection(
        &mut self,
        title: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<IntersectionId, Error> {
        if self.titles.contains_key(title) {
            return Err(InputFormatError::DuplicateTitle(title.to_string()).into());
        }
        if !valid_coordinate(latitude, longitude) {
            return Err(InputFormatError::InvalidCoordinate {
                lat: latitude,
                lon: longitude,
            }
            .into());
        }

        let id = IntersectionId::new(self.graph.node_count());
        let added = self.graph.add_node(Intersection {
            id,
            title: title.to_string(),
            geometry: Point::new(longitude, latitude),
        });
        debug_assert_eq!(id, added);

        self.titles.insert(title.to_string(), id);
        trace!("Added intersection {title} as {}", id.index());
        Ok(id)
    }

    /// Adds a street weighted by the great-circle distance between its
    /// endpoints.
    pub fn add_edge(&mut self, name: &str, from: &str, to: &str) -> Result<StreetEdgeId, Error> {
        let (a, b) = self.resolve_pair(from, to)?;
        let weight = self
            .distance_model
            .miles_between(self.graph[a].geometry, self.graph[b].geometry);
        check_weight(name, weight)?;
        Ok(self.connect(name, a, b, weight))
    }

    /// Adds a street with a precomputed length in miles.
    pub fn add_weighted_edge(
        &mut self,
        name: &str,
        from: &str,
        to: &str,
        miles: Miles,
    ) -> Result<StreetEdgeId, Error> {
        check_weight(name, miles)?;
        let (a, b) = self.resolve_pair(from, to)?;
        Ok(self.connect(name, a, b, miles))
    }

    fn resolve_pair(
        &self,
        from: &str,
        to: &str,
    ) -> Result<(IntersectionId, IntersectionId), Error> {
        let resolve = |title: &str| {
            self.titles
                .get(title)
                .copied()
                .ok_or_else(|| InputFormatError::UnknownTitle(title.to_string()))
        };
        Ok((resolve(from)?, resolve(to)?))
    }

    fn connect(
        &mut self,
        name: &str,
        a: IntersectionId,
        b: IntersectionId,
        weight: Miles,
    ) -> StreetEdgeId {
        let id = self.graph.add_edge(
            a,
            b,
            StreetEdge {
                name: name.to_string(),
                weight,
            },
        );
        trace!("Added street {name} ({weight:.4} mi) as {}", id.index());
        id
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Resolves a title to its intersection.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEntity`] if no intersection has this title.
    pub fn lookup(&self, title: &str) -> Result<&Intersection, Error> {
        self.titles
            .get(title)
            .map(|&id| &self.graph[id])
            .ok_or_else(|| Error::UnknownEntity(title.to_string()))
    }

    pub fn intersection(&self, id: IntersectionId) -> Option<&Intersection> {
        self.graph.node_weight(id)
    }

    pub fn edge(&self, id: StreetEdgeId) -> Option<&StreetEdge> {
        self.graph.edge_weight(id)
    }

    /// Both endpoints of a street, in the order they were given.
    pub fn endpoints(&self, id: StreetEdgeId) -> Option<(IntersectionId, IntersectionId)> {
        self.graph.edge_endpoints(id)
    }

    /// The endpoint of `edge` opposite to `from`, `None` if `from` is not
    /// an endpoint.
    pub fn other_endpoint(
        &self,
        edge: StreetEdgeId,
        from: IntersectionId,
    ) -> Option<IntersectionId> {
        let (a, b) = self.graph.edge_endpoints(edge)?;
        if a == from {
            Some(b)
        } else if b == from {
            Some(a)
        } else {
            None
        }
    }

    /// Intersections in id order.
    pub fn intersections(&self) -> impl Iterator<Item = &Intersection> {
        self.graph.node_weights()
    }

    /// Streets in id order.
    pub fn edges(&self) -> impl Iterator<Item = (StreetEdgeId, &StreetEdge)> {
        self.graph
            .edge_references()
            .map(|edge| (edge.id(), edge.weight()))
    }

    /// Every street touching `node`, with the intersection at its far end.
    /// A self-loop reports `node` itself as the far end.
    pub fn incident_edges(
        &self,
        node: IntersectionId,
    ) -> impl Iterator<Item = (StreetEdgeId, IntersectionId, &StreetEdge)> {
        self.graph.edges(node).map(move |edge| {
            let other = if edge.source() == node {
                edge.target()
            } else {
                edge.source()
            };
            (edge.id(), other, edge.weight())
        })
    }

    /// Bounding rectangle of all intersections, `None` for an empty graph.
    pub fn bounds(&self) -> Option<Rect<f64>> {
        let mut points = self.graph.node_weights().map(|node| node.geometry);
        let first = points.next()?;
        let (min, max) = points.fold((first, first), |(min, max), p| {
            (
                Point::new(min.x().min(p.x()), min.y().min(p.y())),
                Point::new(max.x().max(p.x()), max.y().max(p.y())),
            )
        });
        Some(Rect::new(min, max))
    }
}

impl Index<IntersectionId> for StreetGraph {
    type Output = Intersection;

    fn index(&self, id: IntersectionId) -> &Intersection {
        &self.graph[id]
    }
}

impl Index<StreetEdgeId> for StreetGraph {
    type Output = StreetEdge;

    fn index(&self, id: StreetEdgeId) -> &StreetEdge {
        &self.graph[id]
    }
}

fn check_weight(name: &str, weight: Miles) -> Result<(), Error> {
    if weight.is_finite() && weight >= 0.0 {
        Ok(())
    } else {
        Err(InputFormatError::InvalidWeight {
            name: name.to_string(),
            weight,
        }
        .into())
    }
}

fn valid_coordinate(latitude: f64, longitude: f64) -> bool {
    (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> StreetGraph {
        let mut graph = StreetGraph::new();
        graph.add_intersection("SW", 43.0, -77.0).unwrap();
        graph.add_intersection("SE", 43.0, -76.9).unwrap();
        graph.add_intersection("NE", 43.1, -76.9).unwrap();
        graph.add_intersection("NW", 43.1, -77.0).unwrap();
        graph.add_edge("South", "SW", "SE").unwrap();
        graph.add_edge("East", "SE", "NE").unwrap();
        graph.add_edge("North", "NE", "NW").unwrap();
        graph
    }

    #[test]
    fn ids_are_dense_in_insertion_order() {
        let graph = square();
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 3);
        for (expected, node) in graph.intersections().enumerate() {
            assert_eq!(node.id.index(), expected);
        }
        assert_eq!(graph.lookup("NE").unwrap().id.index(), 2);
        assert_eq!(graph.lookup("NW").unwrap().latitude(), 43.1);
        assert_eq!(graph.lookup("NW").unwrap().longitude(), -77.0);
    }

    #[test]
    fn duplicate_title_is_rejected() {
        let mut graph = square();
        let err = graph.add_intersection("SE", 0.0, 0.0).unwrap_err();
        assert!(matches!(
            err,
            Error::InputFormat(InputFormatError::DuplicateTitle(ref t)) if t == "SE"
        ));
        assert_eq!(graph.vertex_count(), 4);
    }

    #[test]
    fn invalid_coordinates_are_rejected() {
        let mut graph = StreetGraph::new();
        assert!(graph.add_intersection("a", 91.0, 0.0).is_err());
        assert!(graph.add_intersection("b", 0.0, -180.5).is_err());
        assert!(graph.add_intersection("c", f64::NAN, 0.0).is_err());
        assert_eq!(graph.vertex_count(), 0);
    }

    #[test]
    fn unknown_title_in_edge_is_rejected() {
        let mut graph = square();
        let err = graph.add_edge("West", "NW", "Nowhere").unwrap_err();
        assert!(matches!(
            err,
            Error::InputFormat(InputFormatError::UnknownTitle(ref t)) if t == "Nowhere"
        ));
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn lookup_of_missing_title_is_unknown_entity() {
        let graph = square();
        assert!(matches!(graph.lookup("Center"), Err(Error::UnknownEntity(_))));
    }

    #[test]
    fn each_edge_is_referenced_by_both_endpoints() {
        let graph = square();
        for (id, _) in graph.edges() {
            let (a, b) = graph.endpoints(id).unwrap();
            assert!(graph.incident_edges(a).any(|(e, other, _)| e == id && other == b));
            assert!(graph.incident_edges(b).any(|(e, other, _)| e == id && other == a));
            assert_eq!(graph.other_endpoint(id, a), Some(b));
            assert_eq!(graph.other_endpoint(id, b), Some(a));
        }

        let sw = graph.lookup("SW").unwrap().id;
        let nw = graph.lookup("NW").unwrap().id;
        assert_eq!(graph.incident_edges(sw).count(), 1);
        assert_eq!(graph.incident_edges(nw).count(), 1);
        let north = graph.edges().find(|(_, e)| e.name == "North").unwrap().0;
        assert_eq!(graph.other_endpoint(north, sw), None);
    }

    #[test]
    fn edge_weight_is_haversine_miles() {
        let graph = square();
        let (_, east) = graph.edges().find(|(_, e)| e.name == "East").unwrap();
        let expected = 6371.0 * 0.1_f64.to_radians() / 1.609;
        assert!((east.length_miles() - expected).abs() < 1e-9);
    }

    #[test]
    fn weighted_edges_must_be_non_negative() {
        let mut graph = square();
        assert!(graph.add_weighted_edge("Diag", "SW", "NE", -1.0).is_err());
        assert!(graph.add_weighted_edge("Diag", "SW", "NE", f64::INFINITY).is_err());
        let id = graph.add_weighted_edge("Diag", "SW", "NE", 2.5).unwrap();
        assert_eq!(graph.edge(id).unwrap().weight, 2.5);
    }

    #[test]
    fn degenerate_distance_model_is_rejected() {
        for km_per_mile in [-1.609, 0.0] {
            let model = DistanceModel {
                km_per_mile,
                ..DistanceModel::default()
            };
            assert!(matches!(
                StreetGraph::with_distance_model(model),
                Err(Error::InvalidConfig(_))
            ));
        }

        let kilometres = DistanceModel {
            km_per_mile: 1.0,
            ..DistanceModel::default()
        };
        let graph = StreetGraph::with_distance_model(kilometres).unwrap();
        assert_eq!(graph.distance_model().km_per_mile, 1.0);
    }

    #[test]
    fn bounds_cover_all_intersections() {
        assert!(StreetGraph::new().bounds().is_none());
        let bounds = square().bounds().unwrap();
        assert_eq!(bounds.min().x, -77.0);
        assert_eq!(bounds.min().y, 43.0);
        assert_eq!(bounds.max().x, -76.9);
        assert_eq!(bounds.max().y, 43.1);
    }
}

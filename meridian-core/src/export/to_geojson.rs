use geo::{Point, line_string};
use geojson::{Feature, FeatureCollection, Geometry, GeometryValue};
use serde_json::json;

use crate::routing::Highlight;
use crate::{Error, Intersection, StreetEdge, StreetEdgeId, StreetGraph};

/// Converts the street graph to a `GeoJSON` `FeatureCollection`.
///
/// Intersections become `Point` features and streets `LineString`
/// features. Streets in `highlight` carry `"highlighted": true`.
pub fn to_geojson(
    graph: &StreetGraph,
    highlight: Option<&Highlight>,
) -> Result<FeatureCollection, Error> {
    let mut features = Vec::with_capacity(graph.vertex_count() + graph.edge_count());

    for intersection in graph.intersections() {
        features.push(create_intersection_feature(intersection)?);
    }

    for (id, street) in graph.edges() {
        let highlighted = highlight.is_some_and(|h| h.contains(id));
        features.push(create_street_feature(graph, id, street, highlighted)?);
    }

    Ok(FeatureCollection {
        features,
        bbox: None,
        foreign_members: None,
    })
}

pub fn to_geojson_string(
    graph: &StreetGraph,
    highlight: Option<&Highlight>,
) -> Result<String, Error> {
    serde_json::to_string(&to_geojson(graph, highlight)?)
        .map_err(|e| Error::GeoJsonError(e.to_string()))
}

fn create_intersection_feature(intersection: &Intersection) -> Result<Feature, Error> {
    let geometry = Geometry::new(GeometryValue::from(&intersection.geometry));

    let value = json!({
        "type": "Feature",
        "geometry": geometry,
        "properties": {
            "kind": "intersection",
            "id": intersection.id.index(),
            "title": intersection.title,
        }
    });

    serde_json::from_value::<Feature>(value).map_err(|e| Error::GeoJsonError(e.to_string()))
}

fn create_street_feature(
    graph: &StreetGraph,
    id: StreetEdgeId,
    street: &StreetEdge,
    highlighted: bool,
) -> Result<Feature, Error> {
    let (from, to) = graph
        .endpoints(id)
        .ok_or_else(|| Error::GeoJsonError(format!("Street {} has no endpoints", id.index())))?;
    let from: Point<f64> = graph[from].geometry;
    let to: Point<f64> = graph[to].geometry;

    let line = line_string![
        (x: from.x(), y: from.y()),
        (x: to.x(), y: to.y())
    ];
    let geometry = Geometry::new(GeometryValue::from(&line));

    let value = json!({
        "type": "Feature",
        "geometry": geometry,
        "properties": {
            "kind": "street",
            "id": id.index(),
            "name": street.name,
            "weight_miles": street.weight,
            "highlighted": highlighted,
        }
    });

    serde_json::from_value::<Feature>(value).map_err(|e| Error::GeoJsonError(e.to_string()))
}

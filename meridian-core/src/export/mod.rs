//! Rendering outputs for map viewers

mod to_geojson;

pub use to_geojson::{to_geojson, to_geojson_string};

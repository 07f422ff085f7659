use geo::Point;
use serde::{Deserialize, Serialize};

use crate::{Error, Miles};

/// Great-circle distance model used to weight streets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistanceModel {
    pub earth_radius_km: f64,
    pub km_per_mile: f64,
}

impl Default for DistanceModel {
    fn default() -> Self {
        Self {
            earth_radius_km: 6371.0,
            km_per_mile: 1.609,
        }
    }
}

impl DistanceModel {
    /// Haversine distance between two points, in miles.
    pub fn miles_between(&self, from: Point<f64>, to: Point<f64>) -> Miles {
        let lat1 = from.y().to_radians();
        let lat2 = to.y().to_radians();
        let delta_lat = (to.y() - from.y()).to_radians();
        let delta_lon = (to.x() - from.x()).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + (delta_lon / 2.0).sin().powi(2) * lat1.cos() * lat2.cos();
        // clamp guards against a drifting past 1.0 for antipodal points
        let c = 2.0 * a.sqrt().min(1.0).asin();

        self.earth_radius_km * c / self.km_per_mile
    }

    fn is_valid(&self) -> bool {
        self.earth_radius_km.is_finite()
            && self.earth_radius_km > 0.0
            && self.km_per_mile.is_finite()
            && self.km_per_mile > 0.0
    }

    /// Rejects models that would produce negative or infinite street
    /// weights.
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(Error::InvalidConfig(format!(
                "Earth radius and km per mile must be finite and positive, got {self:?}"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_point_is_zero() {
        let model = DistanceModel::default();
        let p = Point::new(-77.6, 43.13);
        assert_eq!(model.miles_between(p, p), 0.0);
    }

    #[test]
    fn one_degree_of_latitude() {
        let model = DistanceModel::default();
        let miles = model.miles_between(Point::new(0.0, 0.0), Point::new(0.0, 1.0));
        // 6371 * pi / 180 / 1.609
        let expected = 6371.0 * std::f64::consts::PI / 180.0 / 1.609;
        assert!((miles - expected).abs() < 1e-9);
        assert!((miles - 69.1).abs() < 0.1);
    }

    #[test]
    fn distance_is_symmetric() {
        let model = DistanceModel::default();
        let a = Point::new(-77.61, 43.16);
        let b = Point::new(-77.58, 43.12);
        let forward = model.miles_between(a, b);
        let backward = model.miles_between(b, a);
        assert!((forward - backward).abs() < 1e-12);
        assert!(forward > 0.0);
    }

    #[test]
    fn degenerate_models_are_invalid() {
        assert!(DistanceModel::default().validate().is_ok());
        for (earth_radius_km, km_per_mile) in [
            (6371.0, -1.609),
            (6371.0, 0.0),
            (-6371.0, 1.609),
            (f64::NAN, 1.609),
            (6371.0, f64::INFINITY),
        ] {
            let model = DistanceModel {
                earth_radius_km,
                km_per_mile,
            };
            assert!(matches!(model.validate(), Err(Error::InvalidConfig(_))));
        }
    }

    #[test]
    fn custom_radius_scales_distance() {
        let half = DistanceModel {
            earth_radius_km: 6371.0 / 2.0,
            ..DistanceModel::default()
        };
        let a = Point::new(10.0, 10.0);
        let b = Point::new(11.0, 12.0);
        let full = DistanceModel::default().miles_between(a, b);
        assert!((half.miles_between(a, b) * 2.0 - full).abs() < 1e-9);
    }
}

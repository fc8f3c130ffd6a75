use std::fmt;

use serde::Serialize;

use crate::{Distance, GeometryError};

/// Haversine distances treat the earth as a sphere with this radius, in meters.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A WGS84 position. Longitude is x, latitude is y. By construction, both are finite and within
/// range, so anything holding a `LonLat` never has to check again.
#[derive(Clone, Copy, PartialEq, Debug, Serialize)]
pub struct LonLat {
    longitude: f64,
    latitude: f64,
}

/// Why a longitude and latitude don't form a valid position.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum BadLonLat {
    NotFinite,
    LongitudeOutOfRange(f64),
    LatitudeOutOfRange(f64),
}

impl LonLat {
    /// Creates a position, panicking if it's invalid. Only use this for trusted input; prefer
    /// `checked` for anything a user typed or clicked.
    pub fn new(lon: f64, lat: f64) -> LonLat {
        match LonLat::checked(lon, lat) {
            Ok(pt) => pt,
            Err(err) => panic!("Bad LonLat({}, {}): {}", lon, lat, err),
        }
    }

    /// Creates a position. Each axis is checked against its own range.
    pub fn checked(lon: f64, lat: f64) -> Result<LonLat, BadLonLat> {
        if !lon.is_finite() || !lat.is_finite() {
            return Err(BadLonLat::NotFinite);
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(BadLonLat::LongitudeOutOfRange(lon));
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(BadLonLat::LatitudeOutOfRange(lat));
        }
        Ok(LonLat {
            longitude: lon,
            latitude: lat,
        })
    }

    pub fn longitude(self) -> f64 {
        self.longitude
    }

    pub fn latitude(self) -> f64 {
        self.latitude
    }

    /// Map widgets want (latitude, longitude).
    pub fn to_lat_lng(self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }

    /// The great-circle distance to another point, using the haversine formula.
    pub fn gps_dist(self, other: LonLat) -> Distance {
        let lon1 = self.longitude.to_radians();
        let lon2 = other.longitude.to_radians();
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();

        let delta_lat = lat2 - lat1;
        let delta_lon = lon2 - lon1;

        let a = (delta_lat / 2.0).sin().powi(2)
            + (delta_lon / 2.0).sin().powi(2) * lat1.cos() * lat2.cos();
        // Near antipodal points, floating point error can push this past 1
        let a = a.min(1.0);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        Distance::meters(EARTH_RADIUS_M * c)
    }
}

impl fmt::Display for LonLat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LonLat({0}, {1})", self.longitude, self.latitude)
    }
}

impl fmt::Display for BadLonLat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BadLonLat::NotFinite => write!(f, "isn't a finite number"),
            BadLonLat::LongitudeOutOfRange(lon) => {
                write!(f, "has longitude {} outside [-180, 180]", lon)
            }
            BadLonLat::LatitudeOutOfRange(lat) => {
                write!(f, "has latitude {} outside [-90, 90]", lat)
            }
        }
    }
}

/// The total great-circle length along a path. Paths with fewer than two points have no length.
/// The result isn't rounded.
pub fn path_length(pts: &[LonLat]) -> Distance {
    pts.windows(2).map(|pair| pair[0].gps_dist(pair[1])).sum()
}

/// Produces a GeoJSON LineString.
pub fn to_geojson(pts: &[LonLat]) -> Result<geojson::Geometry, GeometryError> {
    if pts.len() < 2 {
        return Err(GeometryError::InvalidGeometry { num_pts: pts.len() });
    }
    let coords = pts
        .iter()
        .map(|pt| vec![pt.longitude, pt.latitude])
        .collect();
    Ok(geojson::Geometry::new(geojson::Value::LineString(coords)))
}

/// Produces a GeoJSON feature for the LineString, with its length as a property.
pub fn to_geojson_feature(pts: &[LonLat]) -> Result<geojson::Feature, GeometryError> {
    let geometry = to_geojson(pts)?;
    let mut properties = serde_json::Map::new();
    properties.insert(
        "distance_meters".to_string(),
        serde_json::Value::from(path_length(pts).inner_meters()),
    );
    Ok(geojson::Feature {
        bbox: None,
        geometry: Some(geometry),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    })
}

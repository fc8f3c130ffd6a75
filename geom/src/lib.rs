//! Geometry for shared routes: GPS positions, great-circle distances, and the WKT LINESTRING
//! text that routes are stored and exchanged as.

use serde::{Deserialize, Serialize};

mod distance;
mod error;
mod gps;
pub mod wkt;

pub use crate::distance::Distance;
pub use crate::error::{GeometryError, Malformed};
pub use crate::gps::{path_length, to_geojson, to_geojson_feature, BadLonLat, LonLat};

/// Rendering units like distance depends on some user preferences.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnitFmt {
    /// Print in metric or US imperial units
    pub metric: bool,
}

impl UnitFmt {
    pub fn metric() -> Self {
        Self { metric: true }
    }

    pub fn imperial() -> Self {
        Self { metric: false }
    }
}

impl Default for UnitFmt {
    fn default() -> Self {
        Self::metric()
    }
}

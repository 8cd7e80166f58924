//! Bounding-box coordinate transforms
//!
//! Two layouts are supported:
//! - GeoJSON envelope: `[[minLon, maxLat], [maxLon, minLat]]`
//! - WGS84 bbox: `[minLon, minLat, maxLon, maxLat]`

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// A longitude/latitude bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub min_lon: f64,
    pub max_lon: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

impl Coordinates {
    pub fn new(min_lon: f64, max_lon: f64, min_lat: f64, max_lat: f64) -> Self {
        Self {
            min_lon,
            max_lon,
            min_lat,
            max_lat,
        }
    }

    /// Build from a GeoJSON envelope `[[minLon, maxLat], [maxLon, minLat]]`.
    pub fn from_geojson(coordinates: &[[f64; 2]]) -> Result<Self> {
        match coordinates {
            [[min_lon, max_lat], [max_lon, min_lat]] => {
                Ok(Self::new(*min_lon, *max_lon, *min_lat, *max_lat))
            }
            _ => Err(Error::InvalidCoordinates {
                format: "GeoJSON",
                expected: 2,
                found: coordinates.len(),
            }),
        }
    }

    /// Build from a WGS84 bbox `[minLon, minLat, maxLon, maxLat]`.
    pub fn from_wgs84(coordinates: &[f64]) -> Result<Self> {
        match coordinates {
            [min_lon, min_lat, max_lon, max_lat] => {
                Ok(Self::new(*min_lon, *max_lon, *min_lat, *max_lat))
            }
            _ => Err(Error::InvalidCoordinates {
                format: "WGS84",
                expected: 4,
                found: coordinates.len(),
            }),
        }
    }

    pub fn to_wgs84(&self) -> [f64; 4] {
        [self.min_lon, self.min_lat, self.max_lon, self.max_lat]
    }

    pub fn to_geojson(&self) -> [[f64; 2]; 2] {
        [[self.min_lon, self.max_lat], [self.max_lon, self.min_lat]]
    }
}

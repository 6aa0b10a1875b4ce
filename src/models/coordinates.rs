// Coordinates model representing a point on the Earth's surface

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::utils::distance::haversine_distance;

/// Represents a geographic point in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Creates new coordinates from latitude and longitude in degrees
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance to another point, in kilometers
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        haversine_distance(self, other)
    }

    /// Both components are finite numbers
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    /// Key used to collapse orders sharing an address into one location.
    /// Adding 0.0 folds -0.0 into 0.0 so the key agrees with `==`.
    pub fn dedup_key(&self) -> (u64, u64) {
        (
            (self.latitude + 0.0).to_bits(),
            (self.longitude + 0.0).to_bits(),
        )
    }

    /// Total ordering by latitude, then longitude
    pub fn sort_cmp(&self, other: &Coordinates) -> Ordering {
        self.latitude
            .total_cmp(&other.latitude)
            .then_with(|| self.longitude.total_cmp(&other.longitude))
    }
}

impl From<Coordinates> for geo::Point<f64> {
    fn from(coordinates: Coordinates) -> Self {
        geo::Point::new(coordinates.longitude, coordinates.latitude)
    }
}

impl From<geo::Point<f64>> for Coordinates {
    fn from(point: geo::Point<f64>) -> Self {
        Coordinates::new(point.y(), point.x())
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// Error returned when parsing a `"<lat>,<lon>"` string fails
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid coordinates '{0}', expected '<latitude>,<longitude>'")]
pub struct ParseCoordinatesError(pub String);

impl FromStr for Coordinates {
    type Err = ParseCoordinatesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCoordinatesError(s.to_string());
        let (lat, lon) = s.split_once(',').ok_or_else(err)?;
        let latitude = lat.trim().parse::<f64>().map_err(|_| err())?;
        let longitude = lon.trim().parse::<f64>().map_err(|_| err())?;
        let coordinates = Coordinates::new(latitude, longitude);
        if !coordinates.is_finite() {
            return Err(err());
        }
        Ok(coordinates)
    }
}

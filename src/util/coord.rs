use crate::core::constants::{MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE};
use crate::util::error::LocatorError;
use geo_types::Point;

/// Trait for types that can provide WGS84 coordinates.
///
/// Implemented for `(f64, f64)` tuples in `(longitude, latitude)` order and
/// for `geo_types::Point<f64>`, so functions can accept either type.
pub trait Coordinate {
    /// Returns the x-coordinate (longitude).
    fn x(&self) -> f64;
    /// Returns the y-coordinate (latitude).
    fn y(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn x(&self) -> f64 {
        Point::x(*self)
    }
    fn y(&self) -> f64 {
        Point::y(*self)
    }
}

/// Checks that `latitude` is within [-90, 90] and `longitude` within [-180, 180].
///
/// NaN fails both range checks.
pub fn validate_coordinate(latitude: f64, longitude: f64) -> Result<(), LocatorError> {
    if (MIN_LATITUDE..=MAX_LATITUDE).contains(&latitude)
        && (MIN_LONGITUDE..=MAX_LONGITUDE).contains(&longitude)
    {
        Ok(())
    } else {
        Err(LocatorError::InvalidCoordinate {
            latitude,
            longitude,
        })
    }
}

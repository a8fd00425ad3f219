use serde::{Deserialize, Serialize};

use super::BasicTypeError;

pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

/// Geographic coordinate in decimal degrees.
///
/// Only constructed through [`new_coordinate`] or the builder, so both
/// components are always within range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

#[derive(Deserialize)]
struct RawCoordinate {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = BasicTypeError;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        new_coordinate(raw.latitude, raw.longitude)
    }
}

impl Coordinate {
    #[must_use]
    pub fn builder() -> CoordinateBuilder {
        CoordinateBuilder::default()
    }

    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Validate and build a coordinate. Bounds are inclusive; NaN is rejected.
///
/// # Errors
///
/// Returns [`BasicTypeError::LatitudeOutOfRange`] when `latitude` is outside
/// [-90, 90], otherwise [`BasicTypeError::LongitudeOutOfRange`] when
/// `longitude` is outside [-180, 180].
pub fn new_coordinate(latitude: f64, longitude: f64) -> Result<Coordinate, BasicTypeError> {
    if !(MIN_LATITUDE..=MAX_LATITUDE).contains(&latitude) {
        return Err(BasicTypeError::LatitudeOutOfRange(latitude));
    }
    if !(MIN_LONGITUDE..=MAX_LONGITUDE).contains(&longitude) {
        return Err(BasicTypeError::LongitudeOutOfRange(longitude));
    }
    Ok(Coordinate {
        latitude,
        longitude,
    })
}

/// Builder for [`Coordinate`]; unset components are 0.0.
#[derive(Debug, Default)]
pub struct CoordinateBuilder {
    latitude: f64,
    longitude: f64,
}

impl CoordinateBuilder {
    #[must_use]
    pub fn latitude(mut self, latitude: f64) -> Self {
        self.latitude = latitude;
        self
    }

    #[must_use]
    pub fn longitude(mut self, longitude: f64) -> Self {
        self.longitude = longitude;
        self
    }

    /// Build the coordinate
    ///
    /// # Errors
    ///
    /// Same as [`new_coordinate`].
    pub fn build(self) -> Result<Coordinate, BasicTypeError> {
        new_coordinate(self.latitude, self.longitude)
    }
}

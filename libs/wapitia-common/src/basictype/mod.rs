//! Small validated value types.

mod color;
mod coordinate;

pub use color::{Color, ColorBuilder, new_color};
pub use coordinate::{Coordinate, CoordinateBuilder, new_coordinate};

/// Validation failures for basic value types.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BasicTypeError {
    #[error("Latitude {0} is out of range, must be in range [-90.0 .. +90.0]")]
    LatitudeOutOfRange(f64),

    #[error("Longitude {0} is out of range, must be in range [-180.00 .. +180.0]")]
    LongitudeOutOfRange(f64),
}

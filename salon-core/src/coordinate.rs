//! Checked construction of WGS84 coordinates.
//!
//! Coordinates are carried as [`geo::Coord`] with `x = longitude` and
//! `y = latitude`, matching the axis order used by the spatial index.

use geo::Coord;
use thiserror::Error;

/// Southern limit of valid latitudes, in degrees.
pub const MIN_LATITUDE: f64 = -90.0;
/// Northern limit of valid latitudes, in degrees.
pub const MAX_LATITUDE: f64 = 90.0;
/// Western limit of valid longitudes, in degrees.
pub const MIN_LONGITUDE: f64 = -180.0;
/// Eastern limit of valid longitudes, in degrees.
pub const MAX_LONGITUDE: f64 = 180.0;

/// Reasons a latitude/longitude pair is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CoordinateError {
    /// One of the components was NaN or infinite.
    #[error("coordinate components must be finite")]
    NonFinite,
    /// Latitude fell outside `[-90, 90]`.
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    /// Longitude fell outside `[-180, 180]`.
    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),
}

/// Build a coordinate from latitude and longitude, validating both.
///
/// # Examples
///
/// ```
/// use salon_core::checked_coord;
///
/// let coord = checked_coord(5.3650, -4.0083)?;
/// assert_eq!(coord.y, 5.3650);
/// assert_eq!(coord.x, -4.0083);
/// assert!(checked_coord(91.0, 0.0).is_err());
/// # Ok::<(), salon_core::CoordinateError>(())
/// ```
pub fn checked_coord(latitude: f64, longitude: f64) -> Result<Coord<f64>, CoordinateError> {
    if !latitude.is_finite() || !longitude.is_finite() {
        return Err(CoordinateError::NonFinite);
    }
    if !(MIN_LATITUDE..=MAX_LATITUDE).contains(&latitude) {
        return Err(CoordinateError::LatitudeOutOfRange(latitude));
    }
    if !(MIN_LONGITUDE..=MAX_LONGITUDE).contains(&longitude) {
        return Err(CoordinateError::LongitudeOutOfRange(longitude));
    }
    Ok(Coord {
        x: longitude,
        y: latitude,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(90.0, 180.0)]
    #[case(-90.0, -180.0)]
    #[case(0.0, 0.0)]
    fn accepts_boundary_values(#[case] latitude: f64, #[case] longitude: f64) {
        let coord = checked_coord(latitude, longitude).expect("boundary values are valid");
        assert_eq!(coord, Coord { x: longitude, y: latitude });
    }

    #[rstest]
    #[case(90.000_001, 0.0, CoordinateError::LatitudeOutOfRange(90.000_001))]
    #[case(-91.0, 0.0, CoordinateError::LatitudeOutOfRange(-91.0))]
    #[case(0.0, 180.5, CoordinateError::LongitudeOutOfRange(180.5))]
    #[case(0.0, -200.0, CoordinateError::LongitudeOutOfRange(-200.0))]
    fn rejects_out_of_range(
        #[case] latitude: f64,
        #[case] longitude: f64,
        #[case] expected: CoordinateError,
    ) {
        assert_eq!(checked_coord(latitude, longitude), Err(expected));
    }

    #[rstest]
    #[case(f64::NAN, 0.0)]
    #[case(0.0, f64::INFINITY)]
    fn rejects_non_finite(#[case] latitude: f64, #[case] longitude: f64) {
        assert_eq!(
            checked_coord(latitude, longitude),
            Err(CoordinateError::NonFinite)
        );
    }
}

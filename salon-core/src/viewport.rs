//! Visible map regions expressed as a centre and full spans.

use geo::{Coord, Intersects, Rect};
use thiserror::Error;

use crate::coordinate::{
    CoordinateError, MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE, checked_coord,
};

/// Full circle of longitude, in degrees.
const LONGITUDE_RANGE: f64 = 360.0;

/// Errors returned by [`Viewport::new`] and [`Viewport::around`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ViewportError {
    /// The centre was not a valid coordinate.
    #[error("invalid viewport centre: {0}")]
    Centre(#[from] CoordinateError),
    /// A span was negative, NaN or infinite.
    #[error("viewport spans must be finite and non-negative (latitude {latitude}, longitude {longitude})")]
    InvalidSpan {
        /// Requested latitude span.
        latitude: f64,
        /// Requested longitude span.
        longitude: f64,
    },
}

/// The region of the map currently on screen.
///
/// `latitude_delta` and `longitude_delta` are full spans, so the visible box
/// is `centre ± delta / 2` on each axis. Points on the boundary are inside.
///
/// # Examples
///
/// ```
/// use salon_core::{Viewport, checked_coord};
///
/// let viewport = Viewport::around(5.36, -4.0083, 0.01, 0.01)?;
/// assert!(viewport.contains(checked_coord(5.3650, -4.0083)?));
/// assert!(!viewport.contains(checked_coord(0.0, 0.0)?));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawViewport", into = "RawViewport")
)]
pub struct Viewport {
    center: Coord<f64>,
    latitude_delta: f64,
    longitude_delta: f64,
}

impl Viewport {
    /// Validate and construct a viewport from a centre coordinate.
    pub fn new(
        center: Coord<f64>,
        latitude_delta: f64,
        longitude_delta: f64,
    ) -> Result<Self, ViewportError> {
        let checked = checked_coord(center.y, center.x)?;
        let valid_span = |span: f64| span.is_finite() && span >= 0.0;
        if !valid_span(latitude_delta) || !valid_span(longitude_delta) {
            return Err(ViewportError::InvalidSpan {
                latitude: latitude_delta,
                longitude: longitude_delta,
            });
        }
        Ok(Self {
            center: checked,
            latitude_delta,
            longitude_delta,
        })
    }

    /// Validate and construct a viewport from latitude and longitude degrees.
    pub fn around(
        latitude: f64,
        longitude: f64,
        latitude_delta: f64,
        longitude_delta: f64,
    ) -> Result<Self, ViewportError> {
        Self::new(
            Coord {
                x: longitude,
                y: latitude,
            },
            latitude_delta,
            longitude_delta,
        )
    }

    /// Construct a viewport from values already known to be valid.
    pub(crate) const fn from_trusted(
        latitude: f64,
        longitude: f64,
        latitude_delta: f64,
        longitude_delta: f64,
    ) -> Self {
        Self {
            center: Coord {
                x: longitude,
                y: latitude,
            },
            latitude_delta,
            longitude_delta,
        }
    }

    /// Centre of the region.
    #[must_use]
    pub const fn center(&self) -> Coord<f64> {
        self.center
    }

    /// Full latitude span in degrees.
    #[must_use]
    pub const fn latitude_delta(&self) -> f64 {
        self.latitude_delta
    }

    /// Full longitude span in degrees.
    #[must_use]
    pub const fn longitude_delta(&self) -> f64 {
        self.longitude_delta
    }

    /// Axis-aligned boxes covering the region in `(longitude, latitude)` space.
    ///
    /// Latitude is clamped to the poles. A region crossing the antimeridian
    /// is split into one box on each side, so at most two boxes are returned.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "bounds are derived from the centre and half spans"
    )]
    pub fn bounds(&self) -> Vec<Rect<f64>> {
        let half_lat = self.latitude_delta / 2.0;
        let south = (self.center.y - half_lat).max(MIN_LATITUDE);
        let north = (self.center.y + half_lat).min(MAX_LATITUDE);
        let rect = |west: f64, east: f64| {
            Rect::new(Coord { x: west, y: south }, Coord { x: east, y: north })
        };

        if self.longitude_delta >= LONGITUDE_RANGE {
            return vec![rect(MIN_LONGITUDE, MAX_LONGITUDE)];
        }

        let half_lon = self.longitude_delta / 2.0;
        let west = self.center.x - half_lon;
        let east = self.center.x + half_lon;
        if west < MIN_LONGITUDE {
            vec![
                rect(west + LONGITUDE_RANGE, MAX_LONGITUDE),
                rect(MIN_LONGITUDE, east),
            ]
        } else if east > MAX_LONGITUDE {
            vec![
                rect(west, MAX_LONGITUDE),
                rect(MIN_LONGITUDE, east - LONGITUDE_RANGE),
            ]
        } else {
            vec![rect(west, east)]
        }
    }

    /// Whether `point` lies inside the region, boundary included.
    #[must_use]
    pub fn contains(&self, point: Coord<f64>) -> bool {
        self.bounds().iter().any(|rect| rect.intersects(&point))
    }
}

/// Unvalidated serialised form of a [`Viewport`].
#[cfg(feature = "serde")]
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
struct RawViewport {
    latitude: f64,
    longitude: f64,
    latitude_delta: f64,
    longitude_delta: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawViewport> for Viewport {
    type Error = ViewportError;

    fn try_from(raw: RawViewport) -> Result<Self, Self::Error> {
        Self::around(
            raw.latitude,
            raw.longitude,
            raw.latitude_delta,
            raw.longitude_delta,
        )
    }
}

#[cfg(feature = "serde")]
impl From<Viewport> for RawViewport {
    fn from(viewport: Viewport) -> Self {
        Self {
            latitude: viewport.center.y,
            longitude: viewport.center.x,
            latitude_delta: viewport.latitude_delta,
            longitude_delta: viewport.longitude_delta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn at(latitude: f64, longitude: f64) -> Coord<f64> {
        Coord {
            x: longitude,
            y: latitude,
        }
    }

    #[rstest]
    fn includes_points_on_the_boundary() {
        let viewport = Viewport::around(0.0, 0.0, 2.0, 2.0).expect("valid viewport");
        assert!(viewport.contains(at(1.0, 1.0)));
        assert!(viewport.contains(at(-1.0, -1.0)));
        assert!(!viewport.contains(at(1.000_001, 0.0)));
    }

    #[rstest]
    fn zero_span_matches_only_the_centre() {
        let viewport = Viewport::around(10.0, 20.0, 0.0, 0.0).expect("valid viewport");
        assert!(viewport.contains(at(10.0, 20.0)));
        assert!(!viewport.contains(at(10.0, 20.000_1)));
    }

    #[rstest]
    fn clamps_latitude_at_the_poles() {
        let viewport = Viewport::around(89.0, 0.0, 10.0, 10.0).expect("valid viewport");
        let bounds = viewport.bounds();
        assert_eq!(bounds.len(), 1);
        assert!(bounds.iter().all(|rect| rect.max().y <= MAX_LATITUDE));
        assert!(viewport.contains(at(90.0, 0.0)));
    }

    #[rstest]
    #[case(179.0, at(0.0, -179.5))]
    #[case(-179.0, at(0.0, 179.5))]
    fn splits_across_the_antimeridian(#[case] longitude: f64, #[case] wrapped: Coord<f64>) {
        let viewport = Viewport::around(0.0, longitude, 4.0, 4.0).expect("valid viewport");
        assert_eq!(viewport.bounds().len(), 2);
        assert!(viewport.contains(wrapped));
        assert!(!viewport.contains(at(0.0, 0.0)));
    }

    #[rstest]
    fn full_longitude_span_covers_the_globe() {
        let viewport = Viewport::around(0.0, 0.0, 180.0, 360.0).expect("valid viewport");
        assert_eq!(viewport.bounds().len(), 1);
        assert!(viewport.contains(at(45.0, -180.0)));
        assert!(viewport.contains(at(-45.0, 180.0)));
    }

    #[rstest]
    #[case(-0.1, 1.0)]
    #[case(1.0, f64::NAN)]
    #[case(f64::INFINITY, 1.0)]
    fn rejects_invalid_spans(#[case] latitude_delta: f64, #[case] longitude_delta: f64) {
        let result = Viewport::around(0.0, 0.0, latitude_delta, longitude_delta);
        assert!(matches!(result, Err(ViewportError::InvalidSpan { .. })));
    }

    #[rstest]
    fn rejects_invalid_centre() {
        let result = Viewport::around(95.0, 0.0, 1.0, 1.0);
        assert!(matches!(result, Err(ViewportError::Centre(_))));
    }
}

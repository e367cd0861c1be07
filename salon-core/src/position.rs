//! The user's last known position and the recentring rule built on it.

use std::time::SystemTime;

use geo::Coord;

use crate::Viewport;

/// A resolved device position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fix {
    /// Position with `x = longitude` and `y = latitude`.
    pub coordinate: Coord<f64>,
    /// Horizontal accuracy radius in metres, when the device reports one.
    pub accuracy_m: Option<f64>,
}

impl Fix {
    /// A fix without an accuracy estimate.
    #[must_use]
    pub const fn at(coordinate: Coord<f64>) -> Self {
        Self {
            coordinate,
            accuracy_m: None,
        }
    }
}

/// Permission and position state as last resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum PositionStatus {
    /// No resolution has completed yet.
    #[default]
    Unknown,
    /// The user refused location access.
    Denied,
    /// Access was granted and a fix obtained.
    Granted(Fix),
}

/// Last known user position with the time it was recorded.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct UserPosition {
    /// Outcome of the most recent resolution.
    pub status: PositionStatus,
    /// When `status` was recorded; `None` until the first resolution.
    pub updated_at: Option<SystemTime>,
}

impl UserPosition {
    /// The granted fix, if any.
    #[must_use]
    pub const fn fix(&self) -> Option<&Fix> {
        match &self.status {
            PositionStatus::Granted(fix) => Some(fix),
            PositionStatus::Unknown | PositionStatus::Denied => None,
        }
    }
}

/// Where "centre on me" should move the map.
///
/// The last granted fix wins; otherwise the centre of `fallback`.
///
/// # Examples
///
/// ```
/// use salon_core::{UserPosition, center_target, seed};
///
/// let anchor = seed::default_anchor();
/// assert_eq!(center_target(&UserPosition::default(), &anchor), anchor.center());
/// ```
#[must_use]
pub fn center_target(position: &UserPosition, fallback: &Viewport) -> Coord<f64> {
    position
        .fix()
        .map_or_else(|| fallback.center(), |fix| fix.coordinate)
}

//! Per-session settings.

use std::time::Duration;

use salon_core::{Viewport, seed};
use serde::{Deserialize, Serialize};

/// Default bound on a permission and position round trip, in milliseconds.
pub const DEFAULT_LOCATE_TIMEOUT_MS: u64 = 10_000;

/// Configuration for a [`Session`](crate::Session) and its
/// [`GeolocationProvider`](crate::GeolocationProvider).
///
/// Missing fields take their defaults when deserialised.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use salon_session::SessionConfig;
///
/// let config = SessionConfig::default().with_locate_timeout(Duration::from_secs(3));
/// assert_eq!(config.locate_timeout(), Duration::from_secs(3));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Region shown, and recentred on, when the user position is unknown.
    pub fallback_anchor: Viewport,
    /// Bound on a geolocation round trip, in milliseconds.
    pub locate_timeout_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            fallback_anchor: seed::default_anchor(),
            locate_timeout_ms: DEFAULT_LOCATE_TIMEOUT_MS,
        }
    }
}

impl SessionConfig {
    /// Replace the fallback anchor.
    #[must_use]
    pub const fn with_fallback_anchor(mut self, anchor: Viewport) -> Self {
        self.fallback_anchor = anchor;
        self
    }

    /// Replace the geolocation timeout.
    #[must_use]
    pub fn with_locate_timeout(mut self, timeout: Duration) -> Self {
        self.locate_timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Bound on a geolocation round trip.
    #[must_use]
    pub const fn locate_timeout(&self) -> Duration {
        Duration::from_millis(self.locate_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn missing_fields_take_defaults() {
        let config: SessionConfig =
            serde_json::from_str(r#"{ "locate_timeout_ms": 250 }"#).expect("valid config");
        assert_eq!(config.fallback_anchor, seed::default_anchor());
        assert_eq!(config.locate_timeout(), Duration::from_millis(250));
    }

    #[rstest]
    fn anchor_is_validated_on_load() {
        let payload = r#"{
            "fallback_anchor": {
                "latitude": 120.0,
                "longitude": 0.0,
                "latitude_delta": 1.0,
                "longitude_delta": 1.0
            }
        }"#;
        assert!(serde_json::from_str::<SessionConfig>(payload).is_err());
    }

    #[rstest]
    fn reads_a_custom_anchor() {
        let payload = r#"{
            "fallback_anchor": {
                "latitude": 48.8566,
                "longitude": 2.3522,
                "latitude_delta": 0.2,
                "longitude_delta": 0.2
            }
        }"#;
        let config: SessionConfig = serde_json::from_str(payload).expect("valid config");
        let expected = Viewport::around(48.8566, 2.3522, 0.2, 0.2).expect("valid viewport");
        assert_eq!(config.fallback_anchor, expected);
        assert_eq!(config.locate_timeout_ms, DEFAULT_LOCATE_TIMEOUT_MS);
    }
}
